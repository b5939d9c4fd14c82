//! Content kind supported by the addon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two content kinds declared in the manifest.
///
/// Serialized in lowercase (`"movie"`, `"series"`) to match addon paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path segment names a type the addon does not serve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported content type: {0}")]
pub struct UnknownContentKind(pub String);

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            other => Err(UnknownContentKind(other.to_string())),
        }
    }
}
