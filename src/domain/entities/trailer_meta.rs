//! Trailer metadata returned to addon clients.

use super::ContentKind;
use serde::{Deserialize, Serialize};

/// Meta object served under the `meta` key of the addon response.
///
/// `trailer` is a single YouTube watch URL, serialized as `null` when the
/// provider lists no matching trailer.
///
/// # JSON
///
/// ```json
/// {
///   "id": "tt0133093",
///   "type": "movie",
///   "name": "Trailer for tt0133093",
///   "trailer": "https://www.youtube.com/watch?v=vKQi3bBA1y8"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerMeta {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub name: String,
    pub trailer: Option<String>,
}

impl TrailerMeta {
    /// Builds the meta for the requested id and the resolved kind.
    pub fn new(id: impl Into<String>, kind: ContentKind, trailer: Option<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Trailer for {}", id),
            id,
            kind,
            trailer,
        }
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trailer_meta_creation() {
        let meta = TrailerMeta::new(
            "tt0133093",
            ContentKind::Movie,
            Some("https://www.youtube.com/watch?v=abc".to_string()),
        );

        assert_eq!(meta.id, "tt0133093");
        assert_eq!(meta.name, "Trailer for tt0133093");
        assert!(meta.has_trailer());
    }

    #[test]
    fn test_absent_trailer_serializes_as_null() {
        let meta = TrailerMeta::new("tt1", ContentKind::Series, None);

        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "id": "tt1",
                "type": "series",
                "name": "Trailer for tt1",
                "trailer": null
            })
        );
    }
}
