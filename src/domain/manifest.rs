//! Addon manifest served at `/manifest.json`.

use serde::Serialize;

use crate::domain::entities::ContentKind;

/// Resource name under which trailer metadata is served.
pub const META_RESOURCE: &str = "meta";

/// Static manifest describing what the addon serves.
///
/// Field names follow the addon protocol (camelCase). The catalog list is
/// always empty since the addon only decorates existing titles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub types: Vec<ContentKind>,
    pub resources: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<serde_json::Value>,
}

impl Manifest {
    /// The manifest for the TMDB trailer addon.
    pub fn trailers() -> Self {
        Self {
            id: "org.stremio.tmdb.trailers".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: "TMDB Trailers".to_string(),
            description: "Adds official TMDB trailers to Stremio titles. \
                          The meta `trailer` field is a YouTube URL or null."
                .to_string(),
            types: vec![ContentKind::Movie, ContentKind::Series],
            resources: vec![META_RESOURCE.to_string()],
            id_prefixes: ["tt", "tmdb", "movie", "series"]
                .into_iter()
                .map(String::from)
                .collect(),
            catalogs: Vec::new(),
        }
    }

    pub fn supports_resource(&self, resource: &str) -> bool {
        self.resources.iter().any(|r| r == resource)
    }

    pub fn supports_kind(&self, kind: ContentKind) -> bool {
        self.types.contains(&kind)
    }
}
