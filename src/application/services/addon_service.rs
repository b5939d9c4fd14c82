//! Addon interface: resource dispatch on top of the resolver.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::trailer_resolver::TrailerResolver;
use crate::domain::entities::{ContentKind, LookupRequest, TrailerMeta};
use crate::domain::manifest::{META_RESOURCE, Manifest};

/// Response envelope of the `meta` resource.
///
/// `meta` is `null` when nothing could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: Option<TrailerMeta>,
}

impl MetaResponse {
    pub fn empty() -> Self {
        Self { meta: None }
    }
}

impl From<Option<TrailerMeta>> for MetaResponse {
    fn from(meta: Option<TrailerMeta>) -> Self {
        Self { meta }
    }
}

/// Dispatch failures of the generic addon interface.
#[derive(Debug, thiserror::Error)]
pub enum AddonError {
    #[error("No handler for resource: {0}")]
    UnsupportedResource(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
}

/// Generic `get(resource, type, id)` entry point over the manifest's resources.
///
/// Lookup failures inside the `meta` handler are swallowed to
/// [`MetaResponse::empty`]; only dispatch failures become errors.
pub struct AddonService {
    manifest: Arc<Manifest>,
    resolver: Arc<TrailerResolver>,
}

impl AddonService {
    pub fn new(manifest: Arc<Manifest>, resolver: Arc<TrailerResolver>) -> Self {
        Self { manifest, resolver }
    }

    /// Dispatches a resource request.
    ///
    /// # Errors
    ///
    /// Returns [`AddonError::UnsupportedResource`] for resources not declared in
    /// the manifest and [`AddonError::UnsupportedType`] for unknown types.
    pub async fn get(
        &self,
        resource: &str,
        kind: &str,
        id: &str,
    ) -> Result<MetaResponse, AddonError> {
        if resource != META_RESOURCE || !self.manifest.supports_resource(resource) {
            return Err(AddonError::UnsupportedResource(resource.to_string()));
        }

        let kind: ContentKind = kind
            .parse()
            .map_err(|_| AddonError::UnsupportedType(kind.to_string()))?;
        if !self.manifest.supports_kind(kind) {
            return Err(AddonError::UnsupportedType(kind.to_string()));
        }

        let request = LookupRequest::new(kind, id);
        Ok(self.resolver.resolve_or_none(&request).await.into())
    }
}
