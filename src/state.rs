//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{AddonService, TrailerResolver};
use crate::domain::manifest::Manifest;
use crate::domain::providers::MetadataProvider;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TrailerResolver>,
    pub addon: Arc<AddonService>,
    pub manifest: Arc<Manifest>,
    pub cache: Arc<dyn CacheService>,
    pub provider: Arc<dyn MetadataProvider>,
}

impl AppState {
    /// Wires the resolver and addon interface around a provider and cache.
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        cache: Arc<dyn CacheService>,
        cache_ttl: Duration,
    ) -> Self {
        let manifest = Arc::new(Manifest::trailers());
        let resolver = Arc::new(TrailerResolver::new(
            provider.clone(),
            cache.clone(),
            cache_ttl,
        ));
        let addon = Arc::new(AddonService::new(manifest.clone(), resolver.clone()));

        Self {
            resolver,
            addon,
            manifest,
            cache,
            provider,
        }
    }
}
