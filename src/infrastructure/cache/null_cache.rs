//! No-op cache implementation for testing or disabled caching.

use super::service::CacheService;
use crate::domain::entities::TrailerMeta;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is explicitly disabled (`CACHE_ENABLED=false`).
/// Every lookup misses, so every request reaches the provider.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_meta(&self, _key: &str) -> Option<TrailerMeta> {
        None
    }

    async fn set_meta(&self, _key: &str, _meta: &TrailerMeta, _ttl: Duration) {}

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContentKind;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        let meta = TrailerMeta::new("tt1", ContentKind::Movie, None);

        cache.set_meta("movie:tt1", &meta, Duration::from_secs(60)).await;

        assert!(cache.get_meta("movie:tt1").await.is_none());
        assert!(cache.health_check().await);
    }
}
