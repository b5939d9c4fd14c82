//! Cache service trait.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::TrailerMeta;

/// Trait for caching resolved trailer metadata by `kind:id` key.
///
/// Both operations are infallible: implementations are process-local and a
/// miss simply sends the lookup to the provider.
///
/// There is no `invalidate`: entries leave the cache only by
/// expiring or by being overwritten after expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-memory TTL cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves cached metadata for a key.
    ///
    /// Returns `None` on a miss or when the entry has expired.
    async fn get_meta(&self, key: &str) -> Option<TrailerMeta>;

    /// Stores metadata under a key for `ttl`, measured from this call.
    ///
    /// Replaces any entry already stored under the key.
    async fn set_meta(&self, key: &str, meta: &TrailerMeta, ttl: Duration);

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
