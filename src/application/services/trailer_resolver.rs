//! Lookup-and-cache resolution of trailer metadata.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

use super::id_normalizer::IdNormalizer;
use super::trailer_selector::TrailerSelector;
use crate::domain::entities::{LookupRequest, TrailerMeta};
use crate::domain::providers::{MetadataProvider, ProviderError};
use crate::infrastructure::cache::CacheService;

/// Default lifetime of a cached resolution.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Why a lookup produced no metadata.
///
/// A title that resolves but has no trailer is *not* an error; it yields a
/// [`TrailerMeta`] with `trailer: None`.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No TMDB match found for IMDb ID: {external_id}")]
    NotFound { external_id: String },

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

/// Resolves `(kind, id)` pairs to [`TrailerMeta`], caching successes.
///
/// # Request Flow
///
/// 1. Build the cache key from the requested pair
/// 2. Return the cached meta on a hit
/// 3. Normalize the id (IMDb cross-reference or digit stripping)
/// 4. Select the first YouTube trailer of the normalized title
/// 5. Cache the meta for the configured TTL and return it
///
/// Failures are returned to the caller and never cached.
///
/// # Single-flight
///
/// Concurrent misses for the same key are serialized behind a per-key lock.
/// The first caller fetches; the others re-check the cache once it releases
/// the lock, so a successful fetch is shared rather than repeated.
pub struct TrailerResolver {
    normalizer: IdNormalizer,
    selector: TrailerSelector,
    cache: Arc<dyn CacheService>,
    ttl: Duration,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl TrailerResolver {
    /// Creates a resolver over a provider and cache.
    pub fn new(
        provider: Arc<dyn MetadataProvider>,
        cache: Arc<dyn CacheService>,
        ttl: Duration,
    ) -> Self {
        Self {
            normalizer: IdNormalizer::new(provider.clone()),
            selector: TrailerSelector::new(provider),
            cache,
            ttl,
            inflight: DashMap::new(),
        }
    }

    /// Resolves trailer metadata for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when an IMDb id matches nothing, and
    /// [`ResolveError::Upstream`] when any provider call fails.
    pub async fn resolve(&self, request: &LookupRequest) -> Result<TrailerMeta, ResolveError> {
        let key = request.cache_key();

        if let Some(meta) = self.cache.get_meta(&key).await {
            return Ok(meta);
        }

        let slot = InflightSlot::acquire(&self.inflight, &key);
        let _guard = slot.lock().await;

        match self.cache.get_meta(&key).await {
            Some(meta) => Ok(meta),
            None => self.fetch_and_store(request, &key).await,
        }
    }

    /// Resolves a request, logging and discarding any failure.
    ///
    /// This is the handler-level policy: callers get `None` instead of an
    /// error for both "not found" and "upstream failed".
    pub async fn resolve_or_none(&self, request: &LookupRequest) -> Option<TrailerMeta> {
        match self.resolve(request).await {
            Ok(meta) => Some(meta),
            Err(ResolveError::NotFound { external_id }) => {
                warn!("Trailer error: no TMDB match for {}", external_id);
                None
            }
            Err(e) => {
                error!("Trailer error for {}: {}", request.id, e);
                None
            }
        }
    }

    async fn fetch_and_store(
        &self,
        request: &LookupRequest,
        key: &str,
    ) -> Result<TrailerMeta, ResolveError> {
        let normalized = self.normalizer.normalize(request).await?;
        let trailer = self.selector.select(&normalized).await?;

        let meta = TrailerMeta::new(request.id.clone(), normalized.kind, trailer);

        self.cache.set_meta(key, &meta, self.ttl).await;

        info!(
            "Trailer cached for {} (tmdb:{})",
            request.id, normalized.provider_id
        );

        Ok(meta)
    }
}

/// A caller's share of the per-key lock in the in-flight map.
///
/// On drop the share is released first, then the map entry is removed if no
/// other caller still holds it. This runs on cancellation as well, so an
/// abandoned lookup never leaves its entry behind.
struct InflightSlot<'a> {
    inflight: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
    /// `Some` until the slot is dropped.
    lock: Option<Arc<Mutex<()>>>,
}

impl<'a> InflightSlot<'a> {
    fn acquire(inflight: &'a DashMap<String, Arc<Mutex<()>>>, key: &'a str) -> Self {
        let lock = inflight.entry(key.to_string()).or_default().value().clone();
        Self {
            inflight,
            key,
            lock: Some(lock),
        }
    }

    async fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }
}

impl Drop for InflightSlot<'_> {
    fn drop(&mut self) {
        self.lock.take();
        self.inflight
            .remove_if(self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
