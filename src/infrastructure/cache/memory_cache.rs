//! In-memory TTL cache with lazy expiry.

use super::service::CacheService;
use crate::domain::entities::TrailerMeta;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    value: TrailerMeta,
    expires_at: Instant,
}

/// Process-local cache keyed by `kind:id`.
///
/// Each entry stores its own expiry instant; freshness is checked on read
/// against the monotonic tokio clock and stale entries are removed then.
/// There are no background timers and no size bound.
///
/// Removal of a stale entry is conditional on that entry still being stale,
/// so a concurrent `set_meta` for the same key is never evicted early.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, stale ones included until they are read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_meta(&self, key: &str) -> Option<TrailerMeta> {
        let now = Instant::now();

        let fresh = match self.entries.get(key) {
            Some(entry) if now < entry.expires_at => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                debug!("Cache MISS: {}", key);
                return None;
            }
        };

        match fresh {
            Some(meta) => {
                debug!("Cache HIT: {}", key);
                Some(meta)
            }
            None => {
                self.entries.remove_if(key, |_, entry| now >= entry.expires_at);
                debug!("Cache EXPIRED: {}", key);
                None
            }
        }
    }

    async fn set_meta(&self, key: &str, meta: &TrailerMeta, ttl: Duration) {
        let entry = CacheEntry {
            value: meta.clone(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key.to_string(), entry);
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
