//! Caching layer for resolved trailer metadata.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Process-local TTL cache with lazy expiry
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;
