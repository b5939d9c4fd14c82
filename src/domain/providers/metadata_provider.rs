//! Provider trait for external-id lookup and video-list retrieval.

use crate::domain::entities::{FindResults, Video};
use async_trait::async_trait;

/// Errors surfaced by a metadata provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

/// Interface to the external metadata provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::tmdb::TmdbClient`] - TMDB v3 REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Cross-references an IMDb id against provider-native titles.
    ///
    /// # Returns
    ///
    /// Movie, series and episode candidates. Empty lists mean no match in
    /// that category; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network, status or decoding failures.
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<FindResults, ProviderError>;

    /// Fetches the video list of a movie, in provider order.
    async fn movie_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError>;

    /// Fetches the video list of a series, in provider order.
    async fn tv_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError>;

    /// Whether the provider has credentials to make requests at all.
    fn is_configured(&self) -> bool;
}
