//! Reqwest-backed TMDB client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::models::{TmdbFindResponse, TmdbVideosResponse};
use crate::domain::entities::{FindResults, Video};
use crate::domain::providers::{MetadataProvider, ProviderError};

/// Default TMDB v3 API root.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB v3 client implementing [`MetadataProvider`].
///
/// Requests carry the API key as the `api_key` query parameter. No timeout is
/// applied unless one is passed to [`TmdbClient::new`].
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl TmdbClient {
    /// Creates a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Network`] if the base URL is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ProviderError::Network(format!("Invalid TMDB base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Network(format!(
                "TMDB base URL cannot be a base: {}",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = self.endpoint(segments);
        debug!(path = %url.path(), "TMDB request");

        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        resp.json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn videos(&self, media: &str, provider_id: &str) -> Result<Vec<Video>, ProviderError> {
        let body: TmdbVideosResponse = self
            .get_json(&[media, provider_id, "videos"], &[])
            .await?;
        Ok(body.results.into_iter().map(Video::from).collect())
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<FindResults, ProviderError> {
        let body: TmdbFindResponse = self
            .get_json(&["find", imdb_id], &[("external_source", "imdb_id")])
            .await?;
        Ok(body.into())
    }

    async fn movie_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError> {
        self.videos("movie", provider_id).await
    }

    async fn tv_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError> {
        self.videos("tv", provider_id).await
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
