#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tmdb_trailers::domain::entities::{EpisodeMatch, FindResults, TitleMatch, Video};
use tmdb_trailers::domain::providers::{MetadataProvider, ProviderError};
use tmdb_trailers::infrastructure::cache::{CacheService, MemoryCache};
use tmdb_trailers::state::AppState;

pub const TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// In-memory provider double that counts every upstream call.
#[derive(Default)]
pub struct FakeProvider {
    find_results: HashMap<String, FindResults>,
    movie_videos: HashMap<String, Vec<Video>>,
    tv_videos: HashMap<String, Vec<Video>>,
    failing: bool,
    configured: bool,
    pub find_calls: AtomicUsize,
    pub movie_calls: AtomicUsize,
    pub tv_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            configured: true,
            ..Default::default()
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn with_movie_match(mut self, imdb_id: &str, tmdb_id: u64) -> Self {
        self.find_results.insert(
            imdb_id.to_string(),
            FindResults {
                movies: vec![TitleMatch { id: tmdb_id }],
                ..Default::default()
            },
        );
        self
    }

    pub fn with_episode_match(mut self, imdb_id: &str, episode_id: u64, show_id: u64) -> Self {
        self.find_results.insert(
            imdb_id.to_string(),
            FindResults {
                episodes: vec![EpisodeMatch {
                    id: episode_id,
                    show_id: Some(show_id),
                }],
                ..Default::default()
            },
        );
        self
    }

    pub fn with_movie_videos(mut self, tmdb_id: &str, videos: Vec<Video>) -> Self {
        self.movie_videos.insert(tmdb_id.to_string(), videos);
        self
    }

    pub fn with_tv_videos(mut self, tmdb_id: &str, videos: Vec<Video>) -> Self {
        self.tv_videos.insert(tmdb_id.to_string(), videos);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
            + self.movie_calls.load(Ordering::SeqCst)
            + self.tv_calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self) -> Result<(), ProviderError> {
        if self.failing {
            Err(ProviderError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn lookup_videos(
        videos: &HashMap<String, Vec<Video>>,
        tmdb_id: &str,
    ) -> Result<Vec<Video>, ProviderError> {
        videos
            .get(tmdb_id)
            .cloned()
            .ok_or_else(|| ProviderError::Status {
                status: 404,
                message: "The resource you requested could not be found.".to_string(),
            })
    }
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<FindResults, ProviderError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Ok(self.find_results.get(imdb_id).cloned().unwrap_or_default())
    }

    async fn movie_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError> {
        self.movie_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Self::lookup_videos(&self.movie_videos, provider_id)
    }

    async fn tv_videos(&self, provider_id: &str) -> Result<Vec<Video>, ProviderError> {
        self.tv_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Self::lookup_videos(&self.tv_videos, provider_id)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

pub fn youtube_trailer(key: &str) -> Video {
    Video::new(key, "YouTube", "Trailer")
}

/// The Matrix: IMDb tt0133093, TMDB movie 603.
pub fn matrix_provider() -> FakeProvider {
    FakeProvider::new()
        .with_movie_match("tt0133093", 603)
        .with_movie_videos(
            "603",
            vec![
                Video::new("vimeo-key", "Vimeo", "Trailer"),
                youtube_trailer("vKQi3bBA1y8"),
            ],
        )
}

pub fn create_test_state(provider: Arc<FakeProvider>) -> AppState {
    let cache: Arc<dyn CacheService> = Arc::new(MemoryCache::new());
    AppState::new(provider, cache, TTL)
}
