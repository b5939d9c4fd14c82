//! Trailer selection from a title's video list.

use std::sync::Arc;

use crate::domain::entities::{ContentKind, NormalizedId, Video};
use crate::domain::providers::{MetadataProvider, ProviderError};

/// Fetches a title's videos and picks the trailer to serve.
pub struct TrailerSelector {
    provider: Arc<dyn MetadataProvider>,
}

impl TrailerSelector {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Returns the playback URL of the first YouTube trailer, if any.
    ///
    /// Uses the series endpoint for [`ContentKind::Series`] and the movie
    /// endpoint otherwise. A title without a matching video yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates [`ProviderError`] from the video-list call.
    pub async fn select(&self, id: &NormalizedId) -> Result<Option<String>, ProviderError> {
        let videos = match id.kind {
            ContentKind::Series => self.provider.tv_videos(&id.provider_id).await?,
            ContentKind::Movie => self.provider.movie_videos(&id.provider_id).await?,
        };

        Ok(pick_trailer(&videos).map(Video::youtube_url))
    }
}

/// First entry, in provider order, that is both a trailer and on YouTube.
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockMetadataProvider;

    #[test]
    fn test_pick_skips_non_youtube_trailer() {
        let videos = vec![
            Video::new("vimeo1", "Vimeo", "Trailer"),
            Video::new("yt1", "YouTube", "Trailer"),
        ];

        assert_eq!(pick_trailer(&videos).unwrap().key, "yt1");
    }

    #[test]
    fn test_pick_keeps_provider_order() {
        let videos = vec![
            Video::new("teaser", "YouTube", "Teaser"),
            Video::new("first", "YouTube", "Trailer"),
            Video::new("second", "YouTube", "Trailer"),
        ];

        assert_eq!(pick_trailer(&videos).unwrap().key, "first");
    }

    #[test]
    fn test_pick_none_when_nothing_matches() {
        let videos = vec![
            Video::new("a", "YouTube", "Featurette"),
            Video::new("b", "Vimeo", "Trailer"),
        ];

        assert!(pick_trailer(&videos).is_none());
        assert!(pick_trailer(&[]).is_none());
    }

    #[tokio::test]
    async fn test_series_uses_tv_endpoint() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_movie_videos().never();
        provider
            .expect_tv_videos()
            .withf(|id| id == "1399")
            .times(1)
            .returning(|_| Ok(vec![Video::new("bjqEWgDVPe0", "YouTube", "Trailer")]));

        let selector = TrailerSelector::new(Arc::new(provider));
        let url = selector
            .select(&NormalizedId::new(ContentKind::Series, "1399"))
            .await
            .unwrap();

        assert_eq!(
            url.as_deref(),
            Some("https://www.youtube.com/watch?v=bjqEWgDVPe0")
        );
    }

    #[tokio::test]
    async fn test_movie_without_trailer_is_none() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_movie_videos()
            .withf(|id| id == "603")
            .times(1)
            .returning(|_| Ok(vec![Video::new("clip", "YouTube", "Clip")]));

        let selector = TrailerSelector::new(Arc::new(provider));
        let url = selector
            .select(&NormalizedId::new(ContentKind::Movie, "603"))
            .await
            .unwrap();

        assert!(url.is_none());
    }
}
