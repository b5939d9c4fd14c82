//! Normalization of addon ids into TMDB-native ids.

use std::sync::Arc;
use tracing::debug;

use super::trailer_resolver::ResolveError;
use crate::domain::entities::{ContentKind, FindResults, LookupRequest, NormalizedId};
use crate::domain::providers::MetadataProvider;

/// Prefix marking an IMDb id.
pub const IMDB_PREFIX: &str = "tt";

/// Turns a [`LookupRequest`] into a provider-native id.
///
/// IMDb ids are cross-referenced through the provider; anything else is
/// reduced to its digits.
pub struct IdNormalizer {
    provider: Arc<dyn MetadataProvider>,
}

impl IdNormalizer {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Normalizes the request id, correcting the kind for IMDb ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if an IMDb id has no movie, series or
    /// episode match, and [`ResolveError::Upstream`] if the lookup itself fails.
    pub async fn normalize(&self, request: &LookupRequest) -> Result<NormalizedId, ResolveError> {
        if !is_imdb_id(&request.id) {
            return Ok(NormalizedId::new(request.kind, digits_only(&request.id)));
        }

        let imdb_id = request.id.trim();
        let found = self.provider.find_by_imdb_id(imdb_id).await?;

        let normalized = best_match(&found).ok_or_else(|| ResolveError::NotFound {
            external_id: imdb_id.to_string(),
        })?;

        debug!(
            imdb_id,
            kind = %normalized.kind,
            tmdb_id = %normalized.provider_id,
            "Resolved IMDb id"
        );

        Ok(normalized)
    }
}

/// True when the id belongs to the IMDb id system.
///
/// The prefix is checked on the raw id; only the lookup value is trimmed, so
/// `" tt0133093"` is treated as a native id.
pub fn is_imdb_id(raw_id: &str) -> bool {
    raw_id.starts_with(IMDB_PREFIX)
}

/// Drops every non-digit character: `"movie-603"` becomes `"603"`.
///
/// The result may be empty.
pub fn digits_only(raw_id: &str) -> String {
    raw_id.chars().filter(char::is_ascii_digit).collect()
}

/// Picks the first match in priority order: movie, then series, then episode.
///
/// An episode resolves to its parent show when the provider reports one.
fn best_match(found: &FindResults) -> Option<NormalizedId> {
    if let Some(movie) = found.movies.first() {
        return Some(NormalizedId::new(ContentKind::Movie, movie.id.to_string()));
    }
    if let Some(show) = found.series.first() {
        return Some(NormalizedId::new(ContentKind::Series, show.id.to_string()));
    }
    found.episodes.first().map(|episode| {
        let id = episode.show_id.unwrap_or(episode.id);
        NormalizedId::new(ContentKind::Series, id.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EpisodeMatch, TitleMatch};
    use crate::domain::providers::{MockMetadataProvider, ProviderError};

    fn normalizer(provider: MockMetadataProvider) -> IdNormalizer {
        IdNormalizer::new(Arc::new(provider))
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("movie-603"), "603");
        assert_eq!(digits_only("tmdb:1399"), "1399");
        assert_eq!(digits_only("603"), "603");
        assert_eq!(digits_only("series"), "");
    }

    #[test]
    fn test_is_imdb_id() {
        assert!(is_imdb_id("tt0133093"));
        assert!(is_imdb_id("tt0133093 "));
        assert!(!is_imdb_id("  tt0133093"));
        assert!(!is_imdb_id("tmdb:603"));
        assert!(!is_imdb_id("603"));
    }

    #[tokio::test]
    async fn test_native_id_skips_provider() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_find_by_imdb_id().never();

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "movie-603"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Movie, "603"));
    }

    #[tokio::test]
    async fn test_leading_whitespace_is_not_an_imdb_id() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_find_by_imdb_id().never();

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, " tt0133093"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Movie, "0133093"));
    }

    #[tokio::test]
    async fn test_imdb_lookup_value_is_trimmed() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_find_by_imdb_id()
            .withf(|id| id == "tt0133093")
            .times(1)
            .returning(|_| {
                Ok(FindResults {
                    movies: vec![TitleMatch { id: 603 }],
                    ..Default::default()
                })
            });

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "tt0133093 "))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Movie, "603"));
    }

    #[tokio::test]
    async fn test_malformed_native_id_passes_through_empty() {
        let provider = MockMetadataProvider::new();

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Series, "series:abc"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Series, ""));
    }

    #[tokio::test]
    async fn test_movie_match_wins_over_series() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_find_by_imdb_id()
            .withf(|id| id == "tt0133093")
            .times(1)
            .returning(|_| {
                Ok(FindResults {
                    movies: vec![TitleMatch { id: 603 }],
                    series: vec![TitleMatch { id: 99 }],
                    episodes: vec![],
                })
            });

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Series, "tt0133093"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Movie, "603"));
    }

    #[tokio::test]
    async fn test_series_match_corrects_kind() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_find_by_imdb_id().times(1).returning(|_| {
            Ok(FindResults {
                series: vec![TitleMatch { id: 1399 }],
                ..Default::default()
            })
        });

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "tt0944947"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Series, "1399"));
    }

    #[tokio::test]
    async fn test_episode_match_uses_parent_show() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_find_by_imdb_id().times(1).returning(|_| {
            Ok(FindResults {
                episodes: vec![EpisodeMatch {
                    id: 63056,
                    show_id: Some(1399),
                }],
                ..Default::default()
            })
        });

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "tt1480055"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Series, "1399"));
    }

    #[tokio::test]
    async fn test_episode_match_without_show_falls_back_to_episode_id() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_find_by_imdb_id().times(1).returning(|_| {
            Ok(FindResults {
                episodes: vec![EpisodeMatch {
                    id: 63056,
                    show_id: None,
                }],
                ..Default::default()
            })
        });

        let result = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Series, "tt1480055"))
            .await
            .unwrap();

        assert_eq!(result, NormalizedId::new(ContentKind::Series, "63056"));
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_find_by_imdb_id()
            .times(1)
            .returning(|_| Ok(FindResults::default()));

        let err = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "tt0000000"))
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::NotFound { ref external_id } if external_id == "tt0000000"));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_upstream() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_find_by_imdb_id()
            .times(1)
            .returning(|_| Err(ProviderError::Network("connection refused".to_string())));

        let err = normalizer(provider)
            .normalize(&LookupRequest::new(ContentKind::Movie, "tt0133093"))
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::Upstream(_)));
    }
}
