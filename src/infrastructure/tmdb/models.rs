//! TMDB API response types.
//!
//! Only the fields the addon reads are declared; list fields default to empty
//! so partial responses still decode.

use serde::Deserialize;

use crate::domain::entities::{EpisodeMatch, FindResults, TitleMatch, Video};

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbFindResponse {
    #[serde(default)]
    pub movie_results: Vec<TmdbTitleRef>,
    #[serde(default)]
    pub tv_results: Vec<TmdbTitleRef>,
    #[serde(default)]
    pub tv_episode_results: Vec<TmdbEpisodeRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbTitleRef {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbEpisodeRef {
    pub id: u64,
    pub show_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbVideosResponse {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TmdbVideo {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl From<TmdbFindResponse> for FindResults {
    fn from(response: TmdbFindResponse) -> Self {
        Self {
            movies: response
                .movie_results
                .into_iter()
                .map(|r| TitleMatch { id: r.id })
                .collect(),
            series: response
                .tv_results
                .into_iter()
                .map(|r| TitleMatch { id: r.id })
                .collect(),
            episodes: response
                .tv_episode_results
                .into_iter()
                .map(|r| EpisodeMatch {
                    id: r.id,
                    show_id: r.show_id,
                })
                .collect(),
        }
    }
}

impl From<TmdbVideo> for Video {
    fn from(video: TmdbVideo) -> Self {
        Self {
            key: video.key,
            site: video.site,
            kind: video.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_response_with_missing_lists() {
        let response: TmdbFindResponse =
            serde_json::from_str(r#"{"tv_episode_results":[{"id":63056,"show_id":1399}]}"#)
                .unwrap();
        let results = FindResults::from(response);

        assert!(results.movies.is_empty());
        assert!(results.series.is_empty());
        assert_eq!(
            results.episodes,
            vec![EpisodeMatch {
                id: 63056,
                show_id: Some(1399)
            }]
        );
    }

    #[test]
    fn test_video_decoding() {
        let response: TmdbVideosResponse = serde_json::from_str(
            r#"{"id":603,"results":[{"key":"vKQi3bBA1y8","site":"YouTube","type":"Trailer","name":"Official Trailer","size":1080}]}"#,
        )
        .unwrap();

        let videos: Vec<Video> = response.results.into_iter().map(Video::from).collect();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].key, "vKQi3bBA1y8");
        assert!(videos[0].is_youtube_trailer());
    }
}
