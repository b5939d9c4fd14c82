//! Records returned by the metadata provider.

/// Category a video must carry to be served as a trailer.
pub const TRAILER_TYPE: &str = "Trailer";
/// Hosting site a video must be on to be served as a trailer.
pub const YOUTUBE_SITE: &str = "YouTube";

/// A single entry of a title's video list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Site-specific key (the YouTube video id for YouTube entries).
    pub key: String,
    pub site: String,
    /// Category such as `Trailer`, `Teaser` or `Featurette`.
    pub kind: String,
}

impl Video {
    pub fn new(key: impl Into<String>, site: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            site: site.into(),
            kind: kind.into(),
        }
    }

    /// True when the entry is a trailer hosted on YouTube. Both checks are exact.
    pub fn is_youtube_trailer(&self) -> bool {
        self.kind == TRAILER_TYPE && self.site == YOUTUBE_SITE
    }

    /// Playback URL built from the entry's key.
    pub fn youtube_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

/// A movie or series matched by an external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleMatch {
    pub id: u64,
}

/// An episode matched by an external id.
///
/// `show_id` is the parent series, when the provider reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeMatch {
    pub id: u64,
    pub show_id: Option<u64>,
}

/// Candidates for an external id, split by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindResults {
    pub movies: Vec<TitleMatch>,
    pub series: Vec<TitleMatch>,
    pub episodes: Vec<EpisodeMatch>,
}
