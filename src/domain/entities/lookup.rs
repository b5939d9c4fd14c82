//! Lookup request and normalized provider id.

use super::ContentKind;

/// An incoming meta lookup exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub kind: ContentKind,
    pub id: String,
}

impl LookupRequest {
    /// Creates a new lookup request.
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Cache key built from the requested pair, before any normalization.
    ///
    /// Format: `kind:id`, e.g. `movie:tt0133093`.
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// A provider-native id together with the kind it was resolved to.
///
/// `provider_id` may be empty when the raw id carried no digits; the provider
/// call then fails on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedId {
    pub kind: ContentKind,
    pub provider_id: String,
}

impl NormalizedId {
    pub fn new(kind: ContentKind, provider_id: impl Into<String>) -> Self {
        Self {
            kind,
            provider_id: provider_id.into(),
        }
    }
}
