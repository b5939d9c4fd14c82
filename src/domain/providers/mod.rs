//! Metadata provider trait definition.
//!
//! The concrete TMDB implementation lives in
//! `crate::infrastructure::tmdb`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod metadata_provider;

pub use metadata_provider::{MetadataProvider, ProviderError};

#[cfg(test)]
pub use metadata_provider::MockMetadataProvider;
