//! # TMDB Trailers
//!
//! A small media addon service that attaches official TMDB trailers to movie
//! and series titles, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, manifest and provider trait
//! - **Application Layer** ([`application`]) - Id normalization, trailer selection, resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory cache and TMDB client
//! - **API Layer** ([`api`]) - Addon handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - IMDb ids cross-referenced to TMDB movies, series or episodes
//! - First YouTube trailer of the title, as a watch URL
//! - 6 hour in-memory cache keyed by the requested `type:id`
//! - Single upstream fetch for concurrent lookups of the same title
//!
//! ## Quick Start
//!
//! ```bash
//! export TMDB_API_KEY="your-tmdb-v3-key"
//! cargo run
//! # Manifest: http://localhost:7000/manifest.json
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AddonService, MetaResponse, ResolveError, TrailerResolver,
    };
    pub use crate::domain::entities::{ContentKind, LookupRequest, TrailerMeta, Video};
    pub use crate::domain::providers::{MetadataProvider, ProviderError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
