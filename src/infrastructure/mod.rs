//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for caching and the metadata provider.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory TTL and no-op implementations)
//! - [`tmdb`] - TMDB v3 REST client

pub mod cache;
pub mod tmdb;
