//! TMDB (The Movie Database) metadata provider.
//!
//! Uses TMDB API v3: <https://developer.themoviedb.org/docs>

mod client;
mod models;

pub use client::{TMDB_BASE_URL, TmdbClient};
