//! Domain layer containing the addon's core types and collaborator contracts.
//!
//! Nothing in here performs I/O. The resolution flow lives in
//! [`crate::application::services`] and the concrete TMDB client lives in
//! [`crate::infrastructure::tmdb`].
//!
//! # Architecture
//!
//! - [`entities`] - Lookup requests, trailer metadata and provider video records
//! - [`manifest`] - Static addon manifest served at `/manifest.json`
//! - [`providers`] - Metadata provider trait definition
//!
//! # Resolution Flow
//!
//! 1. HTTP handler receives `GET /meta/{type}/{id}.json`
//! 2. A [`entities::LookupRequest`] is built from the path
//! 3. [`crate::application::services::TrailerResolver`] consults the cache, then
//!    the [`providers::MetadataProvider`]
//! 4. A [`entities::TrailerMeta`] is cached and returned to the client

pub mod entities;
pub mod manifest;
pub mod providers;
