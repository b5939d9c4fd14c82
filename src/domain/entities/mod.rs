//! Core domain entities for trailer resolution.
//!
//! # Entity Types
//!
//! - [`ContentKind`] - Movie or series
//! - [`LookupRequest`] - An incoming `(type, id)` pair, pre-normalization
//! - [`NormalizedId`] - A provider-native id with its corrected kind
//! - [`TrailerMeta`] - The meta object returned to addon clients
//! - [`Video`], [`FindResults`] - Records returned by the metadata provider

pub mod content_kind;
pub mod lookup;
pub mod trailer_meta;
pub mod video;

pub use content_kind::{ContentKind, UnknownContentKind};
pub use lookup::{LookupRequest, NormalizedId};
pub use trailer_meta::TrailerMeta;
pub use video::{EpisodeMatch, FindResults, TitleMatch, Video};
