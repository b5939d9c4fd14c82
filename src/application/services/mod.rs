//! Business logic services for the application layer.

pub mod addon_service;
pub mod id_normalizer;
pub mod trailer_resolver;
pub mod trailer_selector;

pub use addon_service::{AddonError, AddonService, MetaResponse};
pub use id_normalizer::IdNormalizer;
pub use trailer_resolver::{ResolveError, TrailerResolver};
pub use trailer_selector::TrailerSelector;
