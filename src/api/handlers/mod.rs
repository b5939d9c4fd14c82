//! HTTP request handlers for addon endpoints.

pub mod fallback;
pub mod health;
pub mod manifest;
pub mod meta;
pub mod resource;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use manifest::manifest_handler;
pub use meta::meta_handler;
pub use resource::resource_handler;
