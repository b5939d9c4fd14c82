//! Data Transfer Objects for HTTP responses.
//!
//! The addon envelope itself ([`crate::application::services::MetaResponse`])
//! is owned by the application layer since the generic addon interface
//! returns it too.

pub mod health;
