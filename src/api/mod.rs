//! HTTP layer exposing the addon protocol.
//!
//! This layer translates addon paths into resolver calls and formats
//! responses in the addon envelope.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies owned by the HTTP layer
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
