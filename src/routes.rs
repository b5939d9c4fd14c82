//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /manifest.json`               - Addon manifest (public)
//! - `GET /meta/{type}/{id}.json`       - Trailer meta (public)
//! - `GET /{resource}/{type}/{id}.json` - Generic addon interface (public)
//! - `GET /health`                      - Health check (public)
//!
//! # Middleware
//!
//! - **CORS** - Any origin, `GET`/`OPTIONS`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::addon_routes()
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
