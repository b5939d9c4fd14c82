//! Addon route configuration.

use crate::api::handlers::{
    health_handler, manifest_handler, meta_handler, resource_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All addon routes. None require authentication.
///
/// # Endpoints
///
/// - `GET /manifest.json`                  - Addon manifest
/// - `GET /meta/{type}/{id}.json`          - Trailer meta, failures answered with `meta: null`
/// - `GET /{resource}/{type}/{id}.json`    - Generic addon interface, dispatch failures are 500
/// - `GET /health`                         - Health check: cache, provider
///
/// The `.json` suffix is part of the `{id}` segment; the handlers strip it and
/// answer `404` when it is missing.
pub fn addon_routes() -> Router<AppState> {
    Router::new()
        .route("/manifest.json", get(manifest_handler))
        .route("/health", get(health_handler))
        .route("/meta/{type}/{id}", get(meta_handler))
        .route("/{resource}/{type}/{id}", get(resource_handler))
}
