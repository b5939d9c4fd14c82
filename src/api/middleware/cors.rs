//! Permissive CORS for addon clients.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to `GET` addon resources.
///
/// # Headers
///
/// - `Access-Control-Allow-Origin: *`
/// - `Access-Control-Allow-Methods: GET,OPTIONS`
/// - `Access-Control-Allow-Headers: content-type`
///
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
