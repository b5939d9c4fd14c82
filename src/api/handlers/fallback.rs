//! Handler for unmatched routes.

use axum::http::Uri;

use crate::error::AppError;

/// Responds `404 { "err": "Not found: <path>" }`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    route_not_found(&uri)
}

/// The error for a path that names no addon resource.
pub fn route_not_found(uri: &Uri) -> AppError {
    AppError::not_found(format!("Not found: {}", uri.path()))
}
