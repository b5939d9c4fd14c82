//! Handler for the addon manifest.

use axum::{Json, extract::State};

use crate::domain::manifest::Manifest;
use crate::state::AppState;

/// Returns the static addon manifest.
///
/// # Endpoint
///
/// `GET /manifest.json`
pub async fn manifest_handler(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}
