//! Generic addon-interface binding.

use axum::{
    Json,
    extract::{Path, State},
    http::Uri,
};
use tracing::error;

use super::fallback::route_not_found;
use crate::application::services::MetaResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path::json_resource_id;

/// Dispatches any `/{resource}/{type}/{id}.json` request through
/// [`crate::application::services::AddonService`].
///
/// # Endpoint
///
/// `GET /{resource}/{type}/{id}.json`
///
/// # Errors
///
/// Returns `500 { "err": "<message>" }` when the addon interface rejects the
/// request (resource not declared in the manifest, unknown type). Lookup
/// failures inside the `meta` resource still produce `{ "meta": null }`.
/// Paths whose id lacks the `.json` suffix get the fallback `404`.
pub async fn resource_handler(
    uri: Uri,
    Path((resource, kind, id)): Path<(String, String, String)>,
    State(state): State<AppState>,
) -> Result<Json<MetaResponse>, AppError> {
    let id = json_resource_id(&id).ok_or_else(|| route_not_found(&uri))?;

    match state.addon.get(&resource, &kind, id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Addon interface error for /{}/{}/{}: {}", resource, kind, id, e);
            Err(e.into())
        }
    }
}
