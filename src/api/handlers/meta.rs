//! Handler for the `meta` resource.

use axum::{
    Json,
    extract::{Path, State},
    http::Uri,
};
use tracing::warn;

use super::fallback::route_not_found;
use crate::application::services::MetaResponse;
use crate::domain::entities::{ContentKind, LookupRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path::json_resource_id;

/// Resolves trailer metadata for a title.
///
/// # Endpoint
///
/// `GET /meta/{type}/{id}.json`
///
/// # Request Flow
///
/// 1. Strip `.json` from `id` and parse `type`
/// 2. Resolve through [`crate::application::services::TrailerResolver`]
///    (cache first, then TMDB)
/// 3. Wrap the result in the `{ "meta": ... }` envelope
///
/// # Failure Policy
///
/// Responds `200 OK` for every `<id>.json` path. An unknown type, an IMDb id
/// without a TMDB match, or a TMDB failure is logged and answered with
/// `{ "meta": null }`. An id without the `.json` suffix is not a resource
/// path and gets the fallback `404`.
///
/// # Response
///
/// ```json
/// {
///   "meta": {
///     "id": "tt0133093",
///     "type": "movie",
///     "name": "Trailer for tt0133093",
///     "trailer": "https://www.youtube.com/watch?v=vKQi3bBA1y8"
///   }
/// }
/// ```
pub async fn meta_handler(
    uri: Uri,
    Path((kind, id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<MetaResponse>, AppError> {
    let id = json_resource_id(&id).ok_or_else(|| route_not_found(&uri))?;

    let kind: ContentKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            warn!("Trailer error: {}", e);
            return Ok(Json(MetaResponse::empty()));
        }
    };

    let request = LookupRequest::new(kind, id);
    Ok(Json(state.resolver.resolve_or_none(&request).await.into()))
}
