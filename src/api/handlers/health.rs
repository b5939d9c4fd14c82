//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Cache**: Backend reachable, reports the backend name
/// 2. **Provider**: TMDB API key configured
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "1.0.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "Backend: memory" },
///     "provider": { "status": "ok", "message": "TMDB API key configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache_check = check_cache(&state).await;
    let provider_check = check_provider(&state);

    let all_healthy = cache_check.is_ok() && provider_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: cache_check,
            provider: provider_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(format!("Backend: {}", backend))
    } else {
        CheckStatus::error(format!("Backend {} unavailable", backend))
    }
}

fn check_provider(state: &AppState) -> CheckStatus {
    if state.provider.is_configured() {
        CheckStatus::ok("TMDB API key configured")
    } else {
        CheckStatus::error("TMDB API key missing")
    }
}
