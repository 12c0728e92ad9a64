use axum::{extract::State, response::Json};
use bridge_types::HealthResponse;
use chrono::{SecondsFormat, Utc};

use crate::state::AppState;

/// Health check endpoint with cache statistics
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "health"
))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy".to_string(),
		timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
		cache: state.route_service.cache_stats().await,
	})
}
