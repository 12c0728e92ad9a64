use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::Json,
};
use bridge_service::RouteServiceError;
use bridge_types::{BridgeRouteRequest, BridgeRoutesResponse};
use tracing::{debug, error, info};

use crate::handlers::common::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Ranked bridge routes for a transfer
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/bridge/routes",
    request_body = BridgeRouteRequest,
    params(
        ("x-payment-token" = String, Header, description = "x402 payment token"),
        ("x-payment-amount" = String, Header, description = "Payment amount"),
        ("x-payment-currency" = String, Header, description = "Payment currency")
    ),
    responses(
        (status = 200, description = "Routes aggregated successfully", body = BridgeRoutesResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 402, description = "Payment required", body = crate::payment::PaymentRequiredResponse),
        (status = 404, description = "No routes found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "routes"
))]
/// POST /api/v1/bridge/routes - Get ranked routes
pub async fn post_bridge_routes(
	State(state): State<AppState>,
	payload: Result<Json<BridgeRouteRequest>, JsonRejection>,
) -> Result<Json<BridgeRoutesResponse>, ApiError> {
	let Json(request) = payload.map_err(|rejection| {
		debug!("Rejected route request body: {}", rejection.body_text());
		ErrorResponse::new("INVALID_REQUEST", rejection.body_text())
			.into_api_error(StatusCode::BAD_REQUEST)
	})?;

	let query = request.validate().map_err(|e| {
		debug!("Route request failed validation: {}", e);
		ErrorResponse::new("INVALID_REQUEST", e.to_string()).into_api_error(StatusCode::BAD_REQUEST)
	})?;

	debug!(
		token = %query.token,
		amount = query.amount,
		from_chain = %query.from_chain,
		to_chain = %query.to_chain,
		"Processing route request"
	);

	match state.route_service.find_routes(query).await {
		Ok(response) => {
			info!(
				"Returning {} routes (cached: {}, {}ms)",
				response.routes.len(),
				response.cached,
				response.response_time_ms
			);
			Ok(Json(response))
		},
		Err(e @ RouteServiceError::NoRoutes { .. }) => Err(ErrorResponse::new(
			"NO_ROUTES",
			e.to_string(),
		)
		.with_suggestion("Try a different amount or chain pair; some bridges only support specific routes")
		.with_supported_assets()
		.into_api_error(StatusCode::NOT_FOUND)),
		Err(RouteServiceError::Internal(detail)) => {
			error!("Route lookup failed: {}", detail);
			Err(
				ErrorResponse::new("INTERNAL_ERROR", "Failed to fetch bridge routes")
					.with_suggestion("Please try again in a few moments")
					.into_api_error(StatusCode::INTERNAL_SERVER_ERROR),
			)
		},
	}
}
