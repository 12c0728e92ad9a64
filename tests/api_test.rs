//! Tests for REST API endpoints

mod mocks;

use axum::{http::StatusCode, Router};
use bridge_aggregator::{
	create_router, AppState, BridgeAggregatorBuilder, BridgeProvider, RouteServiceError, Settings,
};
use bridge_service::MockRouteServiceTrait;
use mocks::providers::route;
use mocks::{ApiFixtures, MockProvider};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Socket-like provider: Hop and a cheap Across quote
fn socket_mock() -> MockProvider {
	MockProvider::with_routes(
		"socket-mock",
		vec![
			route("Hop Protocol", 1.5, 20),
			route("Across Protocol", 1.2, 5),
		],
	)
}

/// LI.FI-like provider: a pricier Across duplicate and a fast Stargate quote
fn lifi_mock() -> MockProvider {
	MockProvider::with_routes(
		"lifi-mock",
		vec![route("Across Protocol", 1.3, 5), route("Stargate", 2.0, 3)],
	)
}

async fn create_test_router(
	settings: Settings,
	providers: Vec<Arc<dyn BridgeProvider>>,
) -> Router {
	let mut builder = BridgeAggregatorBuilder::new().with_settings(settings);
	for provider in providers {
		builder = builder.with_provider(provider);
	}
	let (router, _state) = builder.start().await.unwrap();
	router
}

async fn default_router() -> Router {
	create_test_router(
		Settings::default(),
		vec![socket_mock().into_arc(), lifi_mock().into_arc()],
	)
	.await
}

async fn body_json(response: axum::response::Response) -> Value {
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
	let app = default_router().await;

	let response = app.oneshot(ApiFixtures::get("/health")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["cache"]["size"], 0);
	assert_eq!(body["cache"]["ttl_seconds"], 30);
	assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_endpoint_describes_service() {
	let app = default_router().await;

	let response = app.oneshot(ApiFixtures::get("/")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["name"], "bridge-aggregator");
	assert_eq!(body["payment"]["required"], true);
	assert_eq!(body["payment"]["protocol"], "x402");
	assert_eq!(body["payment"]["amount"], 0.02);
	assert_eq!(
		body["supported_tokens"],
		json!(["USDC", "USDT", "ETH", "WETH"])
	);
	assert_eq!(body["supported_chains"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_routes_require_payment_token() {
	let app = default_router().await;

	let response = app
		.oneshot(ApiFixtures::post(&ApiFixtures::valid_request(), &[]))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);

	let body = body_json(response).await;
	assert_eq!(body["error"], "Payment Required");
	assert_eq!(body["message"], "X402 payment token required");
	assert_eq!(body["payment_details"]["amount"], 0.02);
	assert_eq!(body["payment_details"]["currency"], "USDC");
	assert_eq!(body["payment_details"]["protocol"], "x402");
}

#[tokio::test]
async fn test_routes_reject_underpayment_and_wrong_currency() {
	let app = default_router().await;

	let response = app
		.clone()
		.oneshot(ApiFixtures::post(
			&ApiFixtures::valid_request(),
			&[
				("x-payment-token", "t"),
				("x-payment-amount", "0.01"),
				("x-payment-currency", "USDC"),
			],
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
	assert_eq!(
		body_json(response).await["message"],
		"Minimum payment is 0.02 USDC"
	);

	let response = app
		.oneshot(ApiFixtures::post(
			&ApiFixtures::valid_request(),
			&[
				("x-payment-token", "t"),
				("x-payment-amount", "1"),
				("x-payment-currency", "ETH"),
			],
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
	assert_eq!(body_json(response).await["message"], "Payment must be in USDC");
}

#[tokio::test]
async fn test_payment_is_checked_before_body() {
	let app = default_router().await;

	let response = app
		.oneshot(ApiFixtures::post_raw("not json".to_string(), &[]))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn test_routes_invalid_json_is_bad_request() {
	let app = default_router().await;

	let response = app
		.oneshot(ApiFixtures::post_raw(
			"{\"token\": ".to_string(),
			&ApiFixtures::PAID_HEADERS,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(response).await["error"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_routes_validation_errors() {
	let app = default_router().await;

	let cases = [
		(
			json!({"token": "USDC", "amount": "100", "from_chain": "base", "to_chain": "base"}),
			"Source and destination chains cannot be the same",
		),
		(
			json!({"token": "DAI", "amount": "100", "from_chain": "ethereum", "to_chain": "base"}),
			"Token DAI not supported. Supported tokens: USDC, USDT, ETH, WETH",
		),
		(
			json!({"token": "USDC", "amount": "0.5", "from_chain": "ethereum", "to_chain": "base"}),
			"Minimum bridge amount is 1 USDC",
		),
		(
			json!({"token": "USDC", "from_chain": "ethereum", "to_chain": "base"}),
			"Amount is required",
		),
	];

	for (request, message) in cases {
		let response = app
			.clone()
			.oneshot(ApiFixtures::paid_post(&request))
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let body = body_json(response).await;
		assert_eq!(body["error"], "INVALID_REQUEST");
		assert_eq!(body["message"], message);
	}
}

#[tokio::test]
async fn test_routes_success_ranks_and_dedupes() {
	let app = default_router().await;

	let response = app
		.oneshot(ApiFixtures::paid_post(&ApiFixtures::valid_request()))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["token"], "USDC");
	assert_eq!(body["amount"], 100.0);
	assert_eq!(body["from_chain"], "ethereum");
	assert_eq!(body["to_chain"], "arbitrum");
	assert_eq!(body["cached"], false);

	let routes = body["routes"].as_array().unwrap();
	let names: Vec<&str> = routes
		.iter()
		.map(|r| r["bridge_name"].as_str().unwrap())
		.collect();
	assert_eq!(names, vec!["Across Protocol", "Hop Protocol", "Stargate"]);
	assert_eq!(routes[0]["rank"], 1);
	assert_eq!(routes[0]["total_cost_usd"], 1.2);
	assert_eq!(routes[2]["rank"], 3);

	assert_eq!(body["recommended_route"]["bridge_name"], "Across Protocol");
	assert_eq!(
		body["recommended_route"]["reason"],
		"Lowest total cost with acceptable speed"
	);
	assert_eq!(body["summary"]["total_routes_found"], 3);
	assert_eq!(body["summary"]["best_fee"], "$1.2");
	assert_eq!(body["summary"]["fastest_eta"], "3 minutes");
	assert_eq!(body["warnings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_small_transfer_recommends_fastest() {
	let app = default_router().await;

	let response = app
		.oneshot(ApiFixtures::paid_post(&ApiFixtures::small_request()))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["recommended_route"]["bridge_name"], "Stargate");
	assert_eq!(
		body["recommended_route"]["reason"],
		"Fastest option for small transfer"
	);
	assert_eq!(body["warnings"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
	let provider = socket_mock();
	let app = create_test_router(Settings::default(), vec![provider.clone().into_arc()]).await;

	let first = app
		.clone()
		.oneshot(ApiFixtures::paid_post(&ApiFixtures::valid_request()))
		.await
		.unwrap();
	assert_eq!(body_json(first).await["cached"], false);

	// Same transfer with different casing hits the same cache key
	let request = json!({
		"token": "usdc",
		"amount": 100,
		"from_chain": "Ethereum",
		"to_chain": "ARBITRUM"
	});
	let second = app
		.clone()
		.oneshot(ApiFixtures::paid_post(&request))
		.await
		.unwrap();
	assert_eq!(second.status(), StatusCode::OK);
	let body = body_json(second).await;
	assert_eq!(body["cached"], true);
	assert_eq!(body["routes"].as_array().unwrap().len(), 2);
	assert_eq!(provider.calls(), 1);

	let health = body_json(app.oneshot(ApiFixtures::get("/health")).await.unwrap()).await;
	assert_eq!(health["cache"]["size"], 1);
}

#[tokio::test]
async fn test_no_routes_is_not_found() {
	let app = create_test_router(
		Settings::default(),
		vec![
			MockProvider::failing("socket-mock", 503).into_arc(),
			MockProvider::with_routes("lifi-mock", Vec::new()).into_arc(),
		],
	)
	.await;

	let response = app
		.clone()
		.oneshot(ApiFixtures::paid_post(&ApiFixtures::valid_request()))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert_eq!(body["error"], "NO_ROUTES");
	assert_eq!(
		body["message"],
		"No bridge routes found for USDC from ethereum to arbitrum"
	);
	assert!(body["suggestion"].is_string());
	assert_eq!(body["supported_chains"].as_array().unwrap().len(), 5);

	// Empty results are never cached
	let health = body_json(app.oneshot(ApiFixtures::get("/health")).await.unwrap()).await;
	assert_eq!(health["cache"]["size"], 0);
}

#[tokio::test]
async fn test_payment_gate_can_be_disabled() {
	let mut settings = Settings::default();
	settings.payment.enabled = false;
	let app = create_test_router(settings, vec![socket_mock().into_arc()]).await;

	let response = app
		.oneshot(ApiFixtures::post(&ApiFixtures::valid_request(), &[]))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trailing_slash_routes() {
	let app = default_router().await;

	let response = app
		.clone()
		.oneshot(ApiFixtures::get("/health/"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let mut request = ApiFixtures::paid_post(&ApiFixtures::valid_request());
	*request.uri_mut() = "/api/v1/bridge/routes/".parse().unwrap();
	let response = app.oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
	let app = default_router().await;

	let response = app.oneshot(ApiFixtures::get("/health")).await.unwrap();
	assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_pipeline_failure_is_internal_error() {
	let mut route_service = MockRouteServiceTrait::new();
	route_service.expect_find_routes().times(1).returning(|_| {
		Box::pin(async {
			Err(RouteServiceError::Internal(
				"task 7 panicked: upstream parser".to_string(),
			))
		})
	});

	let state = AppState::new(Arc::new(route_service), Settings::default().payment);
	let app = create_router(&state).with_state(state);

	let response = app
		.oneshot(ApiFixtures::paid_post(&ApiFixtures::valid_request()))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_json(response).await;
	assert_eq!(body["error"], "INTERNAL_ERROR");
	assert_eq!(body["message"], "Failed to fetch bridge routes");
	assert!(!body["suggestion"].as_str().unwrap().is_empty());
	assert!(!body.to_string().contains("panicked"));
}
