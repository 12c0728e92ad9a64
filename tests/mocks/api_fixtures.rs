//! Request fixtures for API tests

use axum::body::Body;
use axum::http::Request;
use serde_json::{json, Value};

#[allow(dead_code)]
pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	pub const ROUTES_PATH: &'static str = "/api/v1/bridge/routes";

	/// Headers that satisfy the default payment terms
	pub const PAID_HEADERS: [(&'static str, &'static str); 3] = [
		("x-payment-token", "test-token"),
		("x-payment-amount", "0.02"),
		("x-payment-currency", "USDC"),
	];

	pub fn valid_request() -> Value {
		json!({
			"token": "USDC",
			"amount": "100",
			"from_chain": "ethereum",
			"to_chain": "arbitrum"
		})
	}

	pub fn small_request() -> Value {
		json!({
			"token": "USDC",
			"amount": "5",
			"from_chain": "ethereum",
			"to_chain": "arbitrum"
		})
	}

	/// POST with a JSON body and the given headers
	pub fn post(body: &Value, headers: &[(&str, &str)]) -> Request<Body> {
		Self::post_raw(body.to_string(), headers)
	}

	pub fn post_raw(body: String, headers: &[(&str, &str)]) -> Request<Body> {
		let mut builder = Request::builder()
			.method("POST")
			.uri(Self::ROUTES_PATH)
			.header("content-type", "application/json");
		for (name, value) in headers {
			builder = builder.header(*name, *value);
		}
		builder.body(Body::from(body)).unwrap()
	}

	pub fn paid_post(body: &Value) -> Request<Body> {
		Self::post(body, &Self::PAID_HEADERS)
	}

	pub fn get(uri: &str) -> Request<Body> {
		Request::builder().uri(uri).body(Body::empty()).unwrap()
	}
}
