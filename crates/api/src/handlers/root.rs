//! Service description served at `/`

use axum::{extract::State, response::Json};
use bridge_types::{SUPPORTED_CHAINS, SUPPORTED_TOKENS};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::payment::{
	PAYMENT_AMOUNT_HEADER, PAYMENT_CURRENCY_HEADER, PAYMENT_PROTOCOL, PAYMENT_TOKEN_HEADER,
};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EndpointInfo {
	pub method: String,
	pub path: String,
	pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentTerms {
	pub required: bool,
	pub protocol: String,
	pub amount: f64,
	pub currency: String,
	pub network: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pay_to: Option<String>,
	pub headers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServiceInfo {
	pub name: String,
	pub version: String,
	pub description: String,
	pub endpoints: Vec<EndpointInfo>,
	pub supported_tokens: Vec<String>,
	pub supported_chains: Vec<String>,
	pub payment: PaymentTerms,
}

fn endpoint(method: &str, path: &str, description: &str) -> EndpointInfo {
	EndpointInfo {
		method: method.to_string(),
		path: path.to_string(),
		description: description.to_string(),
	}
}

/// Service metadata and endpoint listing
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata", body = ServiceInfo)),
    tag = "health"
))]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
	let payment = &state.payment;

	Json(ServiceInfo {
		name: "bridge-aggregator".to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		description: "Viable bridge routes with live fee and time quotes for cross-chain token transfers"
			.to_string(),
		endpoints: vec![
			endpoint("GET", "/", "Service metadata"),
			endpoint("GET", "/health", "Health check with cache statistics"),
			endpoint(
				"POST",
				"/api/v1/bridge/routes",
				"Ranked bridge routes for a transfer (payment required)",
			),
		],
		supported_tokens: SUPPORTED_TOKENS.iter().map(|t| t.to_string()).collect(),
		supported_chains: SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect(),
		payment: PaymentTerms {
			required: payment.enabled,
			protocol: PAYMENT_PROTOCOL.to_string(),
			amount: payment.amount,
			currency: payment.currency.clone(),
			network: payment.network.clone(),
			pay_to: payment.pay_to.clone(),
			headers: [
				PAYMENT_TOKEN_HEADER,
				PAYMENT_AMOUNT_HEADER,
				PAYMENT_CURRENCY_HEADER,
			]
			.iter()
			.map(|h| h.to_string())
			.collect(),
		},
	})
}
