//! LI.FI adapter implementation
//!
//! LI.FI answers `/quote` with a single best route, so this adapter yields at
//! most one [`Route`] per request.

use async_trait::async_trait;
use bridge_config::ProviderSettings;
use bridge_types::constants::limits::DEFAULT_LIFI_ETA_MINUTES;
use bridge_types::registry::{provider_chain_alias, resolve_token_address, to_base_units};
use bridge_types::routes::eta_minutes_from_seconds;
use bridge_types::{
	BridgeProvider, ProviderError, ProviderInfo, ProviderResult, QuoteFigures, Route, RouteQuery,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::client_cache::{ClientCache, ClientConfig};
use crate::serde_helpers::{lenient_f64, non_empty};

const API_KEY_HEADER: &str = "x-lifi-api-key";

/// Subset of the LI.FI `/quote` response the adapter reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifiQuote {
	pub estimate: Option<LifiEstimate>,
	pub tool: Option<String>,
	pub tool_details: Option<LifiToolDetails>,
	pub transaction_request: Option<LifiTransactionRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifiEstimate {
	#[serde(default, deserialize_with = "lenient_f64")]
	pub to_amount: Option<f64>,
	#[serde(default)]
	pub gas_costs: Option<Vec<LifiGasCost>>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub execution_duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifiGasCost {
	#[serde(default, rename = "amountUSD", deserialize_with = "lenient_f64")]
	pub amount_usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifiToolDetails {
	pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifiTransactionRequest {
	pub to: Option<String>,
}

/// Normalize a LI.FI quote into routes for `query`
///
/// The fee is whatever the user loses between input and output; LI.FI has no
/// separate fee field on the quote.
pub fn parse_lifi_quote(quote: &LifiQuote, query: &RouteQuery) -> ProviderResult<Vec<Route>> {
	let Some(estimate) = &quote.estimate else {
		debug!("No route found in LI.FI response");
		return Ok(Vec::new());
	};

	let bridge_name = non_empty(
		quote
			.tool_details
			.as_ref()
			.and_then(|details| details.name.as_deref()),
	)
	.or_else(|| non_empty(quote.tool.as_deref()))
	.unwrap_or("Unknown")
	.to_string();

	let decimals = query.token.decimals();
	let output_amount = estimate.to_amount.unwrap_or(0.0) / 10f64.powi(decimals as i32);
	let gas_usd: f64 = estimate
		.gas_costs
		.iter()
		.flatten()
		.map(|cost| cost.amount_usd.unwrap_or(0.0))
		.sum();

	let figures = QuoteFigures {
		bridge_name,
		fee_amount: query.amount - output_amount,
		gas_usd,
		output_amount,
		eta_minutes: eta_minutes_from_seconds(
			estimate.execution_duration,
			DEFAULT_LIFI_ETA_MINUTES,
		),
		bridge_contract: quote
			.transaction_request
			.as_ref()
			.and_then(|tx| tx.to.clone()),
	};

	Ok(vec![Route::from_quote(figures, query)?])
}

/// LI.FI adapter for cross-chain bridge quotes
#[derive(Debug)]
pub struct LifiAdapter {
	info: ProviderInfo,
	settings: ProviderSettings,
	client_config: ClientConfig,
	clients: ClientCache,
}

impl LifiAdapter {
	pub const PROVIDER_ID: &'static str = "lifi-v1";

	pub fn new(settings: &ProviderSettings) -> Self {
		Self::with_cache(settings, ClientCache::new())
	}

	/// Create the adapter on a shared client cache
	pub fn with_cache(settings: &ProviderSettings, clients: ClientCache) -> Self {
		let mut client_config = ClientConfig::new(Self::PROVIDER_ID, settings.timeout_ms);
		if let Some(key) = settings.api_key.as_ref().and_then(|k| k.resolve_optional()) {
			client_config = client_config.with_header(API_KEY_HEADER, &key);
		}

		Self {
			info: ProviderInfo::new(Self::PROVIDER_ID, "LI.FI", "v1"),
			settings: settings.clone(),
			client_config,
			clients,
		}
	}

	fn query_params(&self, query: &RouteQuery) -> ProviderResult<Vec<(&'static str, String)>> {
		let from_chain = query.from_chain.as_str();
		let to_chain = query.to_chain.as_str();
		let token = query.token.symbol();

		Ok(vec![
			("fromChain", provider_chain_alias(from_chain)),
			("toChain", provider_chain_alias(to_chain)),
			("fromToken", resolve_token_address(token, from_chain)?.to_string()),
			("toToken", resolve_token_address(token, to_chain)?.to_string()),
			(
				"fromAmount",
				to_base_units(query.amount, query.token.decimals()),
			),
			("fromAddress", self.settings.user_address.clone()),
			("slippage", self.settings.slippage.to_string()),
		])
	}
}

#[async_trait]
impl BridgeProvider for LifiAdapter {
	fn provider_info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn try_fetch_routes(&self, query: &RouteQuery) -> ProviderResult<Vec<Route>> {
		let params = self.query_params(query)?;
		debug!(provider = self.id(), ?params, "Fetching LI.FI quote");

		let url = format!("{}/quote", self.settings.base_url.trim_end_matches('/'));
		let client = self.clients.get_client(&self.client_config)?;

		let response = client
			.get(url)
			.query(&params)
			.send()
			.await
			.map_err(|e| ProviderError::from_request(e, self.settings.timeout_ms))?;

		if !response.status().is_success() {
			return Err(ProviderError::from_http_failure(response.status().as_u16()));
		}

		let body = response
			.text()
			.await
			.map_err(|e| ProviderError::from_request(e, self.settings.timeout_ms))?;
		let quote: LifiQuote =
			serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse {
				reason: format!("Failed to parse LI.FI quote response: {}", e),
			})?;

		let routes = parse_lifi_quote(&quote, query)?;
		if let Some(route) = routes.first() {
			info!(provider = self.id(), bridge = %route.bridge_name, "Found 1 route from LI.FI");
		}
		Ok(routes)
	}
}
