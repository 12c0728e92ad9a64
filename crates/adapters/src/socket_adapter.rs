//! Socket adapter implementation
//!
//! Socket returns several candidate routes per quote. Each one is parsed on
//! its own so a single malformed entry does not hide the rest.

use async_trait::async_trait;
use bridge_config::ProviderSettings;
use bridge_types::constants::limits::DEFAULT_SOCKET_ETA_MINUTES;
use bridge_types::registry::{
	from_base_units, resolve_chain_id, resolve_token_address, to_base_units,
};
use bridge_types::routes::eta_minutes_from_seconds;
use bridge_types::{
	BridgeProvider, ProviderError, ProviderInfo, ProviderResult, QuoteFigures, Route, RouteQuery,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::client_cache::{ClientCache, ClientConfig};
use crate::serde_helpers::{lenient_f64, non_empty};

const API_KEY_HEADER: &str = "API-KEY";

/// Envelope of the Socket `/quote` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocketQuoteResponse {
	pub result: Option<SocketQuoteResult>,
}

/// Routes stay raw JSON until [`parse_socket_routes`] handles them one by one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocketQuoteResult {
	#[serde(default)]
	pub routes: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketRoute {
	#[serde(default)]
	pub used_bridge_names: Option<Vec<String>>,
	pub integrator_fee: Option<SocketIntegratorFee>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub total_gas_fees_in_usd: Option<f64>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub to_amount: Option<f64>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub service_time: Option<f64>,
	pub approval_data: Option<SocketApprovalData>,
	#[serde(default)]
	pub user_txs: Option<Vec<SocketUserTx>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocketIntegratorFee {
	#[serde(default, deserialize_with = "lenient_f64")]
	pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketApprovalData {
	pub allowance_target: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocketUserTx {
	pub to: Option<String>,
}

impl SocketRoute {
	fn into_figures(self, query: &RouteQuery) -> QuoteFigures {
		let decimals = query.token.decimals();

		let bridge_contract = self
			.approval_data
			.as_ref()
			.and_then(|approval| non_empty(approval.allowance_target.as_deref()))
			.or_else(|| {
				self.user_txs
					.as_ref()
					.and_then(|txs| txs.first())
					.and_then(|tx| non_empty(tx.to.as_deref()))
			})
			.map(str::to_string);

		QuoteFigures {
			bridge_name: self
				.used_bridge_names
				.as_ref()
				.and_then(|names| non_empty(names.first().map(String::as_str)))
				.unwrap_or("Unknown")
				.to_string(),
			fee_amount: self
				.integrator_fee
				.as_ref()
				.and_then(|fee| fee.amount)
				.map(|raw| from_base_units(raw, decimals))
				.unwrap_or(0.0),
			gas_usd: self.total_gas_fees_in_usd.unwrap_or(0.0),
			output_amount: from_base_units(self.to_amount.unwrap_or(0.0), decimals),
			eta_minutes: eta_minutes_from_seconds(self.service_time, DEFAULT_SOCKET_ETA_MINUTES),
			bridge_contract,
		}
	}
}

/// Normalize every usable Socket route; malformed entries are skipped
pub fn parse_socket_routes(response: SocketQuoteResponse, query: &RouteQuery) -> Vec<Route> {
	let raw_routes = response
		.result
		.and_then(|result| result.routes)
		.unwrap_or_default();

	if raw_routes.is_empty() {
		debug!("No routes found in Socket response");
		return Vec::new();
	}

	let total = raw_routes.len();
	let routes: Vec<Route> = raw_routes
		.into_iter()
		.enumerate()
		.filter_map(|(index, raw)| {
			let parsed = serde_json::from_value::<SocketRoute>(raw)
				.map_err(|e| e.to_string())
				.and_then(|route| {
					Route::from_quote(route.into_figures(query), query).map_err(|e| e.to_string())
				});
			match parsed {
				Ok(route) => Some(route),
				Err(reason) => {
					debug!(index, %reason, "Skipping malformed Socket route");
					None
				},
			}
		})
		.collect();

	debug!(total, usable = routes.len(), "Parsed Socket routes");
	routes
}

/// Socket adapter for cross-chain bridge quotes
#[derive(Debug)]
pub struct SocketAdapter {
	info: ProviderInfo,
	settings: ProviderSettings,
	client_config: ClientConfig,
	clients: ClientCache,
}

impl SocketAdapter {
	pub const PROVIDER_ID: &'static str = "socket-v2";

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
			info: ProviderInfo::new(Self::PROVIDER_ID, "Socket", "v2"),
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
			("fromChainId", resolve_chain_id(from_chain)?.to_string()),
			("toChainId", resolve_chain_id(to_chain)?.to_string()),
			(
				"fromTokenAddress",
				resolve_token_address(token, from_chain)?.to_string(),
			),
			(
				"toTokenAddress",
				resolve_token_address(token, to_chain)?.to_string(),
			),
			(
				"fromAmount",
				to_base_units(query.amount, query.token.decimals()),
			),
			("userAddress", self.settings.user_address.clone()),
			("singleTxOnly", "true".to_string()),
			("sort", "output".to_string()),
			// Socket takes slippage in percent
			(
				"defaultSwapSlippage",
				(self.settings.slippage * 100.0).to_string(),
			),
		])
	}
}

#[async_trait]
impl BridgeProvider for SocketAdapter {
	fn provider_info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn try_fetch_routes(&self, query: &RouteQuery) -> ProviderResult<Vec<Route>> {
		let params = self.query_params(query)?;
		debug!(provider = self.id(), ?params, "Fetching Socket quote");

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
		let quote: SocketQuoteResponse =
			serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse {
				reason: format!("Failed to parse Socket quote response: {}", e),
			})?;

		let routes = parse_socket_routes(quote, query);
		info!(provider = self.id(), "Found {} routes from Socket", routes.len());
		Ok(routes)
	}
}
