//! Mock bridge providers

use async_trait::async_trait;
use bridge_aggregator::{
	BridgeProvider, Confidence, ProviderError, ProviderInfo, ProviderResult, Route, RouteQuery,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Provider returning canned routes or a fixed error
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockProvider {
	info: ProviderInfo,
	outcome: Result<Vec<Route>, u16>,
	delay: Option<Duration>,
	calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockProvider {
	pub fn with_routes(id: &str, routes: Vec<Route>) -> Self {
		Self {
			info: ProviderInfo::new(id, &format!("Mock {}", id), "1.0.0"),
			outcome: Ok(routes),
			delay: None,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Provider whose upstream always answers with `status`
	pub fn failing(id: &str, status: u16) -> Self {
		Self {
			outcome: Err(status),
			..Self::with_routes(id, Vec::new())
		}
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	/// Number of upstream fetches made so far, shared across clones
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn into_arc(self) -> Arc<dyn BridgeProvider> {
		Arc::new(self)
	}
}

#[async_trait]
impl BridgeProvider for MockProvider {
	fn provider_info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn try_fetch_routes(&self, _query: &RouteQuery) -> ProviderResult<Vec<Route>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		match &self.outcome {
			Ok(routes) => Ok(routes.clone()),
			Err(status) => Err(ProviderError::from_http_failure(*status)),
		}
	}
}

/// Route with the given display name, cost and ETA
#[allow(dead_code)]
pub fn route(name: &str, total_cost_usd: f64, eta_minutes: u64) -> Route {
	Route {
		bridge_name: name.to_string(),
		bridge_url: "https://unknown-bridge.com".to_string(),
		eta_minutes,
		fee_usd: total_cost_usd,
		fee_percentage: total_cost_usd,
		gas_estimate_usd: 0.0,
		total_cost_usd,
		output_amount: 100.0 - total_cost_usd,
		requirements: vec![
			"ETH for gas on Ethereum".to_string(),
			"Will receive USDC on Arbitrum".to_string(),
		],
		confidence: Confidence::High,
		bridge_contract: "N/A".to_string(),
	}
}
