//! Core provider trait for bridge quote integrations

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

use super::{ProviderInfo, ProviderResult};
use crate::requests::RouteQuery;
use crate::routes::Route;

/// A third-party quote API normalized into canonical [`Route`]s
///
/// Implementors only provide [`try_fetch_routes`](Self::try_fetch_routes);
/// the aggregator calls the infallible [`fetch_routes`](Self::fetch_routes).
#[async_trait]
pub trait BridgeProvider: Send + Sync + Debug {
	/// Get provider identity information
	fn provider_info(&self) -> &ProviderInfo;

	/// Get provider ID (for logging and registry lookups)
	fn id(&self) -> &str {
		&self.provider_info().provider_id
	}

	/// Get human-readable name for this provider
	fn name(&self) -> &str {
		&self.provider_info().name
	}

	/// Request quotes upstream and normalize them
	///
	/// Returns an empty list when the provider answered but had no usable
	/// quote, and an error for transport, status or schema failures.
	async fn try_fetch_routes(&self, query: &RouteQuery) -> ProviderResult<Vec<Route>>;

	/// Fail-soft variant: any error is logged and becomes an empty list
	async fn fetch_routes(&self, query: &RouteQuery) -> Vec<Route> {
		match self.try_fetch_routes(query).await {
			Ok(routes) => routes,
			Err(e) => {
				warn!(
					provider = self.id(),
					status = ?e.status_code(),
					"{} quote request failed: {}",
					self.name(),
					e
				);
				Vec::new()
			},
		}
	}
}
