//! Concurrent fan-out over the registered providers

use bridge_adapters::ProviderRegistry;
use bridge_types::{Route, RouteQuery};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Collects routes from every provider for one query
#[derive(Debug, Clone)]
pub struct RouteAggregator {
	registry: Arc<ProviderRegistry>,
}

impl RouteAggregator {
	pub fn new(registry: ProviderRegistry) -> Self {
		Self {
			registry: Arc::new(registry),
		}
	}

	pub fn provider_count(&self) -> usize {
		self.registry.len()
	}

	/// Query all providers concurrently and merge their routes
	///
	/// A failing or panicking provider contributes nothing. Routes keep
	/// registry order before deduplication.
	pub async fn aggregate(&self, query: &RouteQuery) -> Vec<Route> {
		info!(
			"Aggregating routes for {} {} from {} to {} across {} providers",
			query.amount,
			query.token,
			query.from_chain,
			query.to_chain,
			self.registry.len()
		);

		let tasks = self.registry.providers().iter().map(|provider| {
			let provider = Arc::clone(provider);
			let query = *query;
			tokio::spawn(async move { provider.fetch_routes(&query).await })
		});
		let results = join_all(tasks).await;

		let mut all_routes = Vec::new();
		for (provider, result) in self.registry.providers().iter().zip(results) {
			match result {
				Ok(routes) if routes.is_empty() => {
					debug!(provider = provider.id(), "No routes from provider");
				},
				Ok(routes) => {
					debug!(provider = provider.id(), "Added {} routes", routes.len());
					all_routes.extend(routes);
				},
				Err(e) => {
					warn!(provider = provider.id(), "Provider task failed: {}", e);
				},
			}
		}

		let unique = dedupe_routes(all_routes);
		info!("Total unique routes aggregated: {}", unique.len());
		unique
	}
}

/// Keep one route per bridge name, preferring the strictly cheaper one
///
/// A bridge keeps the position where its name was first seen; on equal cost
/// the earlier route wins.
pub fn dedupe_routes(routes: Vec<Route>) -> Vec<Route> {
	let mut positions: HashMap<String, usize> = HashMap::new();
	let mut unique: Vec<Route> = Vec::with_capacity(routes.len());

	for route in routes {
		match positions.get(&route.bridge_name) {
			Some(&index) => {
				if route.total_cost_usd < unique[index].total_cost_usd {
					unique[index] = route;
				}
			},
			None => {
				positions.insert(route.bridge_name.clone(), unique.len());
				unique.push(route);
			},
		}
	}

	unique
}
