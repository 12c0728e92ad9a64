//! Route lookup pipeline: cache, aggregation, ranking

use async_trait::async_trait;
use bridge_storage::RouteCache;
use bridge_types::{BridgeRoutesResponse, CacheKey, CacheStats, Chain, RouteQuery, Token};
use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::aggregator::RouteAggregator;
use crate::optimizer::{optimize, warnings};

#[derive(Debug, Error)]
pub enum RouteServiceError {
	#[error("No bridge routes found for {token} from {from_chain} to {to_chain}")]
	NoRoutes {
		token: Token,
		from_chain: Chain,
		to_chain: Chain,
	},

	#[error("Route aggregation failed: {0}")]
	Internal(String),
}

/// Trait for route lookups - enables easy mocking in tests
#[async_trait]
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait RouteServiceTrait: Send + Sync {
	/// Ranked routes for an already validated query
	async fn find_routes(
		&self,
		query: RouteQuery,
	) -> Result<BridgeRoutesResponse, RouteServiceError>;

	async fn cache_stats(&self) -> CacheStats;
}

/// Default [`RouteServiceTrait`] implementation
///
/// Identical concurrent queries are coalesced: the first one aggregates, the
/// rest wait on a per-key lock and then read the cache.
pub struct RouteService {
	aggregator: RouteAggregator,
	cache: Arc<dyn RouteCache>,
	in_flight: Arc<DashMap<CacheKey, Arc<Mutex<()>>>>,
}

impl RouteService {
	pub fn new(aggregator: RouteAggregator, cache: Arc<dyn RouteCache>) -> Self {
		Self {
			aggregator,
			cache,
			in_flight: Arc::new(DashMap::new()),
		}
	}

	async fn cached(&self, key: &CacheKey, started: Instant) -> Option<BridgeRoutesResponse> {
		let mut response = self.cache.get(key).await?;
		info!(%key, "Returning cached routes");
		response.cached = true;
		response.response_time_ms = started.elapsed().as_millis() as u64;
		Some(response)
	}

	async fn aggregate_and_store(
		&self,
		key: &CacheKey,
		query: RouteQuery,
		started: Instant,
	) -> Result<BridgeRoutesResponse, RouteServiceError> {
		// filled by whoever held the lock before us
		if let Some(hit) = self.cached(key, started).await {
			return Ok(hit);
		}

		let aggregator = self.aggregator.clone();
		let optimized = tokio::spawn(async move {
			let routes = aggregator.aggregate(&query).await;
			optimize(routes, query.amount)
		})
		.await
		.map_err(|e| {
			error!(%key, "Route pipeline task failed: {}", e);
			RouteServiceError::Internal(e.to_string())
		})?;

		if optimized.routes.is_empty() {
			return Err(RouteServiceError::NoRoutes {
				token: query.token,
				from_chain: query.from_chain,
				to_chain: query.to_chain,
			});
		}

		let response = BridgeRoutesResponse {
			token: query.token,
			amount: query.amount,
			from_chain: query.from_chain,
			to_chain: query.to_chain,
			timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
			routes: optimized.routes,
			recommended_route: optimized.recommended_route,
			summary: optimized.summary,
			warnings: warnings(query.amount),
			response_time_ms: started.elapsed().as_millis() as u64,
			cached: false,
		};

		self.cache.set(key.clone(), response.clone()).await;
		Ok(response)
	}
}

#[async_trait]
impl RouteServiceTrait for RouteService {
	async fn find_routes(
		&self,
		query: RouteQuery,
	) -> Result<BridgeRoutesResponse, RouteServiceError> {
		let started = Instant::now();
		let key = CacheKey::from(&query);
		debug!(%key, "Route request");

		if let Some(hit) = self.cached(&key, started).await {
			return Ok(hit);
		}

		let lock = self.in_flight.entry(key.clone()).or_default().clone();
		let result = {
			let _guard = lock.lock().await;
			self.aggregate_and_store(&key, query, started).await
		};

		// drop the lock entry unless another request is already queued on it
		self.in_flight.remove_if(&key, |_, current| {
			Arc::ptr_eq(current, &lock) && Arc::strong_count(current) == 2
		});

		result
	}

	async fn cache_stats(&self) -> CacheStats {
		self.cache.stats().await
	}
}
