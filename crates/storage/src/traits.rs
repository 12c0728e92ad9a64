//! Cache trait for pluggable route cache implementations

use async_trait::async_trait;
use bridge_types::{BridgeRoutesResponse, CacheKey, CacheStats};

/// Time-bounded store of route responses keyed by request
///
/// Expired entries must never be returned. Implementations do not fail:
/// a cache problem is a miss.
#[async_trait]
pub trait RouteCache: Send + Sync {
	/// Fresh entry for `key`, if any
	async fn get(&self, key: &CacheKey) -> Option<BridgeRoutesResponse>;

	/// Store `value`, replacing any previous entry for `key`
	async fn set(&self, key: CacheKey, value: BridgeRoutesResponse);

	async fn stats(&self) -> CacheStats;

	async fn clear(&self);
}
