//! In-memory route cache backed by DashMap

use async_trait::async_trait;
use bridge_types::constants::limits::DEFAULT_CACHE_TTL_SECONDS;
use bridge_types::{BridgeRoutesResponse, CacheKey, CacheStats};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::traits::RouteCache;

#[derive(Debug, Clone)]
struct CacheEntry {
	value: BridgeRoutesResponse,
	created_at: Instant,
}

impl CacheEntry {
	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Process-wide TTL cache
///
/// Expired entries are dropped lazily on `get` and all at once on every
/// `set`. There is no size bound.
#[derive(Clone, Debug)]
pub struct MemoryCache {
	entries: Arc<DashMap<CacheKey, CacheEntry>>,
	ttl: Duration,
}

impl MemoryCache {
	/// Cache with the default 30 second TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Remove every expired entry, returning how many were dropped
	pub fn purge_expired(&self) -> usize {
		let before = self.entries.len();
		self.entries.retain(|_, entry| !entry.is_expired(self.ttl));
		before.saturating_sub(self.entries.len())
	}
}

impl Default for MemoryCache {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl RouteCache for MemoryCache {
	async fn get(&self, key: &CacheKey) -> Option<BridgeRoutesResponse> {
		self.entries.remove_if(key, |_, entry| entry.is_expired(self.ttl));

		let entry = self.entries.get(key)?;
		debug!(%key, age = ?entry.created_at.elapsed(), "Cache hit");
		Some(entry.value.clone())
	}

	async fn set(&self, key: CacheKey, value: BridgeRoutesResponse) {
		debug!(%key, "Caching route response");
		self.entries.insert(
			key,
			CacheEntry {
				value,
				created_at: Instant::now(),
			},
		);

		let evicted = self.purge_expired();
		if evicted > 0 {
			info!("Cleaned up {} expired cache entries", evicted);
		}
	}

	async fn stats(&self) -> CacheStats {
		CacheStats {
			size: self.entries.len(),
			ttl_seconds: self.ttl.as_secs(),
		}
	}

	async fn clear(&self) {
		let count = self.entries.len();
		self.entries.clear();
		debug!("Cleared {} cache entries", count);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_types::{Chain, RouteQuery, Token};

	fn query(amount: f64) -> RouteQuery {
		RouteQuery {
			token: Token::Usdc,
			amount,
			from_chain: Chain::Ethereum,
			to_chain: Chain::Polygon,
		}
	}

	fn response(amount: f64) -> BridgeRoutesResponse {
		BridgeRoutesResponse {
			token: Token::Usdc,
			amount,
			from_chain: Chain::Ethereum,
			to_chain: Chain::Polygon,
			timestamp: "2024-01-01T00:00:00Z".to_string(),
			routes: Vec::new(),
			recommended_route: None,
			summary: None,
			warnings: Vec::new(),
			response_time_ms: 12,
			cached: false,
		}
	}

	#[tokio::test]
	async fn test_set_then_get_within_ttl() {
		let cache = MemoryCache::new();
		let key = CacheKey::from(&query(100.0));

		assert!(cache.get(&key).await.is_none());
		cache.set(key.clone(), response(100.0)).await;

		let hit = cache.get(&key).await.unwrap();
		assert_eq!(hit.amount, 100.0);
		assert!(cache.get(&CacheKey::from(&query(101.0))).await.is_none());

		let stats = cache.stats().await;
		assert_eq!(stats.size, 1);
		assert_eq!(stats.ttl_seconds, 30);
	}

	#[tokio::test]
	async fn test_entries_expire_after_ttl() {
		let cache = MemoryCache::with_ttl(Duration::from_millis(50));
		let key = CacheKey::from(&query(100.0));

		cache.set(key.clone(), response(100.0)).await;
		assert!(cache.get(&key).await.is_some());

		tokio::time::sleep(Duration::from_millis(80)).await;
		assert!(cache.get(&key).await.is_none());
		assert_eq!(cache.stats().await.size, 0);
	}

	#[tokio::test]
	async fn test_set_sweeps_expired_entries() {
		let cache = MemoryCache::with_ttl(Duration::from_millis(50));
		cache.set(CacheKey::from(&query(1.0)), response(1.0)).await;
		cache.set(CacheKey::from(&query(2.0)), response(2.0)).await;
		assert_eq!(cache.stats().await.size, 2);

		tokio::time::sleep(Duration::from_millis(80)).await;
		cache.set(CacheKey::from(&query(3.0)), response(3.0)).await;
		assert_eq!(cache.stats().await.size, 1);
	}

	#[tokio::test]
	async fn test_clear() {
		let cache = MemoryCache::new();
		cache.set(CacheKey::from(&query(1.0)), response(1.0)).await;
		cache.clear().await;
		assert_eq!(cache.stats().await.size, 0);
	}
}
