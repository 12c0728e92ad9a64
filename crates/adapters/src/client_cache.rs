//! HTTP client cache shared by the provider adapters
//!
//! One pooled `reqwest::Client` per distinct provider configuration, rebuilt
//! after a TTL so DNS and TLS state do not live forever.

use bridge_types::{ProviderError, ProviderResult};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const USER_AGENT: &str = "Bridge-Aggregator/1.0";

/// Everything that shapes a provider's HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	pub provider_id: String,
	pub timeout_ms: u64,
	/// Extra default headers, e.g. `API-KEY`
	pub headers: Vec<(String, String)>,
}

impl ClientConfig {
	pub fn new(provider_id: &str, timeout_ms: u64) -> Self {
		Self {
			provider_id: provider_id.to_string(),
			timeout_ms,
			headers: Vec::new(),
		}
	}

	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		self.headers.push((name.to_string(), value.to_string()));
		self
	}
}

#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

/// Thread-safe cache of HTTP clients keyed by [`ClientConfig`]
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Client cache with a 30 minute TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(30 * 60))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Get or create a client for `config`
	pub fn get_client(&self, config: &ClientConfig) -> ProviderResult<Arc<Client>> {
		self.clients.remove_if(config, |_, cached| {
			let expired = cached.created_at.elapsed() > self.ttl;
			if expired {
				debug!(provider = %config.provider_id, "HTTP client expired, rebuilding");
			}
			expired
		});

		if let Some(cached) = self.clients.get(config) {
			return Ok(cached.client.clone());
		}

		let client = Arc::new(build_client(config)?);
		match self.clients.entry(config.clone()) {
			// lost the race to another request, use theirs
			Entry::Occupied(entry) => Ok(entry.get().client.clone()),
			Entry::Vacant(entry) => {
				entry.insert(CachedClient {
					client: client.clone(),
					created_at: Instant::now(),
				});
				debug!(provider = %config.provider_id, "Cached new HTTP client");
				Ok(client)
			},
		}
	}

	pub fn len(&self) -> usize {
		self.clients.len()
	}

	pub fn is_empty(&self) -> bool {
		self.clients.is_empty()
	}

	pub fn clear(&self) {
		self.clients.clear();
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

fn build_client(config: &ClientConfig) -> ProviderResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	headers.insert("User-Agent", HeaderValue::from_static(USER_AGENT));

	for (key, value) in &config.headers {
		match (
			HeaderName::from_bytes(key.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				headers.insert(name, value);
			},
			_ => warn!(provider = %config.provider_id, header = %key, "Skipping invalid header"),
		}
	}

	ClientBuilder::new()
		.default_headers(headers)
		.timeout(Duration::from_millis(config.timeout_ms))
		.pool_max_idle_per_host(10)
		.pool_idle_timeout(Duration::from_secs(90))
		.tcp_keepalive(Duration::from_secs(60))
		.build()
		.map_err(|e| ProviderError::ConfigError {
			reason: format!("failed to build HTTP client: {}", e),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clients_are_reused_per_config() {
		let cache = ClientCache::new();
		let config = ClientConfig::new("lifi-v1", 8000);

		let first = cache.get_client(&config).unwrap();
		let second = cache.get_client(&config).unwrap();
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(cache.len(), 1);

		let keyed = config.clone().with_header("API-KEY", "secret");
		let third = cache.get_client(&keyed).unwrap();
		assert!(!Arc::ptr_eq(&first, &third));
		assert_eq!(cache.len(), 2);

		cache.clear();
		assert!(cache.is_empty());
	}

	#[test]
	fn test_expired_clients_are_rebuilt() {
		let cache = ClientCache::with_ttl(Duration::ZERO);
		let config = ClientConfig::new("socket-v2", 8000);

		let first = cache.get_client(&config).unwrap();
		std::thread::sleep(Duration::from_millis(5));
		let second = cache.get_client(&config).unwrap();
		assert!(!Arc::ptr_eq(&first, &second));
	}
}
