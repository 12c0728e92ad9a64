//! Provider identity, errors and the adapter trait

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use traits::BridgeProvider;

/// Identity of a provider integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
	/// Stable identifier (e.g. "lifi-v1")
	pub provider_id: String,
	/// Display name used in logs
	pub name: String,
	/// Upstream API version targeted by the integration
	pub version: String,
}

impl ProviderInfo {
	pub fn new(provider_id: &str, name: &str, version: &str) -> Self {
		Self {
			provider_id: provider_id.to_string(),
			name: name.to_string(),
			version: version.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::{Chain, Token};
	use crate::requests::RouteQuery;
	use crate::routes::Route;
	use async_trait::async_trait;

	#[derive(Debug)]
	struct FailingProvider {
		info: ProviderInfo,
	}

	#[async_trait]
	impl BridgeProvider for FailingProvider {
		fn provider_info(&self) -> &ProviderInfo {
			&self.info
		}

		async fn try_fetch_routes(&self, _query: &RouteQuery) -> ProviderResult<Vec<Route>> {
			Err(ProviderError::from_http_failure(503))
		}
	}

	#[tokio::test]
	async fn test_fetch_routes_swallows_errors() {
		let provider = FailingProvider {
			info: ProviderInfo::new("failing", "Failing Provider", "1"),
		};
		let query = RouteQuery {
			token: Token::Usdc,
			amount: 100.0,
			from_chain: Chain::Ethereum,
			to_chain: Chain::Base,
		};

		assert!(provider.try_fetch_routes(&query).await.is_err());
		assert!(provider.fetch_routes(&query).await.is_empty());
		assert_eq!(provider.id(), "failing");
		assert_eq!(provider.name(), "Failing Provider");
	}
}
