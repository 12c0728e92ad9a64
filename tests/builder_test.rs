//! Tests for the Builder Pattern implementation

mod mocks;

use bridge_aggregator::{
	BridgeAggregatorBuilder, BridgeRouteRequest, MemoryCache, ProviderRegistry, RouteCache,
	RouteQuery, RouteServiceTrait, Settings,
};
use bridge_config::{LogFormat, LoggingSettings, ServerSettings};
use mocks::providers::route;
use mocks::MockProvider;
use std::sync::Arc;
use std::time::Duration;

/// Create a minimal test configuration
fn create_test_settings() -> Settings {
	Settings {
		server: ServerSettings {
			host: "127.0.0.1".to_string(),
			port: 3001,
		},
		logging: LoggingSettings {
			level: "debug".to_string(),
			format: LogFormat::Compact,
			structured: false,
		},
		..Settings::default()
	}
}

#[test]
fn test_builder_default() {
	let builder = BridgeAggregatorBuilder::default();
	assert!(builder.settings().is_none());
}

#[test]
fn test_builder_with_settings() {
	let builder = BridgeAggregatorBuilder::new().with_settings(create_test_settings());

	let settings = builder.settings().unwrap();
	assert_eq!(settings.server.port, 3001);
	assert_eq!(settings.bind_address(), "127.0.0.1:3001");
}

#[tokio::test]
async fn test_builder_start_with_defaults() {
	let (_router, state) = BridgeAggregatorBuilder::new().start().await.unwrap();

	let stats = state.route_service.cache_stats().await;
	assert_eq!(stats.size, 0);
	assert_eq!(stats.ttl_seconds, 30);
	assert!(state.payment.enabled);
}

#[tokio::test]
async fn test_builder_applies_cache_ttl_setting() {
	let mut settings = create_test_settings();
	settings.cache.ttl_seconds = 120;

	let (_router, state) = BridgeAggregatorBuilder::new()
		.with_settings(settings)
		.start()
		.await
		.unwrap();

	assert_eq!(state.route_service.cache_stats().await.ttl_seconds, 120);
}

#[tokio::test]
async fn test_builder_rejects_invalid_settings() {
	let mut settings = create_test_settings();
	settings.cache.ttl_seconds = 0;

	let result = BridgeAggregatorBuilder::new()
		.with_settings(settings)
		.start()
		.await;
	assert!(result.is_err());
}

#[tokio::test]
async fn test_builder_with_custom_providers_and_cache() {
	let provider = MockProvider::with_routes("mock", vec![route("Hop Protocol", 1.0, 10)]);
	let cache = Arc::new(MemoryCache::with_ttl(Duration::from_secs(5)));

	let (_router, state) = BridgeAggregatorBuilder::new()
		.with_settings(create_test_settings())
		.with_provider(provider.clone().into_arc())
		.with_cache(cache.clone())
		.start()
		.await
		.unwrap();

	let query: RouteQuery = BridgeRouteRequest::new("USDC", "100", "ethereum", "base")
		.validate()
		.unwrap();
	let response = state.route_service.find_routes(query).await.unwrap();

	assert_eq!(response.routes.len(), 1);
	assert_eq!(provider.calls(), 1);
	assert_eq!(cache.stats().await.size, 1);
	assert_eq!(cache.stats().await.ttl_seconds, 5);
}

#[tokio::test]
async fn test_builder_with_empty_registry_finds_nothing() {
	let (_router, state) = BridgeAggregatorBuilder::new()
		.with_settings(create_test_settings())
		.with_provider_registry(ProviderRegistry::new())
		.start()
		.await
		.unwrap();

	let query = BridgeRouteRequest::new("ETH", "1", "optimism", "base")
		.validate()
		.unwrap();
	assert!(state.route_service.find_routes(query).await.is_err());
}
