//! Bridge Aggregator Library
//!
//! Aggregates cross-chain bridge quotes from LI.FI and Socket, ranks them by
//! total cost and serves them over an HTTP API behind an x402 payment gate.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Core domain types
pub use bridge_types::{
	chrono, serde_json, BridgeProvider, BridgeRouteRequest, BridgeRoutesResponse, CacheKey,
	CacheStats, Chain, Confidence, ProviderError, ProviderInfo, ProviderResult, RankedRoute,
	RecommendedRoute, Route, RouteQuery, RouteSummary, RouteValidationError, Token,
};

// Service layer
pub use bridge_service::{
	RouteAggregator, RouteService, RouteServiceError, RouteServiceTrait,
};

// Storage layer
pub use bridge_storage::{MemoryCache, RouteCache};

// API layer
pub use bridge_api::{create_router, AppState};

// Adapters
pub use bridge_adapters::{LifiAdapter, ProviderRegistry, SocketAdapter};

// Config
pub use bridge_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

/// Builder pattern for configuring the aggregator
#[derive(Default)]
pub struct BridgeAggregatorBuilder {
	settings: Option<Settings>,
	registry: Option<ProviderRegistry>,
	cache: Option<Arc<dyn RouteCache>>,
}

impl BridgeAggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register a provider
	///
	/// Once any provider is supplied the configured LI.FI and Socket adapters
	/// are no longer created.
	pub fn with_provider(mut self, provider: Arc<dyn BridgeProvider>) -> Self {
		self.registry
			.get_or_insert_with(ProviderRegistry::new)
			.register(provider);
		self
	}

	/// Replace the provider registry wholesale
	pub fn with_provider_registry(mut self, registry: ProviderRegistry) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Use a custom route cache instead of the in-memory one
	pub fn with_cache(mut self, cache: Arc<dyn RouteCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		use bridge_config::LogFormat;

		// RUST_LOG wins over the configured level
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));
		let structured = settings.logging.structured;

		match settings.logging.format {
			LogFormat::Json => tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| -> Box<dyn std::error::Error> { e })?,
			LogFormat::Pretty => tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| -> Box<dyn std::error::Error> { e })?,
			LogFormat::Compact => tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init()
				.map_err(|e| -> Box<dyn std::error::Error> { e })?,
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the aggregator and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let registry = self
			.registry
			.unwrap_or_else(|| ProviderRegistry::with_defaults(&settings));
		if registry.is_empty() {
			tracing::warn!("No bridge providers registered");
		}
		info!("Initialized with {} provider(s)", registry.len());

		let cache = self.cache.unwrap_or_else(|| {
			Arc::new(MemoryCache::with_ttl(Duration::from_secs(
				settings.cache.ttl_seconds,
			)))
		});

		let route_service = RouteService::new(RouteAggregator::new(registry), cache);
		let app_state = AppState::new(Arc::new(route_service), settings.payment.clone());

		let router = create_router(&app_state).with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, reads configuration unless settings were provided,
	/// initializes tracing, then binds and serves until Ctrl+C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info(&settings);
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /");
		info!("  GET  /health");
		info!("  POST /api/v1/bridge/routes");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
