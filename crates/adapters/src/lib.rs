//! Bridge Adapters
//!
//! Provider-specific adapters that turn LI.FI and Socket quotes into
//! canonical routes, plus the ordered registry the aggregator fans out over.

use bridge_config::Settings;
use bridge_types::BridgeProvider;
use std::sync::Arc;
use tracing::info;

pub mod client_cache;
pub mod lifi_adapter;
mod serde_helpers;
pub mod socket_adapter;

pub use client_cache::{ClientCache, ClientConfig};
pub use lifi_adapter::LifiAdapter;
pub use socket_adapter::SocketAdapter;

/// Ordered set of providers; order decides which duplicate is seen first
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
	providers: Vec<Arc<dyn BridgeProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Socket then LI.FI, each only when enabled in `settings`
	pub fn with_defaults(settings: &Settings) -> Self {
		let clients = ClientCache::new();
		let mut registry = Self::new();

		for (name, provider_settings) in settings.enabled_providers() {
			let provider: Arc<dyn BridgeProvider> = match name {
				"socket" => Arc::new(SocketAdapter::with_cache(
					provider_settings,
					clients.clone(),
				)),
				_ => Arc::new(LifiAdapter::with_cache(provider_settings, clients.clone())),
			};
			info!(provider = provider.id(), "Registered bridge provider");
			registry.register(provider);
		}

		registry
	}

	pub fn register(&mut self, provider: Arc<dyn BridgeProvider>) {
		self.providers.push(provider);
	}

	pub fn providers(&self) -> &[Arc<dyn BridgeProvider>] {
		&self.providers
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}
