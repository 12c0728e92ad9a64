//! Test server for integration tests

use axum::Router;
use bridge_aggregator::{BridgeAggregatorBuilder, BridgeProvider, Settings};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Aggregator served on an ephemeral local port
#[allow(dead_code)]
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a server backed only by `providers`
	pub async fn spawn_with_providers(
		providers: Vec<Arc<dyn BridgeProvider>>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(Settings::default(), providers).await
	}

	pub async fn spawn_with(
		settings: Settings,
		providers: Vec<Arc<dyn BridgeProvider>>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let mut builder = BridgeAggregatorBuilder::new().with_settings(settings);
		for provider in providers {
			builder = builder.with_provider(provider);
		}
		let (app, _state) = builder.start().await?;

		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		Ok(Self { base_url, handle })
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}
