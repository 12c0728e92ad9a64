//! Service startup logging for the bridge route aggregator

use crate::Settings;
use std::env;
use tracing::{info, warn};

/// Logs service, platform and configuration details at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "bridge-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Bridge Aggregator Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}/{}", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	let providers: Vec<&str> = settings
		.enabled_providers()
		.iter()
		.map(|(name, _)| *name)
		.collect();
	if providers.is_empty() {
		warn!("⚠️ No providers enabled; every request will return no routes");
	} else {
		info!("🌉 Providers: {}", providers.join(", "));
	}
	info!("🗄️ Cache TTL: {}s", settings.cache.ttl_seconds);

	if settings.payment.enabled {
		info!(
			"💰 Payment gate: {} {} on {}",
			settings.payment.amount, settings.payment.currency, settings.payment.network
		);
	} else {
		warn!("⚠️ Payment gate disabled");
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Bridge Aggregator Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Bridge Aggregator Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
