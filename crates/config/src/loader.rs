//! Configuration loading utilities

use crate::{ConfigValidationError, Settings};
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;
use tracing::debug;

/// Environment variable prefix for settings overrides, e.g. `BRIDGE__CACHE__TTL_SECONDS`
pub const ENV_PREFIX: &str = "BRIDGE";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid PORT value '{0}'")]
	InvalidPort(String),

	#[error("Invalid configuration: {0}")]
	Invalid(#[from] ConfigValidationError),
}

/// Load settings from `config/config.*` (optional), then `BRIDGE__*` variables,
/// then `PORT`
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from("config/config")
}

/// Same as [`load_config`] with an explicit config file stem
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;

	if let Ok(port) = std::env::var("PORT") {
		settings.server.port = port
			.trim()
			.parse()
			.map_err(|_| ConfigLoadError::InvalidPort(port.clone()))?;
		debug!(port = settings.server.port, "Server port taken from PORT");
	}

	settings.validate()?;
	Ok(settings)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_file_uses_defaults() {
		let settings = load_config_from("does/not/exist/config").unwrap();
		assert_eq!(settings.cache.ttl_seconds, 30);
		assert_eq!(settings.providers.socket.base_url, "https://api.socket.tech/v2");
	}
}
