//! Configuration settings structures

use crate::configurable_value::ConfigurableValue;
use bridge_types::constants::limits::{
	DEFAULT_CACHE_TTL_SECONDS, DEFAULT_PROVIDER_TIMEOUT_MS, QUOTE_USER_ADDRESS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProvidersSettings,
	pub cache: CacheSettings,
	pub payment: PaymentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Upstream quote providers
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProvidersSettings {
	pub lifi: ProviderSettings,
	pub socket: ProviderSettings,
}

impl Default for ProvidersSettings {
	fn default() -> Self {
		Self {
			lifi: ProviderSettings::with_base_url("https://li.quest/v1"),
			socket: ProviderSettings::with_base_url("https://api.socket.tech/v2"),
		}
	}
}

/// Connection settings for one provider
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderSettings {
	pub enabled: bool,
	pub base_url: String,
	pub timeout_ms: u64,
	/// Address quoted as sender; quotes are informational only
	pub user_address: String,
	/// Slippage tolerance as a fraction (0.01 = 1%)
	pub slippage: f64,
	/// Optional API key, e.g. `{ type = "env", value = "SOCKET_API_KEY" }`
	pub api_key: Option<ConfigurableValue>,
}

impl ProviderSettings {
	pub fn with_base_url(base_url: &str) -> Self {
		Self {
			base_url: base_url.to_string(),
			..Self::default()
		}
	}
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			base_url: String::new(),
			timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
			user_address: QUOTE_USER_ADDRESS.to_string(),
			slippage: 0.01,
			api_key: None,
		}
	}
}

/// Result cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheSettings {
	pub ttl_seconds: u64,
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self {
			ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
		}
	}
}

/// x402 payment gate terms
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentSettings {
	pub enabled: bool,
	pub amount: f64,
	pub currency: String,
	pub network: String,
	/// Receiving address advertised on the root endpoint
	pub pay_to: Option<String>,
}

impl Default for PaymentSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			amount: 0.02,
			currency: "USDC".to_string(),
			network: "base".to_string(),
			pay_to: None,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	/// Include targets and thread ids in log lines
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Settings that would make the service unusable
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
	#[error("Provider {provider}: base_url must not be empty")]
	MissingBaseUrl { provider: &'static str },

	#[error("Provider {provider}: timeout_ms must be greater than zero")]
	ZeroTimeout { provider: &'static str },

	#[error("Cache ttl_seconds must be greater than zero")]
	ZeroCacheTtl,

	#[error("Payment amount must be a non-negative number, got {0}")]
	InvalidPaymentAmount(f64),

	#[error("Payment currency must not be empty")]
	MissingPaymentCurrency,
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Enabled providers in call order
	pub fn enabled_providers(&self) -> Vec<(&'static str, &ProviderSettings)> {
		[
			("socket", &self.providers.socket),
			("lifi", &self.providers.lifi),
		]
		.into_iter()
		.filter(|(_, provider)| provider.enabled)
		.collect()
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		for (provider, settings) in self.enabled_providers() {
			if settings.base_url.trim().is_empty() {
				return Err(ConfigValidationError::MissingBaseUrl { provider });
			}
			if settings.timeout_ms == 0 {
				return Err(ConfigValidationError::ZeroTimeout { provider });
			}
		}

		if self.cache.ttl_seconds == 0 {
			return Err(ConfigValidationError::ZeroCacheTtl);
		}

		if self.payment.enabled {
			if !self.payment.amount.is_finite() || self.payment.amount < 0.0 {
				return Err(ConfigValidationError::InvalidPaymentAmount(
					self.payment.amount,
				));
			}
			if self.payment.currency.trim().is_empty() {
				return Err(ConfigValidationError::MissingPaymentCurrency);
			}
		}

		Ok(())
	}
}
