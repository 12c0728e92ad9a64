//! Error types for provider operations

use thiserror::Error;

use crate::registry::RegistryError;
use crate::routes::RouteError;

/// Provider operation errors
///
/// These never reach API clients: [`BridgeProvider::fetch_routes`] logs them
/// and degrades to an empty route list.
///
/// [`BridgeProvider::fetch_routes`]: super::BridgeProvider::fetch_routes
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Invalid quote: {0}")]
	InvalidQuote(#[from] RouteError),

	#[error("Registry lookup failed: {0}")]
	Registry(#[from] RegistryError),

	#[error("Configuration error: {reason}")]
	ConfigError { reason: String },
}

impl ProviderError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ProviderError::HttpStatusError { status_code, .. } => Some(*status_code),
			ProviderError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Map a reqwest failure, distinguishing timeouts from other transport errors
	pub fn from_request(error: reqwest::Error, timeout_ms: u64) -> Self {
		if error.is_timeout() {
			ProviderError::Timeout { timeout_ms }
		} else {
			ProviderError::HttpError(error)
		}
	}

	/// Create an HTTP failure error from response status with default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}
}

pub type ProviderResult<T> = Result<T, ProviderError>;
