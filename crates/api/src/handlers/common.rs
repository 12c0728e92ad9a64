use axum::{http::StatusCode, Json};
use bridge_types::{SUPPORTED_CHAINS, SUPPORTED_TOKENS};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error response format shared by handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub suggestion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub supported_tokens: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub supported_chains: Option<Vec<String>>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			suggestion: None,
			supported_tokens: None,
			supported_chains: None,
		}
	}

	pub fn with_suggestion(mut self, suggestion: &str) -> Self {
		self.suggestion = Some(suggestion.to_string());
		self
	}

	/// Attach the supported token and chain lists
	pub fn with_supported_assets(mut self) -> Self {
		self.supported_tokens = Some(SUPPORTED_TOKENS.iter().map(|t| t.to_string()).collect());
		self.supported_chains = Some(SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect());
		self
	}

	pub fn into_api_error(self, status: StatusCode) -> ApiError {
		(status, Json(self))
	}
}
