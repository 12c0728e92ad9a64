//! Error types for inbound route requests

use thiserror::Error;

/// Validation errors for `POST /api/v1/bridge/routes`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteValidationError {
	#[error("{field} is required")]
	MissingRequiredField { field: &'static str },

	#[error("Token {token} not supported. Supported tokens: {supported}")]
	UnsupportedToken { token: String, supported: String },

	#[error("Chain {chain} not supported. Supported chains: {supported}")]
	UnsupportedChain { chain: String, supported: String },

	#[error("Source and destination chains cannot be the same")]
	SameChain,

	#[error("Amount must be a valid number")]
	InvalidAmount,

	#[error("Amount must be a positive number")]
	NonPositiveAmount,

	#[error("Minimum bridge amount is {minimum} {token}")]
	BelowMinimum { minimum: f64, token: String },

	#[error("Maximum bridge amount is 1,000,000 tokens")]
	AboveMaximum,
}

pub type RouteValidationResult<T> = Result<T, RouteValidationError>;
