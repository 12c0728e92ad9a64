//! Route request model and validation

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::constants::limits::{MAX_BRIDGE_AMOUNT, MIN_ETH_AMOUNT, MIN_TOKEN_AMOUNT};
use crate::registry::{Chain, Token, SUPPORTED_CHAINS, SUPPORTED_TOKENS};

pub mod errors;

pub use errors::{RouteValidationError, RouteValidationResult};

/// Amount as sent by clients: a decimal string or a bare JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(untagged)]
pub enum AmountInput {
	Text(String),
	Number(f64),
}

impl fmt::Display for AmountInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AmountInput::Text(s) => f.write_str(s),
			AmountInput::Number(n) => write!(f, "{}", n),
		}
	}
}

/// API request body for /api/v1/bridge/routes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = serde_json::json!({
    "token": "USDC",
    "amount": "100",
    "from_chain": "ethereum",
    "to_chain": "arbitrum"
})))]
pub struct BridgeRouteRequest {
	pub token: Option<String>,
	pub amount: Option<AmountInput>,
	pub from_chain: Option<String>,
	pub to_chain: Option<String>,
}

/// Validated, normalized request handed to providers and the cache
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RouteQuery {
	pub token: Token,
	pub amount: f64,
	pub from_chain: Chain,
	pub to_chain: Chain,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> RouteValidationResult<&'a str> {
	match value.as_deref().map(str::trim) {
		Some(v) if !v.is_empty() => Ok(v),
		_ => Err(RouteValidationError::MissingRequiredField { field }),
	}
}

fn parse_chain(name: &str) -> RouteValidationResult<Chain> {
	name.parse()
		.map_err(|_| RouteValidationError::UnsupportedChain {
			chain: name.to_string(),
			supported: SUPPORTED_CHAINS.join(", "),
		})
}

impl BridgeRouteRequest {
	pub fn new(token: &str, amount: &str, from_chain: &str, to_chain: &str) -> Self {
		Self {
			token: Some(token.to_string()),
			amount: Some(AmountInput::Text(amount.to_string())),
			from_chain: Some(from_chain.to_string()),
			to_chain: Some(to_chain.to_string()),
		}
	}

	/// Validate and normalize the request
	///
	/// Checks run in a fixed order so the first problem reported is stable:
	/// token, chains, same-chain, then amount bounds.
	pub fn validate(&self) -> RouteValidationResult<RouteQuery> {
		let token_raw = required(&self.token, "Token")?;
		let token: Token =
			token_raw
				.parse()
				.map_err(|_| RouteValidationError::UnsupportedToken {
					token: token_raw.to_string(),
					supported: SUPPORTED_TOKENS.join(", "),
				})?;

		let from_raw = required(&self.from_chain, "from_chain")?;
		let to_raw = required(&self.to_chain, "to_chain")?;
		let from_chain = parse_chain(from_raw)?;
		let to_chain = parse_chain(to_raw)?;

		if from_chain == to_chain {
			return Err(RouteValidationError::SameChain);
		}

		let amount = match &self.amount {
			None => {
				return Err(RouteValidationError::MissingRequiredField { field: "Amount" })
			},
			Some(AmountInput::Text(text)) if text.trim().is_empty() => {
				return Err(RouteValidationError::MissingRequiredField { field: "Amount" })
			},
			Some(AmountInput::Text(text)) => text
				.trim()
				.parse::<f64>()
				.map_err(|_| RouteValidationError::InvalidAmount)?,
			Some(AmountInput::Number(n)) => *n,
		};

		if !amount.is_finite() {
			return Err(RouteValidationError::InvalidAmount);
		}
		if amount <= 0.0 {
			return Err(RouteValidationError::NonPositiveAmount);
		}

		let minimum = if token.is_ether() {
			MIN_ETH_AMOUNT
		} else {
			MIN_TOKEN_AMOUNT
		};
		if amount < minimum {
			return Err(RouteValidationError::BelowMinimum {
				minimum,
				token: token.to_string(),
			});
		}
		if amount > MAX_BRIDGE_AMOUNT {
			return Err(RouteValidationError::AboveMaximum);
		}

		Ok(RouteQuery {
			token,
			amount,
			from_chain,
			to_chain,
		})
	}
}
