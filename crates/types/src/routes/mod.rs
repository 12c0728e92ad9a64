//! Canonical route model shared by every provider adapter

use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::bridges::{bridge_confidence, bridge_requirements, bridge_url, format_bridge_name};
use crate::requests::RouteQuery;

pub mod math;

pub use math::round_to;

/// Sentinel used when a provider reports no contract to interact with
pub const NO_CONTRACT: &str = "N/A";

/// Static reputation tier of a bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
	High,
	Medium,
	Low,
}

/// One provider's quoted way to move tokens between chains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Route {
	pub bridge_name: String,
	pub bridge_url: String,
	pub eta_minutes: u64,
	pub fee_usd: f64,
	pub fee_percentage: f64,
	pub gas_estimate_usd: f64,
	pub total_cost_usd: f64,
	pub output_amount: f64,
	pub requirements: Vec<String>,
	pub confidence: Confidence,
	pub bridge_contract: String,
}

/// Raw figures extracted from one upstream quote, in token units
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteFigures {
	/// Bridge name exactly as the provider reported it
	pub bridge_name: String,
	pub fee_amount: f64,
	pub gas_usd: f64,
	pub output_amount: f64,
	pub eta_minutes: u64,
	pub bridge_contract: Option<String>,
}

/// Reasons a quote cannot become a [`Route`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
	#[error("Non-finite value for {field}")]
	NonFinite { field: &'static str },

	#[error("Negative value for {field}: {value}")]
	Negative { field: &'static str, value: f64 },
}

impl Route {
	/// Normalize raw quote figures into a route for `query`
	///
	/// Fee values may be negative when the provider reports more output than
	/// input; gas and output must not be.
	pub fn from_quote(figures: QuoteFigures, query: &RouteQuery) -> Result<Self, RouteError> {
		let QuoteFigures {
			bridge_name,
			fee_amount,
			gas_usd,
			output_amount,
			eta_minutes,
			bridge_contract,
		} = figures;

		for (field, value) in [
			("fee_usd", fee_amount),
			("gas_estimate_usd", gas_usd),
			("output_amount", output_amount),
		] {
			if !value.is_finite() {
				return Err(RouteError::NonFinite { field });
			}
		}
		for (field, value) in [("gas_estimate_usd", gas_usd), ("output_amount", output_amount)] {
			if value < 0.0 {
				return Err(RouteError::Negative { field, value });
			}
		}

		let fee_percentage = if query.amount > 0.0 {
			fee_amount / query.amount * 100.0
		} else {
			0.0
		};

		Ok(Self {
			bridge_name: format_bridge_name(&bridge_name),
			bridge_url: bridge_url(&bridge_name).to_string(),
			eta_minutes,
			fee_usd: round_to(fee_amount, 4),
			fee_percentage: round_to(fee_percentage, 2),
			gas_estimate_usd: round_to(gas_usd, 2),
			total_cost_usd: round_to(fee_amount + gas_usd, 2),
			output_amount: round_to(output_amount, 6),
			requirements: bridge_requirements(
				&bridge_name,
				query.token,
				query.from_chain,
				query.to_chain,
			),
			confidence: bridge_confidence(&bridge_name),
			bridge_contract: bridge_contract
				.filter(|c| !c.trim().is_empty())
				.unwrap_or_else(|| NO_CONTRACT.to_string()),
		})
	}
}

/// Round an upstream duration in seconds up to whole minutes
///
/// Missing, zero or negative durations fall back to `default_minutes`.
pub fn eta_minutes_from_seconds(seconds: Option<f64>, default_minutes: u64) -> u64 {
	match seconds {
		Some(secs) if secs.is_finite() && secs > 0.0 => (secs / 60.0).ceil() as u64,
		_ => default_minutes,
	}
}

/// Route with its 1-based position in the cost ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RankedRoute {
	pub rank: usize,
	#[serde(flatten)]
	pub route: Route,
}

/// Recommended route reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RecommendedRoute {
	pub bridge_name: String,
	pub reason: String,
}

/// Headline figures of a ranked route set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RouteSummary {
	pub total_routes_found: usize,
	pub best_fee: String,
	pub fastest_eta: String,
	pub cheapest_bridge: String,
}
