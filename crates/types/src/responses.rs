//! Response payloads served by the HTTP API

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::cache::CacheStats;
use crate::registry::{Chain, Token};
use crate::routes::{RankedRoute, RecommendedRoute, RouteSummary};

/// Successful route aggregation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BridgeRoutesResponse {
	pub token: Token,
	pub amount: f64,
	pub from_chain: Chain,
	pub to_chain: Chain,
	/// RFC 3339 time at which the routes were aggregated
	pub timestamp: String,
	pub routes: Vec<RankedRoute>,
	pub recommended_route: Option<RecommendedRoute>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub summary: Option<RouteSummary>,
	pub warnings: Vec<String>,
	pub response_time_ms: u64,
	/// True when served from the result cache
	#[serde(default)]
	pub cached: bool,
}

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
	pub status: String,
	pub timestamp: String,
	pub cache: CacheStats,
}
