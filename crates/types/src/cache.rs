//! Cache key and statistics for memoized route responses

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::registry::{Chain, Token};
use crate::requests::RouteQuery;

/// Composite key `(token, amount, from_chain, to_chain)`
///
/// The amount is stored as its shortest decimal rendering so that equal
/// floats always produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
	pub token: Token,
	pub amount: String,
	pub from_chain: Chain,
	pub to_chain: Chain,
}

impl From<&RouteQuery> for CacheKey {
	fn from(query: &RouteQuery) -> Self {
		Self {
			token: query.token,
			amount: query.amount.to_string(),
			from_chain: query.from_chain,
			to_chain: query.to_chain,
		}
	}
}

impl fmt::Display for CacheKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}-{}-{}-{}",
			self.token, self.amount, self.from_chain, self.to_chain
		)
	}
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CacheStats {
	pub size: usize,
	pub ttl_seconds: u64,
}
