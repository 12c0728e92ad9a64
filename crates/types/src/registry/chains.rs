//! Chain identifiers and provider-specific chain codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{RegistryError, RegistryResult};

/// Chains accepted by the route endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Ethereum,
	Polygon,
	Arbitrum,
	Optimism,
	Base,
}

/// Supported chain names in canonical (lowercase) form
pub const SUPPORTED_CHAINS: [&str; 5] = ["ethereum", "polygon", "arbitrum", "optimism", "base"];

/// (name, EVM chain id, LI.FI chain code)
///
/// Wider than [`SUPPORTED_CHAINS`]: providers know these chains even though
/// the endpoint only accepts the supported subset.
const CHAIN_TABLE: [(&str, u64, &str); 8] = [
	("ethereum", 1, "ETH"),
	("polygon", 137, "POL"),
	("arbitrum", 42161, "ARB"),
	("optimism", 10, "OPT"),
	("base", 8453, "BAS"),
	("avalanche", 43114, "AVA"),
	("bsc", 56, "BSC"),
	("fantom", 250, "FTM"),
];

impl Chain {
	/// Canonical lowercase name
	pub fn as_str(&self) -> &'static str {
		match self {
			Chain::Ethereum => "ethereum",
			Chain::Polygon => "polygon",
			Chain::Arbitrum => "arbitrum",
			Chain::Optimism => "optimism",
			Chain::Base => "base",
		}
	}

	/// Capitalized name for human-readable messages
	pub fn display_name(&self) -> &'static str {
		match self {
			Chain::Ethereum => "Ethereum",
			Chain::Polygon => "Polygon",
			Chain::Arbitrum => "Arbitrum",
			Chain::Optimism => "Optimism",
			Chain::Base => "Base",
		}
	}

	/// Native token paid for gas on this chain
	pub fn gas_token(&self) -> &'static str {
		match self {
			Chain::Polygon => "MATIC",
			_ => "ETH",
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Chain {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"ethereum" => Ok(Chain::Ethereum),
			"polygon" => Ok(Chain::Polygon),
			"arbitrum" => Ok(Chain::Arbitrum),
			"optimism" => Ok(Chain::Optimism),
			"base" => Ok(Chain::Base),
			_ => Err(RegistryError::UnsupportedChain {
				chain: s.to_string(),
			}),
		}
	}
}

/// Resolve a chain name (case-insensitive) to its EVM chain id
pub fn resolve_chain_id(name: &str) -> RegistryResult<u64> {
	let normalized = name.to_lowercase();
	CHAIN_TABLE
		.iter()
		.find(|(chain, _, _)| *chain == normalized)
		.map(|(_, id, _)| *id)
		.ok_or_else(|| RegistryError::UnsupportedChain {
			chain: name.to_string(),
		})
}

/// Reverse lookup from chain id to canonical name
pub fn chain_name(chain_id: u64) -> &'static str {
	CHAIN_TABLE
		.iter()
		.find(|(_, id, _)| *id == chain_id)
		.map(|(name, _, _)| *name)
		.unwrap_or("unknown")
}

/// LI.FI chain code for a chain name; unmapped names are upper-cased
pub fn provider_chain_alias(name: &str) -> String {
	let normalized = name.to_lowercase();
	CHAIN_TABLE
		.iter()
		.find(|(chain, _, _)| *chain == normalized)
		.map(|(_, _, alias)| alias.to_string())
		.unwrap_or_else(|| name.to_uppercase())
}
