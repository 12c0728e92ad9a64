//! Error types for registry lookups

use thiserror::Error;

/// Lookup failures for chain and token identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("Chain {chain} not supported")]
	UnsupportedChain { chain: String },

	#[error("Token {token} not supported")]
	UnsupportedToken { token: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
