//! Chain and token registry
//!
//! Pure lookup tables mapping symbolic chain and token names to the
//! identifiers each provider expects.

pub mod chains;
pub mod errors;
pub mod tokens;

pub use chains::{chain_name, provider_chain_alias, resolve_chain_id, Chain, SUPPORTED_CHAINS};
pub use errors::{RegistryError, RegistryResult};
pub use tokens::{
	from_base_units, resolve_token_address, to_base_units, token_decimals, Token,
	DEFAULT_TOKEN_DECIMALS, SUPPORTED_TOKENS,
};
