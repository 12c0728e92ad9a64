//! Token addresses, decimals and amount scaling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Chain, RegistryError, RegistryResult};

/// Tokens accepted by the route endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
	Usdc,
	Usdt,
	Eth,
	Weth,
}

/// Supported token symbols in canonical (uppercase) form
pub const SUPPORTED_TOKENS: [&str; 4] = ["USDC", "USDT", "ETH", "WETH"];

/// Decimals assumed for tokens missing from the table
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

const NATIVE_PLACEHOLDER: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
const POLYGON_WETH: &str = "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619";
const OP_STACK_WETH: &str = "0x4200000000000000000000000000000000000006";

impl Token {
	pub fn symbol(&self) -> &'static str {
		match self {
			Token::Usdc => "USDC",
			Token::Usdt => "USDT",
			Token::Eth => "ETH",
			Token::Weth => "WETH",
		}
	}

	pub fn decimals(&self) -> u8 {
		match self {
			Token::Usdc | Token::Usdt => 6,
			Token::Eth | Token::Weth => 18,
		}
	}

	/// Ether-denominated tokens get a lower minimum amount
	pub fn is_ether(&self) -> bool {
		matches!(self, Token::Eth | Token::Weth)
	}

	/// Contract address of this token on `chain`
	///
	/// Native ETH uses the 0xEeee placeholder, except on Polygon where ETH
	/// only exists as bridged WETH.
	pub fn address_on(&self, chain: Chain) -> &'static str {
		match (self, chain) {
			(Token::Usdc, Chain::Ethereum) => "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
			(Token::Usdc, Chain::Polygon) => "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174",
			(Token::Usdc, Chain::Arbitrum) => "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
			(Token::Usdc, Chain::Optimism) => "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85",
			(Token::Usdc, Chain::Base) => "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",

			(Token::Usdt, Chain::Ethereum) => "0xdAC17F958D2ee523a2206206994597C13D831ec7",
			(Token::Usdt, Chain::Polygon) => "0xc2132D05D31c914a87C6611C10748AEb04B58e8F",
			(Token::Usdt, Chain::Arbitrum) => "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9",
			(Token::Usdt, Chain::Optimism) => "0x94b008aA00579c1307B0EF2c499aD98a8ce58e58",
			(Token::Usdt, Chain::Base) => "0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb",

			(Token::Eth, Chain::Polygon) => POLYGON_WETH,
			(Token::Eth, _) => NATIVE_PLACEHOLDER,

			(Token::Weth, Chain::Ethereum) => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
			(Token::Weth, Chain::Polygon) => POLYGON_WETH,
			(Token::Weth, Chain::Arbitrum) => "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
			(Token::Weth, Chain::Optimism) | (Token::Weth, Chain::Base) => OP_STACK_WETH,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

impl FromStr for Token {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_uppercase().as_str() {
			"USDC" => Ok(Token::Usdc),
			"USDT" => Ok(Token::Usdt),
			"ETH" => Ok(Token::Eth),
			"WETH" => Ok(Token::Weth),
			_ => Err(RegistryError::UnsupportedToken {
				token: s.to_string(),
			}),
		}
	}
}

/// Resolve a token symbol on a chain to its contract address
pub fn resolve_token_address(token: &str, chain: &str) -> RegistryResult<&'static str> {
	let token: Token = token.parse()?;
	let chain: Chain = chain.parse()?;
	Ok(token.address_on(chain))
}

/// Decimal precision of a token symbol, 18 when the symbol is unknown
pub fn token_decimals(token: &str) -> u8 {
	token
		.parse::<Token>()
		.map(|t| t.decimals())
		.unwrap_or(DEFAULT_TOKEN_DECIMALS)
}

/// Convert a human amount into the token's smallest unit as a decimal string
///
/// Shifts the decimal point of the shortest round-trip rendering of `amount`,
/// so `0.1` at 18 decimals is exactly `100000000000000000`. Digits beyond
/// `decimals` are truncated.
pub fn to_base_units(amount: f64, decimals: u8) -> String {
	if !amount.is_finite() || amount <= 0.0 {
		return "0".to_string();
	}

	// f64 Display never uses exponent notation
	let rendered = amount.to_string();
	let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

	let decimals = decimals as usize;
	let mut digits = String::with_capacity(whole.len() + decimals);
	digits.push_str(whole);
	digits.extend(fraction.chars().chain(std::iter::repeat('0')).take(decimals));

	let trimmed = digits.trim_start_matches('0');
	if trimmed.is_empty() {
		"0".to_string()
	} else {
		trimmed.to_string()
	}
}

/// Scale a smallest-unit amount back into token units
pub fn from_base_units(raw: f64, decimals: u8) -> f64 {
	raw / 10f64.powi(decimals as i32)
}
