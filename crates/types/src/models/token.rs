//! Blockchain token models

use serde::{Deserialize, Serialize};

/// A token as resolved from the external token registry
///
/// Tokens are immutable and sourced entirely from the registry; the matching
/// core never constructs or mutates them. Attribute casing is whatever the
/// registry provides; matching is case-sensitive by contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Registry-wide unique asset identifier (e.g., "eth.omft.near")
	pub asset_id: String,
	/// Blockchain the token lives on (e.g., "eth", "arb", "near")
	pub blockchain: String,
	/// Token symbol (e.g., "ETH", "USDC", "WBTC")
	pub symbol: String,
	/// Number of decimal places
	pub decimals: u8,
}

impl Token {
	pub fn new(asset_id: String, blockchain: String, symbol: String, decimals: u8) -> Self {
		Self {
			asset_id,
			blockchain,
			symbol,
			decimals,
		}
	}
}

/// Common token constants for tests and examples
impl Token {
	pub fn eth() -> Self {
		Self::new(
			"eth.omft.near".to_string(),
			"eth".to_string(),
			"ETH".to_string(),
			18,
		)
	}

	pub fn usdc_ethereum() -> Self {
		Self::new(
			"eth-0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48.omft.near".to_string(),
			"eth".to_string(),
			"USDC".to_string(),
			6,
		)
	}

	pub fn usdc_arbitrum() -> Self {
		Self::new(
			"arb-0xaf88d065e77c8cc2239327c5edb3a432268e5831.omft.near".to_string(),
			"arb".to_string(),
			"USDC".to_string(),
			6,
		)
	}

	pub fn usdt_ethereum() -> Self {
		Self::new(
			"eth-0xdac17f958d2ee523a2206206994597c13d831ec7.omft.near".to_string(),
			"eth".to_string(),
			"USDT".to_string(),
			6,
		)
	}

	pub fn wbtc_polygon() -> Self {
		Self::new(
			"polygon-0x1bfd67037b42cf73acf2047067bd4f2c47d9bfd6.omft.near".to_string(),
			"polygon".to_string(),
			"WBTC".to_string(),
			8,
		)
	}

	pub fn near() -> Self {
		Self::new(
			"wrap.near".to_string(),
			"near".to_string(),
			"NEAR".to_string(),
			24,
		)
	}
}
