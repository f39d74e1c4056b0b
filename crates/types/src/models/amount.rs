//! Decimal-string token amounts
//!
//! Fee computation works on 256-bit integers, but amounts cross the API
//! boundary as decimal strings so that raw 18-decimal (and larger) values
//! survive JSON without precision loss. `Amount` is that boundary type:
//! it accepts only strict digit strings and converts into the
//! `alloy_primitives::U256` the fee calculator runs on.

use alloy_primitives::U256;

/// An unsigned token amount in raw (smallest-unit) decimal form
///
/// The string must be ASCII digits only: no sign, no whitespace, no
/// separators, no `0x` prefix. Anything else is rejected at conversion
/// and deserialization time rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// The raw decimal string
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert into the integer the fee calculator operates on
	///
	/// Fails on empty strings, non-digit characters, and values that don't
	/// fit in 256 bits.
	pub fn to_u256(&self) -> Result<U256, String> {
		if self.0.is_empty() {
			return Err("amount cannot be empty".to_string());
		}
		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err("amount must contain only digits".to_string());
		}

		U256::from_str_radix(&self.0, 10).map_err(|_| "amount exceeds 256 bits".to_string())
	}

	/// Check the string without keeping the converted value
	pub fn validate(&self) -> Result<(), String> {
		self.to_u256().map(|_| ())
	}
}

impl std::fmt::Display for Amount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for Amount {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for Amount {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<U256> for Amount {
	fn from(value: U256) -> Self {
		// U256 renders as plain decimal, which is exactly the wire form
		Self(value.to_string())
	}
}

impl serde::Serialize for Amount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for Amount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		let amount = Self(value);
		amount.validate().map_err(serde::de::Error::custom)?;
		Ok(amount)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_digit_strings_convert_exactly() {
		let raw = "1000000000000000000";
		let parsed = Amount::from(raw).to_u256().unwrap();
		assert_eq!(parsed, U256::from(10u64).pow(U256::from(18u64)));
		// And back out without reformatting
		assert_eq!(Amount::from(parsed).as_str(), raw);
	}

	#[test]
	fn test_malformed_strings_are_rejected_not_coerced() {
		for bad in ["", " 100", "100 ", "-5", "+5", "1.5", "0x10", "1_000"] {
			assert!(
				Amount::from(bad).to_u256().is_err(),
				"expected rejection for {:?}",
				bad
			);
		}
	}

	#[test]
	fn test_256_bit_bound() {
		// U256::MAX in decimal
		let max = Amount::from(U256::MAX);
		assert!(max.to_u256().is_ok());

		// One more digit overflows
		let too_big = Amount::from(format!("{}0", max));
		assert_eq!(
			too_big.to_u256().unwrap_err(),
			"amount exceeds 256 bits".to_string()
		);
	}

	#[test]
	fn test_serde_validates_on_the_way_in() {
		let val: Amount = serde_json::from_str("\"2500000000\"").unwrap();
		assert_eq!(val.as_str(), "2500000000");
		assert_eq!(serde_json::to_string(&val).unwrap(), "\"2500000000\"");

		assert!(serde_json::from_str::<Amount>("\"abc123\"").is_err());
		assert!(serde_json::from_str::<Amount>("\"\"").is_err());
		// Amounts are strings on the wire, never JSON numbers
		assert!(serde_json::from_str::<Amount>("2500000000").is_err());
	}
}
