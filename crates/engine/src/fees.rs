//! Exact basis-point fee arithmetic
//!
//! All computation runs on 256-bit unsigned integers, never floating
//! point, so 18-decimal amounts don't accumulate rounding drift. Division
//! truncates toward zero. Bad inputs fail fast; nothing is clamped or
//! coerced.

use alloy_primitives::U256;
use swapfee_types::{Amount, Fee, MAX_BPS};
use thiserror::Error;

/// Input failures for fee computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
	#[error("invalid amount {value:?}: {reason}")]
	InvalidAmount { value: String, reason: String },

	#[error("bps out of range: {bps} (must be 0..=10000)")]
	BpsOutOfRange { bps: u32 },

	#[error("fee computation overflow")]
	Overflow,
}

fn parse_amount(value: &str) -> Result<U256, FeeError> {
	Amount::from(value)
		.to_u256()
		.map_err(|reason| FeeError::InvalidAmount {
			value: value.to_string(),
			reason,
		})
}

fn check_bps(bps: u32) -> Result<U256, FeeError> {
	if bps > MAX_BPS {
		return Err(FeeError::BpsOutOfRange { bps });
	}
	Ok(U256::from(bps))
}

/// Parse and compute in one step, returning `(amount, fee)` so both the
/// fee and the remainder come from the same truncating division.
fn fee_parts(amount: &str, bps: u32) -> Result<(U256, U256), FeeError> {
	let amount = parse_amount(amount)?;
	let bps = check_bps(bps)?;

	let fee = amount
		.checked_mul(bps)
		.ok_or(FeeError::Overflow)?
		/ U256::from(MAX_BPS);

	Ok((amount, fee))
}

/// `floor(amount * bps / 10000)` over exact integers
///
/// The amount is a decimal-digit string; `bps` must be in `[0, 10000]`.
pub fn calculate_fee(amount: &str, bps: u32) -> Result<Amount, FeeError> {
	let (_, fee) = fee_parts(amount, bps)?;
	Ok(Amount::from(fee))
}

/// `amount - calculate_fee(amount, bps)`; never underflows for valid bps
pub fn calculate_amount_after_fee(amount: &str, bps: u32) -> Result<Amount, FeeError> {
	let (amount, fee) = fee_parts(amount, bps)?;
	Ok(Amount::from(amount - fee))
}

/// Per-recipient fee amounts for a (possibly split) fee
///
/// Each share is computed independently against the same full amount;
/// splits are not sequential deductions from a shrinking balance.
pub fn split_fee_amounts(amount: &str, fee: &Fee) -> Result<Vec<(String, Amount)>, FeeError> {
	fee.components()
		.iter()
		.map(|component| {
			calculate_fee(amount, component.bps)
				.map(|share| (component.recipient.clone(), share))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use swapfee_types::FeeComponent;

	#[test]
	fn test_reference_values() {
		assert_eq!(calculate_fee("1000000", 20).unwrap().as_str(), "2000");
		assert_eq!(calculate_fee("1000000", 1).unwrap().as_str(), "100");
		// Truncation toward zero
		assert_eq!(calculate_fee("100", 3).unwrap().as_str(), "0");
		assert_eq!(calculate_fee("10000", 3).unwrap().as_str(), "3");
	}

	#[test]
	fn test_extremes() {
		assert_eq!(calculate_fee("1000000", 0).unwrap().as_str(), "0");
		assert_eq!(calculate_fee("1000000", 10000).unwrap().as_str(), "1000000");
		assert_eq!(calculate_fee("0", 500).unwrap().as_str(), "0");
	}

	#[test]
	fn test_fee_plus_remainder_is_exact() {
		// No rounding loss may be split across the two calls
		let cases = [
			("1000000000000000000", 30u32),
			("999999999999999999", 1),
			("7", 9999),
			("123456789123456789123456789", 250),
		];
		for (amount, bps) in cases {
			let fee = calculate_fee(amount, bps).unwrap().to_u256().unwrap();
			let rest = calculate_amount_after_fee(amount, bps)
				.unwrap()
				.to_u256()
				.unwrap();
			let original = Amount::from(amount).to_u256().unwrap();
			assert_eq!(fee + rest, original, "amount={} bps={}", amount, bps);
		}
	}

	#[test]
	fn test_fee_and_remainder_truncate_consistently() {
		// 100 * 3 / 10000 truncates to 0, so the remainder keeps everything
		assert_eq!(calculate_fee("100", 3).unwrap().as_str(), "0");
		assert_eq!(calculate_amount_after_fee("100", 3).unwrap().as_str(), "100");
	}

	#[test]
	fn test_large_18_decimal_amounts() {
		// 1e27 at 25 bps
		assert_eq!(
			calculate_fee("1000000000000000000000000000", 25)
				.unwrap()
				.as_str(),
			"2500000000000000000000000"
		);
	}

	#[test]
	fn test_bps_out_of_range_is_not_clamped() {
		assert_eq!(
			calculate_fee("1000", 10001).unwrap_err(),
			FeeError::BpsOutOfRange { bps: 10001 }
		);
		assert!(calculate_amount_after_fee("1000", 60000).is_err());
	}

	#[test]
	fn test_malformed_amounts_fail_fast() {
		for bad in ["", " 100", "100 ", "-5", "1.5", "0x10", "12a3"] {
			assert!(
				matches!(
					calculate_fee(bad, 10),
					Err(FeeError::InvalidAmount { .. })
				),
				"expected failure for {:?}",
				bad
			);
		}
	}

	#[test]
	fn test_split_shares_use_full_amount() {
		let fee = Fee::Split(vec![
			FeeComponent::new(20, "treasury.near"),
			FeeComponent::new(5, "referrer.near"),
		]);
		let shares = split_fee_amounts("1000000", &fee).unwrap();
		assert_eq!(
			shares,
			vec![
				("treasury.near".to_string(), Amount::from("2000")),
				("referrer.near".to_string(), Amount::from("500")),
			]
		);
	}
}
