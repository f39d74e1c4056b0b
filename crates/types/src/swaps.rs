//! Swap request and match result models

use serde::{Deserialize, Serialize};

use crate::rules::{Fee, MatchEvidence, Rule};

/// A proposed swap to match a fee for
///
/// Transient, one per matching call. Assets are referenced by registry
/// asset id; an unknown id is a normal outcome (default fee), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
	pub origin_asset: String,
	pub destination_asset: String,
}

impl SwapRequest {
	pub fn new(origin_asset: impl Into<String>, destination_asset: impl Into<String>) -> Self {
		Self {
			origin_asset: origin_asset.into(),
			destination_asset: destination_asset.into(),
		}
	}
}

/// Why a match decision was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
	pub rule_id: String,
	pub priority: i32,
	/// Matcher fields that participated on the origin side
	pub origin: MatchEvidence,
	/// Matcher fields that participated on the destination side
	pub destination: MatchEvidence,
}

/// The outcome of one match attempt
///
/// Carries enough detail to explain the decision without re-running it. When
/// no rule matched (or an asset was unresolvable), `fee` is the configured
/// default and `rule`/`match_details` are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
	pub matched: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rule: Option<Rule>,
	pub fee: Fee,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub match_details: Option<MatchDetails>,
}

impl MatchResult {
	/// An unmatched result carrying the default fee
	pub fn unmatched(default_fee: Fee) -> Self {
		Self {
			matched: false,
			rule: None,
			fee: default_fee,
			match_details: None,
		}
	}

	/// A matched result for the given rule and per-side evidence
	pub fn matched(rule: Rule, origin: MatchEvidence, destination: MatchEvidence) -> Self {
		let details = MatchDetails {
			rule_id: rule.id.clone(),
			priority: rule.priority,
			origin,
			destination,
		};
		Self {
			matched: true,
			fee: rule.fee.clone(),
			rule: Some(rule),
			match_details: Some(details),
		}
	}
}
