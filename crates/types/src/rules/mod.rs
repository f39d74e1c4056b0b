//! Fee rule domain models
//!
//! A fee configuration is a flat, ordered list of rules plus one default fee.
//! Each rule constrains the origin and destination tokens of a swap through a
//! pair of token matchers and carries the fee that applies when both sides
//! match. Rules are immutable once loaded; reloading a configuration means
//! building a new selector, never mutating one in place.

pub mod errors;

pub use errors::{ConfigError, RuleValidationError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Pattern, Token};

/// Hard cap on a fee rate: 10000 bps = 100%
pub const MAX_BPS: u32 = 10_000;

/// Priority assigned to rules that don't specify one
pub const DEFAULT_PRIORITY: i32 = 100;

/// A constraint set over token attributes
///
/// Each present field must match the corresponding token attribute (AND
/// semantics). An absent field means "don't constrain on this attribute",
/// never "match nothing". A matcher with no fields at all is a configuration
/// error caught at validation time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMatcher {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset_id: Option<Pattern>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blockchain: Option<Pattern>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<Pattern>,
}

/// Which matcher fields participated in a positive match
///
/// Purely observational: attached to results for audit and debugging, and
/// never consulted during rule selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvidence {
	pub asset_id: bool,
	pub blockchain: bool,
	pub symbol: bool,
}

impl TokenMatcher {
	/// True if no field constrains anything
	pub fn is_empty(&self) -> bool {
		self.asset_id.is_none() && self.blockchain.is_none() && self.symbol.is_none()
	}

	/// Evaluate every present constraint against the token's attributes
	///
	/// Constraints are checked in assetId → blockchain → symbol order and
	/// short-circuit on the first failure. On success the returned evidence
	/// records which fields were checked.
	pub fn matches(&self, token: &Token) -> Option<MatchEvidence> {
		let mut evidence = MatchEvidence::default();

		if let Some(pattern) = &self.asset_id {
			if !pattern.matches(&token.asset_id) {
				return None;
			}
			evidence.asset_id = true;
		}

		if let Some(pattern) = &self.blockchain {
			if !pattern.matches(&token.blockchain) {
				return None;
			}
			evidence.blockchain = true;
		}

		if let Some(pattern) = &self.symbol {
			if !pattern.matches(&token.symbol) {
				return None;
			}
			evidence.symbol = true;
		}

		Some(evidence)
	}
}

/// A single fee share: a basis-point rate and the account it accrues to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeComponent {
	/// Basis points: 1 bps = 0.01%; 10000 bps = 100%
	pub bps: u32,
	/// Account identifier the fee is paid to
	pub recipient: String,
}

impl FeeComponent {
	pub fn new(bps: u32, recipient: impl Into<String>) -> Self {
		Self {
			bps,
			recipient: recipient.into(),
		}
	}
}

/// A fee: either a single share or an ordered split across recipients
///
/// For a split, the effective total rate is the sum of each member's bps.
/// Each member's amount is computed independently against the same full
/// input amount; splits are not sequential deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fee {
	Single(FeeComponent),
	Split(Vec<FeeComponent>),
}

impl Fee {
	/// Effective total rate in basis points
	pub fn total_bps(&self) -> u32 {
		match self {
			Fee::Single(component) => component.bps,
			Fee::Split(components) => components.iter().map(|c| c.bps).sum(),
		}
	}

	/// All shares, regardless of arm
	pub fn components(&self) -> &[FeeComponent] {
		match self {
			Fee::Single(component) => std::slice::from_ref(component),
			Fee::Split(components) => components,
		}
	}
}

/// The origin/destination matcher pair of a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatch {
	/// Matcher for the swap's origin token
	#[serde(rename = "in")]
	pub input: TokenMatcher,
	/// Matcher for the swap's destination token
	#[serde(rename = "out")]
	pub output: TokenMatcher,
}

/// One fee rule of a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
	/// Configuration-wide unique identifier
	pub id: String,
	pub enabled: bool,
	/// Ordering key: higher priorities evaluate first; ties break by
	/// original configuration order
	pub priority: i32,
	#[serde(rename = "match")]
	pub matching: RuleMatch,
	pub fee: Fee,
	/// Inclusive start of the rule's validity window
	#[serde(skip_serializing_if = "Option::is_none")]
	pub valid_from: Option<DateTime<Utc>>,
	/// Inclusive end of the rule's validity window
	#[serde(skip_serializing_if = "Option::is_none")]
	pub valid_until: Option<DateTime<Utc>>,
}

impl Rule {
	/// True if the rule is enabled and `now` falls inside its validity
	/// window (bounds inclusive, absent bounds unbounded)
	pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
		if !self.enabled {
			return false;
		}
		if let Some(from) = self.valid_from {
			if now < from {
				return false;
			}
		}
		if let Some(until) = self.valid_until {
			if now > until {
				return false;
			}
		}
		true
	}
}

/// A validated fee configuration: the ordered rule list plus the default fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
	pub version: u32,
	pub default_fee: Fee,
	pub rules: Vec<Rule>,
}
