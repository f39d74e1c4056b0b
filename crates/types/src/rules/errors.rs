//! Error types for fee configuration handling

use thiserror::Error;

/// A single violation found while validating a fee configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleValidationError {
	#[error("missing default fee")]
	MissingDefaultFee,

	#[error("duplicate rule id: {rule_id}")]
	DuplicateRuleId { rule_id: String },

	#[error("rule '{rule_id}': '{side}' matcher has no constraints")]
	EmptyMatcher { rule_id: String, side: String },

	#[error("rule '{rule_id}': empty pattern list in '{field}'")]
	EmptyPatternList { rule_id: String, field: String },

	#[error("rule '{rule_id}': bps {bps} out of range (must be 0..=10000)")]
	BpsOutOfRange { rule_id: String, bps: u32 },

	#[error("rule '{rule_id}': split fee has no components")]
	EmptyFeeSplit { rule_id: String },

	#[error("rule '{rule_id}': fee recipient is empty")]
	EmptyRecipient { rule_id: String },

	#[error("rule '{rule_id}': invalid {field} timestamp: {value}")]
	InvalidTimestamp {
		rule_id: String,
		field: String,
		value: String,
	},

	#[error("rule '{rule_id}': validFrom is after validUntil")]
	EmptyWindow { rule_id: String },
}

fn format_violations(violations: &[RuleValidationError]) -> String {
	violations
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

/// Fatal configuration failures
///
/// Validation failures carry every violation found in the document, not just
/// the first, so an operator can fix a configuration in one pass.
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("invalid fee configuration ({} violation(s)): {}", .0.len(), format_violations(.0))]
	Validation(Vec<RuleValidationError>),

	#[error("failed to load configuration: {0}")]
	Load(String),
}

impl ConfigError {
	/// The individual violations behind a validation failure
	pub fn violations(&self) -> &[RuleValidationError] {
		match self {
			ConfigError::Validation(violations) => violations,
			ConfigError::Load(_) => &[],
		}
	}
}
