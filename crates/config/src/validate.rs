//! Configuration validation
//!
//! Converts a raw [`FeeConfigFile`] into a domain [`FeeConfig`], collecting
//! every violation found in the document. Construction of an engine must
//! never proceed on an invalid configuration, and operators get the complete
//! list of problems in one failure.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use swapfee_types::{
	ConfigError, Fee, FeeConfig, Pattern, Rule, RuleValidationError, TokenMatcher, MAX_BPS,
};

use crate::settings::{FeeConfigFile, RuleFile};
use swapfee_types::rules::DEFAULT_PRIORITY;

/// Validate a raw document and produce the domain configuration
pub fn validate(file: FeeConfigFile) -> Result<FeeConfig, ConfigError> {
	let mut violations = Vec::new();

	let default_fee = match &file.default_fee {
		Some(fee) => {
			check_fee("defaultFee", fee, &mut violations);
			Some(fee.clone())
		},
		None => {
			violations.push(RuleValidationError::MissingDefaultFee);
			None
		},
	};

	let mut seen_ids: HashSet<String> = HashSet::new();
	let mut rules = Vec::with_capacity(file.rules.len());

	for rule_file in &file.rules {
		if !seen_ids.insert(rule_file.id.clone()) {
			violations.push(RuleValidationError::DuplicateRuleId {
				rule_id: rule_file.id.clone(),
			});
		}

		check_matcher(&rule_file.id, "in", &rule_file.matching.input, &mut violations);
		check_matcher(
			&rule_file.id,
			"out",
			&rule_file.matching.output,
			&mut violations,
		);
		check_fee(&rule_file.id, &rule_file.fee, &mut violations);

		let valid_from = parse_timestamp(
			&rule_file.id,
			"validFrom",
			rule_file.valid_from.as_deref(),
			&mut violations,
		);
		let valid_until = parse_timestamp(
			&rule_file.id,
			"validUntil",
			rule_file.valid_until.as_deref(),
			&mut violations,
		);

		if let (Some(from), Some(until)) = (valid_from, valid_until) {
			if from > until {
				violations.push(RuleValidationError::EmptyWindow {
					rule_id: rule_file.id.clone(),
				});
			}
		}

		rules.push(to_domain_rule(rule_file, valid_from, valid_until));
	}

	if !violations.is_empty() {
		return Err(ConfigError::Validation(violations));
	}

	Ok(FeeConfig {
		version: file.version,
		// Presence was checked above; violations would be non-empty otherwise
		default_fee: default_fee.expect("default fee present when no violations were found"),
		rules,
	})
}

fn to_domain_rule(
	rule_file: &RuleFile,
	valid_from: Option<DateTime<Utc>>,
	valid_until: Option<DateTime<Utc>>,
) -> Rule {
	Rule {
		id: rule_file.id.clone(),
		enabled: rule_file.enabled,
		priority: rule_file.priority.unwrap_or(DEFAULT_PRIORITY),
		matching: rule_file.matching.clone(),
		fee: rule_file.fee.clone(),
		valid_from,
		valid_until,
	}
}

fn check_matcher(
	rule_id: &str,
	side: &str,
	matcher: &TokenMatcher,
	violations: &mut Vec<RuleValidationError>,
) {
	if matcher.is_empty() {
		violations.push(RuleValidationError::EmptyMatcher {
			rule_id: rule_id.to_string(),
			side: side.to_string(),
		});
	}

	let fields = [
		("assetId", &matcher.asset_id),
		("blockchain", &matcher.blockchain),
		("symbol", &matcher.symbol),
	];
	for (name, pattern) in fields {
		if let Some(pattern) = pattern {
			check_pattern(rule_id, &format!("{}.{}", side, name), pattern, violations);
		}
	}
}

fn check_pattern(
	rule_id: &str,
	field: &str,
	pattern: &Pattern,
	violations: &mut Vec<RuleValidationError>,
) {
	if let Pattern::AnyOf(patterns) = pattern {
		if patterns.is_empty() {
			violations.push(RuleValidationError::EmptyPatternList {
				rule_id: rule_id.to_string(),
				field: field.to_string(),
			});
		}
		for nested in patterns {
			check_pattern(rule_id, field, nested, violations);
		}
	}
}

fn check_fee(rule_id: &str, fee: &Fee, violations: &mut Vec<RuleValidationError>) {
	if let Fee::Split(components) = fee {
		if components.is_empty() {
			violations.push(RuleValidationError::EmptyFeeSplit {
				rule_id: rule_id.to_string(),
			});
		}
	}

	for component in fee.components() {
		if component.bps > MAX_BPS {
			violations.push(RuleValidationError::BpsOutOfRange {
				rule_id: rule_id.to_string(),
				bps: component.bps,
			});
		}
		if component.recipient.trim().is_empty() {
			violations.push(RuleValidationError::EmptyRecipient {
				rule_id: rule_id.to_string(),
			});
		}
	}
}

fn parse_timestamp(
	rule_id: &str,
	field: &str,
	value: Option<&str>,
	violations: &mut Vec<RuleValidationError>,
) -> Option<DateTime<Utc>> {
	let raw = value?;
	match DateTime::parse_from_rfc3339(raw) {
		Ok(parsed) => Some(parsed.with_timezone(&Utc)),
		Err(_) => {
			violations.push(RuleValidationError::InvalidTimestamp {
				rule_id: rule_id.to_string(),
				field: field.to_string(),
				value: raw.to_string(),
			});
			None
		},
	}
}
