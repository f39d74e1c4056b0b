//! Priority-ordered rule selection
//!
//! A selector is built once per configuration and is immutable afterwards:
//! rules are sorted at construction by priority descending, with ties broken
//! by original configuration order. The tie-break is carried as an explicit
//! secondary sort key rather than relying on sort stability, so the total
//! ordering is reproducible by inspection.

use chrono::{DateTime, Utc};
use swapfee_types::{MatchEvidence, Rule, Token};
use tracing::debug;

/// The winning rule of a selection, with per-side match evidence
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRule<'a> {
	pub rule: &'a Rule,
	pub origin: MatchEvidence,
	pub destination: MatchEvidence,
}

/// An immutable, pre-sorted rule list
#[derive(Debug, Clone)]
pub struct RuleSelector {
	rules: Vec<Rule>,
}

impl RuleSelector {
	/// Sort the rules into evaluation order
	///
	/// Higher priority first; equal priorities keep their configuration
	/// order. This is the documented total ordering; first match wins.
	pub fn new(rules: Vec<Rule>) -> Self {
		let mut indexed: Vec<(usize, Rule)> = rules.into_iter().enumerate().collect();
		indexed.sort_by(|(index_a, rule_a), (index_b, rule_b)| {
			rule_b
				.priority
				.cmp(&rule_a.priority)
				.then(index_a.cmp(index_b))
		});

		Self {
			rules: indexed.into_iter().map(|(_, rule)| rule).collect(),
		}
	}

	/// The rules in evaluation order
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Select the first enabled, currently valid rule matching both tokens
	///
	/// Wall-clock time is read once per call so long-lived engines age
	/// promotional rules in and out correctly.
	pub fn select(&self, origin: &Token, destination: &Token) -> Option<SelectedRule<'_>> {
		self.select_at(origin, destination, Utc::now())
	}

	/// Like [`select`](Self::select) with an explicit evaluation instant
	pub fn select_at(
		&self,
		origin: &Token,
		destination: &Token,
		now: DateTime<Utc>,
	) -> Option<SelectedRule<'_>> {
		for rule in &self.rules {
			if !rule.is_active_at(now) {
				debug!(rule_id = %rule.id, "Rule inactive, skipping");
				continue;
			}

			let Some(origin_evidence) = rule.matching.input.matches(origin) else {
				continue;
			};
			let Some(destination_evidence) = rule.matching.output.matches(destination) else {
				continue;
			};

			debug!(
				rule_id = %rule.id,
				priority = rule.priority,
				"Rule matched swap"
			);
			return Some(SelectedRule {
				rule,
				origin: origin_evidence,
				destination: destination_evidence,
			});
		}

		None
	}
}
