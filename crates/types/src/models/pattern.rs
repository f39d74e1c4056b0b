//! Matcher patterns over token attributes
//!
//! A pattern is a closed set of matching shapes: an exact literal, the `*`
//! wildcard, a `!literal` negation, or an ordered list of patterns with OR
//! semantics. On the wire these are plain strings and arrays; in the domain
//! they are an explicit enum so the matcher is total over every case.

use serde::{Deserialize, Serialize};

/// A single matching pattern for one token attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
	/// `"*"`, matches any value
	Wildcard,
	/// Exact, case-sensitive value match
	Literal(String),
	/// `"!x"`, matches any value except `x`
	Not(String),
	/// Array of patterns, matches if any element matches (short-circuit OR)
	AnyOf(Vec<Pattern>),
}

impl Pattern {
	/// Evaluate this pattern against a single attribute value
	///
	/// Matching is exact-value and case-sensitive, with no normalization;
	/// the registry is responsible for canonical casing.
	pub fn matches(&self, value: &str) -> bool {
		match self {
			Pattern::Wildcard => true,
			Pattern::Literal(expected) => expected == value,
			Pattern::Not(excluded) => excluded != value,
			Pattern::AnyOf(patterns) => patterns.iter().any(|p| p.matches(value)),
		}
	}

	/// Classify a wire string into its pattern shape
	pub fn from_wire(value: &str) -> Self {
		if value == "*" {
			Pattern::Wildcard
		} else if let Some(excluded) = value.strip_prefix('!') {
			Pattern::Not(excluded.to_string())
		} else {
			Pattern::Literal(value.to_string())
		}
	}

	/// The wire string for non-array patterns; `None` for `AnyOf`
	fn to_wire(&self) -> Option<String> {
		match self {
			Pattern::Wildcard => Some("*".to_string()),
			Pattern::Literal(value) => Some(value.clone()),
			Pattern::Not(excluded) => Some(format!("!{}", excluded)),
			Pattern::AnyOf(_) => None,
		}
	}
}

impl Serialize for Pattern {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self.to_wire() {
			Some(s) => serializer.serialize_str(&s),
			None => match self {
				Pattern::AnyOf(patterns) => patterns.serialize(serializer),
				_ => unreachable!("to_wire covers every non-array pattern"),
			},
		}
	}
}

impl<'de> Deserialize<'de> for Pattern {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			One(String),
			Many(Vec<Pattern>),
		}

		match Wire::deserialize(deserializer)? {
			Wire::One(s) => Ok(Pattern::from_wire(&s)),
			Wire::Many(patterns) => Ok(Pattern::AnyOf(patterns)),
		}
	}
}
