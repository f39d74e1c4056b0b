//! Raw configuration document structures
//!
//! These mirror the persisted/transported document shape. Validity
//! timestamps stay as raw strings here so that parse failures can be
//! aggregated by validation alongside every other violation, instead of
//! aborting deserialization on the first bad field.

use serde::{Deserialize, Serialize};
use swapfee_types::{Fee, RuleMatch};

/// The versioned configuration document as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfigFile {
	pub version: u32,
	pub default_fee: Option<Fee>,
	#[serde(default)]
	pub rules: Vec<RuleFile>,
}

/// One rule as it appears in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFile {
	pub id: String,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i32>,
	#[serde(rename = "match")]
	pub matching: RuleMatch,
	pub fee: Fee,
	/// RFC 3339 timestamp; parsed during validation
	#[serde(skip_serializing_if = "Option::is_none")]
	pub valid_from: Option<String>,
	/// RFC 3339 timestamp; parsed during validation
	#[serde(skip_serializing_if = "Option::is_none")]
	pub valid_until: Option<String>,
}

fn default_enabled() -> bool {
	true
}
