//! Swapfee Types
//!
//! Shared models and traits for the swapfee rule engine.
//! This crate contains all domain models organized by business entity.

pub mod models;
pub mod registry;
pub mod rules;
pub mod swaps;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{Amount, Pattern, Token};

pub use rules::{
	ConfigError, Fee, FeeComponent, FeeConfig, MatchEvidence, Rule, RuleMatch, RuleValidationError,
	TokenMatcher, MAX_BPS,
};

pub use registry::{RegistryError, TokenRegistry};

pub use swaps::{MatchDetails, MatchResult, SwapRequest};
