//! Swapfee Engine
//!
//! The matching and fee-computation core: a priority-ordered rule selector
//! over token matchers, exact basis-point fee arithmetic on 256-bit
//! integers, and the `RuleEngine` façade that composes them with a token
//! registry.

pub mod engine;
pub mod fees;
pub mod selector;

pub use engine::{EngineError, RuleEngine};
pub use fees::{calculate_amount_after_fee, calculate_fee, split_fee_amounts, FeeError};
pub use selector::{RuleSelector, SelectedRule};
