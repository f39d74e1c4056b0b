//! Shared domain models

pub mod amount;
pub mod pattern;
pub mod token;

pub use amount::Amount;
pub use pattern::Pattern;
pub use token::Token;
