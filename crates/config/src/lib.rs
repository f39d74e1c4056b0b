//! Swapfee Config
//!
//! Raw configuration document shapes, file loading, and validation for the
//! swapfee rule engine. Validation converts the raw document into the domain
//! `FeeConfig`, aggregating every violation instead of failing on the first.

pub mod loader;
pub mod settings;
pub mod startup;
pub mod validate;

pub use loader::load_config_file;
pub use settings::{FeeConfigFile, RuleFile};
pub use startup::log_config_summary;
pub use validate::validate;
