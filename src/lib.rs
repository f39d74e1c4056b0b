//! Swapfee Library
//!
//! A rule-based fee engine for cross-chain token swaps: callers supply a
//! swap request and a versioned fee rule configuration, and receive a
//! deterministic fee decision plus the detail needed to explain it. Exact
//! fee amounts are computed separately over arbitrary-precision integers.
//!
//! ```no_run
//! use swapfee::{RuleEngineBuilder, SwapRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RuleEngineBuilder::new()
//! 	.with_config_file("config/fees")?
//! 	.with_registry(swapfee::HttpRegistry::new("https://tokens.example.com/list")?)
//! 	.build()?;
//!
//! let result = engine
//! 	.match_swap_fresh(&SwapRequest::new("eth.omft.near", "wrap.near"))
//! 	.await?;
//! println!("fee: {} bps", result.fee.total_bps());
//! # Ok(())
//! # }
//! ```

// Core domain types - the most commonly used types
pub use swapfee_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Primary domain entities
	Amount,
	ConfigError,
	Fee,
	FeeComponent,
	FeeConfig,
	MatchDetails,
	MatchEvidence,
	MatchResult,
	Pattern,
	RegistryError,
	Rule,
	RuleMatch,
	// Error types
	RuleValidationError,
	SwapRequest,
	Token,
	TokenMatcher,
	// Registry trait
	TokenRegistry,
	MAX_BPS,
};

// Engine layer
pub use swapfee_engine::{
	calculate_amount_after_fee, calculate_fee, split_fee_amounts, EngineError, FeeError,
	RuleEngine, RuleSelector, SelectedRule,
};

// Registry implementations
pub use swapfee_registry::{HttpRegistry, MemoryRegistry};

// Config
pub use swapfee_config::{load_config_file, log_config_summary, validate, FeeConfigFile};

// Module aliases for advanced usage
pub mod models {
	pub use swapfee_types::*;
}

pub mod config {
	pub use swapfee_config::*;
}

pub mod registry {
	pub use swapfee_registry::*;
}

pub mod engine {
	pub use swapfee_engine::*;
}

pub mod mocks;

use std::sync::Arc;
use tracing::info;

/// Builder pattern for configuring a rule engine
///
/// Validation happens in [`build`](Self::build): an invalid configuration
/// fails construction with the complete list of violations.
pub struct RuleEngineBuilder {
	config: Option<FeeConfigFile>,
	registry: Option<Arc<dyn TokenRegistry>>,
	init_tracing: bool,
}

impl Default for RuleEngineBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RuleEngineBuilder {
	pub fn new() -> Self {
		Self {
			config: None,
			registry: None,
			init_tracing: false,
		}
	}

	/// Use an already deserialized configuration document
	pub fn with_config(mut self, config: FeeConfigFile) -> Self {
		self.config = Some(config);
		self
	}

	/// Load the configuration document from a file (JSON, TOML, or YAML)
	pub fn with_config_file(mut self, path: &str) -> Result<Self, ConfigError> {
		self.config = Some(load_config_file(path)?);
		Ok(self)
	}

	/// Inject the token registry the engine resolves assets through
	pub fn with_registry(mut self, registry: impl TokenRegistry + 'static) -> Self {
		self.registry = Some(Arc::new(registry));
		self
	}

	/// Inject a shared registry handle
	pub fn with_registry_handle(mut self, registry: Arc<dyn TokenRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Initialize a `tracing` subscriber (env-filtered) during build
	pub fn with_tracing(mut self) -> Self {
		self.init_tracing = true;
		self
	}

	/// Validate the configuration and construct the engine
	///
	/// Without an explicit registry the engine gets an empty
	/// [`MemoryRegistry`]; every request then resolves to the default fee.
	pub fn build(self) -> Result<RuleEngine, EngineError> {
		if self.init_tracing {
			let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
			// Ignore errors from a subscriber installed by the embedder
			let _ = tracing_subscriber::fmt()
				.with_env_filter(env_filter)
				.try_init();
		}

		let file = self
			.config
			.ok_or_else(|| ConfigError::Load("no configuration provided".to_string()))?;
		let config = validate(file)?;
		log_config_summary(&config);

		let registry = self
			.registry
			.unwrap_or_else(|| Arc::new(MemoryRegistry::new()));

		info!("Rule engine ready (config v{})", config.version);
		Ok(RuleEngine::new(config, registry))
	}
}
