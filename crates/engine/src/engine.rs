//! The rule engine façade
//!
//! Composes a validated fee configuration, the rule selector, and a token
//! registry handle into the externally consumed API. The engine owns no
//! matching logic itself; selection lives in [`crate::selector`].

use std::sync::Arc;

use swapfee_types::{
	ConfigError, Fee, FeeConfig, MatchResult, RegistryError, SwapRequest, TokenRegistry,
};
use thiserror::Error;
use tracing::debug;

use crate::selector::RuleSelector;

/// Failures of engine operations
#[derive(Error, Debug)]
pub enum EngineError {
	/// The registry has no current token data; warm it (or use the async
	/// match path) before matching. Distinct from a normal no-match.
	#[error("token registry is not ready; refresh it before matching")]
	NotReady,

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("registry error: {0}")]
	Registry(#[from] RegistryError),
}

/// Matches swap requests against a fee rule configuration
///
/// Constructed once per configuration; immutable afterwards. Reloading a
/// configuration means constructing a new engine.
pub struct RuleEngine {
	version: u32,
	default_fee: Fee,
	selector: RuleSelector,
	registry: Arc<dyn TokenRegistry>,
}

impl std::fmt::Debug for RuleEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RuleEngine")
			.field("version", &self.version)
			.field("default_fee", &self.default_fee)
			.field("selector", &self.selector)
			.finish_non_exhaustive()
	}
}

impl RuleEngine {
	/// Build an engine from an already validated configuration
	pub fn new(config: FeeConfig, registry: Arc<dyn TokenRegistry>) -> Self {
		Self {
			version: config.version,
			default_fee: config.default_fee,
			selector: RuleSelector::new(config.rules),
			registry,
		}
	}

	pub fn version(&self) -> u32 {
		self.version
	}

	/// The fee applied when no rule matches
	pub fn default_fee(&self) -> &Fee {
		&self.default_fee
	}

	pub fn selector(&self) -> &RuleSelector {
		&self.selector
	}

	/// Match a swap against the rule set (hot path)
	///
	/// Requires the registry to already be warm and fails with
	/// [`EngineError::NotReady`] otherwise. A registry miss on either asset
	/// is a normal outcome: the result is unmatched with the default fee.
	pub fn match_swap(&self, request: &SwapRequest) -> Result<MatchResult, EngineError> {
		if !self.registry.is_fresh() {
			return Err(EngineError::NotReady);
		}

		let origin = self.registry.token(&request.origin_asset);
		let destination = self.registry.token(&request.destination_asset);

		let (origin, destination) = match (origin, destination) {
			(Some(origin), Some(destination)) => (origin, destination),
			_ => {
				debug!(
					origin = %request.origin_asset,
					destination = %request.destination_asset,
					"Unresolved asset, applying default fee"
				);
				return Ok(MatchResult::unmatched(self.default_fee.clone()));
			},
		};

		match self.selector.select(&origin, &destination) {
			Some(selected) => Ok(MatchResult::matched(
				selected.rule.clone(),
				selected.origin,
				selected.destination,
			)),
			None => Ok(MatchResult::unmatched(self.default_fee.clone())),
		}
	}

	/// Convenience path: ensure the registry is fresh, then match
	pub async fn match_swap_fresh(
		&self,
		request: &SwapRequest,
	) -> Result<MatchResult, EngineError> {
		self.registry.ensure_fresh().await?;
		self.match_swap(request)
	}
}
