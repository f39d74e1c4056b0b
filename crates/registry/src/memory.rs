//! In-memory token registry

use async_trait::async_trait;
use dashmap::DashMap;
use swapfee_types::{RegistryError, Token, TokenRegistry};

/// A prewarmed, always-fresh registry backed by a concurrent map
///
/// For embedders that source token data themselves (or for tests). Lookups
/// never block and `ensure_fresh` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
	tokens: DashMap<String, Token>,
}

impl MemoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
		let registry = Self::new();
		for token in tokens {
			registry.insert(token);
		}
		registry
	}

	/// Insert or replace a token, keyed by its asset id
	pub fn insert(&self, token: Token) {
		self.tokens.insert(token.asset_id.clone(), token);
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

#[async_trait]
impl TokenRegistry for MemoryRegistry {
	fn token(&self, asset_id: &str) -> Option<Token> {
		self.tokens.get(asset_id).map(|entry| entry.value().clone())
	}

	async fn ensure_fresh(&self) -> Result<(), RegistryError> {
		Ok(())
	}

	fn is_fresh(&self) -> bool {
		true
	}
}
