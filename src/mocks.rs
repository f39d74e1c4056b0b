//! Mock registry for examples and testing
//!
//! A configurable in-memory registry whose freshness and fetch behavior are
//! controllable from tests, without network access or timers.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dashmap::DashMap;
use swapfee_types::{RegistryError, Token, TokenRegistry};
use tokio::sync::Mutex;

/// Mock token registry with controllable freshness
///
/// `ensure_fresh` marks the registry fresh and counts invocations that
/// actually performed a "fetch", so tests can assert refresh collapse and
/// readiness behavior. Refreshes are single-flight, matching the contract
/// real implementations honor.
#[derive(Debug, Default)]
pub struct MockRegistry {
	tokens: DashMap<String, Token>,
	fresh: AtomicBool,
	fetches: AtomicUsize,
	fail_refresh: AtomicBool,
	refresh_lock: Mutex<()>,
}

impl MockRegistry {
	/// An empty, stale registry
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry prewarmed with the given tokens, already fresh
	pub fn warmed(tokens: impl IntoIterator<Item = Token>) -> Self {
		let registry = Self::new();
		for token in tokens {
			registry.insert(token);
		}
		registry.fresh.store(true, Ordering::SeqCst);
		registry
	}

	pub fn insert(&self, token: Token) {
		self.tokens.insert(token.asset_id.clone(), token);
	}

	/// Mark the registry stale so the next `ensure_fresh` fetches again
	pub fn set_stale(&self) {
		self.fresh.store(false, Ordering::SeqCst);
	}

	/// Make subsequent refresh attempts fail
	pub fn fail_next_refresh(&self, fail: bool) {
		self.fail_refresh.store(fail, Ordering::SeqCst);
	}

	/// How many `ensure_fresh` calls performed an actual "fetch"
	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}
}

#[async_trait::async_trait]
impl TokenRegistry for MockRegistry {
	fn token(&self, asset_id: &str) -> Option<Token> {
		self.tokens.get(asset_id).map(|entry| entry.value().clone())
	}

	async fn ensure_fresh(&self) -> Result<(), RegistryError> {
		if self.fresh.load(Ordering::SeqCst) {
			return Ok(());
		}

		let _guard = self.refresh_lock.lock().await;
		if self.fresh.load(Ordering::SeqCst) {
			return Ok(());
		}
		if self.fail_refresh.load(Ordering::SeqCst) {
			return Err(RegistryError::Http("mock refresh failure".to_string()));
		}
		self.fetches.fetch_add(1, Ordering::SeqCst);
		self.fresh.store(true, Ordering::SeqCst);
		Ok(())
	}

	fn is_fresh(&self) -> bool {
		self.fresh.load(Ordering::SeqCst)
	}
}
