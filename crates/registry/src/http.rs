//! HTTP-backed token registry
//!
//! Fetches a JSON token list from a configured endpoint and serves lookups
//! from a concurrent in-memory cache. Freshness is a TTL deadline; refreshes
//! are single-flight: concurrent `ensure_fresh` callers collapse onto one
//! in-flight fetch and all observe its outcome.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use swapfee_types::{RegistryError, Token, TokenRegistry};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Default cache TTL for fetched token data
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Token registry backed by an HTTP token-list endpoint
pub struct HttpRegistry {
	endpoint: String,
	ttl: chrono::Duration,
	client: reqwest::Client,
	tokens: DashMap<String, Token>,
	fresh_until: RwLock<Option<DateTime<Utc>>>,
	refresh_lock: Mutex<()>,
}

impl HttpRegistry {
	/// Create a registry for the given endpoint with default TTL and timeout
	pub fn new(endpoint: impl Into<String>) -> Result<Self, RegistryError> {
		Self::with_options(endpoint, DEFAULT_TTL, DEFAULT_TIMEOUT_MS)
	}

	pub fn with_options(
		endpoint: impl Into<String>,
		ttl: Duration,
		timeout_ms: u64,
	) -> Result<Self, RegistryError> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.build()
			.map_err(|e| RegistryError::Http(e.to_string()))?;

		Ok(Self {
			endpoint: endpoint.into(),
			ttl: chrono::Duration::from_std(ttl)
				.map_err(|e| RegistryError::InvalidPayload(format!("invalid ttl: {}", e)))?,
			client,
			tokens: DashMap::new(),
			fresh_until: RwLock::new(None),
			refresh_lock: Mutex::new(()),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Number of cached tokens
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	async fn fetch(&self) -> Result<Vec<Token>, RegistryError> {
		let response = self
			.client
			.get(&self.endpoint)
			.send()
			.await
			.map_err(|e| RegistryError::Http(e.to_string()))?
			.error_for_status()
			.map_err(|e| RegistryError::Http(e.to_string()))?;

		response
			.json::<Vec<Token>>()
			.await
			.map_err(|e| RegistryError::InvalidPayload(e.to_string()))
	}

	/// Replace the cache contents and advance the freshness deadline
	fn install(&self, fetched: Vec<Token>) {
		self.tokens.clear();
		for token in fetched {
			self.tokens.insert(token.asset_id.clone(), token);
		}

		let deadline = Utc::now() + self.ttl;
		*self
			.fresh_until
			.write()
			.expect("freshness lock poisoned") = Some(deadline);
	}
}

#[async_trait]
impl TokenRegistry for HttpRegistry {
	fn token(&self, asset_id: &str) -> Option<Token> {
		self.tokens.get(asset_id).map(|entry| entry.value().clone())
	}

	async fn ensure_fresh(&self) -> Result<(), RegistryError> {
		if self.is_fresh() {
			return Ok(());
		}

		let _guard = self.refresh_lock.lock().await;
		// A concurrent caller may have refreshed while we waited for the lock
		if self.is_fresh() {
			debug!("Registry refreshed by a concurrent caller; skipping fetch");
			return Ok(());
		}

		let fetched = self.fetch().await?;
		info!(
			"Token registry refreshed: {} token(s) from {}",
			fetched.len(),
			self.endpoint
		);
		self.install(fetched);
		Ok(())
	}

	fn is_fresh(&self) -> bool {
		match *self.fresh_until.read().expect("freshness lock poisoned") {
			Some(deadline) => Utc::now() <= deadline,
			None => false,
		}
	}
}
