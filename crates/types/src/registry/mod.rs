//! Token registry trait for pluggable registry implementations
//!
//! The matching core consumes the registry through this trait only. Lookups
//! must be non-blocking in-memory reads once the registry reports fresh;
//! `ensure_fresh` is the asynchronous refresh hook and must be idempotent
//! and safe to call concurrently (implementations collapse concurrent
//! callers into a single in-flight fetch).

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Token;

/// Errors surfaced by registry implementations
#[derive(Error, Debug)]
pub enum RegistryError {
	#[error("registry fetch failed: {0}")]
	Http(String),

	#[error("invalid registry payload: {0}")]
	InvalidPayload(String),
}

/// Read access to token attributes keyed by asset id
#[async_trait]
pub trait TokenRegistry: Send + Sync {
	/// Synchronous in-memory lookup; `None` for unknown assets
	fn token(&self, asset_id: &str) -> Option<Token>;

	/// Refresh registry data if stale; concurrent calls collapse into one
	/// underlying fetch with all callers awaiting the same outcome
	async fn ensure_fresh(&self) -> Result<(), RegistryError>;

	/// True once lookups are backed by data considered current
	fn is_fresh(&self) -> bool;
}
