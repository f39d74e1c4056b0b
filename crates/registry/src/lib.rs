//! Swapfee Registry
//!
//! Token registry implementations for the swapfee rule engine: a prewarmed
//! in-memory registry for embedders that manage token data themselves, and
//! an HTTP-backed registry with TTL caching and single-flight refresh.

pub mod http;
pub mod memory;

pub use http::HttpRegistry;
pub use memory::MemoryRegistry;
pub use swapfee_types::{RegistryError, TokenRegistry};
