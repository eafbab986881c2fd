//! External Services
//!
//! This module contains the background tasks standing in for real backends:
//! - fetch: simulated-latency data fetch worker (weather, prices, lux scan)

pub mod fetch;

// Re-export commonly used types for convenience
pub use fetch::{FetchRequest, FetchResponse};
