//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (with per-request timeout)
//! - Shared outbound-request throttle
//! - Concurrency semaphore
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::rate_limiter::Throttle;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// The semaphore limits the number of concurrent domain lookup tasks. Request
/// rate is bounded separately by the shared throttle.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}

/// Initializes the outbound-request throttle shared by all resolvers.
///
/// An interval of 0 yields a throttle that never waits (useful for tests and
/// for callers who manage rate limits themselves).
pub fn init_throttle(interval_ms: u64) -> Arc<Throttle> {
    Arc::new(Throttle::new(Duration::from_millis(interval_ms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_semaphore_permit_count() {
        let semaphore = init_semaphore(7);
        assert_eq!(semaphore.available_permits(), 7);
    }

    #[tokio::test]
    async fn test_init_throttle_zero_interval_never_waits() {
        let throttle = init_throttle(0);
        let start = std::time::Instant::now();
        throttle.wait().await;
        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
