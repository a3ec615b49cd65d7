//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client shared by all resolvers.
///
/// Creates a `reqwest::Client` configured with:
/// - Per-request timeout from the configuration (bounds worst-case search
///   latency when a third-party endpoint hangs)
/// - Redirect following enabled (reqwest default)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
}
