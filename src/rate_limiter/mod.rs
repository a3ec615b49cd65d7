//! Outbound request throttling.
//!
//! All resolvers funnel through one shared [`Throttle`], so concurrent domain
//! lookups are serialized at the network layer even though they are logically
//! concurrent. This keeps us under the third-party rate limits at the cost of
//! search latency scaling linearly with domain count.
//!
//! The throttle is an injectable object rather than module-level state so
//! tests can substitute a zero-delay instance.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::USER_AGENT;

/// Minimum-interval throttle over outbound request initiation.
///
/// Before a request is issued, callers wait until at least `min_interval` has
/// elapsed since the previous request was *initiated* (not completed). The
/// last-call timestamp is updated under the same lock as the wait, so two
/// tasks racing through the check cannot both proceed without spacing.
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Creates a throttle enforcing the given minimum interval between requests.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Creates a zero-interval throttle that never waits. Intended for tests.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Suspends the caller until the minimum interval since the last request
    /// has elapsed, then claims the current instant as the new last-call time.
    ///
    /// The lock is held across the sleep; that is what serializes request
    /// initiation across concurrent lookup tasks.
    pub async fn wait(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

/// HTTP client wrapper that routes every request through a shared [`Throttle`].
///
/// Transport errors and non-2xx statuses are propagated untouched; it is the
/// caller's job to interpret status codes.
#[derive(Debug, Clone)]
pub struct RateLimitedClient {
    client: reqwest::Client,
    throttle: Arc<Throttle>,
}

impl RateLimitedClient {
    /// Wraps a configured `reqwest::Client` with the given throttle.
    pub fn new(client: reqwest::Client, throttle: Arc<Throttle>) -> Self {
        Self { client, throttle }
    }

    /// Issues a throttled GET request with the given Accept header.
    pub async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.throttle.wait().await;
        log::trace!("GET {url}");
        self.client
            .get(url)
            .header(ACCEPT, accept)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
    }
}
