//! Shared resources for domain lookup tasks.

use crate::dns::DohProvider;
use crate::rate_limiter::RateLimitedClient;

/// Context containing all shared resources needed to resolve one domain.
///
/// This struct groups related resources together, reducing the number of
/// function arguments and making the pipeline easier to test: every external
/// endpoint it touches is configurable.
#[derive(Debug, Clone)]
pub(crate) struct LookupContext {
    /// Throttled HTTP client shared by all resolvers
    pub(crate) client: RateLimitedClient,
    /// DNS-over-HTTPS providers, tried in order
    pub(crate) doh_providers: Vec<DohProvider>,
    /// Microsoft login endpoint base URL (discovery and user-realm lookups)
    pub(crate) login_base: String,
    /// Whether to run the federation-realm brand lookup
    pub(crate) include_federation: bool,
}

impl LookupContext {
    /// Creates a new `LookupContext` with the given resources.
    pub(crate) fn new(
        client: RateLimitedClient,
        doh_providers: Vec<DohProvider>,
        login_base: String,
        include_federation: bool,
    ) -> Self {
        Self {
            client,
            doh_providers,
            login_base: login_base.trim_end_matches('/').to_string(),
            include_federation,
        }
    }
}
