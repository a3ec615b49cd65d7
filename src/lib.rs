//! tenant_lookup library: Microsoft tenant discovery for domains
//!
//! This library resolves Microsoft Azure/365 tenant information for domain
//! names by querying public Microsoft and DNS-over-HTTPS endpoints: the tenant
//! identifier and its region/type classification from the OpenID discovery
//! document, MX and SPF records from DNS-over-HTTPS providers, and an optional
//! federation brand name.
//!
//! Nothing is persisted; every search is stateless and its results are owned
//! by the caller. The only cross-task state is the shared outbound-request
//! throttle.
//!
//! # Example
//!
//! ```no_run
//! use tenant_lookup::{run_search, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["contoso.com".to_string(), "fabrikam.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_search(config).await?;
//! println!("Found {}/{} tenant(s)", report.found, report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod lookup;
pub mod models;
mod rate_limiter;
mod tenant;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use domain::{parse_domains, validate_domain};
pub use error_handling::{InitializationError, LookupError};
pub use models::{
    CloudRegion, LookupOutcome, LookupResult, MxRecord, OpenIdConfig, SpfRecord, TenantInfo,
    TenantType,
};
pub use rate_limiter::{RateLimitedClient, Throttle};
pub use run::{run_search, SearchReport};

// Internal run module (contains the top-level search logic)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::AsyncReadExt;

    use crate::config::Config;
    use crate::dns::DohProvider;
    use crate::domain::parse_domains;
    use crate::initialization::{init_client, init_semaphore, init_throttle};
    use crate::lookup::{search_domains, LookupContext};
    use crate::models::{LookupOutcome, LookupResult};
    use crate::rate_limiter::RateLimitedClient;

    /// Results of a domain search run.
    ///
    /// Contains the per-domain results plus summary statistics.
    #[derive(Debug, Clone)]
    pub struct SearchReport {
        /// One result per searched domain, in input order
        pub results: Vec<LookupResult>,
        /// Number of domains searched
        pub total: usize,
        /// Number of domains with a resolved tenant
        pub found: usize,
        /// Number of valid domains without a Microsoft tenant
        pub no_tenant: usize,
        /// Number of domains whose lookup produced an error
        pub failed: usize,
        /// Elapsed wall-clock time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a tenant search with the provided configuration.
    ///
    /// This is the main entry point for the library. Free-text input is
    /// normalized into a deduplicated domain list (read from stdin when
    /// `config.domains` is empty), each domain is resolved concurrently, and
    /// one result per domain is returned in input order.
    ///
    /// An individual domain's failure is carried in its result's `error`
    /// field; this function only errors when resources cannot be initialized
    /// or stdin cannot be read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Reading domains from stdin fails
    /// - The HTTP client cannot be initialized
    pub async fn run_search(config: Config) -> Result<SearchReport> {
        let raw_input = if config.domains.is_empty() {
            info!("Reading domains from stdin");
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read domains from stdin")?;
            buffer
        } else {
            config.domains.join(" ")
        };

        let domains = parse_domains(&raw_input, config.max_domains);
        info!("Parsed {} valid domain(s) from input", domains.len());
        if domains.is_empty() {
            return Ok(SearchReport {
                results: Vec::new(),
                total: 0,
                found: 0,
                no_tenant: 0,
                failed: 0,
                elapsed_seconds: 0.0,
            });
        }

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let throttle = init_throttle(config.rate_limit_ms);
        let semaphore = init_semaphore(config.max_concurrency);
        let doh_providers = config
            .doh_endpoints
            .iter()
            .map(|url| DohProvider::from_url(url))
            .collect();
        let ctx = Arc::new(LookupContext::new(
            RateLimitedClient::new(client, throttle),
            doh_providers,
            config.login_base.clone(),
            !config.no_federation,
        ));

        let start_time = std::time::Instant::now();
        let results = search_domains(&domains, ctx, semaphore).await;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        let mut found = 0;
        let mut no_tenant = 0;
        let mut failed = 0;
        for result in &results {
            match result.outcome() {
                LookupOutcome::TenantFound => found += 1,
                LookupOutcome::NoTenant => no_tenant += 1,
                LookupOutcome::Failed => failed += 1,
            }
        }
        info!(
            "Search completed: {found}/{} tenant(s) found in {elapsed_seconds:.1}s",
            results.len()
        );

        Ok(SearchReport {
            total: results.len(),
            found,
            no_tenant,
            failed,
            elapsed_seconds,
            results,
        })
    }
}
