//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CLOUDFLARE_DOH_URL, DEFAULT_MAX_CONCURRENCY, GOOGLE_DOH_URL, LOGIN_BASE_URL,
    MAX_DOMAINS_PER_SEARCH, RATE_LIMIT_INTERVAL_MS, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format for the CLI.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-domain summary (default)
    Table,
    /// Full result set as pretty-printed JSON
    Json,
}

/// Search configuration.
///
/// This is the core configuration struct used by the library. It doubles as
/// the CLI argument definition and can be constructed programmatically via
/// `Default` for library and test use.
///
/// # Examples
///
/// ```no_run
/// use tenant_lookup::Config;
///
/// let config = Config {
///     domains: vec!["contoso.com".to_string()],
///     rate_limit_ms: 100,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tenant_lookup",
    version,
    about = "Discovers Microsoft Azure/365 tenant information for domains"
)]
pub struct Config {
    /// Domains to look up. Free text is accepted (commas, semicolons, and
    /// whitespace all separate domains). Reads from stdin when omitted.
    #[arg(value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Result output format
    #[arg(long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Maximum number of domains per search (excess input is truncated)
    #[arg(long, default_value_t = MAX_DOMAINS_PER_SEARCH)]
    pub max_domains: usize,

    /// Minimum interval between outbound requests in milliseconds (0 disables throttling)
    #[arg(long, default_value_t = RATE_LIMIT_INTERVAL_MS)]
    pub rate_limit_ms: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum concurrent domain lookup tasks
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Skip the federation-realm brand lookup
    #[arg(long)]
    pub no_federation: bool,

    /// Microsoft login endpoint base URL (discovery and user-realm lookups)
    #[arg(long, value_name = "URL", default_value = LOGIN_BASE_URL)]
    pub login_base: String,

    /// DNS-over-HTTPS endpoints, tried in order until one answers
    #[arg(
        long = "doh-endpoint",
        value_name = "URL",
        default_values_t = [GOOGLE_DOH_URL.to_string(), CLOUDFLARE_DOH_URL.to_string()]
    )]
    pub doh_endpoints: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Table,
            max_domains: MAX_DOMAINS_PER_SEARCH,
            rate_limit_ms: RATE_LIMIT_INTERVAL_MS,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            no_federation: false,
            login_base: LOGIN_BASE_URL.to_string(),
            doh_endpoints: vec![GOOGLE_DOH_URL.to_string(), CLOUDFLARE_DOH_URL.to_string()],
        }
    }
}
