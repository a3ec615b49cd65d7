//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including rate limits, size limits, and the external endpoints we query.

/// Maximum total length of a domain name in characters (RFC 1035)
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum number of domains accepted per search.
/// Bounds the fan-out so a single search cannot hammer the third-party APIs.
pub const MAX_DOMAINS_PER_SEARCH: usize = 100;

/// Minimum interval between outbound requests in milliseconds.
/// All resolvers share one throttle, so this bounds the global request
/// initiation rate across concurrent domain lookups.
pub const RATE_LIMIT_INTERVAL_MS: u64 = 300;

/// Per-request HTTP timeout in seconds.
/// The third-party endpoints occasionally hang; without this a single slow
/// response would stall the whole search.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum concurrent domain lookup tasks (semaphore limit).
/// Lookups are serialized at the network layer by the shared throttle anyway,
/// so this only bounds task memory, not request rate.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Base URL of the Microsoft login endpoint.
/// Serves both the OpenID discovery document and the user-realm lookup.
pub const LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

/// Primary DNS-over-HTTPS endpoint (Google, DNS-JSON API)
pub const GOOGLE_DOH_URL: &str = "https://dns.google/resolve";

/// Secondary DNS-over-HTTPS endpoint (Cloudflare, DNS-JSON API)
pub const CLOUDFLARE_DOH_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Accept header value for DNS-JSON responses
pub const DNS_JSON_ACCEPT: &str = "application/dns-json";

/// Accept header value for JSON documents (discovery, user realm)
pub const JSON_ACCEPT: &str = "application/json";

/// Prefix identifying an SPF record within a TXT record set
pub const SPF_PREFIX: &str = "v=spf1";

/// Host suffixes of Microsoft's mail-routing infrastructure.
/// An MX host matching any of these means the domain routes mail through
/// Exchange Online.
pub const MICROSOFT_MX_SUFFIXES: &[&str] = &[
    "mail.protection.outlook.com",
    "olc.protection.outlook.com",
    "mx.microsoft",
];

/// User-Agent header sent with every outbound request
pub const USER_AGENT: &str = concat!("tenant_lookup/", env!("CARGO_PKG_VERSION"));
