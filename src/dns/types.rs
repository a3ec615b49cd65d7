//! DNS-JSON wire contract.
//!
//! Structural types for the subset of the DNS-over-HTTPS JSON response we
//! consume. Fields are optional so a provider omitting or reshaping parts of
//! the document degrades to "no usable records" instead of a parse failure.

use serde::Deserialize;

/// A DNS-over-HTTPS JSON response body.
#[derive(Debug, Deserialize)]
pub(crate) struct DnsJsonResponse {
    /// The `Answer` array; absent when the domain has no records of the
    /// requested type.
    #[serde(rename = "Answer", default)]
    pub(crate) answer: Vec<DnsJsonAnswer>,
}

/// One entry of the `Answer` array.
#[derive(Debug, Deserialize)]
pub(crate) struct DnsJsonAnswer {
    /// Record payload: `"<preference> <host>."` for MX, a quoted string for TXT.
    pub(crate) data: Option<String>,
}
