//! DNS-over-HTTPS provider descriptors.

use std::fmt;

/// DNS record types we query over DoH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DohRecordType {
    /// Mail exchanger records
    Mx,
    /// Text records (SPF lives here)
    Txt,
}

impl DohRecordType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DohRecordType::Mx => "MX",
            DohRecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for DohRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DNS-over-HTTPS endpoint, identified by a short name for log messages.
///
/// Providers are held in an ordered list and tried until one yields usable
/// records.
#[derive(Debug, Clone)]
pub(crate) struct DohProvider {
    /// Short name used in warnings (derived from the endpoint host)
    pub(crate) name: String,
    /// Full query endpoint, e.g. `https://dns.google/resolve`
    pub(crate) base_url: String,
}

impl DohProvider {
    /// Builds a provider descriptor from an endpoint URL, deriving the display
    /// name from the URL's host portion.
    pub(crate) fn from_url(url: &str) -> Self {
        let name = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .split('/')
            .next()
            .unwrap_or(url)
            .to_string();
        Self {
            name,
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the DNS-JSON query URL for a domain and record type.
    pub(crate) fn query_url(&self, domain: &str, record_type: DohRecordType) -> String {
        format!("{}?name={}&type={}", self.base_url, domain, record_type)
    }
}
