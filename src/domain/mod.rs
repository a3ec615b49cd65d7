//! Domain parsing and validation.
//!
//! This module turns free-text user input into a deduplicated list of
//! syntactically valid domain names. It is pure: no network access, and the
//! only failure mode is returning an empty list.
//!
//! Key functions:
//! - `validate_domain()` - Checks a single domain against the label grammar
//! - `parse_domains()` - Normalizes free text into a bounded domain list

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_DOMAIN_LENGTH;

// RFC-1035-like label grammar: alphanumeric labels up to 63 chars, hyphens
// allowed but not at label edges, labels joined by dots.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("domain grammar regex is valid")
});

/// Checks whether a string is a syntactically valid domain name.
///
/// A domain is valid when every label matches
/// `[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?` and the total length does not
/// exceed 253 characters. Leading/trailing whitespace is ignored.
pub fn validate_domain(domain: &str) -> bool {
    let trimmed = domain.trim();
    !trimmed.is_empty() && trimmed.len() <= MAX_DOMAIN_LENGTH && DOMAIN_REGEX.is_match(trimmed)
}

/// Parses free-text input into a deduplicated list of valid domain names.
///
/// Tokens are split on any run of commas, semicolons, or whitespace, trimmed,
/// and lowercased. Empty tokens and tokens failing [`validate_domain`] are
/// dropped, duplicates are collapsed preserving first-occurrence order, and
/// the result is truncated to `max_domains` entries to bound search fan-out.
pub fn parse_domains(text: &str, max_domains: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .filter(|token| validate_domain(token))
        .filter(|token| seen.insert(token.clone()))
        .take(max_domains)
        .collect()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
