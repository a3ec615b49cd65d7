//! DNS record queries over DNS-over-HTTPS (MX, SPF/TXT).
//!
//! Each resolver walks the ordered provider list and returns the first usable
//! answer. A provider failing (transport error, non-2xx status, unparseable
//! body) or answering with zero usable records is logged as a warning and
//! skipped, never surfaced as an error: exhausting all providers is simply
//! "no such record". There are no retries beyond the provider fallback.

use std::collections::HashSet;

use log::warn;

use crate::config::{DNS_JSON_ACCEPT, SPF_PREFIX};
use crate::dns::providers::{DohProvider, DohRecordType};
use crate::dns::types::DnsJsonResponse;
use crate::models::{MxRecord, SpfRecord};
use crate::rate_limiter::RateLimitedClient;

/// Queries MX records for a domain.
///
/// Records are deduplicated by case-insensitive host and sorted ascending by
/// preference (lower value = higher priority). Returns an empty vector when
/// every provider is exhausted without usable records.
pub(crate) async fn get_mx_records(
    client: &RateLimitedClient,
    providers: &[DohProvider],
    domain: &str,
) -> Vec<MxRecord> {
    resolve_with_fallback(client, providers, domain, DohRecordType::Mx, |response| {
        let records = parse_mx_answers(response);
        if records.is_empty() {
            None
        } else {
            Some(records)
        }
    })
    .await
    .unwrap_or_default()
}

/// Queries the authoritative SPF record for a domain.
///
/// The first TXT value starting with `v=spf1`, in provider answer order, wins.
/// Returns `None` when every provider is exhausted without a match.
pub(crate) async fn get_spf_record(
    client: &RateLimitedClient,
    providers: &[DohProvider],
    domain: &str,
) -> Option<SpfRecord> {
    resolve_with_fallback(client, providers, domain, DohRecordType::Txt, parse_spf_answer).await
}

/// Tries each provider in order until the parse function yields a value.
///
/// Shared by the MX and SPF resolvers: the per-provider request, status check,
/// and body handling are identical, only the answer interpretation differs.
async fn resolve_with_fallback<T, F>(
    client: &RateLimitedClient,
    providers: &[DohProvider],
    domain: &str,
    record_type: DohRecordType,
    parse: F,
) -> Option<T>
where
    F: Fn(&DnsJsonResponse) -> Option<T>,
{
    for provider in providers {
        let url = provider.query_url(domain, record_type);
        let response = match client.get(&url, DNS_JSON_ACCEPT).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{record_type} lookup via {} failed for {domain}: {e}", provider.name);
                continue;
            }
        };
        if !response.status().is_success() {
            warn!(
                "{} returned HTTP {} for {record_type} query on {domain}",
                provider.name,
                response.status()
            );
            continue;
        }
        let body: DnsJsonResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "{} returned an unparseable {record_type} response for {domain}: {e}",
                    provider.name
                );
                continue;
            }
        };
        if let Some(parsed) = parse(&body) {
            return Some(parsed);
        }
        // An empty answer from one provider is not final; the next one may know more
    }
    None
}

/// Parses the `Answer` array of an MX response.
///
/// Each data field is `"<preference> <host>."`; the leading integer becomes
/// the preference (defaulting to 0 when malformed) and the remainder the host
/// with trailing dots stripped. Duplicate hosts are dropped case-insensitively
/// and the result is sorted ascending by preference (stable, so provider order
/// breaks ties).
pub(crate) fn parse_mx_answers(response: &DnsJsonResponse) -> Vec<MxRecord> {
    let mut seen_hosts = HashSet::new();
    let mut records: Vec<MxRecord> = response
        .answer
        .iter()
        .filter_map(|answer| {
            let data = answer.data.as_deref()?;
            let mut parts = data.split_whitespace();
            let preference = parts
                .next()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(0);
            let host = parts.next().unwrap_or("").trim_end_matches('.').to_string();
            if host.is_empty() {
                return None;
            }
            if !seen_hosts.insert(host.to_lowercase()) {
                return None;
            }
            Some(MxRecord { host, preference })
        })
        .collect();
    records.sort_by_key(|record| record.preference);
    records
}

/// Selects the SPF record from a TXT response.
///
/// Quotes are stripped from each data field; the first value starting with
/// `v=spf1` is taken as authoritative.
pub(crate) fn parse_spf_answer(response: &DnsJsonResponse) -> Option<SpfRecord> {
    response
        .answer
        .iter()
        .filter_map(|answer| answer.data.as_deref())
        .map(|data| data.replace('"', ""))
        .find(|txt| txt.starts_with(SPF_PREFIX))
        .map(|record| SpfRecord { record })
}
