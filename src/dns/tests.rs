// DNS parsing and provider descriptor tests.

use super::providers::{DohProvider, DohRecordType};
use super::records::{parse_mx_answers, parse_spf_answer};
use super::types::{DnsJsonAnswer, DnsJsonResponse};

fn answers(data: &[&str]) -> DnsJsonResponse {
    DnsJsonResponse {
        answer: data
            .iter()
            .map(|d| DnsJsonAnswer {
                data: Some((*d).to_string()),
            })
            .collect(),
    }
}

#[test]
fn test_mx_parse_sorts_by_preference() {
    let response = answers(&[
        "20 backup.example.com.",
        "10 primary.example.com.",
        "30 tertiary.example.com.",
    ]);
    let records = parse_mx_answers(&response);
    let preferences: Vec<u16> = records.iter().map(|r| r.preference).collect();
    assert_eq!(preferences, vec![10, 20, 30]);
    assert_eq!(records[0].host, "primary.example.com");
}

#[test]
fn test_mx_parse_dedupes_hosts_case_insensitively() {
    // Duplicate host in different case must collapse to the first occurrence
    let response = answers(&[
        "10 mail1.example.com.",
        "20 mail2.example.com.",
        "10 MAIL1.example.com.",
    ]);
    let records = parse_mx_answers(&response);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].host, "mail1.example.com");
    assert_eq!(records[0].preference, 10);
    assert_eq!(records[1].host, "mail2.example.com");
    assert_eq!(records[1].preference, 20);
}

#[test]
fn test_mx_parse_adjacent_preferences_never_decrease() {
    let response = answers(&[
        "50 e.example.",
        "5 a.example.",
        "20 c.example.",
        "5 b.example.",
    ]);
    let records = parse_mx_answers(&response);
    for pair in records.windows(2) {
        assert!(pair[0].preference <= pair[1].preference);
    }
}

#[test]
fn test_mx_parse_malformed_preference_defaults_to_zero() {
    let response = answers(&["notanumber mail.example.com."]);
    let records = parse_mx_answers(&response);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].preference, 0);
    assert_eq!(records[0].host, "mail.example.com");
}

#[test]
fn test_mx_parse_skips_entries_without_host() {
    let response = answers(&["10", "", "10 mail.example.com."]);
    let records = parse_mx_answers(&response);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].host, "mail.example.com");
}

#[test]
fn test_mx_parse_empty_answer() {
    let response = answers(&[]);
    assert!(parse_mx_answers(&response).is_empty());
}

#[test]
fn test_spf_parse_strips_quotes_and_matches_prefix() {
    let response = answers(&[
        "\"google-site-verification=abc123\"",
        "\"v=spf1 include:spf.protection.outlook.com -all\"",
    ]);
    let spf = parse_spf_answer(&response).expect("should find SPF record");
    assert_eq!(spf.record, "v=spf1 include:spf.protection.outlook.com -all");
}

#[test]
fn test_spf_parse_first_match_wins() {
    // Multiple v=spf1 strings are invalid DNS hygiene but happen; the first
    // one in provider answer order is taken
    let response = answers(&["\"v=spf1 -all\"", "\"v=spf1 include:other.example ~all\""]);
    let spf = parse_spf_answer(&response).expect("should find SPF record");
    assert_eq!(spf.record, "v=spf1 -all");
}

#[test]
fn test_spf_parse_no_match() {
    let response = answers(&["\"MS=ms12345678\"", "\"apple-domain-verification=xyz\""]);
    assert!(parse_spf_answer(&response).is_none());
}

#[test]
fn test_spf_parse_requires_prefix_at_start() {
    let response = answers(&["\"this mentions v=spf1 mid-string\""]);
    assert!(parse_spf_answer(&response).is_none());
}

#[test]
fn test_provider_query_url() {
    let provider = DohProvider::from_url("https://dns.google/resolve");
    assert_eq!(provider.name, "dns.google");
    assert_eq!(
        provider.query_url("example.com", DohRecordType::Mx),
        "https://dns.google/resolve?name=example.com&type=MX"
    );
    assert_eq!(
        provider.query_url("example.com", DohRecordType::Txt),
        "https://dns.google/resolve?name=example.com&type=TXT"
    );
}

#[test]
fn test_provider_name_from_bare_host_url() {
    let provider = DohProvider::from_url("https://cloudflare-dns.com/dns-query/");
    assert_eq!(provider.name, "cloudflare-dns.com");
    assert_eq!(provider.base_url, "https://cloudflare-dns.com/dns-query");
}

#[test]
fn test_dns_json_missing_answer_deserializes_to_empty() {
    let body: DnsJsonResponse =
        serde_json::from_str(r#"{"Status":3,"TC":false}"#).expect("should deserialize");
    assert!(body.answer.is_empty());
}
