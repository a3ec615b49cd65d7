// Domain parsing and validation tests.

use super::*;

#[test]
fn test_validate_domain_basic() {
    assert!(validate_domain("contoso.com"));
    assert!(validate_domain("example.co.uk"));
    assert!(validate_domain("xn--bcher-kva.example"));
}

#[test]
fn test_validate_domain_single_label() {
    // A single label satisfies the grammar (e.g. intranet names)
    assert!(validate_domain("localhost"));
}

#[test]
fn test_validate_domain_rejects_bad_hyphens() {
    assert!(!validate_domain("-bad.com"));
    assert!(!validate_domain("bad-.com"));
    assert!(!validate_domain("bad.-com"));
}

#[test]
fn test_validate_domain_rejects_bad_characters() {
    assert!(!validate_domain("under_score.com"));
    assert!(!validate_domain("spaced domain.com"));
    assert!(!validate_domain("emoji🦀.com"));
    assert!(!validate_domain(""));
    assert!(!validate_domain("."));
    assert!(!validate_domain("trailing.dot."));
}

#[test]
fn test_validate_domain_rejects_overlong() {
    let long = "a".repeat(300);
    assert!(!validate_domain(&long));

    // 63-char label is the per-label maximum
    let max_label = format!("{}.com", "a".repeat(63));
    assert!(validate_domain(&max_label));
    let over_label = format!("{}.com", "a".repeat(64));
    assert!(!validate_domain(&over_label));
}

#[test]
fn test_validate_domain_trims_whitespace() {
    assert!(validate_domain("  contoso.com  "));
}

#[test]
fn test_parse_splits_on_all_separators() {
    let parsed = parse_domains("a.com,b.com;c.com d.com\ne.com\r\nf.com", 100);
    assert_eq!(parsed, vec!["a.com", "b.com", "c.com", "d.com", "e.com", "f.com"]);
}

#[test]
fn test_parse_lowercases_and_dedupes_preserving_order() {
    // Mixed case duplicates collapse to the first occurrence
    let parsed = parse_domains("  A.com, a.com \n B.com", 100);
    assert_eq!(parsed, vec!["a.com", "b.com"]);
}

#[test]
fn test_parse_drops_invalid_tokens() {
    let parsed = parse_domains("good.com -bad.com also_bad.com fine.org", 100);
    assert_eq!(parsed, vec!["good.com", "fine.org"]);
}

#[test]
fn test_parse_empty_and_garbage_input() {
    assert!(parse_domains("", 100).is_empty());
    assert!(parse_domains("   \n\t ,,;; ", 100).is_empty());
    assert!(parse_domains("!!! ???", 100).is_empty());
}

#[test]
fn test_parse_truncates_to_max() {
    let input = (0..50)
        .map(|i| format!("domain{i}.com"))
        .collect::<Vec<_>>()
        .join(" ");
    let parsed = parse_domains(&input, 10);
    assert_eq!(parsed.len(), 10);
    assert_eq!(parsed[0], "domain0.com");
    assert_eq!(parsed[9], "domain9.com");
}

#[test]
fn test_parse_is_idempotent() {
    let raw = "B.com a.com, b.com;A.COM";
    let first = parse_domains(raw, 100);
    let second = parse_domains(&first.join(" "), 100);
    assert_eq!(first, second);
}
