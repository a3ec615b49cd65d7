//! Tests for the public input parsing and validation helpers.

use tenant_lookup::{parse_domains, validate_domain};

#[test]
fn test_mixed_separators_dedupe_and_case() {
    // Commas, whitespace, and newlines all separate; duplicates collapse
    let parsed = parse_domains("  A.com, a.com \n B.com", 100);
    assert_eq!(parsed, vec!["a.com", "b.com"]);
}

#[test]
fn test_validate_domain_examples() {
    assert!(validate_domain("contoso.com"));
    assert!(!validate_domain("-bad.com"));
    assert!(!validate_domain(&"a".repeat(300)));
}

#[test]
fn test_parser_is_idempotent() {
    let raw = "One.com two.com;ONE.com\nthree.com, two.com";
    let first = parse_domains(raw, 100);
    let second = parse_domains(&first.join("\n"), 100);
    assert_eq!(first, second);
    assert_eq!(first, vec!["one.com", "two.com", "three.com"]);
}

#[test]
fn test_parser_caps_fan_out() {
    let raw = (0..200)
        .map(|i| format!("host{i}.example"))
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(parse_domains(&raw, 100).len(), 100);
}

#[test]
fn test_parser_never_fails_on_garbage() {
    assert!(parse_domains("", 100).is_empty());
    assert!(parse_domains("\u{0} \u{7f} 🦀🦀🦀", 100).is_empty());
    assert!(parse_domains(",,,;;;\n\n\n", 100).is_empty());
}
