// Tenant classification and issuer parsing tests.

use super::classify::{classify_region, classify_tenant_type, has_microsoft_mx};
use super::extract_tenant_id;
use crate::models::{CloudRegion, MxRecord, TenantType};

#[test]
fn test_extract_tenant_id_from_issuer() {
    assert_eq!(
        extract_tenant_id(
            "https://login.microsoftonline.com/11111111-2222-3333-4444-555555555555/v2.0"
        ),
        Some("11111111-2222-3333-4444-555555555555")
    );
}

#[test]
fn test_extract_tenant_id_missing_segment() {
    assert_eq!(extract_tenant_id("https://login.microsoftonline.com"), None);
    assert_eq!(extract_tenant_id("https://login.microsoftonline.com/"), None);
    assert_eq!(extract_tenant_id(""), None);
}

#[test]
fn test_classify_region_global() {
    assert_eq!(
        classify_region(
            "https://login.microsoftonline.com/guid/v2.0",
            Some("microsoftonline.com")
        ),
        CloudRegion::Global
    );
    assert_eq!(classify_region("https://login.microsoftonline.com/guid/v2.0", None), CloudRegion::Global);
}

#[test]
fn test_classify_region_us_government() {
    assert_eq!(
        classify_region("https://login.microsoftonline.us/guid/v2.0", None),
        CloudRegion::UsGovernment
    );
    assert_eq!(
        classify_region(
            "https://login.microsoftonline.com/guid/v2.0",
            Some("microsoftonline.us")
        ),
        CloudRegion::UsGovernment
    );
}

#[test]
fn test_classify_region_germany() {
    assert_eq!(
        classify_region("https://login.microsoftonline.de/guid/v2.0", None),
        CloudRegion::Germany
    );
}

#[test]
fn test_classify_region_china() {
    assert_eq!(
        classify_region("https://login.partner.microsoftonline.cn/guid/v2.0", None),
        CloudRegion::China
    );
    assert_eq!(
        classify_region(
            "https://login.microsoftonline.com/guid/v2.0",
            Some("microsoftonline.chinacloudapi.cn")
        ),
        CloudRegion::China
    );
}

#[test]
fn test_classify_tenant_type_guid_is_organization() {
    assert_eq!(
        classify_tenant_type("11111111-2222-3333-4444-555555555555", "contoso.com"),
        TenantType::Organization
    );
}

#[test]
fn test_classify_tenant_type_domain_echo_is_consumer() {
    // Microsoft echoes the domain back as the tenant id for consumer namespaces
    assert_eq!(
        classify_tenant_type("outlook.com", "outlook.com"),
        TenantType::Consumer
    );
    assert_eq!(
        classify_tenant_type("Outlook.com", "outlook.com"),
        TenantType::Consumer
    );
}

#[test]
fn test_has_microsoft_mx_matches_exchange_online() {
    let records = vec![MxRecord {
        host: "contoso-com.mail.protection.outlook.com".to_string(),
        preference: 0,
    }];
    assert!(has_microsoft_mx(&records));
}

#[test]
fn test_has_microsoft_mx_is_case_insensitive() {
    let records = vec![MxRecord {
        host: "CONTOSO-COM.MAIL.PROTECTION.OUTLOOK.COM".to_string(),
        preference: 0,
    }];
    assert!(has_microsoft_mx(&records));
}

#[test]
fn test_has_microsoft_mx_requires_suffix_at_end() {
    // A Microsoft-looking name buried inside a foreign host must not match
    let records = vec![
        MxRecord {
            host: "mail.protection.outlook.com.attacker.example".to_string(),
            preference: 0,
        },
        MxRecord {
            host: "notmail.protection.outlook.com".to_string(),
            preference: 5,
        },
    ];
    assert!(!has_microsoft_mx(&records));

    // An exact suffix host still counts
    let exact = vec![MxRecord {
        host: "mail.protection.outlook.com".to_string(),
        preference: 0,
    }];
    assert!(has_microsoft_mx(&exact));
}

#[test]
fn test_has_microsoft_mx_rejects_other_hosts() {
    let records = vec![
        MxRecord {
            host: "aspmx.l.google.com".to_string(),
            preference: 1,
        },
        MxRecord {
            host: "mx.zoho.eu".to_string(),
            preference: 10,
        },
    ];
    assert!(!has_microsoft_mx(&records));
    assert!(!has_microsoft_mx(&[]));
}
