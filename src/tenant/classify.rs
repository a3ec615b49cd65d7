//! Tenant classification heuristics.
//!
//! Region and tenant-type classification are inferred from observed Microsoft
//! behavior rather than documented contracts, so both are best-effort.

use crate::config::MICROSOFT_MX_SUFFIXES;
use crate::models::{CloudRegion, MxRecord, TenantType};

/// Classifies the cloud region from the issuer URL and the optional
/// `cloud_instance_name` field of the discovery document.
///
/// Sovereign clouds use distinct login hosts (`login.microsoftonline.us`,
/// `login.microsoftonline.de`, `login.partner.microsoftonline.cn`); anything
/// unrecognized is the worldwide cloud.
pub(crate) fn classify_region(issuer: &str, cloud_instance_name: Option<&str>) -> CloudRegion {
    let host = issuer_host(issuer).to_lowercase();
    let cloud = cloud_instance_name.unwrap_or("").to_lowercase();

    if host.ends_with(".us") || cloud.ends_with(".us") {
        CloudRegion::UsGovernment
    } else if host.ends_with(".de") || cloud.ends_with(".de") {
        CloudRegion::Germany
    } else if host.contains("chinacloudapi.cn")
        || cloud.contains("chinacloudapi.cn")
        || host.ends_with(".cn")
    {
        CloudRegion::China
    } else {
        CloudRegion::Global
    }
}

/// Classifies the tenant type.
///
/// Microsoft represents consumer namespaces by echoing the queried domain back
/// as the tenant identifier; a GUID means an organization directory.
pub(crate) fn classify_tenant_type(tenant_id: &str, domain: &str) -> TenantType {
    if tenant_id.eq_ignore_ascii_case(domain) {
        TenantType::Consumer
    } else {
        TenantType::Organization
    }
}

/// Checks whether any MX host belongs to Microsoft's mail-routing
/// infrastructure.
///
/// The suffix must cover whole labels at the end of the host; a host merely
/// containing a Microsoft suffix somewhere in the middle does not count.
pub(crate) fn has_microsoft_mx(mx_records: &[MxRecord]) -> bool {
    mx_records.iter().any(|record| {
        let host = record.host.to_lowercase();
        MICROSOFT_MX_SUFFIXES
            .iter()
            .any(|suffix| host == *suffix || host.ends_with(&format!(".{suffix}")))
    })
}

/// Extracts the host portion of an issuer URL (`https://host/...`).
fn issuer_host(issuer: &str) -> &str {
    issuer.split('/').nth(2).unwrap_or("")
}
