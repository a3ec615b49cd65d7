//! Value objects produced by the lookup pipeline.
//!
//! All entities here are created fresh per search invocation and owned by the
//! result set returned to the caller; nothing is shared or persisted between
//! searches.

use std::fmt;

use chrono::Utc;
use serde::Serialize;

/// One mail-exchange entry for a domain.
///
/// Within a resolved set, hosts are case-insensitively unique and the set is
/// sorted ascending by preference (lower value = higher priority).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    /// Mail server hostname (trailing dot stripped)
    pub host: String,
    /// MX preference value; lower means higher priority
    pub preference: u16,
}

/// The authoritative SPF record for a domain.
///
/// Wraps the first TXT value starting with `v=spf1` as returned by the DNS
/// provider. Domains with multiple SPF-looking records (invalid DNS hygiene,
/// but seen in the wild) get the first match in provider answer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpfRecord {
    /// The raw SPF record text, quotes stripped
    pub record: String,
}

/// Endpoints from the Microsoft OpenID discovery document.
///
/// Captured verbatim for downstream consumers; only `issuer` is required to be
/// present, the rest is whatever the discovery document advertises.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenIdConfig {
    /// Issuer URL (carries the tenant ID as its fourth path segment)
    pub issuer: String,
    /// OAuth2 authorization endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    /// OAuth2 token endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    /// Userinfo endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,
    /// JSON Web Key Set URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    /// End-session (logout) endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_session_endpoint: Option<String>,
}

/// Azure cloud region a tenant is homed in, derived from the issuer host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloudRegion {
    /// Worldwide Azure cloud (login.microsoftonline.com)
    Global,
    /// Azure Government (login.microsoftonline.us)
    #[serde(rename = "US Government")]
    UsGovernment,
    /// Legacy Microsoft Cloud Germany (login.microsoftonline.de)
    Germany,
    /// Azure China, operated by 21Vianet (chinacloudapi.cn)
    China,
}

impl fmt::Display for CloudRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CloudRegion::Global => "Global",
            CloudRegion::UsGovernment => "US Government",
            CloudRegion::Germany => "Germany",
            CloudRegion::China => "China",
        };
        write!(f, "{name}")
    }
}

/// Whether a tenant is a consumer account namespace or an organization.
///
/// Consumer tenants are recognized by Microsoft returning the queried domain
/// itself as the tenant identifier. This is observed behavior, not a
/// documented contract, so treat it as best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TenantType {
    /// Consumer (Microsoft account) namespace
    Consumer,
    /// Azure AD / Entra ID organization directory
    Organization,
}

impl fmt::Display for TenantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TenantType::Consumer => "Consumer",
            TenantType::Organization => "Organization",
        };
        write!(f, "{name}")
    }
}

/// The resolved aggregate for one domain with a Microsoft tenant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    /// Tenant identifier (a GUID for organizations)
    pub tenant_id: String,
    /// Display name; the queried domain itself
    pub name: String,
    /// Cloud region classification
    pub region: CloudRegion,
    /// Consumer vs. organization classification
    pub tenant_type: TenantType,
    /// Endpoints from the discovery document
    pub open_id_config: OpenIdConfig,
    /// MX records, deduplicated and sorted by preference
    pub mx_records: Vec<MxRecord>,
    /// Authoritative SPF record, if any
    pub spf_record: Option<SpfRecord>,
    /// Whether any MX host routes mail through Microsoft
    pub has_microsoft_mx: bool,
    /// Human-readable brand name from the federation realm lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_brand: Option<String>,
}

/// Classification of a [`LookupResult`] into one of its three outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A Microsoft tenant was resolved for the domain
    TenantFound,
    /// The domain is syntactically valid but has no Microsoft tenant
    NoTenant,
    /// The lookup failed with an error
    Failed,
}

/// Outcome of a lookup for one requested domain.
///
/// Exactly one result is produced per input domain. `tenant_info` and `error`
/// are mutually exclusive in the success/failure sense; both absent means the
/// domain was syntactically valid but no Microsoft tenant exists for it.
/// [`LookupResult::outcome`] classifies the three cases.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// The queried domain
    pub domain: String,
    /// Resolved tenant aggregate, when discovery succeeded
    pub tenant_info: Option<TenantInfo>,
    /// Short human-readable failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When this result was produced (RFC 3339)
    pub timestamp: String,
}

impl LookupResult {
    /// Creates a successful result for a domain.
    pub fn success(domain: String, tenant_info: TenantInfo) -> Self {
        Self {
            domain,
            tenant_info: Some(tenant_info),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Creates a failed result carrying a human-readable message.
    pub fn failure(domain: String, error: impl Into<String>) -> Self {
        Self {
            domain,
            tenant_info: None,
            error: Some(error.into()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Classifies this result as found, no tenant, or failed.
    pub fn outcome(&self) -> LookupOutcome {
        if self.tenant_info.is_some() {
            LookupOutcome::TenantFound
        } else if self.error.is_some() {
            LookupOutcome::Failed
        } else {
            LookupOutcome::NoTenant
        }
    }
}
