//! Microsoft tenant resolution.
//!
//! Queries the OpenID discovery endpoint for a domain, extracts and classifies
//! the tenant, then enriches the aggregate with MX/SPF records and an optional
//! federation brand, all fetched concurrently.

mod classify;
mod federation;

use log::debug;
use serde::Deserialize;

use crate::config::JSON_ACCEPT;
use crate::dns::{get_mx_records, get_spf_record};
use crate::domain::validate_domain;
use crate::error_handling::LookupError;
use crate::lookup::LookupContext;
use crate::models::{OpenIdConfig, TenantInfo};

use classify::{classify_region, classify_tenant_type, has_microsoft_mx};
use federation::fetch_federation_brand;

/// The OpenID discovery document, as served by the login endpoint.
///
/// All fields are optional at the wire level; `issuer` is the only one we
/// require, and its absence is an invalid-response error.
#[derive(Debug, Deserialize)]
struct DiscoveryDocument {
    issuer: Option<String>,
    authorization_endpoint: Option<String>,
    token_endpoint: Option<String>,
    userinfo_endpoint: Option<String>,
    jwks_uri: Option<String>,
    end_session_endpoint: Option<String>,
    cloud_instance_name: Option<String>,
}

/// Resolves the full tenant aggregate for one domain.
///
/// The domain is validated before any network call. A non-2xx discovery
/// response means the domain has no Microsoft tenant; transport errors are
/// propagated as such. After successful discovery, the MX, SPF, and federation
/// lookups run concurrently and none of them can fail the resolution: DNS
/// resolvers degrade to empty results internally and the federation lookup
/// swallows its own failures.
pub(crate) async fn find_tenant_info(
    domain: &str,
    ctx: &LookupContext,
) -> Result<TenantInfo, LookupError> {
    if !validate_domain(domain) {
        return Err(LookupError::InvalidDomain);
    }

    let url = format!(
        "{}/{}/.well-known/openid-configuration",
        ctx.login_base, domain
    );
    let response = ctx.client.get(&url, JSON_ACCEPT).await?;
    if !response.status().is_success() {
        debug!(
            "Discovery endpoint returned HTTP {} for {domain}",
            response.status()
        );
        return Err(LookupError::TenantNotFound);
    }

    let document: DiscoveryDocument = response
        .json()
        .await
        .map_err(|_| LookupError::InvalidTenantResponse)?;
    let issuer = document
        .issuer
        .clone()
        .ok_or(LookupError::InvalidTenantResponse)?;

    let tenant_id = extract_tenant_id(&issuer)
        .ok_or(LookupError::MissingTenantId)?
        .to_string();
    let region = classify_region(&issuer, document.cloud_instance_name.as_deref());
    let tenant_type = classify_tenant_type(&tenant_id, domain);

    let (mx_records, spf_record, federation_brand) = tokio::join!(
        get_mx_records(&ctx.client, &ctx.doh_providers, domain),
        get_spf_record(&ctx.client, &ctx.doh_providers, domain),
        fetch_federation_brand(ctx, domain),
    );

    let has_microsoft_mx = has_microsoft_mx(&mx_records);

    Ok(TenantInfo {
        tenant_id,
        name: domain.to_string(),
        region,
        tenant_type,
        open_id_config: OpenIdConfig {
            issuer,
            authorization_endpoint: document.authorization_endpoint,
            token_endpoint: document.token_endpoint,
            userinfo_endpoint: document.userinfo_endpoint,
            jwks_uri: document.jwks_uri,
            end_session_endpoint: document.end_session_endpoint,
        },
        mx_records,
        spf_record,
        has_microsoft_mx,
        federation_brand,
    })
}

/// Extracts the tenant identifier from an issuer URL.
///
/// The issuer has the shape `https://login.microsoftonline.com/{tenantId}/v2.0`;
/// the tenant identifier is its fourth path-separated segment.
fn extract_tenant_id(issuer: &str) -> Option<&str> {
    issuer.split('/').nth(3).filter(|segment| !segment.is_empty())
}
