//! Federation-realm brand lookup.
//!
//! Optional enrichment: the user-realm endpoint often carries a human-readable
//! organization name. Its failure is swallowed by design; a missing brand is
//! never worth failing a lookup over.

use log::debug;
use serde::Deserialize;

use crate::config::JSON_ACCEPT;
use crate::lookup::LookupContext;

/// Subset of the `getuserrealm.srf` response we consume.
#[derive(Debug, Deserialize)]
struct UserRealmDocument {
    #[serde(rename = "FederationBrandName")]
    federation_brand_name: Option<String>,
    #[serde(rename = "DomainName")]
    domain_name: Option<String>,
}

/// Fetches the federation brand name for a domain, if one is available.
///
/// Every failure mode (disabled by config, transport error, non-2xx status,
/// unparseable body, empty fields) maps to `None`.
pub(crate) async fn fetch_federation_brand(ctx: &LookupContext, domain: &str) -> Option<String> {
    if !ctx.include_federation {
        return None;
    }

    let url = format!(
        "{}/getuserrealm.srf?login=user@{}&json=1",
        ctx.login_base, domain
    );
    let response = match ctx.client.get(&url, JSON_ACCEPT).await {
        Ok(response) => response,
        Err(e) => {
            debug!("Federation realm lookup failed for {domain}: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        debug!(
            "Federation realm lookup returned HTTP {} for {domain}",
            response.status()
        );
        return None;
    }

    let document: UserRealmDocument = response.json().await.ok()?;
    document
        .federation_brand_name
        .filter(|name| !name.is_empty())
        .or(document.domain_name.filter(|name| !name.is_empty()))
}
