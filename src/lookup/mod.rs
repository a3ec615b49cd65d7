//! Lookup orchestration.
//!
//! Fans out one resolution task per domain, runs them concurrently, and
//! collects a per-domain result without one domain's failure affecting
//! another's. Output order always matches input order regardless of task
//! completion order.

mod context;

use std::sync::Arc;

use futures::future::join_all;
use log::warn;
use tokio::sync::Semaphore;

use crate::models::LookupResult;
use crate::tenant::find_tenant_info;

pub(crate) use context::LookupContext;

/// Resolves a batch of domains concurrently, one result per input domain.
///
/// Each domain gets an independent task bounded by the semaphore; any error it
/// raises (including a panic) is captured as that domain's `error` string and
/// never aborts the batch. All tasks settle before the batch returns.
pub(crate) async fn search_domains(
    domains: &[String],
    ctx: Arc<LookupContext>,
    semaphore: Arc<Semaphore>,
) -> Vec<LookupResult> {
    let handles: Vec<_> = domains
        .iter()
        .map(|domain| {
            let domain = domain.clone();
            let ctx = Arc::clone(&ctx);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                // The semaphore lives for the whole search and is never closed
                let _permit = semaphore.acquire_owned().await.ok();
                lookup_one(domain, &ctx).await
            })
        })
        .collect();

    // join_all preserves spawn order, so results line up with the input
    join_all(handles)
        .await
        .into_iter()
        .zip(domains)
        .map(|(joined, domain)| match joined {
            Ok(result) => result,
            Err(join_error) => {
                warn!("Lookup task for {domain} panicked: {join_error:?}");
                LookupResult::failure(domain.clone(), "Lookup task failed unexpectedly")
            }
        })
        .collect()
}

/// Resolves a single domain, converting any error into result data.
async fn lookup_one(domain: String, ctx: &LookupContext) -> LookupResult {
    match find_tenant_info(&domain, ctx).await {
        Ok(tenant_info) => LookupResult::success(domain, tenant_info),
        Err(e) => LookupResult::failure(domain, e.to_string()),
    }
}
