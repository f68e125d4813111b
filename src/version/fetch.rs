//! Concurrent fetch of every component in a manifest

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;
use tracing::{error, info};

use crate::manifest::types::ComponentSpec;
use crate::version::dispatch::{FetchOutcome, SourceSet};
use crate::version::error::FetchError;

/// Fetch a single component, turning a panic inside its source into a failed outcome
async fn fetch_component(sources: &SourceSet, spec: &ComponentSpec) -> Option<FetchOutcome> {
    let outcome = AssertUnwindSafe(sources.resolve(spec))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Some(FetchOutcome {
                name: spec.name.clone(),
                result: Err(FetchError::Panicked(message)),
            })
        })?;

    match &outcome.result {
        Ok(version) => info!("Resolved {} to {}", outcome.name, version),
        Err(e) => error!("Error fetching version for {}: {}", outcome.name, e),
    }

    Some(outcome)
}

/// Fetch the latest version of every component
///
/// All fetches are started together and interleave on the calling task; this
/// returns once each has finished. A failure (or panic) in one component never
/// cancels the others. Each failure is logged once at error level. Components
/// of unsupported kinds produce no outcome. Outcomes keep manifest order.
pub async fn fetch_all(sources: &SourceSet, specs: &[ComponentSpec]) -> Vec<FetchOutcome> {
    let futures = specs.iter().map(|spec| fetch_component(sources, spec));

    let outcomes: Vec<FetchOutcome> = join_all(futures).await.into_iter().flatten().collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        "Fetched {} components: {} resolved, {} failed",
        outcomes.len(),
        outcomes.len() - failed,
        failed
    );

    outcomes
}
