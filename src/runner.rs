//! End-to-end run: manifest -> concurrent fetch -> JSON report

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::config::ResolverConfig;
use crate::manifest::load_manifest;
use crate::report::VersionReport;
use crate::version::dispatch::SourceSet;
use crate::version::fetch::fetch_all;

/// Resolve every component listed in `manifest_path` and write the report to `out`
///
/// Only an unreadable manifest, a client that cannot be built, or a failed
/// write of the report are errors. Individual fetch failures are logged and
/// left out of the report.
pub async fn run<W: Write>(
    manifest_path: &Path,
    config: &ResolverConfig,
    out: W,
    pretty: bool,
) -> anyhow::Result<VersionReport> {
    let specs = load_manifest(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
    info!("Loaded {} components from {}", specs.len(), manifest_path.display());

    let sources = SourceSet::from_config(config).context("Failed to create HTTP client")?;
    let outcomes = fetch_all(&sources, &specs).await;

    let report = VersionReport::from_outcomes(outcomes);
    report
        .write_json(out, pretty)
        .context("Failed to write version report")?;

    Ok(report)
}
