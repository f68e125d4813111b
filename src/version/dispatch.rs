//! Kind-to-source dispatch
//!
//! Maps a component's declared kind to the source that fetches it, extracts
//! the kind-specific target parameter, and applies release tag post-processing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::manifest::types::{ComponentSpec, SourceKind};
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::sources::{CustomSource, GitHubSource, NpmSource, PypiSource, http_client};

/// Terminal result of fetching one component
#[derive(Debug)]
pub struct FetchOutcome {
    pub name: String,
    pub result: Result<String, FetchError>,
}

impl FetchOutcome {
    pub fn version(&self) -> Option<&str> {
        self.result.as_ref().ok().map(String::as_str)
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.result.as_ref().err()
    }
}

/// Drops a single leading non-numeric character from a release tag (`v2.3.1` -> `2.3.1`)
pub fn strip_version_prefix(tag: &str) -> &str {
    match tag.chars().next() {
        Some(first) if !first.is_ascii_digit() => &tag[first.len_utf8()..],
        _ => tag,
    }
}

/// One source per supported kind
#[derive(Default, Clone)]
pub struct SourceSet {
    sources: HashMap<SourceKind, Arc<dyn VersionSource>>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` under its own kind, replacing any previous one
    pub fn with_source(mut self, source: Arc<dyn VersionSource>) -> Self {
        self.sources.insert(source.kind(), source);
        self
    }

    /// Builds the four standard sources around one shared HTTP client
    pub fn from_config(config: &ResolverConfig) -> Result<Self, reqwest::Error> {
        let client = http_client(config.timeout)?;
        let endpoints = &config.endpoints;

        Ok(Self::new()
            .with_source(Arc::new(NpmSource::new(client.clone(), &endpoints.npm)))
            .with_source(Arc::new(PypiSource::new(client.clone(), &endpoints.pypi)))
            .with_source(Arc::new(
                GitHubSource::new(client, &endpoints.github)
                    .with_token(config.github_token.clone()),
            ))
            .with_source(Arc::new(CustomSource::new(config.timeout))))
    }

    pub fn get(&self, kind: &SourceKind) -> Option<&Arc<dyn VersionSource>> {
        self.sources.get(kind)
    }

    /// Fetches one component
    ///
    /// Returns `None` for kinds without a registered source; those components
    /// are left out of the report without a diagnostic.
    pub async fn resolve(&self, spec: &ComponentSpec) -> Option<FetchOutcome> {
        let Some(source) = self.get(&spec.kind) else {
            debug!("Skipping {}: unsupported type {:?}", spec.name, spec.kind.as_str());
            return None;
        };

        let result = match spec.kind.target_key() {
            Some(key) => match spec.param(key) {
                Some(target) => source.fetch_latest(target).await,
                None => Err(FetchError::MissingParameter(key)),
            },
            None => return None,
        };

        let result = match spec.kind {
            SourceKind::Github if spec.strip_v() => {
                result.map(|tag| strip_version_prefix(&tag).to_string())
            }
            _ => result,
        };

        Some(FetchOutcome {
            name: spec.name.clone(),
            result,
        })
    }
}
