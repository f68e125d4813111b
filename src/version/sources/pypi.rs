//! PyPI client for fetching the latest Python package version

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::manifest::types::SourceKind;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::sources::ensure_success;

/// PyPI source
pub struct PypiSource {
    client: Client,
    base_url: String,
}

impl PypiSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
}

/// Package information from PyPI
#[derive(Debug, Deserialize)]
struct PypiInfo {
    /// Latest version (according to PyPI)
    version: String,
}

#[async_trait]
impl VersionSource for PypiSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Pypi
    }

    async fn fetch_latest(&self, package_name: &str) -> Result<String, FetchError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, package_name)?;

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(pypi_response.info.version)
    }
}
