//! GitHub Releases API source implementation

use serde::Deserialize;
use tracing::debug;

use crate::manifest::types::SourceKind;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::sources::ensure_success;

/// Response from the GitHub latest release API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Source implementation for GitHub Releases API
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubSource {
    /// Creates a new unauthenticated GitHubSource
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches `Authorization: Bearer <token>` to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Github
    }

    async fn fetch_latest(&self, repo: &str) -> Result<String, FetchError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repo);
        debug!("Fetching GitHub release: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = ensure_success(response, repo)?;

        let release: Release = response.json().await.map_err(|e| {
            debug!("Failed to parse GitHub release response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(release.tag_name)
    }
}
