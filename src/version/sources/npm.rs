//! npm registry API implementation

use serde::Deserialize;
use tracing::debug;

use crate::manifest::types::SourceKind;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::sources::ensure_success;

/// Response from the npm `/<package>/latest` endpoint
#[derive(Debug, Deserialize)]
struct NpmLatestResponse {
    version: String,
}

/// Source implementation for the npm registry API
pub struct NpmSource {
    client: reqwest::Client,
    base_url: String,
}

impl NpmSource {
    /// Creates a new NpmSource sharing the given client
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

#[async_trait::async_trait]
impl VersionSource for NpmSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Npm
    }

    async fn fetch_latest(&self, package_name: &str) -> Result<String, FetchError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}/latest", self.base_url, encoded_name);
        debug!("Fetching npm package: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, package_name)?;

        let latest: NpmLatestResponse = response.json().await.map_err(|e| {
            debug!("Failed to parse npm registry response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(latest.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    use crate::version::sources::http_client;

    fn source(url: &str) -> NpmSource {
        NpmSource::new(http_client(Duration::from_secs(5)).unwrap(), url)
    }

    #[tokio::test]
    async fn fetch_latest_returns_version_field() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/left-pad/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "left-pad", "version": "1.3.0"}"#)
            .create_async()
            .await;

        let result = source(&server.url()).fetch_latest("left-pad").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, "1.3.0");
    }

    #[tokio::test]
    async fn fetch_latest_handles_scoped_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/@vue%2Flanguage-server/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "2.1.6"}"#)
            .create_async()
            .await;

        let result = source(&server.url())
            .fetch_latest("@vue/language-server")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, "2.1.6");
    }

    #[tokio::test]
    async fn fetch_latest_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent-package/latest")
            .with_status(404)
            .with_body(r#""Not Found""#)
            .create_async()
            .await;

        let result = source(&server.url())
            .fetch_latest("nonexistent-package")
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_latest_fails_on_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/left-pad/latest")
            .with_status(503)
            .create_async()
            .await;

        let result = source(&server.url()).fetch_latest("left-pad").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status(status)) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn fetch_latest_fails_when_version_field_is_missing() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/left-pad/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "left-pad"}"#)
            .create_async()
            .await;

        let result = source(&server.url()).fetch_latest("left-pad").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }
}
