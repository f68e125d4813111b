//! Source implementations for fetching latest versions

pub mod custom;
pub mod github;
pub mod npm;
pub mod pypi;

pub use custom::CustomSource;
pub use github::GitHubSource;
pub use npm::NpmSource;
pub use pypi::PypiSource;

use std::time::Duration;

use tracing::debug;

use crate::config::USER_AGENT;
use crate::version::error::FetchError;

/// Builds the HTTP client shared by every network source
///
/// `timeout` bounds each request independently.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Converts 404/429/other non-success statuses into fetch errors
pub(crate) fn ensure_success(
    response: reqwest::Response,
    target: &str,
) -> Result<reqwest::Response, FetchError> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(target.to_string()));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(FetchError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        debug!("{} returned status {}", response.url(), status);
        return Err(FetchError::Status(status));
    }

    Ok(response)
}
