use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Command failed (exit code {code:?}): {stderr}")]
    ProbeFailed { code: Option<i32>, stderr: String },

    #[error("Failed to run command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing `{0}` parameter")]
    MissingParameter(&'static str),

    #[error("Fetch panicked: {0}")]
    Panicked(String),
}
