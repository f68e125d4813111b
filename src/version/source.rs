//! Source trait for fetching the latest version of a component

#[cfg(test)]
use mockall::automock;

use crate::manifest::types::SourceKind;
use crate::version::error::FetchError;

/// Trait for fetching the latest published version from one kind of upstream
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Returns the kind of upstream this implementation handles
    fn kind(&self) -> SourceKind;

    /// Fetches the latest version for a target
    ///
    /// # Arguments
    /// * `target` - Package name, `owner/repo`, or shell command depending on the kind
    ///
    /// # Returns
    /// * `Ok(String)` - The version as published, without post-processing
    /// * `Err(FetchError)` - If the fetch fails
    async fn fetch_latest(&self, target: &str) -> Result<String, FetchError>;
}
