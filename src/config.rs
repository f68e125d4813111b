use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Manifest read when no path is given on the command line
pub const DEFAULT_MANIFEST_PATH: &str = "registry.toml";

/// Timeout for each network request and each probe command (20 seconds)
pub const FETCH_TIMEOUT_SECS: u64 = 20;

/// Environment variable holding the optional GitHub API token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// User-Agent sent with every HTTP request
pub const USER_AGENT: &str = "server-versions";

pub const DEFAULT_NPM_REGISTRY: &str = "https://registry.npmjs.org";
pub const DEFAULT_PYPI_REGISTRY: &str = "https://pypi.org";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Base URLs of the upstream hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub npm: String,
    pub pypi: String,
    pub github: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            npm: DEFAULT_NPM_REGISTRY.to_string(),
            pypi: DEFAULT_PYPI_REGISTRY.to_string(),
            github: DEFAULT_GITHUB_API.to_string(),
        }
    }
}

/// Settings shared by every source during one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub github_token: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            github_token: None,
        }
    }
}

impl ResolverConfig {
    /// Default settings with the GitHub token taken from the process environment
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            github_token: lookup(GITHUB_TOKEN_ENV).filter(|t| !t.trim().is_empty()),
            ..Self::default()
        }
    }
}
