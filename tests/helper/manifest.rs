//! Manifest test utilities

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use server_versions::config::{Endpoints, ResolverConfig};

/// A registry.toml written into its own temporary directory
pub struct TestManifest {
    _dir: TempDir,
    path: PathBuf,
}

impl TestManifest {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolver config pointing every HTTP source at `base_url`
pub fn config_for(base_url: &str) -> ResolverConfig {
    ResolverConfig {
        endpoints: Endpoints {
            npm: base_url.to_string(),
            pypi: base_url.to_string(),
            github: base_url.to_string(),
        },
        timeout: Duration::from_secs(5),
        github_token: None,
    }
}
