//! registry.toml loader
//!
//! Every top-level table becomes one [`ComponentSpec`]. Scalars and arrays at
//! the top level are metadata and are skipped.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::manifest::types::{ComponentSpec, SourceKind};

/// Error type for manifest loading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML
    #[error("Invalid TOML: {0}")]
    InvalidSyntax(#[from] toml::de::Error),
}

/// Read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> Result<Vec<ComponentSpec>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}

/// Parse manifest content, keeping document order
pub fn parse_manifest(content: &str) -> Result<Vec<ComponentSpec>, ManifestError> {
    let table: toml::Table = content.parse()?;

    let specs = table
        .into_iter()
        .filter_map(|(name, value)| match value {
            toml::Value::Table(entry) => Some(component_from_table(name, entry)),
            _ => {
                debug!("Skipping non-table entry: {}", name);
                None
            }
        })
        .collect();

    Ok(specs)
}

fn component_from_table(name: String, entry: toml::Table) -> ComponentSpec {
    let kind = match entry.get("type") {
        Some(toml::Value::String(raw)) => SourceKind::from_type(raw),
        Some(other) => SourceKind::Unsupported(other.to_string()),
        None => SourceKind::Unsupported(String::new()),
    };

    let mut spec = ComponentSpec::new(name, kind);
    for (key, value) in entry {
        if key == "type" {
            continue;
        }
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                debug!("Ignoring non-scalar param {}.{}", spec.name, key);
                continue;
            }
        };
        spec.params.insert(key, text);
    }
    spec
}
