//! Manifest layer
//! - types.rs: ComponentSpec, SourceKind
//! - loader.rs: registry.toml loader

pub mod loader;
pub mod types;

pub use loader::{ManifestError, load_manifest, parse_manifest};
pub use types::{ComponentSpec, SourceKind};
