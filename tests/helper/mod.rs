mod logs;
mod manifest;

pub use logs::capture_errors;
pub use manifest::{TestManifest, config_for};
