//! Common types for manifest entries

use indexmap::IndexMap;

/// Kind of upstream a component's version is sourced from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// npm registry (`<host>/<package>/latest`)
    Npm,
    /// PyPI JSON API (`<host>/pypi/<package>/json`)
    Pypi,
    /// GitHub latest release (`<host>/repos/<owner>/<repo>/releases/latest`)
    Github,
    /// Arbitrary shell command printing the version on stdout
    Custom,
    /// Any `type` value not listed above, or no `type` at all
    Unsupported(String),
}

impl SourceKind {
    /// Returns the string representation used in the manifest
    pub fn as_str(&self) -> &str {
        match self {
            SourceKind::Npm => "npm",
            SourceKind::Pypi => "pypi",
            SourceKind::Github => "github",
            SourceKind::Custom => "custom",
            SourceKind::Unsupported(raw) => raw,
        }
    }

    /// Maps a manifest `type` value to a kind. Never fails.
    pub fn from_type(raw: &str) -> Self {
        match raw {
            "npm" => SourceKind::Npm,
            "pypi" => SourceKind::Pypi,
            "github" => SourceKind::Github,
            "custom" => SourceKind::Custom,
            other => SourceKind::Unsupported(other.to_string()),
        }
    }

    /// The manifest key holding the fetch target for this kind
    pub fn target_key(&self) -> Option<&'static str> {
        match self {
            SourceKind::Npm | SourceKind::Pypi => Some("package"),
            SourceKind::Github => Some("repo"),
            SourceKind::Custom => Some("command"),
            SourceKind::Unsupported(_) => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named component from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Unique key across the whole run
    pub name: String,
    pub kind: SourceKind,
    /// Kind-specific fields (`package`, `repo`, `strip_v`, `command`)
    pub params: IndexMap<String, String>,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            params: IndexMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether a single leading non-numeric character should be dropped from release tags
    pub fn strip_v(&self) -> bool {
        self.param("strip_v") == Some("true")
    }
}
