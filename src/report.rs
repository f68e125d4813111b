//! Version report assembled from fetch outcomes

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::version::dispatch::FetchOutcome;

/// Component name to latest version, for successful fetches only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionReport(IndexMap<String, String>);

impl VersionReport {
    /// Builds a report from outcomes, dropping failures
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FetchOutcome>) -> Self {
        Self(
            outcomes
                .into_iter()
                .filter_map(|outcome| outcome.result.ok().map(|v| (outcome.name, v)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Writes the report as a JSON object followed by a newline
    ///
    /// `pretty` selects two-space indentation over a single line.
    pub fn write_json<W: Write>(&self, mut writer: W, pretty: bool) -> std::io::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writeln!(writer)?;
        writer.flush()
    }
}
