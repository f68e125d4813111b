//! Custom probe source: runs an operator-supplied shell command
//!
//! The command text comes straight from the manifest and is executed with
//! `sh -c`. Only load manifests from trusted locations.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::manifest::types::SourceKind;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;

/// Source that treats a command's trimmed stdout as the version
pub struct CustomSource {
    shell: String,
    timeout: Duration,
}

impl CustomSource {
    /// Creates a CustomSource whose probes are killed after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            shell: "sh".to_string(),
            timeout,
        }
    }
}

/// Joins non-empty lines with a space so one failure stays on one log line
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait::async_trait]
impl VersionSource for CustomSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Custom
    }

    async fn fetch_latest(&self, command: &str) -> Result<String, FetchError> {
        debug!("Running probe: {}", command);

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(FetchError::ProbeFailed {
                code: output.status.code(),
                stderr: single_line(&String::from_utf8_lossy(&output.stderr)),
            });
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(FetchError::InvalidResponse(
                "command printed nothing on stdout".to_string(),
            ));
        }

        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> CustomSource {
        CustomSource::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn fetch_latest_returns_trimmed_stdout() {
        let result = source().fetch_latest("printf '  0.13.0\\n\\n'").await.unwrap();
        assert_eq!(result, "0.13.0");
    }

    #[tokio::test]
    async fn fetch_latest_supports_pipelines() {
        let result = source()
            .fetch_latest("echo 'version: 1.2.3' | cut -d' ' -f2")
            .await
            .unwrap();
        assert_eq!(result, "1.2.3");
    }

    #[tokio::test]
    async fn fetch_latest_reports_stderr_on_non_zero_exit() {
        let result = source()
            .fetch_latest("echo 'no such tool' >&2; exit 3")
            .await;

        match result {
            Err(FetchError::ProbeFailed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "no such tool");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_latest_joins_multiline_stderr() {
        let result = source()
            .fetch_latest("printf 'error: first\\n\\n  second\\n' >&2; exit 4")
            .await;

        match result {
            Err(FetchError::ProbeFailed { stderr, .. }) => {
                assert_eq!(stderr, "error: first second");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_latest_fails_for_exit_1_without_output() {
        let result = source().fetch_latest("exit 1").await;
        assert!(matches!(
            result,
            Err(FetchError::ProbeFailed { code: Some(1), .. })
        ));
    }

    #[tokio::test]
    async fn fetch_latest_fails_for_empty_stdout() {
        let result = source().fetch_latest("true").await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_latest_times_out_hung_command() {
        let source = CustomSource::new(Duration::from_millis(100));
        let result = source.fetch_latest("sleep 5").await;
        assert!(matches!(result, Err(FetchError::Timeout(_))));
    }

    #[tokio::test]
    async fn fetch_latest_reports_spawn_failure() {
        let source = CustomSource {
            shell: "/nonexistent/shell".to_string(),
            timeout: Duration::from_secs(5),
        };
        let result = source.fetch_latest("echo 1").await;
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
