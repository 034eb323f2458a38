//! Source Formatting

use std::{io, path::Path, process::Stdio};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tokio::{io::AsyncWriteExt, process::Command};

/// Errors raised by a formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter could not be run.
    #[error("failed to run formatter: {0}")]
    Io(#[from] io::Error),

    /// The formatter exited unsuccessfully.
    #[error("formatter exited with {status}: {stderr}")]
    Failed {
        /// Exit status
        status: std::process::ExitStatus,

        /// Captured standard error
        stderr: String,
    },

    /// The formatter produced output that is not UTF-8.
    #[error("formatter output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Post-processes generated source before it is written.
#[automock]
#[async_trait]
pub trait SourceFormatter: Send + Sync {
    /// Formats `source`, which will be written to `path`.
    async fn format(&self, source: &str, path: &Path) -> Result<String, FormatError>;
}

/// Formats TypeScript with an external `prettier` executable.
///
/// The project's own prettier configuration is picked up through
/// `--stdin-filepath`.
#[derive(Debug, Clone)]
pub struct Prettier {
    program: String,
}

impl Prettier {
    /// Runs the given executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Prettier {
    fn default() -> Self {
        Self::new("prettier")
    }
}

#[async_trait]
impl SourceFormatter for Prettier {
    async fn format(&self, source: &str, path: &Path) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .args(["--parser", "typescript", "--stdin-filepath"])
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).await?;
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_executables_fail_to_run() {
        let prettier = Prettier::new("shelf-test-no-such-formatter");

        let result = prettier
            .format("export const a = 1", Path::new("products.ts"))
            .await;

        assert!(
            matches!(result, Err(FormatError::Io(_))),
            "expected an io error, got {result:?}"
        );
    }

    #[test]
    fn default_runs_prettier_from_path() {
        assert_eq!(Prettier::default().program, "prettier");
    }
}
