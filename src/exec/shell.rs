//! exec::shell
//!
//! Shell-backed executor using `sh -c`.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::traits::{CommandExecutor, ExecError};

/// Executes commands through `sh -c`, capturing stdout.
///
/// This is the production implementation wired in by
/// [`crate::action::GitCommitAction::with_executor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    /// Create a new shell executor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn run(&self, command: &str, directory: Option<&Path>) -> Result<String, ExecError> {
        debug!(command, directory = ?directory, "running shell command");

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        if let Some(dir) = directory {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|err| ExecError::Spawn {
            command: command.to_string(),
            message: err.to_string(),
        })?;

        if !output.status.success() {
            return Err(ExecError::Failed {
                command: command.to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
