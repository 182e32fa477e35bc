//! exec::traits
//!
//! Command-execution trait and its error taxonomy.
//!
//! # Design
//!
//! The trait is async because every invocation is a suspension point for the
//! enclosing action: the orchestrator regains control while the external
//! process runs. All methods return `Result` so failures propagate untouched
//! to the action and from there to the orchestrator.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from external command execution.
///
/// Both variants carry the failing command so the orchestrator can report
/// what was attempted. `Clone` is required so the mock executor can script
/// failures.
#[derive(Debug, Clone, Error)]
pub enum ExecError {
    /// The process could not be spawned at all.
    #[error("failed to spawn `{command}`: {message}")]
    Spawn {
        /// The command that was attempted
        command: String,
        /// The underlying OS error text
        message: String,
    },

    /// The process ran and exited non-zero.
    #[error("command `{command}` exited with status {status}: {stderr}")]
    Failed {
        /// The command that failed
        command: String,
        /// Exit status code (-1 when terminated by signal)
        status: i32,
        /// Captured standard error
        stderr: String,
    },
}

/// Runs a shell command and captures its standard output.
///
/// Implementations must execute in `directory` when given, otherwise in the
/// process's current working directory.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute `command` and return its captured stdout.
    async fn run(&self, command: &str, directory: Option<&Path>) -> Result<String, ExecError>;
}
