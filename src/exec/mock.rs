//! exec::mock
//!
//! Mock executor for deterministic testing.
//!
//! # Design
//!
//! The mock records every command it is asked to run and replies from a
//! scripted queue of stdout values (an empty string once the queue is
//! drained). Failure scenarios are configured by command substring, so a
//! test can let staging succeed and make only the commit fail.
//!
//! # Example
//!
//! ```
//! use git_commit_action::exec::{CommandExecutor, MockExecutor};
//!
//! # tokio_test::block_on(async {
//! let executor = MockExecutor::new();
//! executor.push_output("deadbeef\n");
//!
//! let output = executor.run("git log --format=\"%H\" -n 1", None).await.unwrap();
//! assert_eq!(output, "deadbeef\n");
//! assert_eq!(executor.command_strings(), vec!["git log --format=\"%H\" -n 1"]);
//! # });
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{CommandExecutor, ExecError};

/// A command the mock was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    /// The full command string.
    pub command: String,
    /// The working directory it was to run in, if any.
    pub directory: Option<PathBuf>,
}

/// Mock executor for tests.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockExecutor {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Commands recorded in invocation order.
    commands: Vec<ExecutedCommand>,
    /// Scripted stdout replies, consumed front to back.
    outputs: VecDeque<String>,
    /// Fail any command containing this fragment with the given error.
    fail_on: Option<(String, ExecError)>,
}

impl MockExecutor {
    /// Create a new mock with no scripted output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stdout reply for the next unanswered command.
    pub fn push_output(&self, stdout: impl Into<String>) {
        self.inner.lock().unwrap().outputs.push_back(stdout.into());
    }

    /// Fail any command containing `fragment` with `error`.
    pub fn fail_on(&self, fragment: impl Into<String>, error: ExecError) {
        self.inner.lock().unwrap().fail_on = Some((fragment.into(), error));
    }

    /// All commands run so far, in order.
    pub fn commands(&self) -> Vec<ExecutedCommand> {
        self.inner.lock().unwrap().commands.clone()
    }

    /// Just the command strings, in order.
    pub fn command_strings(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .commands
            .iter()
            .map(|c| c.command.clone())
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn run(&self, command: &str, directory: Option<&Path>) -> Result<String, ExecError> {
        let mut inner = self.inner.lock().unwrap();
        inner.commands.push(ExecutedCommand {
            command: command.to_string(),
            directory: directory.map(Path::to_path_buf),
        });

        if let Some((fragment, error)) = &inner.fail_on {
            if command.contains(fragment.as_str()) {
                return Err(error.clone());
            }
        }

        Ok(inner.outputs.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_commands_in_order() {
        let executor = MockExecutor::new();
        executor.run("first", None).await.unwrap();
        executor.run("second", Some(Path::new("/tmp"))).await.unwrap();

        let commands = executor.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].command, "first");
        assert_eq!(commands[0].directory, None);
        assert_eq!(commands[1].directory, Some(PathBuf::from("/tmp")));
    }

    #[tokio::test]
    async fn replies_from_queue_then_empty() {
        let executor = MockExecutor::new();
        executor.push_output("one");
        assert_eq!(executor.run("a", None).await.unwrap(), "one");
        assert_eq!(executor.run("b", None).await.unwrap(), "");
    }

    #[tokio::test]
    async fn fails_on_matching_fragment() {
        let executor = MockExecutor::new();
        executor.fail_on(
            "revert",
            ExecError::Failed {
                command: "git revert x".to_string(),
                status: 1,
                stderr: "conflict".to_string(),
            },
        );

        executor.run("git add .", None).await.unwrap();
        let err = executor.run("git revert x", None).await.unwrap_err();
        assert!(matches!(err, ExecError::Failed { status: 1, .. }));
        // The failing attempt is still recorded.
        assert_eq!(executor.commands().len(), 2);
    }
}
