//! git::services
//!
//! Shell-backed implementations of the stage, commit, and reversion
//! services.
//!
//! Each service owns a reference to the command executor and builds exactly
//! one command shape:
//!
//! - `git add "<files joined by space>"[ -f][ -v]`
//! - `git commit -m "<message>"[ -v]`, then `git log --format="%H" -n 1`
//! - `git revert <identifier>`
//!
//! Partial state is never cleaned up here; compensation is the action's
//! concern via its restore path.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::exec::CommandExecutor;

use super::request::{CommitRequest, StageRequest};
use super::traits::{CommitService, ReversionService, ServiceError, StageService};

/// Command that reads the identifier of the most recent commit.
const LOG_HEAD_COMMAND: &str = "git log --format=\"%H\" -n 1";

fn stage_command(request: &StageRequest) -> String {
    let mut command = format!("git add \"{}\"", request.files.join(" "));
    if request.options.force {
        command.push_str(" -f");
    }
    if request.options.verbose {
        command.push_str(" -v");
    }
    command
}

fn commit_command(request: &CommitRequest) -> String {
    let mut command = format!("git commit -m \"{}\"", request.message);
    if request.options.verbose {
        command.push_str(" -v");
    }
    command
}

fn revert_command(identifier: &str) -> String {
    format!("git revert {identifier}")
}

/// Stages files by shelling out to `git add`.
pub struct ShellStageService {
    executor: Arc<dyn CommandExecutor>,
}

impl ShellStageService {
    /// Create a stage service backed by `executor`.
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl StageService for ShellStageService {
    async fn stage(&self, request: &StageRequest) -> Result<(), ServiceError> {
        if request.files.is_empty() {
            return Err(ServiceError::NoFilesToStage);
        }

        let command = stage_command(request);
        debug!(command, "staging files");
        self.executor
            .run(&command, request.options.directory.as_deref())
            .await?;
        Ok(())
    }
}

/// Creates commits by shelling out to `git commit`.
pub struct ShellCommitService {
    executor: Arc<dyn CommandExecutor>,
}

impl ShellCommitService {
    /// Create a commit service backed by `executor`.
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl CommitService for ShellCommitService {
    async fn commit(&self, request: &CommitRequest) -> Result<String, ServiceError> {
        if request.message.is_empty() {
            return Err(ServiceError::EmptyCommitMessage);
        }

        let directory = request.options.directory.as_deref();
        let command = commit_command(request);
        debug!(command, "creating commit");
        self.executor.run(&command, directory).await?;

        // The executor does not guarantee trimmed output; the identifier
        // contract does.
        let identifier = self.executor.run(LOG_HEAD_COMMAND, directory).await?;
        let identifier = identifier.trim().to_string();
        info!(identifier = %identifier, "commit created");
        Ok(identifier)
    }
}

/// Reverts commits by shelling out to `git revert`.
pub struct ShellReversionService {
    executor: Arc<dyn CommandExecutor>,
}

impl ShellReversionService {
    /// Create a reversion service backed by `executor`.
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl ReversionService for ShellReversionService {
    async fn revert_commit(
        &self,
        identifier: &str,
        directory: Option<&Path>,
    ) -> Result<(), ServiceError> {
        let command = revert_command(identifier);
        info!(command, "reverting commit");
        self.executor.run(&command, directory).await?;
        Ok(())
    }
}
