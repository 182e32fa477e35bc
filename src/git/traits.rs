//! git::traits
//!
//! Capability traits for the three git operations the action needs.
//!
//! # Design
//!
//! The action depends on these traits, never on the shell-backed
//! implementations, so an orchestrator (or a test) can substitute any of the
//! three independently. All methods are async: each call is one suspension
//! point in the action's lifecycle.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::exec::ExecError;

use super::request::{CommitRequest, StageRequest};

/// Errors from the git services.
///
/// Validation variants are raised synchronously, before any external command
/// runs. Execution failures propagate from the command executor untouched;
/// no service recovers or retries locally.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A stage request arrived with zero files.
    #[error("stage request must include at least one file")]
    NoFilesToStage,

    /// A commit request arrived with an empty message.
    #[error("commit request must include a non-empty message")]
    EmptyCommitMessage,

    /// The underlying command execution failed.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl ServiceError {
    /// Whether this error was raised before any command executed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::NoFilesToStage | ServiceError::EmptyCommitMessage
        )
    }
}

/// Stages files in a git working tree.
#[async_trait]
pub trait StageService: Send + Sync {
    /// Perform the staging described by `request`.
    async fn stage(&self, request: &StageRequest) -> Result<(), ServiceError>;
}

/// Creates commits in a git repository.
#[async_trait]
pub trait CommitService: Send + Sync {
    /// Create the commit described by `request` and return the identifier
    /// of the commit that resulted.
    async fn commit(&self, request: &CommitRequest) -> Result<String, ServiceError>;
}

/// Reverts commits by identifier.
///
/// Reverting is NOT idempotent: reverting the same identifier twice creates
/// two distinct revert commits (git's native behavior). Callers must invoke
/// at most once per committed identifier.
#[async_trait]
pub trait ReversionService: Send + Sync {
    /// Create a compensating revert commit for `identifier`.
    ///
    /// The identifier's format is not validated; an invalid one surfaces as
    /// an execution failure from the underlying git invocation.
    async fn revert_commit(
        &self,
        identifier: &str,
        directory: Option<&Path>,
    ) -> Result<(), ServiceError>;
}
