//! git
//!
//! Domain model and services for staging, committing, and reverting.
//!
//! # Architecture
//!
//! Three narrow capability traits ([`StageService`], [`CommitService`],
//! [`ReversionService`]) sit between the action and the shell. Each
//! shell-backed implementation builds exactly one command shape and hands it
//! to the [`crate::exec::CommandExecutor`]; validation happens here, before
//! anything runs.
//!
//! # Invariants
//!
//! - A stage request with zero files never reaches the executor
//! - A commit request with an empty message never reaches the executor
//! - The commit identifier returned by [`CommitService::commit`] is the
//!   trimmed stdout of `git log --format="%H" -n 1`

mod request;
mod services;
mod traits;

pub use request::{CommitOptions, CommitRequest, StageOptions, StageRequest};
pub use services::{ShellCommitService, ShellReversionService, ShellStageService};
pub use traits::{CommitService, ReversionService, ServiceError, StageService};
