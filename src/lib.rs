//! git-commit-action - A reversible git-commit step for pipeline orchestrators
//!
//! This crate implements a single pipeline action: stage files and create a
//! commit in a git repository, and undo exactly that commit if a later step
//! in the enclosing pipeline fails. The interesting part is the contract
//! with the orchestrator, not the git commands themselves: the action
//! declares its options, records the minimum state needed for compensation
//! (one commit identifier), and exposes an externally-driven
//! execute/restore lifecycle.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`exec`] - Single doorway to external process execution
//! - [`git`] - Domain requests and the stage/commit/revert services
//! - [`action`] - Option schema, execution context, and the action lifecycle
//!
//! The orchestrator, its dependency wiring, and any CLI surface live outside
//! this crate. Wiring is plain constructor injection: hand
//! [`action::GitCommitAction`] the three services (or just an executor via
//! [`action::GitCommitAction::with_executor`]) and drive the lifecycle.
//!
//! # Correctness Invariants
//!
//! 1. Staging always completes before the commit is attempted
//! 2. The context's commit identifier is set if and only if a commit succeeded
//! 3. `restore` reverts at most once, and only a commit that actually landed
//! 4. Validation failures never reach the underlying shell

pub mod action;
pub mod exec;
pub mod git;
