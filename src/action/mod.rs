//! action
//!
//! Option schema, execution context, and the action lifecycle.
//!
//! # Architecture
//!
//! A [`PipelineAction`] is the unit of orchestration: it declares its
//! options, creates a fresh context per run, and exposes an
//! execute/restore pair the orchestrator drives. The action never advances
//! itself; every external command is an `.await` the orchestrator's runtime
//! interleaves with other pipeline I/O.
//!
//! Lifecycle on the success path: create context → (optional restoration
//! point) → execute. If a *later* pipeline step fails, the orchestrator
//! calls [`PipelineAction::restore`] with the same context, which compensates
//! using whatever state execute captured.
//!
//! # Invariants
//!
//! - One context per run; never shared across concurrent pipeline runs
//! - `execute` performs its steps in declared order (stage before commit)
//! - Restoration failures are reported distinctly from execution failures,
//!   so the orchestrator can flag "committed but rollback failed" runs

mod commit;
mod options;

use async_trait::async_trait;
use thiserror::Error;

use crate::git::ServiceError;

pub use commit::{ActionContext, GitCommitAction};
pub use options::{keys, ActionOption, OptionKind, OptionValues, OPTIONS};

/// Errors from an action's lifecycle.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Mutually exclusive options were both provided.
    #[error("options `{left}` and `{right}` are mutually exclusive")]
    OptionConflict {
        /// First conflicting option key
        left: &'static str,
        /// Second conflicting option key
        right: &'static str,
    },

    /// A service failed while executing the action.
    #[error("execution failed: {0}")]
    Execution(#[source] ServiceError),

    /// A service failed while restoring the action.
    ///
    /// Kept distinct from [`ActionError::Execution`] so the orchestrator can
    /// decide pipeline-level handling (e.g. mark the run as requiring manual
    /// intervention).
    #[error("restoration failed: {0}")]
    Restoration(#[source] ServiceError),
}

/// A reversible pipeline step.
///
/// The orchestrator drives the lifecycle; implementations only define what
/// each transition does. Each `.await` inside `execute` and `restore` is a
/// suspension point at which control returns to the orchestrator's runtime.
#[async_trait]
pub trait PipelineAction: Send + Sync {
    /// Per-run mutable state, owned by exactly one execute/restore cycle.
    type Context: Send;

    /// Stable identifier used by the orchestrator's registry.
    fn identifier(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Static description.
    fn description(&self) -> &'static str;

    /// Declarative option schema consumed by the host.
    fn options(&self) -> &'static [ActionOption];

    /// Create a fresh context for one run.
    fn create_context(&self, values: &OptionValues) -> Self::Context;

    /// Snapshot whatever pre-execution state restoration will need.
    ///
    /// Actions whose compensation does not require a snapshot implement this
    /// as a no-op.
    async fn create_restoration_point(
        &self,
        values: &OptionValues,
        context: &mut Self::Context,
    ) -> Result<(), ActionError>;

    /// Execute the action against `context`.
    async fn execute(
        &self,
        values: &OptionValues,
        context: &mut Self::Context,
    ) -> Result<(), ActionError>;

    /// Compensate a previously executed run using the state in `context`.
    async fn restore(
        &self,
        values: &OptionValues,
        context: &mut Self::Context,
    ) -> Result<(), ActionError>;
}
