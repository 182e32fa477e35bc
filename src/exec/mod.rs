//! exec
//!
//! Single doorway to external process execution.
//!
//! # Architecture
//!
//! Every shell invocation in this crate flows through the
//! [`CommandExecutor`] trait. The services never touch
//! `tokio::process::Command` directly, which keeps them testable against the
//! deterministic [`MockExecutor`] and keeps working-directory handling in
//! one place.
//!
//! # Invariants
//!
//! - Executors are invoked serially by the action; no parallel git
//!   operations against the same working directory
//! - Captured stdout is returned verbatim (callers trim where their
//!   contract requires it)

mod mock;
mod shell;
mod traits;

pub use mock::{ExecutedCommand, MockExecutor};
pub use shell::ShellExecutor;
pub use traits::{CommandExecutor, ExecError};
