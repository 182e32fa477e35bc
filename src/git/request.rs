//! git::request
//!
//! Request and option types for the stage and commit services.
//!
//! These are plain data. Validation lives in the services so a request can
//! be built, serialized, and inspected freely before use.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for staging files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOptions {
    /// Pass `-f` to the staging command.
    #[serde(default)]
    pub force: bool,
    /// Pass `-v` to the staging command.
    #[serde(default)]
    pub verbose: bool,
    /// Working directory for the command; process cwd when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// A request to stage files in a git working tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRequest {
    /// Files to stage, in order. Must be non-empty.
    pub files: Vec<String>,
    /// Staging options.
    #[serde(default)]
    pub options: StageOptions,
}

/// Options for creating a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOptions {
    /// Pass `-v` to the commit command.
    #[serde(default)]
    pub verbose: bool,
    /// Working directory for the command; process cwd when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// A request to create a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    /// Commit message. Must be non-empty.
    pub message: String,
    /// Commit options.
    #[serde(default)]
    pub options: CommitOptions,
}
