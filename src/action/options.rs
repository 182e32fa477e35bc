//! action::options
//!
//! The declarative option schema and the loosely-typed value map the
//! orchestrator hands over.
//!
//! # Design
//!
//! Option values arrive as JSON-shaped data: a host may pass `file` as a
//! single string or as a list, and booleans may simply be absent.
//! Normalization happens here, once, at the boundary ([`OptionValues::list`]
//! wraps scalars and maps absence to an empty sequence); the service layer
//! only ever sees canonical types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option keys understood by the git-commit action.
pub mod keys {
    /// Commit message (required).
    pub const MESSAGE: &str = "message";
    /// Pass `-v` to the commit command.
    pub const VERBOSE: &str = "verbose";
    /// File(s) to stage.
    pub const FILE: &str = "file";
    /// Stage everything (`.`) instead of `file`.
    pub const FILE_ALL: &str = "file-all";
    /// Pass `-f` to the staging command.
    pub const FILE_FORCE: &str = "file-force";
    /// Pass `-v` to the staging command.
    pub const FILE_VERBOSE: &str = "file-verbose";
    /// Working directory for all commands.
    pub const DIRECTORY: &str = "directory";
}

/// Value type of an option, as declared to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Free-form text.
    Text,
    /// True/false flag.
    Boolean,
    /// Sequence of text values.
    List,
}

/// Static, read-only descriptor for one action option.
///
/// These are declarative metadata for the host's registry, not behavior.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionOption {
    /// Option key as the host spells it.
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the host must supply a value.
    pub is_required: bool,
    /// Declared value type.
    pub kind: OptionKind,
    /// Default value, if the option has one.
    pub default: Option<&'static str>,
}

/// The git-commit action's option schema.
pub const OPTIONS: &[ActionOption] = &[
    ActionOption {
        key: keys::MESSAGE,
        description: "The message of the commit",
        is_required: true,
        kind: OptionKind::Text,
        default: None,
    },
    ActionOption {
        key: keys::VERBOSE,
        description: "Whether the commit will be verbose",
        is_required: false,
        kind: OptionKind::Boolean,
        default: None,
    },
    ActionOption {
        key: keys::FILE,
        description: "The file(s) that will be committed",
        is_required: false,
        kind: OptionKind::List,
        default: None,
    },
    ActionOption {
        key: keys::FILE_ALL,
        description: "Whether all modified and deleted files will be committed",
        is_required: false,
        kind: OptionKind::Boolean,
        default: None,
    },
    ActionOption {
        key: keys::FILE_FORCE,
        description: "Whether the file staging will be forced",
        is_required: false,
        kind: OptionKind::Boolean,
        default: None,
    },
    ActionOption {
        key: keys::FILE_VERBOSE,
        description: "Whether the file staging will be verbose",
        is_required: false,
        kind: OptionKind::Boolean,
        default: None,
    },
    ActionOption {
        key: keys::DIRECTORY,
        description: "The path where the operation will be performed",
        is_required: false,
        kind: OptionKind::Text,
        default: None,
    },
];

/// Option values provided by the host for one run.
///
/// A thin wrapper over a JSON object with typed accessors. Accessors never
/// fail: a missing or mistyped flag reads as `false`, a missing text option
/// as `None`, a missing list as empty. Whether an empty result is an error
/// is the downstream contract's call (e.g. the stage service rejects an
/// empty file list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValues(Map<String, Value>);

impl OptionValues {
    /// Create an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for tests and embedding hosts.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Whether a value is present for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Read a boolean flag; absent or non-boolean reads as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Read a text option.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Read a list option, normalizing once at the boundary:
    /// a scalar is wrapped in a one-element sequence, absence becomes an
    /// empty sequence, and non-string elements are stringified.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(values)) => values.iter().map(stringify).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(value) => vec![stringify(value)],
        }
    }
}

impl From<Map<String, Value>> for OptionValues {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
