//! action::commit
//!
//! The git-commit action: stage, commit, and revert-on-rollback.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::exec::CommandExecutor;
use crate::git::{
    CommitOptions, CommitRequest, CommitService, ReversionService, ShellCommitService,
    ShellReversionService, ShellStageService, StageOptions, StageRequest, StageService,
};

use super::options::{keys, ActionOption, OptionValues, OPTIONS};
use super::{ActionError, PipelineAction};

/// Per-run state for the git-commit action.
///
/// Created empty, written once after a successful commit, read once by the
/// restore path. The identifier is the sole piece of state needed to
/// reverse the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionContext {
    /// Identifier of the commit this run created, once it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_identifier: Option<String>,
}

/// A pipeline action that creates commits in a git repository and reverts
/// them on rollback.
///
/// The three capabilities are injected as trait objects; wiring happens in a
/// composition root outside this crate, or via
/// [`GitCommitAction::with_executor`] for the all-shell default.
pub struct GitCommitAction {
    stage: Arc<dyn StageService>,
    commit: Arc<dyn CommitService>,
    reversion: Arc<dyn ReversionService>,
}

impl GitCommitAction {
    /// Create an action from explicit service implementations.
    pub fn new(
        stage: Arc<dyn StageService>,
        commit: Arc<dyn CommitService>,
        reversion: Arc<dyn ReversionService>,
    ) -> Self {
        Self {
            stage,
            commit,
            reversion,
        }
    }

    /// Wire the shell-backed services around a single executor.
    pub fn with_executor(executor: Arc<dyn CommandExecutor>) -> Self {
        Self::new(
            Arc::new(ShellStageService::new(executor.clone())),
            Arc::new(ShellCommitService::new(executor.clone())),
            Arc::new(ShellReversionService::new(executor)),
        )
    }

    fn directory(values: &OptionValues) -> Option<PathBuf> {
        values.text(keys::DIRECTORY).map(PathBuf::from)
    }

    /// Derive the stage request from flat option values.
    ///
    /// `file` and `file-all` are mutually exclusive: staging `.` while a
    /// specific file list was also requested would silently ignore intent.
    fn stage_request(values: &OptionValues) -> Result<StageRequest, ActionError> {
        let listed = values.list(keys::FILE);

        let files = if values.flag(keys::FILE_ALL) {
            if !listed.is_empty() {
                return Err(ActionError::OptionConflict {
                    left: keys::FILE,
                    right: keys::FILE_ALL,
                });
            }
            vec![".".to_string()]
        } else {
            // May be empty; the stage service rejects that before running
            // anything.
            listed
        };

        Ok(StageRequest {
            files,
            options: StageOptions {
                force: values.flag(keys::FILE_FORCE),
                verbose: values.flag(keys::FILE_VERBOSE),
                directory: Self::directory(values),
            },
        })
    }

    /// Derive the commit request from flat option values.
    ///
    /// An absent message collapses to an empty string here and fails
    /// validation in the commit service, keeping that rule in one place.
    fn commit_request(values: &OptionValues) -> CommitRequest {
        CommitRequest {
            message: values.text(keys::MESSAGE).unwrap_or_default().to_string(),
            options: CommitOptions {
                verbose: values.flag(keys::VERBOSE),
                directory: Self::directory(values),
            },
        }
    }
}

#[async_trait]
impl PipelineAction for GitCommitAction {
    type Context = ActionContext;

    fn identifier(&self) -> &'static str {
        "git-commit"
    }

    fn name(&self) -> &'static str {
        "Git Commit"
    }

    fn description(&self) -> &'static str {
        "Creates commits in a git repository and reverts them on rollback."
    }

    fn options(&self) -> &'static [ActionOption] {
        OPTIONS
    }

    fn create_context(&self, _values: &OptionValues) -> ActionContext {
        ActionContext::default()
    }

    async fn create_restoration_point(
        &self,
        _values: &OptionValues,
        _context: &mut ActionContext,
    ) -> Result<(), ActionError> {
        // Nothing to snapshot: the compensating action is the revert itself,
        // keyed by the identifier execute captures.
        Ok(())
    }

    async fn execute(
        &self,
        values: &OptionValues,
        context: &mut ActionContext,
    ) -> Result<(), ActionError> {
        let stage_request = Self::stage_request(values)?;
        debug!(files = ?stage_request.files, "staging");
        self.stage
            .stage(&stage_request)
            .await
            .map_err(ActionError::Execution)?;

        let commit_request = Self::commit_request(values);
        let identifier = self
            .commit
            .commit(&commit_request)
            .await
            .map_err(ActionError::Execution)?;
        info!(identifier = %identifier, "commit recorded in context");
        context.commit_identifier = Some(identifier);
        Ok(())
    }

    async fn restore(
        &self,
        values: &OptionValues,
        context: &mut ActionContext,
    ) -> Result<(), ActionError> {
        let Some(identifier) = context.commit_identifier.as_deref() else {
            // The commit never landed; there is nothing to revert.
            debug!("restore skipped: no commit identifier in context");
            return Ok(());
        };

        self.reversion
            .revert_commit(identifier, Self::directory(values).as_deref())
            .await
            .map_err(ActionError::Restoration)?;
        info!(identifier, "commit reverted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{ExecError, MockExecutor};
    use crate::git::ServiceError;
    use serde_json::json;

    fn action_with_mock() -> (GitCommitAction, MockExecutor) {
        let executor = MockExecutor::new();
        let action = GitCommitAction::with_executor(Arc::new(executor.clone()));
        (action, executor)
    }

    #[test]
    fn identity_matches_the_registry_contract() {
        let (action, _) = action_with_mock();
        assert_eq!(action.identifier(), "git-commit");
        assert_eq!(action.name(), "Git Commit");
        assert_eq!(action.options().len(), 7);
    }

    #[test]
    fn context_starts_empty() {
        let (action, _) = action_with_mock();
        let context = action.create_context(&OptionValues::new());
        assert_eq!(context.commit_identifier, None);
    }

    #[tokio::test]
    async fn restoration_point_is_a_noop() {
        let (action, executor) = action_with_mock();
        let mut context = ActionContext::default();
        action
            .create_restoration_point(&OptionValues::new(), &mut context)
            .await
            .unwrap();
        assert!(executor.commands().is_empty());
        assert_eq!(context, ActionContext::default());
    }

    #[tokio::test]
    async fn execute_stages_then_commits_then_reads_identifier() {
        let (action, executor) = action_with_mock();
        executor.push_output(""); // git add
        executor.push_output(""); // git commit
        executor.push_output("deadbeef\n"); // git log

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix bug")
            .with(keys::FILE, json!(["a.txt", "b.txt"]));
        let mut context = action.create_context(&values);

        action.execute(&values, &mut context).await.unwrap();

        assert_eq!(
            executor.command_strings(),
            vec![
                "git add \"a.txt b.txt\"",
                "git commit -m \"fix bug\"",
                "git log --format=\"%H\" -n 1",
            ]
        );
        assert_eq!(context.commit_identifier.as_deref(), Some("deadbeef"));
    }

    #[tokio::test]
    async fn file_all_stages_dot_with_force() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix")
            .with(keys::FILE_ALL, true)
            .with(keys::FILE_FORCE, true);
        let mut context = action.create_context(&values);

        action.execute(&values, &mut context).await.unwrap();

        assert_eq!(executor.command_strings()[0], "git add \".\" -f");
    }

    #[tokio::test]
    async fn scalar_file_is_normalized_at_the_boundary() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix")
            .with(keys::FILE, "a.txt");
        let mut context = action.create_context(&values);

        action.execute(&values, &mut context).await.unwrap();

        assert_eq!(executor.command_strings()[0], "git add \"a.txt\"");
    }

    #[tokio::test]
    async fn file_and_file_all_conflict_before_anything_runs() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix")
            .with(keys::FILE, "a.txt")
            .with(keys::FILE_ALL, true);
        let mut context = action.create_context(&values);

        let err = action.execute(&values, &mut context).await.unwrap_err();

        assert!(matches!(err, ActionError::OptionConflict { .. }));
        assert!(executor.commands().is_empty());
        assert_eq!(context.commit_identifier, None);
    }

    #[tokio::test]
    async fn missing_files_fail_validation_without_commands() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new().with(keys::MESSAGE, "fix");
        let mut context = action.create_context(&values);

        let err = action.execute(&values, &mut context).await.unwrap_err();

        assert!(matches!(
            err,
            ActionError::Execution(ServiceError::NoFilesToStage)
        ));
        assert!(executor.commands().is_empty());
    }

    #[tokio::test]
    async fn stage_failure_prevents_the_commit_step() {
        let (action, executor) = action_with_mock();
        executor.fail_on(
            "git add",
            ExecError::Failed {
                command: "git add \"a.txt\"".to_string(),
                status: 128,
                stderr: "not a git repository".to_string(),
            },
        );

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix")
            .with(keys::FILE, "a.txt");
        let mut context = action.create_context(&values);

        let err = action.execute(&values, &mut context).await.unwrap_err();

        assert!(matches!(err, ActionError::Execution(_)));
        assert_eq!(executor.commands().len(), 1);
        assert_eq!(context.commit_identifier, None);
    }

    #[tokio::test]
    async fn directory_option_governs_every_command() {
        let (action, executor) = action_with_mock();
        executor.push_output("");
        executor.push_output("");
        executor.push_output("cafe\n");

        let values = OptionValues::new()
            .with(keys::MESSAGE, "fix")
            .with(keys::FILE, "a.txt")
            .with(keys::DIRECTORY, "/repo");
        let mut context = action.create_context(&values);

        action.execute(&values, &mut context).await.unwrap();
        action.restore(&values, &mut context).await.unwrap();

        for command in executor.commands() {
            assert_eq!(command.directory.as_deref(), Some(std::path::Path::new("/repo")));
        }
    }

    #[tokio::test]
    async fn restore_reverts_exactly_the_captured_commit() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new().with(keys::MESSAGE, "fix");
        let mut context = ActionContext {
            commit_identifier: Some("abc123".to_string()),
        };

        action.restore(&values, &mut context).await.unwrap();

        assert_eq!(executor.command_strings(), vec!["git revert abc123"]);
    }

    #[tokio::test]
    async fn restore_without_identifier_runs_nothing() {
        let (action, executor) = action_with_mock();

        let values = OptionValues::new().with(keys::MESSAGE, "fix");
        let mut context = ActionContext::default();

        action.restore(&values, &mut context).await.unwrap();

        assert!(executor.commands().is_empty());
    }

    #[tokio::test]
    async fn restore_failure_is_reported_as_restoration() {
        let (action, executor) = action_with_mock();
        executor.fail_on(
            "git revert",
            ExecError::Failed {
                command: "git revert abc123".to_string(),
                status: 1,
                stderr: "could not revert".to_string(),
            },
        );

        let values = OptionValues::new().with(keys::MESSAGE, "fix");
        let mut context = ActionContext {
            commit_identifier: Some("abc123".to_string()),
        };

        let err = action.restore(&values, &mut context).await.unwrap_err();

        assert!(matches!(err, ActionError::Restoration(_)));
    }
}
