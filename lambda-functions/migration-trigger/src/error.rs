use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    /// Any failure of the RunTask call. Alerting matches on the prefix text.
    #[error("failed to run the migration task: {0}")]
    RunTask(#[source] lambda_runtime::Error),
}
