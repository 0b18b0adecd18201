use tracing::info;

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::request::MigrationTaskRequest;
use crate::runner::TaskRunner;

pub const SUCCESS_MESSAGE: &str = "Liquibase task triggered successfully!";

pub struct MigrationTriggerService<R> {
    runner: R,
}

impl<R: TaskRunner> MigrationTriggerService<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Launches the migration task once. No retries.
    pub async fn trigger(&self, config: &LauncherConfig) -> Result<String, LauncherError> {
        let request = MigrationTaskRequest::from_config(config);

        info!(
            cluster = %request.cluster,
            "Running Liquibase task in cluster {}...",
            request.cluster
        );

        self.runner
            .run_task(&request)
            .await
            .map_err(LauncherError::RunTask)?;

        Ok(SUCCESS_MESSAGE.to_string())
    }
}
