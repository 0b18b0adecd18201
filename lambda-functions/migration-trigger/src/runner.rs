use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::operation::run_task::RunTaskOutput;
use aws_sdk_ecs::Client as EcsClient;
use lambda_runtime::Error;
use tracing::debug;

use crate::request::MigrationTaskRequest;

/// What came back from a successful RunTask call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTaskSummary {
    pub task_arns: Vec<String>,
    /// Per-task placement failures reported alongside a successful response.
    pub failures: Vec<String>,
}

impl RunTaskSummary {
    pub fn from_output(output: &RunTaskOutput) -> Self {
        Self {
            task_arns: output
                .tasks()
                .iter()
                .filter_map(|task| task.task_arn())
                .map(str::to_owned)
                .collect(),
            failures: output
                .failures()
                .iter()
                .map(|failure| {
                    format!(
                        "{}: {}",
                        failure.arn().unwrap_or("unknown"),
                        failure.reason().unwrap_or("no reason given")
                    )
                })
                .collect(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run_task(&self, request: &MigrationTaskRequest) -> Result<RunTaskSummary, Error>;
}

pub struct EcsTaskRunner {
    ecs_client: EcsClient,
}

impl EcsTaskRunner {
    pub fn new(ecs_client: EcsClient) -> Self {
        Self { ecs_client }
    }

    pub async fn from_env() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        Self::new(EcsClient::new(&config))
    }
}

#[async_trait]
impl TaskRunner for EcsTaskRunner {
    async fn run_task(&self, request: &MigrationTaskRequest) -> Result<RunTaskSummary, Error> {
        let output = self
            .ecs_client
            .run_task()
            .cluster(&request.cluster)
            .task_definition(&request.task_definition)
            .launch_type(request.launch_type().clone())
            .count(request.count())
            .network_configuration(request.network_configuration()?)
            .send()
            .await
            // SdkError's Display is only the outer kind; keep the service code and message.
            .map_err(|e| Error::from(DisplayErrorContext(e).to_string()))?;

        let summary = RunTaskSummary::from_output(&output);

        for arn in &summary.task_arns {
            debug!(task_arn = %arn, "Started task");
        }
        for failure in &summary.failures {
            debug!("RunTask reported failure: {}", failure);
        }

        Ok(summary)
    }
}
