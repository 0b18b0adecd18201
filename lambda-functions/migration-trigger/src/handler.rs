use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::config::LauncherConfig;
use crate::runner::TaskRunner;
use crate::service::MigrationTriggerService;

/// Lambda entry point. The payload is ignored; configuration is re-read from
/// the environment on every invocation.
pub async fn function_handler<R: TaskRunner>(
    service: &MigrationTriggerService<R>,
    _event: LambdaEvent<Value>,
) -> Result<String, Error> {
    let config = LauncherConfig::from_env();

    Ok(service.trigger(&config).await?)
}
