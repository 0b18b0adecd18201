use lambda_runtime::{run, service_fn, Error};
use migration_trigger::{function_handler, init_tracing, EcsTaskRunner, MigrationTriggerService};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let service = MigrationTriggerService::new(EcsTaskRunner::from_env().await);

    run(service_fn(|event| function_handler(&service, event))).await
}
