pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod runner;
pub mod service;
pub mod telemetry;

pub use config::LauncherConfig;
pub use error::LauncherError;
pub use handler::function_handler;
pub use request::MigrationTaskRequest;
pub use runner::{EcsTaskRunner, RunTaskSummary, TaskRunner};
pub use service::{MigrationTriggerService, SUCCESS_MESSAGE};
pub use telemetry::{init_tracing, log_filter_builder};
