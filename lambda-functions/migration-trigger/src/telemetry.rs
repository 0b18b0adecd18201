use tracing_subscriber::filter::{Builder, LevelFilter};

/// Filter used by the bootstrap. INFO unless `RUST_LOG` says otherwise, so
/// the per-invocation progress line is always written.
pub fn log_filter_builder() -> Builder {
    tracing_subscriber::EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter_builder().from_env_lossy())
        .json()
        .init();
}
