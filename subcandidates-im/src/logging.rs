//! Logging bootstrap for hosts embedding the controller

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`). Later calls do nothing.
pub fn init_logging() {
    init_logging_with_default("warn");
}

/// Like [`init_logging`], with the filter used when `RUST_LOG` is unset.
pub fn init_logging_with_default(default_filter: &str) {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
