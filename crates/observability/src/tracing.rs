//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize JSON logging for the process.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();

    ::tracing::debug!(default_filter, "tracing initialized");
}
