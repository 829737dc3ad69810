//! Development-time tracing for debugging suite runs.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; the report
//! itself is product output on stdout and is unaffected by the filter.
//! Failed-test detail (exit code, captured streams) is only visible here,
//! at debug level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_level` (the `--log-level`
/// flag) when unset. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=kcc=debug kcc run --suite suite.yml
/// ```
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
