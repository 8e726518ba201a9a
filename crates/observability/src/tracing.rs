//! Subscriber setup for the catalog service and its tests.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

const TEST_FILTER: &str = "warn";

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the service subscriber: one JSON object per event, no targets.
///
/// Only the first call in a process installs anything.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .try_init();
}

/// Install a plain-text subscriber routed through the libtest capture.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(TEST_FILTER))
        .with_test_writer()
        .try_init();
}
