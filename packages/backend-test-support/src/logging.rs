//! Quiet, capture-friendly tracing for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_TEST_FILTER: &str = "warn";

/// Filter directive: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_TEST_FILTER.to_string())
}

/// Install the test subscriber once per process.
///
/// Safe to call from every `#[ctor]` hook and test; later calls are no-ops,
/// and an already-installed global subscriber is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directive())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
