//! Tracing setup shared by every engine test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test tracing subscriber. Safe to call from any number of
/// test binaries and threads; only the first call does anything.
///
/// Verbosity comes from `TEST_LOG`, then `RUST_LOG`, then defaults to
/// `warn` so passing runs stay quiet.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // keep output attached to the owning test
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
