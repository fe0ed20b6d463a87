pub mod builders;
pub mod fake_generator;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Set up tracing once per test process.
///
/// Output goes through the test writer, so it only appears for failing tests
/// unless the harness runs with `-- --nocapture`. Levels come from
/// `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, panicking if it takes longer than five seconds.
pub async fn with_timeout<F: std::future::Future>(f: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("test future did not finish within 5 seconds")
}
