//! Telemetry
//!
//! Structured logging setup for the ring queue and its CLI.
//! - Quiet by default: nothing is installed unless `RUST_LOG` is set
//! - Compact single-line output on stderr so stdout stays clean for data
//! - Idempotent: repeated initialization is ignored

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when the caller's filter string does not parse.
pub const FALLBACK_FILTER: &str = "warn";

/// Initialize the global subscriber from `RUST_LOG`, if it is set.
pub fn init_tracing() {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init_tracing_with_filter(&filter);
    }
}

/// Initialize at info level regardless of `RUST_LOG`.
pub fn init_tracing_verbose() {
    init_tracing_with_filter("info")
}

/// Initialize with a custom filter string.
pub fn init_tracing_with_filter(filter: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // stdout carries the ring contents, so events go to stderr
        let filter_layer =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}

/// Subscriber for tests: debug level, captured by the test harness.
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
