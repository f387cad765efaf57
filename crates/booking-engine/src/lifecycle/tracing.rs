//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initializes structured logging, filtered through `RUST_LOG`.
///
/// - `RUST_LOG=info` for the usual operational view
/// - `RUST_LOG=booking_engine=debug` to trace one crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
