//! `loomerp-observability` — shared tracing/logging initialization.
//!
//! Library crates in this workspace only emit `tracing` events; subscribing
//! is the host's job. Binaries and test harnesses call [`init`] once at
//! startup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process, honoring `RUST_LOG`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with an explicit default filter.
///
/// `RUST_LOG`, when set, still takes precedence over `default_filter`.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
