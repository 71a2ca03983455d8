//! Tracing initialization for binaries.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the binary's job. [`init`] wires up the conventional setup: compact
//! fmt output filtered by `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Call once, early in `main`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
