//! Tracing/logging initialization.
//!
//! JSON lines on stdout, filtered by `RUST_LOG`. The pricing engine logs each
//! recomputation at `info` and each kit at `debug`, so `RUST_LOG=kitcalc=debug`
//! style filters show the full breakdown.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `default_directive` applies when `RUST_LOG` is unset or unparsable. Returns
/// `false` if a global subscriber was already installed.
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
