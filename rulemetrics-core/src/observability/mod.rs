//! Tracing bootstrap.
//!
//! Host applications own their subscriber; this helper is for binaries
//! and tests that want the default env-filtered fmt output.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RULEMETRICS_LOG`,
/// falling back to `RUST_LOG`, then `info`.
///
/// Returns quietly if a global subscriber is already set.
pub fn init_tracing() {
    let filter = std::env::var("RULEMETRICS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .try_init()
        .is_ok();

    if installed {
        debug!(%filter, "tracing initialized");
    }
}
