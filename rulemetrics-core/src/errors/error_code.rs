//! Stable error codes for surfacing errors across process boundaries.

/// Code for statistics derivation and lookup failures.
pub const STATS_ERROR: &str = "STATS_ERROR";

/// Maps every error enum to a stable machine-readable code.
pub trait MetricsErrorCode {
    fn error_code(&self) -> &'static str;
}
