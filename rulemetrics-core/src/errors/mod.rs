//! Error handling for rulemetrics.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod error_code;
pub mod stats_error;

pub use error_code::MetricsErrorCode;
pub use stats_error::StatsError;
