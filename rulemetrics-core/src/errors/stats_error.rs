//! Statistics errors.

use super::error_code::{self, MetricsErrorCode};

/// Errors from rule statistics derivation and lookup.
///
/// All variants are detected at the point of derivation or lookup and
/// propagated immediately; nothing is transient, nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// A rule predicts a label absent from the model vocabulary.
    #[error("label {label:?} not found in the model vocabulary")]
    LabelNotFound { label: String },

    /// The model covers zero training cases, so support ratios are
    /// undefined under the rejecting policy.
    #[error("model covers zero training cases; support is undefined")]
    NoCases,

    /// Lookup for a rule that was not part of the construction model.
    /// Distinct from a rule whose derived value is legitimately 0.
    #[error("rule #{id} was not part of the model these statistics were derived from")]
    UnknownRule { id: usize },

    /// A per-class vector is shorter than the slot a derivation must
    /// read.
    #[error("rule #{rule} carries {actual} class slots, derivation reads {expected}")]
    TruncatedRule {
        rule: usize,
        expected: usize,
        actual: usize,
    },
}

impl MetricsErrorCode for StatsError {
    fn error_code(&self) -> &'static str {
        error_code::STATS_ERROR
    }
}
