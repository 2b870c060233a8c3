//! Core types for the statistics engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a rule inside one model: its position in the model's
/// rule order. Structurally duplicated rules stay distinct.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RuleId(pub usize);

impl RuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Derived statistics for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleMetrics {
    /// Fraction of all covered training cases that carry the rule's
    /// predicted class.
    pub support: f64,
    /// Model probability that a matching case belongs to the predicted
    /// class, copied verbatim from the rule.
    pub confidence: f64,
}

/// What a support derivation does when the model covers zero cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCasePolicy {
    /// Fail construction with `StatsError::NoCases`.
    Reject,
    /// Derive NaN supports and leave the decision to the caller.
    PropagateNan,
}

/// Configuration for statistics derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Behavior on a zero-case model. Default: `Reject`.
    pub zero_case_policy: ZeroCasePolicy,
    /// Warn when the vocabulary defines more than two labels, since the
    /// case total only counts the first two frequency slots. Default:
    /// true.
    pub multiclass_warning: bool,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            zero_case_policy: ZeroCasePolicy::Reject,
            multiclass_warning: true,
        }
    }
}
