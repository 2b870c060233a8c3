//! Owned, serializable snapshot for reporting layers.

use serde::Serialize;

use super::engine::RuleStatistics;

/// One rule's row in a report.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub premise: String,
    pub label: String,
    pub support: f64,
    pub confidence: f64,
}

/// Snapshot of a full statistics object.
///
/// A pure copy of already-derived values; the underlying ratios are
/// never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    /// Total training cases covered by the model.
    pub total_cases: u64,
    /// Number of rules covered.
    pub rule_count: usize,
    /// Mean support across rules; 0.0 for an empty model.
    pub avg_support: f64,
    /// Mean confidence across rules; 0.0 for an empty model.
    pub avg_confidence: f64,
    /// Largest per-rule support; 0.0 for an empty model.
    pub max_support: f64,
    /// Per-rule rows, in model order.
    pub rules: Vec<RuleSummary>,
}

impl StatisticsSummary {
    pub fn from_statistics(stats: &RuleStatistics<'_>) -> Self {
        let mut rules = Vec::with_capacity(stats.len());
        let mut sum_support = 0.0;
        let mut sum_confidence = 0.0;
        let mut max_support = 0.0f64;

        for (id, metrics) in stats.iter() {
            let rule = &stats.model().rules()[id.index()];
            sum_support += metrics.support;
            sum_confidence += metrics.confidence;
            max_support = max_support.max(metrics.support);
            rules.push(RuleSummary {
                premise: rule.premise.clone(),
                label: rule.label.clone(),
                support: metrics.support,
                confidence: metrics.confidence,
            });
        }

        let rule_count = rules.len();
        let (avg_support, avg_confidence) = if rule_count == 0 {
            (0.0, 0.0)
        } else {
            (
                sum_support / rule_count as f64,
                sum_confidence / rule_count as f64,
            )
        };

        Self {
            total_cases: stats.total_cases(),
            rule_count,
            avg_support,
            avg_confidence,
            max_support,
            rules,
        }
    }
}
