//! Eager support/confidence derivation over a trained rule model.
//!
//! One pass at construction, cached lookups afterward. The case total
//! reads the first two frequency slots of every rule; that derivation
//! is only meaningful for binary targets and is deliberately not
//! generalized to wider vocabularies.

use rulemetrics_core::errors::StatsError;
use rulemetrics_core::model::RuleModel;
use rulemetrics_core::types::collections::FxHashMap;
use tracing::{debug, warn};

use super::types::{RuleId, RuleMetrics, StatisticsConfig, ZeroCasePolicy};

/// Frequency slots the case total reads from every rule.
const CASE_SLOTS: usize = 2;

/// Cached per-rule statistics for one trained rule model.
///
/// Borrows the model for its whole lifetime: the derivation assumes a
/// stable model, and the borrow turns mutation during that window into
/// a compile error. Either the whole object derives or construction
/// fails; no partial statistics are observable.
#[derive(Debug)]
pub struct RuleStatistics<'m> {
    model: &'m RuleModel,
    total_cases: u64,
    per_rule: FxHashMap<RuleId, RuleMetrics>,
}

impl<'m> RuleStatistics<'m> {
    /// Derive statistics with the default configuration.
    pub fn from_model(model: &'m RuleModel) -> Result<Self, StatsError> {
        Self::from_model_with(model, StatisticsConfig::default())
    }

    /// Derive statistics under an explicit configuration.
    pub fn from_model_with(
        model: &'m RuleModel,
        config: StatisticsConfig,
    ) -> Result<Self, StatsError> {
        if config.multiclass_warning && model.label().len() > CASE_SLOTS {
            warn!(
                labels = model.label().len(),
                "case total only counts the first two frequency slots"
            );
        }

        let total_cases = case_total(model)?;
        let mut per_rule = FxHashMap::default();

        for (index, rule) in model.rules().iter().enumerate() {
            let label_index =
                model
                    .label()
                    .index_of(&rule.label)
                    .ok_or_else(|| StatsError::LabelNotFound {
                        label: rule.label.clone(),
                    })?;

            let confidence =
                *rule
                    .confidences
                    .get(label_index)
                    .ok_or(StatsError::TruncatedRule {
                        rule: index,
                        expected: label_index + 1,
                        actual: rule.confidences.len(),
                    })?;

            let frequency =
                *rule
                    .frequencies
                    .get(label_index)
                    .ok_or(StatsError::TruncatedRule {
                        rule: index,
                        expected: label_index + 1,
                        actual: rule.frequencies.len(),
                    })?;

            let support = if total_cases == 0 {
                match config.zero_case_policy {
                    ZeroCasePolicy::Reject => return Err(StatsError::NoCases),
                    ZeroCasePolicy::PropagateNan => f64::NAN,
                }
            } else {
                frequency as f64 / total_cases as f64
            };

            per_rule.insert(
                RuleId(index),
                RuleMetrics {
                    support,
                    confidence,
                },
            );
        }

        debug!(
            rules = per_rule.len(),
            total_cases, "derived rule statistics"
        );

        Ok(Self {
            model,
            total_cases,
            per_rule,
        })
    }

    /// Total training cases covered by the model.
    pub fn total_cases(&self) -> u64 {
        self.total_cases
    }

    /// Support for `id`: the fraction of covered cases carrying the
    /// rule's predicted class.
    pub fn support(&self, id: RuleId) -> Result<f64, StatsError> {
        self.metrics(id).map(|m| m.support)
    }

    /// Confidence for `id`, exactly as the model reported it.
    pub fn confidence(&self, id: RuleId) -> Result<f64, StatsError> {
        self.metrics(id).map(|m| m.confidence)
    }

    /// Both derived values for `id`.
    pub fn metrics(&self, id: RuleId) -> Result<RuleMetrics, StatsError> {
        self.per_rule
            .get(&id)
            .copied()
            .ok_or(StatsError::UnknownRule { id: id.index() })
    }

    /// All metrics in model order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, RuleMetrics)> + '_ {
        (0..self.model.len()).filter_map(move |index| {
            let id = RuleId(index);
            self.per_rule.get(&id).map(|m| (id, *m))
        })
    }

    /// Ordered label names of the model vocabulary.
    pub fn label_names(&self) -> &[String] {
        self.model.label().values()
    }

    /// The backing model.
    pub fn model(&self) -> &RuleModel {
        self.model
    }

    /// Number of rules covered.
    pub fn len(&self) -> usize {
        self.per_rule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_rule.is_empty()
    }
}

/// Sum the first two frequency slots over all rules.
///
/// Only semantically correct for binary targets: counts in slots beyond
/// the first two never enter the total.
fn case_total(model: &RuleModel) -> Result<u64, StatsError> {
    let mut total = 0u64;
    for (index, rule) in model.rules().iter().enumerate() {
        if rule.frequencies.len() < CASE_SLOTS {
            return Err(StatsError::TruncatedRule {
                rule: index,
                expected: CASE_SLOTS,
                actual: rule.frequencies.len(),
            });
        }
        total += rule.frequencies[0] + rule.frequencies[1];
    }
    Ok(total)
}
