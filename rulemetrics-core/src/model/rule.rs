//! Rules and the rule-list model.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::vocabulary::LabelVocabulary;

/// Per-class count vector, in vocabulary order. Two-wide inline for the
/// binary targets these models are trained on.
pub type ClassCounts = SmallVec<[u64; 2]>;

/// Per-class probability vector, in vocabulary order, summing to 1.0.
pub type ClassProbabilities = SmallVec<[f64; 2]>;

/// One trained classification rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable antecedent text. Kept for reporting layers, never
    /// interpreted here.
    pub premise: String,
    /// The class value this rule predicts.
    pub label: String,
    /// Training cases matching the premise, per class.
    pub frequencies: ClassCounts,
    /// Model probability that a matching case belongs to each class.
    pub confidences: ClassProbabilities,
}

impl Rule {
    pub fn new(
        premise: impl Into<String>,
        label: impl Into<String>,
        frequencies: impl Into<ClassCounts>,
        confidences: impl Into<ClassProbabilities>,
    ) -> Self {
        Self {
            premise: premise.into(),
            label: label.into(),
            frequencies: frequencies.into(),
            confidences: confidences.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.premise, self.label)
    }
}

/// A trained rule-list model: ordered rules plus the label vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleModel {
    label: LabelVocabulary,
    rules: Vec<Rule>,
}

impl RuleModel {
    pub fn new(label: LabelVocabulary, rules: Vec<Rule>) -> Self {
        Self { label, rules }
    }

    /// Rules in training order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Vocabulary of the classification target.
    pub fn label(&self) -> &LabelVocabulary {
        &self.label
    }

    /// Number of rules in the model.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
