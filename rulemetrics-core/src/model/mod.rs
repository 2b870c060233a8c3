//! Trained rule-list model types.
//!
//! The model is externally owned, read-only input: an ordered rule
//! sequence plus the label vocabulary of the classification target.
//! Construction does not validate shape; degenerate models are
//! representable and the statistics derivation defines their outcome.

pub mod rule;
pub mod vocabulary;

pub use rule::{ClassCounts, ClassProbabilities, Rule, RuleModel};
pub use vocabulary::LabelVocabulary;
