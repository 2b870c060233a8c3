//! Label vocabulary of the classification target.

use serde::{Deserialize, Serialize};

/// Ordered list of all possible classification outcomes.
///
/// Per-class vectors on each rule are indexed by position in this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVocabulary {
    values: Vec<String>,
}

impl LabelVocabulary {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Ordered label names.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First matching position of `label`. Values are assumed unique.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.values.iter().position(|v| v == label)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_returns_position() {
        let vocab: LabelVocabulary = ["yes", "no"].into_iter().collect();
        assert_eq!(vocab.index_of("yes"), Some(0));
        assert_eq!(vocab.index_of("no"), Some(1));
        assert_eq!(vocab.index_of("maybe"), None);
    }

    #[test]
    fn test_index_of_first_match_wins() {
        let vocab: LabelVocabulary = ["a", "b", "a"].into_iter().collect();
        assert_eq!(vocab.index_of("a"), Some(0));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = LabelVocabulary::new(Vec::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab.index_of("yes"), None);
    }
}
