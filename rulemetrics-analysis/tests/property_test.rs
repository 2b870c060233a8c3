//! Property tests: derivation invariants over random binary models.

use proptest::prelude::*;
use rulemetrics_analysis::statistics::{RuleId, RuleStatistics};
use rulemetrics_core::errors::StatsError;
use rulemetrics_core::model::{LabelVocabulary, Rule, RuleModel};

fn binary_rule() -> impl Strategy<Value = Rule> {
    (0..2usize, 0u64..1_000, 0u64..1_000, 0.0f64..=1.0).prop_map(
        |(label_index, yes_count, no_count, confidence)| {
            let labels = ["yes", "no"];
            Rule::new(
                "premise",
                labels[label_index],
                vec![yes_count, no_count],
                vec![confidence, 1.0 - confidence],
            )
        },
    )
}

fn binary_model() -> impl Strategy<Value = RuleModel> {
    proptest::collection::vec(binary_rule(), 1..40).prop_map(|rules| {
        let vocab: LabelVocabulary = ["yes", "no"].into_iter().collect();
        RuleModel::new(vocab, rules)
    })
}

proptest! {
    #[test]
    fn prop_entry_count_matches_rule_count(model in binary_model()) {
        match RuleStatistics::from_model(&model) {
            Ok(stats) => prop_assert_eq!(stats.len(), model.len()),
            // Only an all-zero frequency draw may fail.
            Err(err) => prop_assert!(matches!(err, StatsError::NoCases)),
        }
    }

    #[test]
    fn prop_support_lies_in_unit_interval(model in binary_model()) {
        if let Ok(stats) = RuleStatistics::from_model(&model) {
            for (_, metrics) in stats.iter() {
                prop_assert!((0.0..=1.0).contains(&metrics.support));
            }
        }
    }

    #[test]
    fn prop_total_is_sum_of_first_two_slots(model in binary_model()) {
        let expected: u64 = model
            .rules()
            .iter()
            .map(|r| r.frequencies[0] + r.frequencies[1])
            .sum();
        if let Ok(stats) = RuleStatistics::from_model(&model) {
            prop_assert_eq!(stats.total_cases(), expected);
        } else {
            prop_assert_eq!(expected, 0);
        }
    }

    #[test]
    fn prop_confidence_is_copied_verbatim(model in binary_model()) {
        if let Ok(stats) = RuleStatistics::from_model(&model) {
            for (index, rule) in model.rules().iter().enumerate() {
                let label_index = model.label().index_of(&rule.label).unwrap();
                let derived = stats.confidence(RuleId(index)).unwrap();
                prop_assert_eq!(derived, rule.confidences[label_index]);
            }
        }
    }

    #[test]
    fn prop_support_is_frequency_over_total(model in binary_model()) {
        if let Ok(stats) = RuleStatistics::from_model(&model) {
            let total = stats.total_cases() as f64;
            for (index, rule) in model.rules().iter().enumerate() {
                let label_index = model.label().index_of(&rule.label).unwrap();
                let expected = rule.frequencies[label_index] as f64 / total;
                let derived = stats.support(RuleId(index)).unwrap();
                prop_assert_eq!(derived, expected);
            }
        }
    }
}
