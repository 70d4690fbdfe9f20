//! Property-based invariant tests for the matcher and metrics.

use bpmn_eval::eval::Evaluator;
use bpmn_eval::similarity::{ratio, similarity_match};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z ?]{0,16}"
}

fn labels(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(label(), 0..max)
}

proptest! {
    #[test]
    fn ratio_is_bounded(a in label(), b in label()) {
        let r = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn identical_strings_match_at_any_threshold(s in label(), t in 0.0f64..=1.0) {
        prop_assert!(similarity_match(&s, &s, t));
    }

    #[test]
    fn case_does_not_affect_matching(a in label(), b in label(), t in 0.0f64..=1.0) {
        prop_assert_eq!(
            similarity_match(&a, &b, t),
            similarity_match(&a.to_uppercase(), &b, t)
        );
    }

    #[test]
    fn partitions_cover_inputs_exactly(gt in labels(8), extracted in labels(8)) {
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);

        // Every extracted label is exactly one of TP or FP.
        prop_assert_eq!(
            result.true_positives.len() + result.false_positives.len(),
            extracted.len()
        );
        // Every ground-truth label is consumed at most once.
        prop_assert_eq!(
            result.true_positives.len() + result.false_negatives.len(),
            gt.len()
        );
        prop_assert!(result.true_positives.len() <= gt.len());
    }

    #[test]
    fn scores_are_bounded(gt in labels(8), extracted in labels(8)) {
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);
        prop_assert!((0.0..=1.0).contains(&result.precision));
        prop_assert!((0.0..=1.0).contains(&result.recall));
    }

    #[test]
    fn compute_metrics_is_deterministic(gt in labels(6), extracted in labels(6)) {
        let evaluator = Evaluator::new(0.7);
        let first = evaluator.compute_metrics(&gt, &extracted);
        let second = evaluator.compute_metrics(&gt, &extracted);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn caller_sequences_are_untouched(gt in labels(6), extracted in labels(6)) {
        let gt_before = gt.clone();
        let extracted_before = extracted.clone();
        let _ = Evaluator::new(0.7).compute_metrics(&gt, &extracted);
        prop_assert_eq!(gt, gt_before);
        prop_assert_eq!(extracted, extracted_before);
    }
}
