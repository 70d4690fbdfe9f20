//! Precision/recall over fuzzy label matching.
//!
//! The matcher is greedy and order-dependent: each extracted label is
//! compared against the not-yet-matched ground-truth labels in their
//! original order, and the first one passing the similarity threshold is
//! consumed. This is deliberately NOT optimal bipartite matching — the
//! reference outputs depend on the first-match policy, so "fixing" it to
//! a maximum-weight assignment would change scores.

use crate::similarity::similarity_match;
use serde::{Deserialize, Serialize};

/// Default similarity threshold for [`Evaluator`].
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Result of evaluating one extracted label set against ground truth.
///
/// Partition invariants:
/// - every extracted label lands in exactly one of `true_positives` /
///   `false_positives`;
/// - every ground-truth label is consumed by at most one true positive,
///   unconsumed ones end up in `false_negatives`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// tp / (tp + fp), 0.0 when nothing was extracted. Rounded to 2 decimals.
    pub precision: f64,
    /// tp / (tp + fn), 0.0 when ground truth is empty. Rounded to 2 decimals.
    pub recall: f64,
    /// Extracted labels that matched a ground-truth label.
    pub true_positives: Vec<String>,
    /// Extracted labels with no match.
    pub false_positives: Vec<String>,
    /// Ground-truth labels left unmatched.
    pub false_negatives: Vec<String>,
}

/// Fuzzy-matching precision/recall calculator.
///
/// Stateless apart from the configured threshold; [`compute_metrics`]
/// never mutates its inputs and is total over any two label sequences,
/// including empty ones.
///
/// [`compute_metrics`]: Evaluator::compute_metrics
///
/// # Example
///
/// ```
/// use bpmn_eval::eval::Evaluator;
///
/// let evaluator = Evaluator::new(0.7);
/// let gt = vec!["Shipped".to_string(), "Order is received".to_string()];
/// let extracted = vec!["shipped".to_string(), "order received".to_string()];
///
/// let result = evaluator.compute_metrics(&gt, &extracted);
/// assert_eq!(result.precision, 1.0);
/// assert_eq!(result.recall, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    threshold: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Evaluator {
    /// Create an evaluator with the given similarity threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured similarity threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check whether two labels match under the configured threshold.
    #[must_use]
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        similarity_match(a, b, self.threshold)
    }

    /// Partition extracted labels into TP/FP, leftover ground truth into
    /// FN, and derive precision/recall.
    ///
    /// Greedy first-match scan: for each extracted label in order, the
    /// first still-unmatched ground-truth label passing the threshold is
    /// consumed. A consumed label cannot match twice.
    #[must_use]
    pub fn compute_metrics(&self, ground_truth: &[String], extracted: &[String]) -> MatchResult {
        let mut remaining: Vec<String> = ground_truth.to_vec();
        let mut true_positives = Vec::new();
        let mut false_positives = Vec::new();

        for label in extracted {
            match remaining.iter().position(|gt| self.is_match(label, gt)) {
                Some(idx) => {
                    true_positives.push(label.clone());
                    remaining.remove(idx);
                }
                None => false_positives.push(label.clone()),
            }
        }

        let tp = true_positives.len();
        let fp = false_positives.len();
        let fn_ = remaining.len();

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };

        MatchResult {
            precision: round2(precision),
            recall: round2(recall),
            true_positives,
            false_positives,
            false_negatives: remaining,
        }
    }
}

/// Round to 2 decimal places for reporting.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_perfect_extraction() {
        let gt = labels(&["Order is received", "Checks stock availability", "Shipped"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &gt);

        assert_eq!(result.precision, 1.0);
        assert_eq!(result.recall, 1.0);
        assert_eq!(result.true_positives.len(), gt.len());
        assert!(result.false_positives.is_empty());
        assert!(result.false_negatives.is_empty());
    }

    #[test]
    fn test_disjoint_sets() {
        let gt = labels(&["Approve Loan", "Reject Loan"]);
        let extracted = labels(&["water the plants", "feed the cat", "mow the lawn"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);

        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert!(result.true_positives.is_empty());
        assert_eq!(result.false_positives, extracted);
        assert_eq!(result.false_negatives, gt);
    }

    #[test]
    fn test_empty_extracted() {
        let gt = labels(&["Shipped", "Error Email is sent"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &[]);

        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.false_negatives, gt);
    }

    #[test]
    fn test_empty_ground_truth() {
        let extracted = labels(&["Shipped"]);
        let result = Evaluator::new(0.7).compute_metrics(&[], &extracted);

        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.false_positives, extracted);
        assert!(result.false_negatives.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let result = Evaluator::new(0.7).compute_metrics(&[], &[]);
        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
    }

    #[test]
    fn test_ground_truth_consumed_once() {
        // Two extracted labels both similar to the single GT label: only
        // the first may consume it.
        let gt = labels(&["Shipped"]);
        let extracted = labels(&["shipped", "Shipped"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);

        assert_eq!(result.true_positives, labels(&["shipped"]));
        assert_eq!(result.false_positives, labels(&["Shipped"]));
        assert_eq!(result.precision, 0.5);
        assert_eq!(result.recall, 1.0);
    }

    #[test]
    fn test_greedy_takes_first_in_remaining_order() {
        // "check stock" passes the threshold against both GT labels; the
        // greedy scan must take the earlier one even though the later one
        // is an exact match.
        let gt = labels(&["check stocks", "check stock"]);
        let extracted = labels(&["check stock"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);

        assert_eq!(result.true_positives, labels(&["check stock"]));
        assert_eq!(result.false_negatives, labels(&["check stock"]));
    }

    #[test]
    fn test_concrete_scenario() {
        let gt = labels(&["Shipped", "Order is received"]);
        let extracted = labels(&["shipped", "order received", "unrelated item"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);

        assert_eq!(result.true_positives, labels(&["shipped", "order received"]));
        assert_eq!(result.false_positives, labels(&["unrelated item"]));
        assert!(result.false_negatives.is_empty());
        assert_eq!(result.precision, 0.67);
        assert_eq!(result.recall, 1.0);
    }

    #[test]
    fn test_inputs_not_mutated_and_idempotent() {
        let gt = labels(&["Assess credit risk", "Approve Loan"]);
        let extracted = labels(&["assess credit risk", "reject loan"]);
        let gt_before = gt.clone();
        let extracted_before = extracted.clone();

        let evaluator = Evaluator::new(0.7);
        let first = evaluator.compute_metrics(&gt, &extracted);
        let second = evaluator.compute_metrics(&gt, &extracted);

        assert_eq!(gt, gt_before);
        assert_eq!(extracted, extracted_before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rounding_two_decimals() {
        // 1 TP out of 3 extracted -> 1/3 -> 0.33
        let gt = labels(&["Shipped"]);
        let extracted = labels(&["shipped", "alpha", "beta"]);
        let result = Evaluator::new(0.7).compute_metrics(&gt, &extracted);
        assert_eq!(result.precision, 0.33);
    }

    #[test]
    fn test_default_threshold() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.threshold(), DEFAULT_THRESHOLD);
    }
}
