//! Score aggregation
//!
//! Combines per-category coverage ratios and weights into the overall
//! 0-100 score:
//!
//! ```text
//! overall = round(100 * Σ(weight_i * ratio_i) / Σ(weight_i))
//! ```
//!
//! clamped to [0, 100]. Weighted ratios keep the score monotonic: finding
//! more of a required pattern never lowers it, and a zero-weight category
//! cannot move it. The severity breakdown is tallied independently of the
//! score (see `models::SeverityBreakdown`).

use crate::models::CategoryCoverage;
use tracing::debug;

/// Weighted overall score over all category coverage samples.
///
/// An empty catalog imposes no requirements and scores 100.
pub fn overall_score(coverage: &[CategoryCoverage]) -> u32 {
    let weight_sum: f64 = coverage.iter().map(|c| c.weight).sum();
    if weight_sum <= 0.0 {
        return 100;
    }
    let weighted: f64 = coverage.iter().map(|c| c.weight * c.ratio).sum();
    let score = (100.0 * weighted / weight_sum).round();
    debug!(score, weight_sum, "aggregated overall score");
    score.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(category: &str, weight: f64, matched: usize, required: usize) -> CategoryCoverage {
        let ratio = if required == 0 {
            1.0
        } else {
            matched.min(required) as f64 / required as f64
        };
        CategoryCoverage {
            category: category.into(),
            weight,
            matched_count: matched,
            required_count: required,
            ratio,
        }
    }

    #[test]
    fn test_single_category_half_coverage() {
        // weight 10, 1 of 2 patterns matched
        let score = overall_score(&[sample("security", 10.0, 1, 2)]);
        assert_eq!(score, 50);
    }

    #[test]
    fn test_empty_coverage_scores_full() {
        assert_eq!(overall_score(&[]), 100);
    }

    #[test]
    fn test_weights_are_normalized() {
        // Same ratios, different absolute weights: same score.
        let a = overall_score(&[sample("a", 1.0, 1, 1), sample("b", 1.0, 0, 1)]);
        let b = overall_score(&[sample("a", 50.0, 1, 1), sample("b", 50.0, 0, 1)]);
        assert_eq!(a, b);
        assert_eq!(a, 50);
    }

    #[test]
    fn test_score_is_monotonic_in_matches() {
        let mut previous = 0;
        for matched in 0..=4 {
            let score = overall_score(&[
                sample("security", 30.0, matched, 4),
                sample("monitoring", 10.0, 1, 2),
            ]);
            assert!(score >= previous, "score dropped at matched={matched}");
            previous = score;
        }
    }

    #[test]
    fn test_excess_matches_cap_at_one() {
        let capped = overall_score(&[sample("security", 10.0, 20, 2)]);
        assert_eq!(capped, 100);
    }

    #[test]
    fn test_smallest_weight_has_smallest_influence() {
        // A failing low-weight category moves the score less than the same
        // failure in a high-weight category.
        let light = overall_score(&[sample("a", 1.0, 0, 1), sample("b", 99.0, 1, 1)]);
        let heavy = overall_score(&[sample("a", 99.0, 0, 1), sample("b", 1.0, 1, 1)]);
        assert!(light > heavy);
        assert_eq!(light, 99);
        assert_eq!(heavy, 1);
    }

    #[test]
    fn test_zero_required_is_fully_satisfied() {
        let score = overall_score(&[sample("info", 10.0, 0, 0), sample("b", 10.0, 0, 1)]);
        assert_eq!(score, 50);
    }
}
