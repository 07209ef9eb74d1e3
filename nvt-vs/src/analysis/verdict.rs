//! Verdict Aggregator
//!
//! Combines the four sub-analysis scores and the source count into the final
//! weighted score, then maps it onto the threshold bands.
//!
//! Two weighting strategies exist because deployments disagree on how the
//! source count should enter the sum; both are supported and selectable in
//! configuration. `CappedBonus` is the active default.

use serde::Deserialize;

use crate::models::verdict::{
    EXPLANATION_LIKELY_FALSE, EXPLANATION_LIKELY_TRUE, EXPLANATION_TRUE, EXPLANATION_UNCERTAIN,
};
use crate::models::{Confidence, Verdict, VerdictLabel};

/// How the source count enters the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStrategy {
    /// Plain weighted sum plus a flat bonus of 5 points per source, capped
    /// at 25. The sub-analysis weights sum to 0.95.
    #[default]
    CappedBonus,
    /// Source count scaled to a 0-100 factor (20 points per source, capped
    /// at 5 sources) and weighted at 0.05, so all weights sum to 1.0.
    Normalized,
}

const CREDIBILITY_WEIGHT: f64 = 0.30;
const CONSISTENCY_WEIGHT: f64 = 0.25;
const FACT_WEIGHT: f64 = 0.25;
const QUALITY_WEIGHT: f64 = 0.15;
const SOURCE_COUNT_WEIGHT: f64 = 0.05;

/// Weighted-combination verdict aggregator
#[derive(Debug, Clone, Copy)]
pub struct VerdictAggregator {
    strategy: WeightStrategy,
}

impl VerdictAggregator {
    pub fn new(strategy: WeightStrategy) -> Self {
        Self { strategy }
    }

    /// Combine sub-analysis scores into the terminal verdict.
    ///
    /// `credibility_avg` is the mean credibility over the unique result set.
    /// The zero-source case is handled by the pipeline (`Verdict::unverified`)
    /// before this runs.
    pub fn aggregate(
        &self,
        credibility_avg: f64,
        consistency_score: u32,
        fact_score: u32,
        quality_score: u32,
        source_count: usize,
    ) -> Verdict {
        let weighted = credibility_avg * CREDIBILITY_WEIGHT
            + f64::from(consistency_score) * CONSISTENCY_WEIGHT
            + f64::from(fact_score) * FACT_WEIGHT
            + f64::from(quality_score) * QUALITY_WEIGHT;

        let source_term = match self.strategy {
            WeightStrategy::CappedBonus => (source_count as f64 * 5.0).min(25.0),
            WeightStrategy::Normalized => {
                let factor = (source_count.min(5) * 20) as f64;
                factor * SOURCE_COUNT_WEIGHT
            }
        };

        let final_score = ((weighted + source_term).clamp(0.0, 100.0) * 10.0).round() / 10.0;

        let (verdict, confidence, explanation) = if final_score >= 80.0 {
            (VerdictLabel::True, Confidence::High, EXPLANATION_TRUE)
        } else if final_score >= 60.0 {
            (
                VerdictLabel::LikelyTrue,
                Confidence::Medium,
                EXPLANATION_LIKELY_TRUE,
            )
        } else if final_score >= 40.0 {
            (
                VerdictLabel::Uncertain,
                Confidence::Low,
                EXPLANATION_UNCERTAIN,
            )
        } else {
            (
                VerdictLabel::LikelyFalse,
                Confidence::Medium,
                EXPLANATION_LIKELY_FALSE,
            )
        };

        Verdict {
            verdict,
            confidence,
            final_score,
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_clamped_to_range() {
        let aggregator = VerdictAggregator::new(WeightStrategy::CappedBonus);

        let high = aggregator.aggregate(100.0, 100, 100, 100, 50);
        assert_eq!(high.final_score, 100.0);

        let low = aggregator.aggregate(0.0, 0, 0, 0, 0);
        assert_eq!(low.final_score, 0.0);
        assert_eq!(low.verdict, VerdictLabel::LikelyFalse);
    }

    #[test]
    fn test_capped_bonus_arithmetic() {
        let aggregator = VerdictAggregator::new(WeightStrategy::CappedBonus);

        // 90*0.30 + 90*0.25 + 40*0.25 + 70*0.15 + min(6*5, 25)
        // = 27 + 22.5 + 10 + 10.5 + 25 = 95.0
        let verdict = aggregator.aggregate(90.0, 90, 40, 70, 6);
        assert_eq!(verdict.final_score, 95.0);
        assert_eq!(verdict.verdict, VerdictLabel::True);
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn test_source_bonus_caps_at_twenty_five() {
        let aggregator = VerdictAggregator::new(WeightStrategy::CappedBonus);
        let five = aggregator.aggregate(0.0, 0, 0, 0, 5);
        let fifty = aggregator.aggregate(0.0, 0, 0, 0, 50);
        assert_eq!(five.final_score, 25.0);
        assert_eq!(fifty.final_score, 25.0);
    }

    #[test]
    fn test_normalized_strategy_weights_sum_to_one() {
        let aggregator = VerdictAggregator::new(WeightStrategy::Normalized);
        // All inputs at ceiling: 30 + 25 + 25 + 15 + 100*0.05 = 100
        let verdict = aggregator.aggregate(100.0, 100, 100, 100, 12);
        assert_eq!(verdict.final_score, 100.0);

        // 6 sources scale the same as 5 under normalization
        let six = aggregator.aggregate(80.0, 70, 60, 70, 6);
        let five = aggregator.aggregate(80.0, 70, 60, 70, 5);
        assert_eq!(six.final_score, five.final_score);
    }

    #[test]
    fn test_threshold_bands() {
        let aggregator = VerdictAggregator::new(WeightStrategy::CappedBonus);

        let top = aggregator.aggregate(100.0, 100, 100, 100, 5);
        assert_eq!(top.verdict, VerdictLabel::True);
        assert_eq!(top.final_score, 100.0);

        let mid = aggregator.aggregate(50.0, 50, 50, 50, 2);
        // 15 + 12.5 + 12.5 + 7.5 + 10 = 57.5 -> UNCERTAIN
        assert_eq!(mid.final_score, 57.5);
        assert_eq!(mid.verdict, VerdictLabel::Uncertain);
        assert_eq!(mid.confidence, Confidence::Low);

        let likely = aggregator.aggregate(60.0, 70, 50, 50, 3);
        // 18 + 17.5 + 12.5 + 7.5 + 15 = 70.5 -> LIKELY TRUE
        assert_eq!(likely.final_score, 70.5);
        assert_eq!(likely.verdict, VerdictLabel::LikelyTrue);
        assert_eq!(likely.confidence, Confidence::Medium);
    }
}
