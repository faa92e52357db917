use tracing::debug;

use crate::risk::{AnalysisResult, RiskResult, RiskTier};
use crate::weights::CategoryWeights;

/// Reduces per-category results into one weighted score and tier.
///
/// Holds nothing but its weight table, so the same aggregator can serve any
/// number of runs.
#[derive(Debug, Clone, Default)]
pub struct RiskAggregator {
    weights: CategoryWeights,
}

impl RiskAggregator {
    pub fn new(weights: CategoryWeights) -> Self {
        RiskAggregator { weights }
    }

    /// Weighted mean of `results`, rounded half away from zero.
    ///
    /// The input is returned untouched and in order. Repeated categories are
    /// not merged: each entry adds its own weight. An empty list (or one whose
    /// weights are all zero) scores 0.
    pub fn aggregate(&self, results: Vec<RiskResult>) -> AnalysisResult {
        let mut mean = self.weighted_mean(&results, 1.0);
        if !mean.is_finite() {
            // Sums overflowed; dividing every weight by the largest one keeps
            // the mean and bounds both sums by the result count.
            let largest = results
                .iter()
                .map(|r| self.weights.weight(&r.category))
                .fold(0.0_f64, f64::max);
            mean = self.weighted_mean(&results, largest);
        }

        let overall_score = if mean.is_finite() {
            mean.round().clamp(0.0, 100.0) as u32
        } else {
            0
        };
        let risk_tier = RiskTier::from_score(overall_score);

        debug!(results = results.len(), mean, overall_score, %risk_tier, "aggregated risk");

        AnalysisResult {
            overall_score,
            risk_tier,
            results,
        }
    }

    /// Not finite only when a sum overflows; 0 when no weight is positive.
    fn weighted_mean(&self, results: &[RiskResult], scale: f64) -> f64 {
        let (weighted_sum, total_weight) =
            results.iter().fold((0.0_f64, 0.0_f64), |(sum, total), r| {
                let weight = self.weights.weight(&r.category) / scale;
                (sum + f64::from(r.score.min(100)) * weight, total + weight)
            });

        if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.0
        }
    }
}
