use std::collections::HashMap;

use crate::error::{Result, RiskError};
use crate::risk::RiskCategory;

/// Weight applied to any category missing from the table.
pub const FALLBACK_WEIGHT: f64 = 0.1;

/// Immutable category → weight table.
///
/// Weights need not sum to 1 but are always finite and non-negative. The table
/// is fixed once built; there is no way to change a weight afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    weights: HashMap<RiskCategory, f64>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        let weights = HashMap::from([
            (RiskCategory::VisualSimilarity, 0.15),
            (RiskCategory::Trademark, 0.25),
            (RiskCategory::Copyright, 0.15),
            (RiskCategory::Character, 0.20),
            (RiskCategory::TrainingData, 0.10),
            (RiskCategory::CommercialUsage, 0.15),
        ]);
        CategoryWeights { weights }
    }
}

impl CategoryWeights {
    /// Default table with the given entries replaced.
    ///
    /// Fails on an unknown category name, a weight that is negative, NaN or
    /// infinite, or a table whose full-score weighted sum would overflow.
    pub fn with_overrides(overrides: &HashMap<String, f64>) -> Result<Self> {
        let mut table = Self::default();
        for (name, &weight) in overrides {
            let category = RiskCategory::from_name(name);
            if !category.is_known() {
                return Err(RiskError::Config(format!(
                    "unknown risk category `{name}` in [weights]"
                )));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(RiskError::Config(format!(
                    "weight for `{name}` must be a non-negative number, got {weight}"
                )));
            }
            table.weights.insert(category, weight);
        }
        if !(table.total() * 100.0).is_finite() {
            return Err(RiskError::Config(format!(
                "weights in [weights] are too large (total {})",
                table.total()
            )));
        }
        Ok(table)
    }

    pub fn weight(&self, category: &RiskCategory) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(FALLBACK_WEIGHT)
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }
}
