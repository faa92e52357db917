use crate::analyzers::{finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

/// Combined exposure when the image is used commercially: brand, likeness and
/// similarity each add a fixed amount.
pub struct CommercialUsageAnalyzer;
impl Analyzer for CommercialUsageAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::CommercialUsage
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let brand_risk = !insight.brand_references.is_empty();
        let character_risk = !insight.character_likeness.is_empty();
        let similarity_risk = insight.similarity_signals.len() > 1;

        let mut score: f64 = 20.0;
        let mut confidence: f64 = 0.5;
        let mut factors = Vec::new();
        if brand_risk {
            score += 25.0;
            confidence += 0.15;
            factors.push("possible brand confusion");
        }
        if character_risk {
            score += 20.0;
            confidence += 0.15;
            factors.push("character likeness");
        }
        if similarity_risk {
            score += 15.0;
            confidence += 0.1;
            factors.push("similarity to existing works");
        }
        score = score.min(100.0);
        confidence = confidence.min(1.0);

        let explanation = if factors.is_empty() {
            "Suitable for commercial use with standard precautions.".to_string()
        } else {
            score = score.max(40.0);
            format!(
                "Commercial use carries risk from {}. Get a legal review before \
                 high-visibility campaigns.",
                factors.join(", ")
            )
        };

        finish(self.category(), score, confidence, explanation)
    }
}
