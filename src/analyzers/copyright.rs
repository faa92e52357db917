use crate::analyzers::{finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

/// Mimicry of a distinctive style. Confidence tops out at 0.9 since style
/// alone is never conclusive.
pub struct CopyrightAnalyzer;
impl Analyzer for CopyrightAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::Copyright
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let styles = insight.style_indicators.len();
        let similarity = insight.similarity_signals.len() as f64;

        let mut score = (25.0 + styles as f64 * 10.0 + similarity * 8.0).min(100.0);
        let confidence = (0.3 + styles as f64 * 0.15).min(0.9);

        let explanation = if styles > 2 {
            score = score.max(45.0);
            format!(
                "Style indicators: {}. Close mimicry of a style strongly tied to one creator \
                 or brand may raise copyright concerns.",
                insight.style_indicators.join(", ")
            )
        } else {
            "The image does not closely imitate a protected visual style.".to_string()
        };

        finish(self.category(), score, confidence, explanation)
    }
}
