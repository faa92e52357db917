use crate::analyzers::{finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

/// Resemblance to existing visual works, driven by similarity signals and the
/// number of detected elements.
pub struct VisualSimilarityAnalyzer;
impl Analyzer for VisualSimilarityAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::VisualSimilarity
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let similarity = insight.similarity_signals.len() as f64;
        let detected = insight.detected_elements.len() as f64;

        let mut score = (30.0 + similarity * 15.0 + detected * 5.0).min(100.0);
        let confidence = (0.5 + similarity * 0.1).min(1.0);

        let explanation = if insight.similarity_signals.is_empty() {
            "The composition looks visually distinct from known works.".to_string()
        } else {
            score = score.max(40.0);
            format!(
                "Similarity signals found: {}. The image may be close enough to existing \
                 visual works to raise concerns in commercial use.",
                insight.similarity_signals.join(", ")
            )
        };

        finish(self.category(), score, confidence, explanation)
    }
}
