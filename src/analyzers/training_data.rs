use crate::analyzers::{finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

/// Provenance of the generator's training data can't be observed from the
/// image, so confidence stays fixed.
const CONFIDENCE: f64 = 0.3;

pub struct TrainingDataAnalyzer;
impl Analyzer for TrainingDataAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::TrainingData
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let similarity = insight.similarity_signals.len();
        let styles = insight.style_indicators.len();

        let mut score = (20.0 + similarity as f64 * 8.0 + styles as f64 * 6.0).min(100.0);

        let explanation = if similarity > 1 || styles > 2 {
            score = score.max(35.0);
            "Some traits suggest the generator may have learned from copyrighted works. \
             This is hard to establish and the law here is still unsettled."
                .to_string()
        } else {
            "No clear sign that the image reproduces specific training sources.".to_string()
        };

        finish(self.category(), score, CONFIDENCE, explanation)
    }
}
