use crate::analyzers::{count_containing, finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

const HUMANOID_KEYWORDS: [&str; 4] = ["human", "face", "person", "character"];

/// Likeness to real people or known characters.
pub struct CharacterAnalyzer;
impl Analyzer for CharacterAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::Character
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let likeness = insight.character_likeness.len() as f64;
        let humanoid = count_containing(&insight.detected_elements, &HUMANOID_KEYWORDS);

        let mut score = (15.0 + likeness * 30.0 + humanoid as f64 * 15.0).min(100.0);
        let confidence = (0.35 + likeness * 0.25).min(1.0);

        let explanation = if insight.character_likeness.is_empty() && humanoid == 0 {
            "No character or celebrity likeness was detected.".to_string()
        } else {
            score = score.max(55.0);
            let found = if insight.character_likeness.is_empty() {
                "humanoid or character-like features".to_string()
            } else {
                insight.character_likeness.join(", ")
            };
            format!(
                "Likeness signals: {found}. Risky if the figure could be mistaken for a real \
                 person or a protected character."
            )
        };

        finish(self.category(), score, confidence, explanation)
    }
}
