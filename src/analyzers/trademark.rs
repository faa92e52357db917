use crate::analyzers::{count_containing, finish, Analyzer, LlmInsight};
use crate::risk::{RiskCategory, RiskResult};

const LOGO_KEYWORDS: [&str; 3] = ["logo", "symbol", "mark"];

pub struct TrademarkAnalyzer;
impl Analyzer for TrademarkAnalyzer {
    fn category(&self) -> RiskCategory {
        RiskCategory::Trademark
    }

    fn analyze(&self, insight: &LlmInsight) -> RiskResult {
        let brands = insight.brand_references.len() as f64;
        let logo_like = count_containing(&insight.detected_elements, &LOGO_KEYWORDS);

        let mut score = (20.0 + brands * 25.0 + logo_like as f64 * 20.0).min(100.0);
        let confidence = (0.4 + brands * 0.2).min(1.0);

        let explanation = if insight.brand_references.is_empty() && logo_like == 0 {
            "No trademark-like elements were detected.".to_string()
        } else {
            score = score.max(50.0);
            let found = if insight.brand_references.is_empty() {
                "logo-like design elements".to_string()
            } else {
                insight.brand_references.join(", ")
            };
            format!(
                "Brand references found: {found}. These could be confused with an existing \
                 mark, especially in advertising."
            )
        };

        finish(self.category(), score, confidence, explanation)
    }
}
