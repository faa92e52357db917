pub mod character;
pub mod commercial_usage;
pub mod copyright;
pub mod trademark;
pub mod training_data;
pub mod visual_similarity;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::risk::{RiskCategory, RiskResult};
use crate::validate::round_confidence;

/// Qualitative description of an image as returned by a vision provider:
/// categorized lists of free-form signals, no numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LlmInsight {
    pub visual_description: String,
    pub detected_elements: Vec<String>,
    pub similarity_signals: Vec<String>,
    pub brand_references: Vec<String>,
    pub style_indicators: Vec<String>,
    pub character_likeness: Vec<String>,
    pub commercial_context: Vec<String>,
}

impl LlmInsight {
    /// JSON keys that identify an insight payload.
    pub const FIELDS: [&'static str; 7] = [
        "visualDescription",
        "detectedElements",
        "similaritySignals",
        "brandReferences",
        "styleIndicators",
        "characterLikeness",
        "commercialContext",
    ];
}

/// Rule-based derivation of one category's result from an insight.
pub trait Analyzer: Send + Sync {
    fn category(&self) -> RiskCategory;
    fn analyze(&self, insight: &LlmInsight) -> RiskResult;
}

/// Number of elements containing any of `keywords`, ignoring case.
pub(crate) fn count_containing(elements: &[String], keywords: &[&str]) -> usize {
    elements
        .iter()
        .filter(|el| {
            let lower = el.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .count()
}

/// Build the result shared by every analyzer: score capped at 100 and
/// rounded, confidence rounded to two decimals.
pub(crate) fn finish(
    category: RiskCategory,
    score: f64,
    confidence: f64,
    explanation: String,
) -> RiskResult {
    RiskResult {
        category,
        score: score.clamp(0.0, 100.0).round() as u32,
        confidence: round_confidence(confidence),
        explanation,
    }
}

pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(visual_similarity::VisualSimilarityAnalyzer),
            Box::new(trademark::TrademarkAnalyzer),
            Box::new(copyright::CopyrightAnalyzer),
            Box::new(character::CharacterAnalyzer),
            Box::new(training_data::TrainingDataAnalyzer),
            Box::new(commercial_usage::CommercialUsageAnalyzer),
        ];

        AnalyzerRegistry { analyzers }
    }

    pub fn analyzers(&self) -> &[Box<dyn Analyzer>] {
        &self.analyzers
    }

    /// Run every enabled analyzer in parallel. Results come back in registry
    /// order whatever order the analyzers finish in.
    pub fn run(
        &self,
        insight: &LlmInsight,
        enabled: &(dyn Fn(&RiskCategory) -> bool + Sync),
    ) -> Vec<RiskResult> {
        let results: Vec<RiskResult> = self
            .analyzers
            .par_iter()
            .filter(|a| enabled(&a.category()))
            .map(|a| a.analyze(insight))
            .collect();
        debug!(analyzers = results.len(), "derived category results from insight");
        results
    }
}
