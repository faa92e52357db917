//! Direct numeric scores as a vision provider reports them.
//!
//! Values are kept as raw JSON until validation, since providers send
//! strings, nulls or nothing at all where a number belongs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::risk::{RiskCategory, RiskResult};
use crate::validate::validate_signal;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSignal {
    pub score: Value,
    pub confidence: Value,
}

/// Every category is optional. A category that is not an object (null, a bare
/// number, a string) counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderScores {
    #[serde(deserialize_with = "lenient_signal")]
    pub visual_similarity: RawSignal,
    #[serde(deserialize_with = "lenient_signal")]
    pub trademark: RawSignal,
    #[serde(deserialize_with = "lenient_signal")]
    pub copyright: RawSignal,
    #[serde(deserialize_with = "lenient_signal")]
    pub character: RawSignal,
    #[serde(deserialize_with = "lenient_signal")]
    pub training_data: RawSignal,
    #[serde(deserialize_with = "lenient_signal")]
    pub commercial_usage: RawSignal,
}

fn lenient_signal<'de, D>(deserializer: D) -> Result<RawSignal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(RawSignal::default());
    }
    RawSignal::deserialize(value).map_err(serde::de::Error::custom)
}

impl ProviderScores {
    /// One validated result per category, in display order, with empty
    /// explanations.
    pub fn into_results(self) -> Vec<RiskResult> {
        let signals = [
            (RiskCategory::VisualSimilarity, self.visual_similarity),
            (RiskCategory::Trademark, self.trademark),
            (RiskCategory::Copyright, self.copyright),
            (RiskCategory::Character, self.character),
            (RiskCategory::TrainingData, self.training_data),
            (RiskCategory::CommercialUsage, self.commercial_usage),
        ];

        signals
            .into_iter()
            .map(|(category, raw)| {
                validate_signal(
                    category,
                    raw_number(&raw.score),
                    raw_number(&raw.confidence),
                )
            })
            .collect()
    }
}

/// Numbers pass through, numeric strings are parsed, anything else is NaN.
pub fn raw_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
