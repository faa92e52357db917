use serde::{Deserialize, Serialize};
use std::fmt;

/// One IP-risk dimension scored independently.
///
/// The six known categories are closed; `Other` carries any unrecognized name
/// found in a payload so it can still be weighed (with the fallback weight)
/// instead of rejecting the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    VisualSimilarity,
    Trademark,
    Copyright,
    Character,
    TrainingData,
    CommercialUsage,
    Other(String),
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::VisualSimilarity,
        RiskCategory::Trademark,
        RiskCategory::Copyright,
        RiskCategory::Character,
        RiskCategory::TrainingData,
        RiskCategory::CommercialUsage,
    ];

    /// Wire name, e.g. `TRADEMARK`.
    pub fn as_str(&self) -> &str {
        match self {
            RiskCategory::VisualSimilarity => "VISUAL_SIMILARITY",
            RiskCategory::Trademark => "TRADEMARK",
            RiskCategory::Copyright => "COPYRIGHT",
            RiskCategory::Character => "CHARACTER",
            RiskCategory::TrainingData => "TRAINING_DATA",
            RiskCategory::CommercialUsage => "COMMERCIAL_USAGE",
            RiskCategory::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "VISUAL_SIMILARITY" => RiskCategory::VisualSimilarity,
            "TRADEMARK" => RiskCategory::Trademark,
            "COPYRIGHT" => RiskCategory::Copyright,
            "CHARACTER" => RiskCategory::Character,
            "TRAINING_DATA" => RiskCategory::TrainingData,
            "COMMERCIAL_USAGE" => RiskCategory::CommercialUsage,
            other => RiskCategory::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RiskCategory::Other(_))
    }
}

impl From<String> for RiskCategory {
    fn from(name: String) -> Self {
        RiskCategory::from_name(&name)
    }
}

impl From<RiskCategory> for String {
    fn from(category: RiskCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::VisualSimilarity => write!(f, "Visual Similarity"),
            RiskCategory::Trademark => write!(f, "Trademark"),
            RiskCategory::Copyright => write!(f, "Copyright"),
            RiskCategory::Character => write!(f, "Character"),
            RiskCategory::TrainingData => write!(f, "Training Data"),
            RiskCategory::CommercialUsage => write!(f, "Commercial Usage"),
            RiskCategory::Other(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Lower bounds are inclusive: 30 is MEDIUM, 60 is HIGH.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => RiskTier::Low,
            30..=59 => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "LOW"),
            RiskTier::Medium => write!(f, "MEDIUM"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub category: RiskCategory,
    pub score: u32,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub risk_tier: RiskTier,
    pub results: Vec<RiskResult>,
}
