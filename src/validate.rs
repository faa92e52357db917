//! Repair of raw provider numbers into bounded scores and confidences.
//!
//! Nothing here fails: anything unusable degrades to a score of 0 and a
//! confidence of 0.5 so a malformed provider response cannot sink a run.

use tracing::warn;

use crate::risk::{RiskCategory, RiskResult};

pub const DEFAULT_SCORE: u32 = 0;
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Round to two decimal places, half away from zero.
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}

pub fn validate_score(score: f64) -> u32 {
    if score.is_nan() || !(0.0..=100.0).contains(&score) {
        return DEFAULT_SCORE;
    }
    score.round() as u32
}

pub fn validate_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() || !(0.0..=1.0).contains(&confidence) {
        return DEFAULT_CONFIDENCE;
    }
    round_confidence(confidence)
}

/// Validate one category's raw pair, logging every correction made.
pub fn validate_signal(category: RiskCategory, score: f64, confidence: f64) -> RiskResult {
    let valid_score = validate_score(score);
    if score.is_nan() || !(0.0..=100.0).contains(&score) {
        warn!(category = %category.as_str(), score, "invalid score, defaulting to {DEFAULT_SCORE}");
    }

    let valid_confidence = validate_confidence(confidence);
    if confidence.is_nan() || !(0.0..=1.0).contains(&confidence) {
        warn!(
            category = %category.as_str(),
            confidence,
            "invalid confidence, defaulting to {DEFAULT_CONFIDENCE}"
        );
    }

    RiskResult {
        category,
        score: valid_score,
        confidence: valid_confidence,
        explanation: String::new(),
    }
}
