use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::aggregator::RiskAggregator;
use crate::analyzers::{AnalyzerRegistry, LlmInsight};
use crate::config::Config;
use crate::error::{Result, RiskError};
use crate::provider::ProviderScores;
use crate::risk::AnalysisResult;

/// Which ingestion path a payload takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Decide from the payload's keys.
    Auto,
    /// Direct numeric scores, repaired by the validator.
    Scores,
    /// Qualitative insight, scored by the rule-based analyzers.
    Insight,
}

#[derive(Debug)]
pub struct EngineResult {
    pub analysis: AnalysisResult,
    /// Resolved kind, never `Auto`.
    pub source: InputKind,
    pub input_name: String,
    pub fail_above: u32,
}

impl EngineResult {
    pub fn exceeds_threshold(&self) -> bool {
        self.fail_above > 0 && self.analysis.overall_score >= self.fail_above
    }
}

/// Score the payload at `path`; `-` reads stdin.
pub fn run(path: &Path, kind: InputKind, config: &Config) -> Result<EngineResult> {
    let contents = read_input(path)?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| RiskError::Parse {
        what: path.display().to_string(),
        message: e.to_string(),
    })?;

    let input_name = if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    analyze_value(&value, kind, config, &input_name)
}

pub fn analyze_value(
    value: &Value,
    kind: InputKind,
    config: &Config,
    input_name: &str,
) -> Result<EngineResult> {
    if !value.is_object() {
        return Err(RiskError::Parse {
            what: input_name.to_string(),
            message: "expected a JSON object".to_string(),
        });
    }

    let source = match kind {
        InputKind::Auto => detect_kind(value),
        resolved => resolved,
    };

    let analysis = match source {
        InputKind::Insight => {
            let insight = LlmInsight::deserialize(value).map_err(|e| RiskError::Parse {
                what: input_name.to_string(),
                message: e.to_string(),
            })?;
            analyze_insight(&insight, config)?
        }
        _ => {
            let scores = ProviderScores::deserialize(value).map_err(|e| RiskError::Parse {
                what: input_name.to_string(),
                message: e.to_string(),
            })?;
            analyze_scores(scores, config)?
        }
    };

    info!(
        input = input_name,
        source = ?source,
        overall_score = analysis.overall_score,
        risk_tier = %analysis.risk_tier,
        "analysis complete"
    );

    Ok(EngineResult {
        analysis,
        source,
        input_name: input_name.to_string(),
        fail_above: config.ci.fail_above,
    })
}

pub fn analyze_insight(insight: &LlmInsight, config: &Config) -> Result<AnalysisResult> {
    let aggregator = RiskAggregator::new(config.category_weights()?);
    let registry = AnalyzerRegistry::new();
    let results = registry.run(insight, &|category| config.is_analyzer_enabled(category));
    Ok(aggregator.aggregate(results))
}

pub fn analyze_scores(scores: ProviderScores, config: &Config) -> Result<AnalysisResult> {
    let aggregator = RiskAggregator::new(config.category_weights()?);
    Ok(aggregator.aggregate(scores.into_results()))
}

/// Insight when any insight key is present, scores otherwise.
pub fn detect_kind(value: &Value) -> InputKind {
    match value.as_object() {
        Some(map) if LlmInsight::FIELDS.iter().any(|k| map.contains_key(*k)) => {
            InputKind::Insight
        }
        _ => InputKind::Scores,
    }
}

fn read_input(path: &Path) -> Result<String> {
    let read = if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map(|_| contents)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| RiskError::Io {
        path: path.display().to_string(),
        source,
    })
}
