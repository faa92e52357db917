use serde::Serialize;

use crate::engine::{EngineResult, InputKind};
use crate::risk::{RiskResult, RiskTier};

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    version: &'static str,
    input: &'a str,
    source: InputKind,
    overall_score: u32,
    risk_tier: RiskTier,
    results: &'a [RiskResult],
}

impl Reporter for JsonReporter {
    fn format(&self, result: &EngineResult, _verbose: bool) -> String {
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            input: &result.input_name,
            source: result.source,
            overall_score: result.analysis.overall_score,
            risk_tier: result.analysis.risk_tier,
            results: &result.analysis.results,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
