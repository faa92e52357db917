pub mod cli;
pub mod json;

use crate::engine::EngineResult;
use crate::risk::AnalysisResult;

pub trait Reporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String;
}

pub fn score_only(analysis: &AnalysisResult) -> String {
    format!("{}\n", analysis.overall_score)
}
