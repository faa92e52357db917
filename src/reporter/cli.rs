use owo_colors::OwoColorize;

use crate::engine::EngineResult;
use crate::risk::RiskTier;

use super::Reporter;

pub struct CliReporter;

fn paint(text: String, tier: RiskTier) -> String {
    match tier {
        RiskTier::Low => text.green().to_string(),
        RiskTier::Medium => text.yellow().to_string(),
        RiskTier::High => text.red().to_string(),
    }
}

impl Reporter for CliReporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String {
        let analysis = &result.analysis;
        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}\n\n",
            "pixeltrace".bold(),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&format!("  Input: {}\n", result.input_name));

        let score = paint(analysis.overall_score.to_string(), analysis.risk_tier);
        let tier = paint(analysis.risk_tier.to_string(), analysis.risk_tier);
        out.push_str(&format!("\n  IP risk: {score} / 100 ({tier})\n\n"));

        out.push_str(&format!(
            "  {} {}\n",
            "──".dimmed(),
            "─".repeat(48).dimmed()
        ));
        for r in &analysis.results {
            let label = r.category.to_string();
            let row_score = format!("{:>3}", r.score);
            out.push_str(&format!(
                "  {:<20} {}  {}\n",
                label,
                paint(row_score, RiskTier::from_score(r.score)),
                format!("confidence {:.2}", r.confidence).dimmed()
            ));
            if verbose && !r.explanation.is_empty() {
                out.push_str(&format!("  {:<20} {}\n", "", r.explanation));
            }
        }
        out.push('\n');
        out
    }
}
