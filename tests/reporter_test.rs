use serde_json::json;

use pixeltrace::config::Config;
use pixeltrace::engine::{self, EngineResult, InputKind};
use pixeltrace::reporter::cli::CliReporter;
use pixeltrace::reporter::json::JsonReporter;
use pixeltrace::reporter::{score_only, Reporter};

fn sample_result() -> EngineResult {
    let value = json!({
        "brandReferences": ["potential logo-like elements"],
        "similaritySignals": ["resembles common stock photo patterns"]
    });
    engine::analyze_value(&value, InputKind::Auto, &Config::default(), "poster.png.json").unwrap()
}

#[test]
fn test_json_output_structure() {
    let result = sample_result();
    let output = JsonReporter.format(&result, false);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["input"], "poster.png.json");
    assert_eq!(json["source"], "insight");
    assert_eq!(
        json["overallScore"].as_u64().unwrap(),
        u64::from(result.analysis.overall_score)
    );
    assert_eq!(json["riskTier"], result.analysis.risk_tier.to_string());
    assert_eq!(json["results"].as_array().unwrap().len(), 6);
    assert_eq!(json["results"][1]["category"], "TRADEMARK");
    assert!(json["version"].is_string());
}

#[test]
fn test_cli_output_lists_every_category() {
    let result = sample_result();
    let output = CliReporter.format(&result, false);
    assert!(output.contains("Input: poster.png.json"));
    for label in [
        "Visual Similarity",
        "Trademark",
        "Copyright",
        "Character",
        "Training Data",
        "Commercial Usage",
    ] {
        assert!(output.contains(label), "missing {label}");
    }
    assert!(!output.contains("brand confusion"));
}

#[test]
fn test_cli_verbose_shows_explanations() {
    let result = sample_result();
    let output = CliReporter.format(&result, true);
    assert!(output.contains("brand confusion"));
    assert!(output.contains("potential logo-like elements"));
}

#[test]
fn test_score_only() {
    let result = sample_result();
    assert_eq!(
        score_only(&result.analysis),
        format!("{}\n", result.analysis.overall_score)
    );
}
