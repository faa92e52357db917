use pixeltrace::risk::{AnalysisResult, RiskCategory, RiskResult, RiskTier};

#[test]
fn test_category_wire_names() {
    let json = serde_json::to_string(&RiskCategory::ALL).unwrap();
    assert_eq!(
        json,
        r#"["VISUAL_SIMILARITY","TRADEMARK","COPYRIGHT","CHARACTER","TRAINING_DATA","COMMERCIAL_USAGE"]"#
    );
}

#[test]
fn test_unknown_category_round_trips() {
    let category: RiskCategory = serde_json::from_str(r#""WATERMARK""#).unwrap();
    assert_eq!(category, RiskCategory::Other("WATERMARK".to_string()));
    assert!(!category.is_known());
    assert_eq!(serde_json::to_string(&category).unwrap(), r#""WATERMARK""#);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", RiskCategory::VisualSimilarity), "Visual Similarity");
    assert_eq!(format!("{}", RiskCategory::CommercialUsage), "Commercial Usage");
    assert_eq!(format!("{}", RiskCategory::Other("WATERMARK".into())), "WATERMARK");
}

#[test]
fn test_tier_from_score() {
    assert_eq!(RiskTier::from_score(0), RiskTier::Low);
    assert_eq!(RiskTier::from_score(29), RiskTier::Low);
    assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(59), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(60), RiskTier::High);
    assert_eq!(RiskTier::from_score(100), RiskTier::High);
}

#[test]
fn test_tier_serialization() {
    assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), r#""MEDIUM""#);
    assert_eq!(format!("{}", RiskTier::High), "HIGH");
}

#[test]
fn test_result_deserializes_without_explanation() {
    let r: RiskResult =
        serde_json::from_str(r#"{"category":"CHARACTER","score":40,"confidence":0.35}"#).unwrap();
    assert_eq!(r.category, RiskCategory::Character);
    assert_eq!(r.score, 40);
    assert!(r.explanation.is_empty());
}

#[test]
fn test_analysis_result_uses_camel_case() {
    let analysis = AnalysisResult {
        overall_score: 43,
        risk_tier: RiskTier::Medium,
        results: vec![RiskResult {
            category: RiskCategory::Trademark,
            score: 50,
            confidence: 0.6,
            explanation: "logo".to_string(),
        }],
    };
    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("\"overallScore\":43"));
    assert!(json.contains("\"riskTier\":\"MEDIUM\""));
    assert!(json.contains("\"category\":\"TRADEMARK\""));
}
