use pixeltrace::config::Config;
use pixeltrace::risk::RiskCategory;
use pixeltrace::RiskError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ci.fail_above, 0);
    assert!(config.weights.is_empty());
    assert!(config.analyzers.is_empty());
    assert!(config.is_analyzer_enabled(&RiskCategory::Trademark));
}

#[test]
fn test_load_config_from_toml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("pixeltrace.toml"),
        r#"
[weights]
TRADEMARK = 0.30
CHARACTER = 0.05

[analyzers]
TRAINING_DATA = "off"

[ci]
fail_above = 60
"#,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.weights.get("TRADEMARK"), Some(&0.30));
    assert_eq!(config.ci.fail_above, 60);
    assert!(!config.is_analyzer_enabled(&RiskCategory::TrainingData));
    assert!(config.is_analyzer_enabled(&RiskCategory::Character));

    let weights = config.category_weights().unwrap();
    assert_eq!(weights.weight(&RiskCategory::Trademark), 0.30);
    assert_eq!(weights.weight(&RiskCategory::Character), 0.05);
    assert_eq!(weights.weight(&RiskCategory::Copyright), 0.15);
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.ci.fail_above, 0);
    assert_eq!(
        config.category_weights().unwrap(),
        pixeltrace::CategoryWeights::default()
    );
}

#[test]
fn test_load_file_from_custom_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[weights]\nTRADEMARK = 2.0\n").unwrap();
    let config = Config::load_file(&path).unwrap();
    assert_eq!(config.weights.get("TRADEMARK"), Some(&2.0));
}

#[test]
fn test_invalid_weight_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("pixeltrace.toml"),
        "[weights]\nCOPYRIGHT = -1.0\n",
    )
    .unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert!(matches!(config.category_weights(), Err(RiskError::Config(_))));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pixeltrace.toml"), "[ci\nfail_above = ").unwrap();
    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, RiskError::Parse { .. }));
}

#[test]
fn test_missing_explicit_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, RiskError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}
