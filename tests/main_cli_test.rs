use std::process::Command;

use tempfile::TempDir;

fn pixeltrace() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pixeltrace"))
}

#[test]
fn test_invalid_format_is_rejected() {
    let output = pixeltrace()
        .args(["tests/fixtures/scores.json", "--format", "jsn"])
        .output()
        .expect("binary should run");

    assert!(
        !output.status.success(),
        "Invalid --format values should cause a non-zero exit"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "stderr should explain invalid format value. stderr: {stderr}"
    );
}

#[test]
fn test_score_only_output() {
    let output = pixeltrace()
        .args(["tests/fixtures/scores.json", "--score"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "24\n");
}

#[test]
fn test_json_output_for_insight() {
    let output = pixeltrace()
        .args(["tests/fixtures/insight.json", "--format", "json"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 43);
    assert_eq!(json["riskTier"], "MEDIUM");
}

#[test]
fn test_missing_input_fails() {
    let output = pixeltrace()
        .arg("tests/fixtures/missing.json")
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_threshold_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ci.toml");
    std::fs::write(&config, "[ci]\nfail_above = 40\n").unwrap();

    let output = pixeltrace()
        .args(["tests/fixtures/insight.json", "--score", "--config"])
        .arg(&config)
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "43\n");
}
