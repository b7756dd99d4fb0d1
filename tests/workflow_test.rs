//! Workflow Integration Tests
//!
//! TrackerWorkflow と JsonProfileRepository の統合テスト

use clap::Parser;
use daytrack::adapter::repositories::json_profile_repository::JsonProfileRepository;
use daytrack::driver::cli::Args;
use daytrack::driver::workflow::TrackerWorkflow;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// テスト用のプロファイルを作成
fn create_test_profile(dir: &Path) -> String {
    let profile_path = dir.join("profile.json");
    let profile_content = r#"{
  "weight_kg": 70.0,
  "height": 1.8
}"#;
    fs::write(&profile_path, profile_content).unwrap();
    profile_path.to_string_lossy().to_string()
}

fn workflow() -> TrackerWorkflow<JsonProfileRepository> {
    TrackerWorkflow::new(Arc::new(JsonProfileRepository::new()))
}

#[test]
fn test_training_with_profile() {
    let temp_dir = TempDir::new().unwrap();
    let profile = create_test_profile(temp_dir.path());

    let args = Args::parse_from([
        "daytrack",
        "--profile",
        &profile,
        "training",
        "5000,Running,45m",
    ]);
    let output = workflow().execute(&args).unwrap();

    assert!(output.contains("Training type: Running"));
    assert!(output.contains("Calories burned: 283.50"));
}

#[test]
fn test_steps_with_flags_and_missing_profile() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("none.json");

    let args = Args::parse_from([
        "daytrack",
        "--profile",
        missing.to_str().unwrap(),
        "--weight",
        "70",
        "--height",
        "175",
        "steps",
        "8000,1h",
    ]);
    let output = workflow().execute(&args).unwrap();

    assert_eq!(
        output,
        "Steps: 8000.\nDistance covered: 5.20 km.\nCalories burned: 22050.00.\n"
    );
}

#[test]
fn test_missing_profile_without_flags_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("none.json");

    let args = Args::parse_from([
        "daytrack",
        "--profile",
        missing.to_str().unwrap(),
        "steps",
        "8000,1h",
    ]);

    assert!(workflow().execute(&args).is_err());
}

#[test]
fn test_invalid_steps_record_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let profile = create_test_profile(temp_dir.path());

    let args = Args::parse_from(["daytrack", "--profile", &profile, "steps", "8000,1h,extra"]);

    assert_eq!(workflow().execute(&args).unwrap(), "");
}

#[test]
fn test_steps_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let profile = create_test_profile(temp_dir.path());

    let args = Args::parse_from(["daytrack", "--profile", &profile, "--json", "steps", "8000,1h"]);
    let output = workflow().execute(&args).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["steps"], 8000);
    assert_eq!(parsed["distance_km"], 5.2);
}
