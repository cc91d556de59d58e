//! End-to-end tests for `run_classification`: read a snapshot, classify, write.

mod helpers;

use std::path::PathBuf;

use entry_classifier::{run_classification, Config, DatasetWarning, LogFormat, LogLevel};
use serde_json::{json, Value};
use tempfile::TempDir;

use helpers::{fetched, fetched_snapshot, read_document, record, write_document};

/// Helper to create a test config
fn create_test_config(input: PathBuf, output: Option<PathBuf>, dry_run: bool) -> Config {
    Config {
        input,
        output,
        dry_run,
        log_level: LogLevel::Error, // Reduce log noise
        log_format: LogFormat::Plain,
    }
}

#[tokio::test]
async fn test_classifies_snapshot_in_place() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_document(temp_dir.path(), "entry-requirements.json", &fetched_snapshot());

    let report = run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect("Classification should succeed");

    assert_eq!(report.total, 6);
    assert_eq!(report.classified, 4);
    assert_eq!(report.unclassified, 2);
    assert_eq!(report.output.as_deref(), Some(input.as_path()));
    assert!(report.rendered.is_none());

    let output = read_document(&input);
    assert_eq!(output["total"], 6);
    assert_eq!(record(&output, "USA")["color"], "blue");
    assert_eq!(record(&output, "KEN")["color"], "purple");
    assert_eq!(record(&output, "FRA")["color"], "green");
    assert_eq!(record(&output, "LKA")["color"], "yellow");
    assert_eq!(record(&output, "AUS")["color"], Value::Null);
    assert_eq!(record(&output, "PRK")["color"], Value::Null);
}

#[tokio::test]
async fn test_extracted_facts_are_written() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_document(temp_dir.path(), "in.json", &fetched_snapshot());
    let output_path = temp_dir.path().join("out.json");

    run_classification(create_test_config(input, Some(output_path.clone()), false))
        .await
        .expect("Classification should succeed");

    let output = read_document(&output_path);
    assert_eq!(
        record(&output, "USA")["extracted"],
        json!({
            "visaRequired": false,
            "visaFreeDays": 90,
            "eAuthorizationRequired": true,
            "vaccinesRequired": false
        })
    );
    assert_eq!(
        record(&output, "AUS")["extracted"],
        json!({
            "visaRequired": null,
            "visaFreeDays": null,
            "eAuthorizationRequired": null,
            "vaccinesRequired": null
        })
    );
}

#[tokio::test]
async fn test_pass_through_fields_survive() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_document(temp_dir.path(), "in.json", &fetched_snapshot());
    let output_path = temp_dir.path().join("out.json");

    run_classification(create_test_config(input, Some(output_path.clone()), false))
        .await
        .expect("Classification should succeed");

    let output = read_document(&output_path);
    let usa = record(&output, "USA");
    assert_eq!(usa["fetchedAt"], "2025-01-10T08:00:00.000Z");
    assert_eq!(
        usa["source"],
        "https://www.viaggiaresicuri.it/schede_paese/USA.json"
    );
    assert_eq!(usa["cca2"], "US");
    assert_eq!(record(&output, "PRK")["error"], "HTTP 404");

    // Record order is preserved
    let codes: Vec<_> = output["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["cca3"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["USA", "KEN", "FRA", "LKA", "AUS", "PRK"]);
}

#[tokio::test]
async fn test_rerun_does_not_change_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_document(temp_dir.path(), "in.json", &fetched_snapshot());

    run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect("First pass should succeed");
    let first = read_document(&input);

    let report = run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect("Second pass should succeed");
    let second = read_document(&input);

    assert_eq!(first, second);
    assert_eq!(report.classified, 4);
}

#[tokio::test]
async fn test_trusted_values_are_not_overridden() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut thailand = fetched(
        "Thailandia",
        "THA",
        "TH",
        Some("Non è necessario il visto per soggiorni fino a 30 giorni."),
        None,
    );
    thailand["extracted"]["visaRequired"] = json!(true);
    let document = json!({
        "generatedAt": "2025-01-10T08:00:00.000Z",
        "total": 1,
        "results": [thailand]
    });
    let input = write_document(temp_dir.path(), "in.json", &document);

    run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect("Classification should succeed");

    let output = read_document(&input);
    let tha = record(&output, "THA");
    assert_eq!(tha["extracted"]["visaRequired"], true);
    assert_eq!(tha["extracted"]["visaFreeDays"], 30);
    assert_eq!(tha["color"], "red");
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let snapshot = fetched_snapshot();
    let input = write_document(temp_dir.path(), "in.json", &snapshot);
    let before = std::fs::read_to_string(&input).unwrap();

    let report = run_classification(create_test_config(input.clone(), None, true))
        .await
        .expect("Dry run should succeed");

    assert!(report.output.is_none());
    let rendered: Value = serde_json::from_str(report.rendered.as_deref().unwrap())
        .expect("Rendered output should be JSON");
    assert_eq!(record(&rendered, "KEN")["color"], "purple");
    assert_eq!(std::fs::read_to_string(&input).unwrap(), before);
}

#[tokio::test]
async fn test_warnings_are_reported_and_total_corrected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut snapshot = fetched_snapshot();
    snapshot["total"] = json!(250);
    let input = write_document(temp_dir.path(), "in.json", &snapshot);

    let report = run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect("Classification should succeed");

    assert!(report.warnings.contains(&DatasetWarning::TotalMismatch {
        declared: 250,
        actual: 6
    }));
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, DatasetWarning::FetchError { cca3, .. } if cca3 == "PRK")));
    assert_eq!(read_document(&input)["total"], 6);
}

#[tokio::test]
async fn test_duplicate_codes_fail_the_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let document = json!({
        "generatedAt": "2025-01-10T08:00:00.000Z",
        "total": 2,
        "results": [
            fetched("Francia", "FRA", "FR", None, None),
            fetched("France", "FRA", "FR", None, None)
        ]
    });
    let input = write_document(temp_dir.path(), "in.json", &document);
    let before = std::fs::read_to_string(&input).unwrap();

    let err = run_classification(create_test_config(input.clone(), None, false))
        .await
        .expect_err("Duplicate codes should be rejected");

    let message = format!("{:#}", err);
    assert!(message.contains("Duplicate country code 'FRA'"), "got: {}", message);
    assert_eq!(std::fs::read_to_string(&input).unwrap(), before);
}

#[tokio::test]
async fn test_missing_input_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("does-not-exist.json");

    let err = run_classification(create_test_config(input, None, false))
        .await
        .expect_err("Missing input should fail");

    assert!(format!("{:#}", err).contains("Failed to load"));
}

#[tokio::test]
async fn test_malformed_input_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.json");
    std::fs::write(&input, "{ not json").unwrap();

    let err = run_classification(create_test_config(input, None, false))
        .await
        .expect_err("Malformed input should fail");

    assert!(format!("{:#}", err).contains("Invalid dataset document"));
}
