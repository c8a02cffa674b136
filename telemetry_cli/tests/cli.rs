use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const DATASET: &str = r#"{
  "emea": [
    {"latency_ms": 100.0, "uptime": 0.99},
    {"latency_ms": 150.0, "uptime": 0.95},
    {"latency_ms": 200.0, "uptime": 0.90}
  ],
  "apac": [
    {"latency_ms": 170.0, "uptime": 0.98}
  ]
}"#;

fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn telemetry() -> Command {
    Command::cargo_bin("telemetry").unwrap()
}

#[test]
fn validate_accepts_well_formed_dataset() {
    let file = dataset_file(DATASET);

    telemetry()
        .args(["--quiet", "validate"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset is valid!"))
        .stdout(predicate::str::contains("Regions: 2"))
        .stdout(predicate::str::contains("Samples: 4"));
}

#[test]
fn validate_rejects_record_without_uptime() {
    let file = dataset_file(r#"{"emea": [{"latency_ms": 100.0}]}"#);

    telemetry()
        .args(["--quiet", "validate"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Dataset is invalid!"));
}

#[test]
fn validate_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    telemetry()
        .args(["--quiet", "validate"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure();
}

#[test]
fn query_json_reports_requested_regions() {
    let file = dataset_file(DATASET);

    let output = telemetry()
        .args(["--quiet", "query", "--dataset"])
        .arg(file.path())
        .args(["--region", "emea", "--region", "latam", "--threshold", "140", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["emea"]["avg_latency"], 150.0);
    assert_eq!(body["emea"]["p95_latency"], 195.0);
    assert_eq!(body["emea"]["breaches"], 2);
    assert_eq!(body["latam"]["breaches"], 0);
    assert!(body.get("apac").is_none());
}

#[test]
fn query_without_regions_covers_whole_dataset() {
    let file = dataset_file(DATASET);

    telemetry()
        .args(["--quiet", "query", "--dataset"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("apac"))
        .stdout(predicate::str::contains("emea"))
        .stdout(predicate::str::contains("Threshold: 180 ms"));
}

#[test]
fn query_prometheus_format() {
    let file = dataset_file(DATASET);

    telemetry()
        .args(["--quiet", "query", "--format", "prometheus", "--dataset"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"telemetry_breaches{region="emea"} 1"#));
}

#[test]
fn query_rejects_unknown_format() {
    let file = dataset_file(DATASET);

    telemetry()
        .args(["--quiet", "query", "--format", "xml", "--dataset"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: xml"));
}

#[test]
fn query_writes_markdown_file() {
    let file = dataset_file(DATASET);
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.md");

    telemetry()
        .args(["--quiet", "query", "--format", "markdown", "--dataset"])
        .arg(file.path())
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(report_path).unwrap();
    assert!(markdown.contains("# Regional Telemetry Report"));
    assert!(markdown.contains("| apac |"));
}

#[test]
fn regions_lists_sample_counts() {
    let file = dataset_file(DATASET);

    telemetry()
        .args(["--quiet", "regions", "--dataset"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total regions: 2"))
        .stdout(predicate::str::contains("emea (3 samples)"));
}
