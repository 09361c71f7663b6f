//! Config file loading and the path from config to report.

use std::fs;

use pagesim::common::config::SimulationConfig;
use pagesim::report::{summaries_to_csv, summarize, summarize_timed, timed_run_all};
use pagesim::{run_all, Error, InputErrorKind, Policy};
use tempfile::tempdir;

#[test]
fn test_load_config_and_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"{
            "pages": "1,2,3,4,1,2,5,1,2,3,4,5",
            "capacity": 4,
            "policies": ["FIFO", "Optimal"]
        }"#,
    )
    .unwrap();

    let config = SimulationConfig::load(&path).unwrap();
    let refs = config.reference_string().unwrap();
    let capacity = config.capacity().unwrap();

    let results = run_all(&config.policies, &refs, capacity);
    let csv = summaries_to_csv(&summarize(&results));

    assert_eq!(
        csv,
        "Algorithm,Page Faults,Hit Rate,Fault Rate,Execution Time,Avg Response Time\n\
         FIFO,10,16.67%,83.33%,,\n\
         Optimal,6,50.00%,50.00%,,\n"
    );
}

#[test]
fn test_timed_export_from_config() {
    let config = SimulationConfig::from_json(r#"{"pages": "1,2,3,1,2,3", "capacity": 2}"#).unwrap();
    let refs = config.reference_string().unwrap();
    let capacity = config.capacity().unwrap();

    let runs = timed_run_all(&config.policies, &refs, capacity);
    let csv = summaries_to_csv(&summarize_timed(&runs));
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.len(), 6);
        assert!(cells[4].ends_with(" s"));
        assert!(cells[5].ends_with(" ms"));
    }
    assert!(lines[1].starts_with("FIFO,6,"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let err = SimulationConfig::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ capacity: 3 ").unwrap();

    let err = SimulationConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_unknown_policy_in_config() {
    let err = SimulationConfig::from_json(r#"{"policies": ["CLOCK"]}"#).unwrap_err();
    assert!(err.to_string().contains("CLOCK"));
}

#[test]
fn test_bad_pages_in_config_report_raw_text() {
    let config = SimulationConfig::from_json(r#"{"pages": "1, 2, x"}"#).unwrap();
    let err = config.reference_string().unwrap_err();

    match err {
        Error::InvalidInput { input, kind } => {
            assert_eq!(input, "1, 2, x");
            assert_eq!(
                kind,
                InputErrorKind::MalformedToken {
                    token: "x".to_string(),
                    position: 2,
                }
            );
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert_eq!(config.policies, Policy::ALL.to_vec());
}
