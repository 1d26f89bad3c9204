//! End-to-end tests for `moodbot export`.

use moodbot::export::ExportRecord;
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_writes_record() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("result.json");

    let output = run_isolated(&[
        "export",
        "--output",
        out_path.to_str().unwrap(),
        "--timestamp",
        "2024-05-01T12:00:00Z",
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported recommendation to"));
    assert!(out_path.exists(), "Export file should exist");

    let content = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["generatedAt"], "2024-05-01T12:00:00Z");
    assert_eq!(value["palette"]["base"]["id"], "SMOKE-06");
    assert_eq!(value["palette"]["accent"]["id"], "INK-07");
    assert_eq!(value["palette"]["trim"]["id"], "POW-01");
    assert_eq!(value["estimates"]["totalLitres"], 11.0);
    assert_eq!(value["inputs"]["daylight"], "medium");
    assert_eq!(value["inputs"]["objective"], "bigger");
}

#[test]
fn test_export_round_trips_through_library() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("result.json");

    let output = run_isolated(&[
        "export",
        "--output",
        out_path.to_str().unwrap(),
        "--daylight",
        "strong",
        "--pets",
        "yes",
        "--preferred-accent",
        "green",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let record = ExportRecord::from_json(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert!(record.inputs.household.pets);
    assert_eq!(
        record.inputs.household.preferred_accent.as_deref(),
        Some("green")
    );
    assert_ne!(record.palette.base.entry.id, record.palette.accent.entry.id);
    assert_eq!(record.estimates.total_litres, 11.0);
}

#[test]
fn test_export_uses_configured_estimate() {
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), None, 1, 120.0);
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("one-coat.json");

    let output = isolated_command(
        &["export", "--output", out_path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let record = ExportRecord::from_json(&fs::read_to_string(&out_path).unwrap()).unwrap();
    // walls 432 / 120 = 3.6, ceiling 180 / 120 = 1.5
    assert_eq!(record.estimates.wall_litres, 3.6);
    assert_eq!(record.estimates.ceiling_litres, 1.5);
    assert_eq!(record.estimates.total_litres, 6.0);
}

#[test]
fn test_export_default_file_name() {
    let work_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();

    let output = isolated_command(&["export"], config_dir.path())
        .current_dir(work_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(work_dir.path().join("moodbot-result.json").exists());
}

#[test]
fn test_export_invalid_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("result.json");
    let output = run_isolated(&[
        "export",
        "--output",
        out_path.to_str().unwrap(),
        "--timestamp",
        "not-a-time",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!out_path.exists());
}

#[test]
fn test_export_unwritable_output() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file cannot be used as a parent directory
    let blocker = write_file(temp_dir.path(), "blocker", "x");
    let out_path = blocker.join("result.json");

    let output = run_isolated(&["export", "--output", out_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_export_rejects_zero_coats_in_config() {
    let config_dir = TempDir::new().unwrap();
    write_file(config_dir.path(), "config.toml", "[estimate]\ncoats = 0\n");
    let out_path = config_dir.path().join("result.json");

    let output = isolated_command(
        &["export", "--output", out_path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!out_path.exists());
}
