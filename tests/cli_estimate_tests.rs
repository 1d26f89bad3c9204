//! End-to-end tests for `moodbot estimate`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_estimate_default_room() {
    let output = run_isolated(&["estimate"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Estimate should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "Walls: 7.2 L (estimated), Ceiling: 3.0 L → Purchase recommendation: 11 L (round up)."
    ));
}

#[test]
fn test_estimate_json() {
    let result = stdout_json(&run_isolated(&["estimate", "--json"]));

    assert_eq!(result["room"]["width"], 12.0);
    assert_eq!(result["areas"]["wallArea"], 432.0);
    assert_eq!(result["areas"]["ceilingArea"], 180.0);
    assert_eq!(result["areas"]["roomArea"], 180.0);
    assert_eq!(result["options"]["coats"], 2);
    assert_eq!(result["estimate"]["wallLitres"], 7.2);
    assert_eq!(result["estimate"]["totalLitres"], 11.0);
}

#[test]
fn test_estimate_with_flags() {
    let result = stdout_json(&run_isolated(&[
        "estimate",
        "--json",
        "--width",
        "10",
        "--length",
        "10",
        "--ceiling-height",
        "8",
        "--coats",
        "1",
        "--coverage",
        "100",
    ]));

    assert_eq!(result["estimate"]["wallLitres"], 3.2);
    assert_eq!(result["estimate"]["ceilingLitres"], 1.0);
    assert_eq!(result["estimate"]["totalLitres"], 5.0);
}

#[test]
fn test_estimate_uses_configured_coats() {
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), None, 3, 120.0);

    let output = isolated_command(&["estimate", "--json"], config_dir.path())
        .output()
        .unwrap();
    let result = stdout_json(&output);
    assert_eq!(result["options"]["coats"], 3);
    // 432 * 3 / 120 = 10.8, 180 * 3 / 120 = 4.5
    assert_eq!(result["estimate"]["wallLitres"], 10.8);
    assert_eq!(result["estimate"]["ceilingLitres"], 4.5);
    assert_eq!(result["estimate"]["totalLitres"], 16.0);
}

#[test]
fn test_estimate_rejects_invalid_values() {
    assert_eq!(
        run_isolated(&["estimate", "--coats", "0"]).status.code(),
        Some(1)
    );
    assert_eq!(
        run_isolated(&["estimate", "--coverage", "-10"]).status.code(),
        Some(1)
    );
    assert_eq!(
        run_isolated(&["estimate", "--ceiling-height", "-1"]).status.code(),
        Some(1)
    );
}

#[test]
fn test_estimate_rejects_zero_coats_in_config() {
    let config_dir = TempDir::new().unwrap();
    write_file(config_dir.path(), "config.toml", "[estimate]\ncoats = 0\n");

    let output = isolated_command(&["estimate"], config_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    // An explicit flag overrides the bad configured value
    let output = isolated_command(&["estimate", "--coats", "2"], config_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}
