//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use moodbot::config::{Config, EstimateConfig, PathConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the moodbot binary
pub fn moodbot_bin() -> &'static str {
    env!("CARGO_BIN_EXE_moodbot")
}

/// Creates a Command with an isolated config directory.
///
/// Every CLI test goes through this so a developer's own configuration
/// never leaks into assertions.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(moodbot_bin());
    cmd.env("MOODBOT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// A three-color catalog: one neutral, one dark accent and one bright white.
pub fn small_catalog_json() -> &'static str {
    r##"[
  { "id": "GREY-1", "name": "Test Grey", "hex": "#A0A0A0", "lrv": 60, "undertone": "neutral", "family": "grey" },
  { "id": "NAVY-2", "name": "Test Navy", "hex": "#1A2040", "lrv": 8, "undertone": "cool", "family": "blue" },
  { "id": "CHALK-3", "name": "Test Chalk", "hex": "#F8F8F8", "lrv": 91, "undertone": "neutral", "family": "white" }
]"##
}

/// Writes a file into `dir` and returns its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Writes the small catalog into a new temp directory.
pub fn temp_small_catalog() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "catalog.json", small_catalog_json());
    (path, temp_dir)
}

/// Writes a config file into `config_dir`.
pub fn write_config(config_dir: &Path, catalog: Option<PathBuf>, coats: u32, coverage: f64) {
    let config = Config {
        paths: PathConfig { catalog },
        estimate: EstimateConfig {
            coats,
            coverage_per_litre: coverage,
        },
    };
    config
        .save_to(&config_dir.join("config.toml"))
        .expect("Failed to write config");
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodbot::catalog::Catalog;

    #[test]
    fn test_small_catalog_parses() {
        let catalog = Catalog::from_json(small_catalog_json()).unwrap();
        assert_eq!(catalog.len(), 3);
    }
}
