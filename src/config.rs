//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_DIR_ENV, DEFAULT_COATS, DEFAULT_COVERAGE_PER_LITRE};
use crate::engine::EstimateOptions;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Default catalog JSON used when no `--catalog` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Paint estimate settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Coats applied to walls and ceiling
    #[serde(default = "default_coats")]
    pub coats: u32,
    /// Square feet covered per litre
    #[serde(default = "default_coverage")]
    pub coverage_per_litre: f64,
}

const fn default_coats() -> u32 {
    DEFAULT_COATS
}

const fn default_coverage() -> f64 {
    DEFAULT_COVERAGE_PER_LITRE
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            coats: default_coats(),
            coverage_per_litre: default_coverage(),
        }
    }
}

impl From<EstimateConfig> for EstimateOptions {
    fn from(config: EstimateConfig) -> Self {
        Self {
            coats: config.coats,
            coverage_per_litre: config.coverage_per_litre,
        }
    }
}

/// Application configuration.
///
/// Validation rules:
/// - `paths.catalog` must exist when set
/// - `estimate.coats` must be at least 1
/// - `estimate.coverage_per_litre` must be a positive number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Paint estimate settings
    #[serde(default)]
    pub estimate: EstimateConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `MOODBOT_CONFIG_DIR` overrides the platform default:
    /// - Linux: `~/.config/MoodBot/`
    /// - macOS: `~/Library/Application Support/MoodBot/`
    /// - Windows: `%APPDATA%\MoodBot\`
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        if let Err(e) = config.validate() {
            tracing::warn!("Config {} is invalid: {e:#}", config_path.display());
        }

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.paths.catalog {
            if !catalog.exists() {
                anyhow::bail!("Catalog path does not exist: {}", catalog.display());
            }
        }

        if self.estimate.coats == 0 {
            anyhow::bail!("Number of coats must be at least 1");
        }

        let coverage = self.estimate.coverage_per_litre;
        if !coverage.is_finite() || coverage <= 0.0 {
            anyhow::bail!("Coverage per litre must be a positive number, got {coverage}");
        }

        Ok(())
    }

    /// Sets the default catalog path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist.
    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            anyhow::bail!("Catalog file does not exist: {}", path.display());
        }
        self.paths.catalog = Some(path);
        Ok(())
    }

    /// Estimate options derived from this config.
    #[must_use]
    pub fn estimate_options(&self) -> EstimateOptions {
        self.estimate.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.catalog, None);
        assert_eq!(config.estimate.coats, 2);
        assert_eq!(config.estimate.coverage_per_litre, 120.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_catalog_path() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("catalog.json");

        let mut config = Config::new();
        assert!(config.set_catalog_path(catalog.clone()).is_err());
        assert_eq!(config.paths.catalog, None);

        fs::write(&catalog, "[]").unwrap();
        assert!(config.set_catalog_path(catalog).is_ok());
    }

    #[test]
    fn test_config_validate_estimate() {
        let mut config = Config::new();
        config.estimate.coats = 0;
        assert!(config.validate().is_err());

        config.estimate.coats = 3;
        config.estimate.coverage_per_litre = 0.0;
        assert!(config.validate().is_err());

        config.estimate.coverage_per_litre = f64::NAN;
        assert!(config.validate().is_err());

        config.estimate.coverage_per_litre = 95.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.estimate.coats = 3;
        config.estimate.coverage_per_litre = 100.0;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.estimate_options().coats, 3);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.estimate.coats = 0;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[estimate]\ncoats = 1\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.estimate.coats, 1);
        assert_eq!(loaded.estimate.coverage_per_litre, 120.0);
        assert_eq!(loaded.paths.catalog, None);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[estimate\ncoats = ").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}
