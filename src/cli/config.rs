//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default catalog JSON file
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Default number of coats
    #[arg(long, value_name = "N")]
    coats: Option<u32>,

    /// Default coverage in square feet per litre
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    coverage: Option<f64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    paths: PathsOutput,
    estimate: EstimateOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<String>,
}

#[derive(Serialize, Debug)]
struct EstimateOutput {
    coats: u32,
    coverage_per_litre: f64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.catalog.is_none() && self.coats.is_none() && self.coverage.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --coats, or --coverage",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.catalog {
            config
                .set_catalog_path(path.clone())
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        if let Some(coats) = self.coats {
            config.estimate.coats = coats;
        }

        if let Some(coverage) = self.coverage {
            config.estimate.coverage_per_litre = coverage;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        paths: PathsOutput {
            catalog: config
                .paths
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        estimate: EstimateOutput {
            coats: config.estimate.coats,
            coverage_per_litre: config.estimate.coverage_per_litre,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("MoodBot Configuration");
    println!("=====================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Paths:");
    if let Some(catalog) = &config.paths.catalog {
        println!("  Catalog: {}", catalog.display());
    } else {
        println!("  Catalog: (built-in)");
    }
    println!();

    println!("Estimate:");
    println!("  Coats: {}", config.estimate.coats);
    println!(
        "  Coverage: {} sq ft per litre",
        config.estimate.coverage_per_litre
    );
    println!();
}
