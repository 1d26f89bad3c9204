//! Shared types and arguments for CLI commands.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::engine::EstimateOptions;
use crate::models::{Answers, FormInput, RoomDimensions};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or configuration
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A command failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// Human-readable message printed after `Error: `
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user config, falling back to defaults when it is unreadable.
#[must_use]
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable configuration: {e:#}");
        Config::default()
    })
}

/// Applies flag overrides to the configured estimate options and rejects
/// values the estimator cannot use, wherever they came from.
pub fn resolve_estimate_options(
    configured: EstimateOptions,
    coats: Option<u32>,
    coverage: Option<f64>,
) -> CliResult<EstimateOptions> {
    let options = EstimateOptions {
        coats: coats.unwrap_or(configured.coats),
        coverage_per_litre: coverage.unwrap_or(configured.coverage_per_litre),
    };

    if options.coats == 0 {
        return Err(CliError::validation(
            "Number of coats must be at least 1 (check --coats or the config file)",
        ));
    }
    if !options.coverage_per_litre.is_finite() || options.coverage_per_litre <= 0.0 {
        return Err(CliError::validation(format!(
            "Coverage per litre must be a positive number, got {} (check --coverage or the config file)",
            options.coverage_per_litre
        )));
    }

    Ok(options)
}

fn check_dimension(flag: &str, value: Option<f64>) -> CliResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(CliError::validation(format!(
            "--{flag} must be a positive number, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Room dimension flags.
#[derive(Debug, Clone, Default, Args)]
pub struct RoomArgs {
    /// Room type (e.g., bedroom, living room)
    #[arg(long, value_name = "TYPE")]
    pub room_type: Option<String>,

    /// Room width (default 12)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Room length (default 15)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Ceiling height (default 8)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub ceiling_height: Option<f64>,
}

impl RoomArgs {
    /// Rejects non-positive dimensions given on the command line.
    pub fn validate(&self) -> CliResult<()> {
        check_dimension("width", self.width)?;
        check_dimension("length", self.length)?;
        check_dimension("ceiling-height", self.ceiling_height)
    }

    /// Validated dimensions with defaults for absent flags.
    pub fn to_dimensions(&self) -> CliResult<RoomDimensions> {
        self.validate()?;
        Ok(Answers::from_form(&self.to_form()).room)
    }

    fn to_form(&self) -> FormInput {
        FormInput {
            room_type: self.room_type.clone(),
            width: self.width,
            length: self.length,
            ceiling_height: self.ceiling_height,
            ..FormInput::default()
        }
    }
}

/// Wizard answer flags, optionally layered over an answers file.
#[derive(Debug, Clone, Default, Args)]
pub struct AnswerArgs {
    /// JSON file with wizard answers; flags override its values
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    #[command(flatten)]
    pub room: RoomArgs,

    /// Natural light: weak, medium or strong
    #[arg(long, value_name = "LEVEL")]
    pub daylight: Option<String>,

    /// Natural light tone: warm, neutral or cool
    #[arg(long, value_name = "TONE")]
    pub daylight_tone: Option<String>,

    /// Artificial light tone (recorded in exports)
    #[arg(long, value_name = "TONE")]
    pub artificial_tone: Option<String>,

    /// Room objective: bigger, cozier, brighter or softer
    #[arg(long, value_name = "GOAL")]
    pub objective: Option<String>,

    /// Four-letter persona code (e.g., ENFP)
    #[arg(long, value_name = "CODE")]
    pub persona: Option<String>,

    /// Children use the room
    #[arg(long, value_name = "yes|no", value_parser = ["yes", "no"], ignore_case = true)]
    pub kids: Option<String>,

    /// Pets use the room
    #[arg(long, value_name = "yes|no", value_parser = ["yes", "no"], ignore_case = true)]
    pub pets: Option<String>,

    /// Flooring tone: warm, neutral or cool
    #[arg(long, value_name = "TONE")]
    pub flooring: Option<String>,

    /// Preferred accent family (e.g., teal)
    #[arg(long, value_name = "FAMILY")]
    pub preferred_accent: Option<String>,
}

impl AnswerArgs {
    /// Reads the answers file, if any, and applies the flags on top.
    pub fn to_form(&self) -> CliResult<FormInput> {
        self.room.validate()?;

        let base = match &self.answers {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    CliError::io(format!(
                        "Failed to read answers file {}: {e}",
                        path.display()
                    ))
                })?;
                serde_json::from_str(&content).map_err(|e| {
                    CliError::validation(format!(
                        "Invalid answers file {}: {e}",
                        path.display()
                    ))
                })?
            }
            None => FormInput::default(),
        };

        let flags = FormInput {
            daylight: self.daylight.clone(),
            daylight_tone: self.daylight_tone.clone(),
            artificial_tone: self.artificial_tone.clone(),
            objective: self.objective.clone(),
            persona: self.persona.clone(),
            kids: self.kids.clone(),
            pets: self.pets.clone(),
            flooring: self.flooring.clone(),
            preferred_accent: self.preferred_accent.clone(),
            ..self.room.to_form()
        };

        Ok(base.overlay(flags))
    }

    /// Typed answers with defaults applied.
    pub fn to_answers(&self) -> CliResult<Answers> {
        Ok(Answers::from_form(&self.to_form()?))
    }
}

/// Catalog selection flag.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Catalog JSON file (falls back to the configured or built-in catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

impl CatalogArgs {
    /// Loads the catalog from the flag, then the config, then the built-in set.
    #[must_use]
    pub fn load(&self, config: &Config) -> Catalog {
        let path = self.catalog.as_ref().or(config.paths.catalog.as_ref());
        Catalog::load_or_builtin(path.map(PathBuf::as_path))
    }
}
