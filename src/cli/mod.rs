//! CLI command handlers for MoodBot.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method that
//! prints to stdout and reports failures as a [`common::CliError`].

pub mod catalog;
pub mod common;
pub mod config;
pub mod estimate;
pub mod export;
pub mod recommend;

// Re-export types used by main.rs and tests
pub use catalog::CatalogListArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use estimate::EstimateArgs;
pub use export::ExportArgs;
pub use recommend::RecommendArgs;
