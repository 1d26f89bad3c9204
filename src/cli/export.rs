//! Export command for writing a recommendation as JSON.

use crate::cli::common::{
    load_config, resolve_estimate_options, AnswerArgs, CatalogArgs, CliError, CliResult,
};
use crate::constants::DEFAULT_EXPORT_FILE;
use crate::engine::{self, estimate_with};
use crate::export::ExportRecord;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

/// Export a recommendation to a JSON file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    answers: AnswerArgs,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Output path for the JSON file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,

    /// RFC 3339 timestamp to record instead of the current time
    #[arg(long, value_name = "TIME")]
    pub timestamp: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let generated_at = self.generated_at()?;
        let config = load_config();
        let answers = self.answers.to_answers()?;
        let catalog = self.catalog.load(&config);

        let options = resolve_estimate_options(config.estimate_options(), None, None)?;

        let recommendation = engine::recommend(&catalog, &answers)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let estimate = estimate_with(&answers.room, options);

        let record = ExportRecord::new(&answers, &recommendation.palette, estimate, generated_at);
        record
            .write_to(&self.output)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Exported recommendation to: {}", self.output.display());

        Ok(())
    }

    fn generated_at(&self) -> CliResult<DateTime<Utc>> {
        match &self.timestamp {
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| CliError::validation(format!("Invalid --timestamp '{text}': {e}"))),
            None => Ok(Utc::now()),
        }
    }
}
