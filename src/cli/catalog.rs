//! Catalog command: list the colors recommendations are drawn from.

use crate::catalog::Catalog;
use crate::cli::common::{load_config, CatalogArgs, CliError, CliResult};
use crate::models::ColorEntry;
use clap::Args;
use serde::Serialize;

/// List catalog colors with derived HSL, luma and LRV
#[derive(Debug, Clone, Args)]
pub struct CatalogListArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Filter by family (e.g., grey)
    #[arg(long, value_name = "FAMILY")]
    pub family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct CatalogOutput<'a> {
    source: String,
    count: usize,
    colors: Vec<&'a ColorEntry>,
}

impl CatalogListArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = self.catalog.load(&load_config());
        let colors = self.filter(&catalog);

        if self.json {
            let output = CatalogOutput {
                source: catalog.source().to_string(),
                count: colors.len(),
                colors,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("Catalog: {} ({} colors)", catalog.source(), colors.len());
            println!();
            println!(
                "  {:<9} {:<16} {:<8} {:<11} {:<8} {:>4} {:>18} {:>6}",
                "ID", "Name", "Hex", "Family", "Tone", "LRV", "HSL", "Luma"
            );
            for entry in colors {
                println!(
                    "  {:<9} {:<16} {:<8} {:<11} {:<8} {:>4} {:>18} {:>6.1}",
                    entry.id,
                    entry.name,
                    entry.hex,
                    entry.family,
                    entry.undertone,
                    entry.lrv,
                    entry.hsl.to_string(),
                    entry.luma
                );
            }
        }

        Ok(())
    }

    fn filter<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ColorEntry> {
        catalog
            .entries()
            .iter()
            .filter(|e| {
                self.family
                    .as_deref()
                    .map_or(true, |family| e.family.matches_name(family))
            })
            .collect()
    }
}
