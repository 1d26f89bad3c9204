//! Recommend command: score the catalog and print a palette.

use crate::cli::common::{
    load_config, resolve_estimate_options, AnswerArgs, CatalogArgs, CliError, CliResult,
};
use crate::engine::{self, estimate_with, PaintEstimate, Recommendation, Role, ScoreBreakdown};
use crate::export::{ExportPalette, ExportedShade};
use clap::Args;
use serde::Serialize;

/// Recommend a base, accent and trim color for a room
#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    answers: AnswerArgs,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show how each color's score was reached
    #[arg(long)]
    explain_scores: bool,
}

/// A ranked entry in JSON output.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RankedOutput<'a> {
    id: &'a str,
    name: &'a str,
    score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

/// JSON-serializable recommendation.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RecommendOutput<'a> {
    catalog: String,
    palette: ExportPalette,
    explanation: &'a str,
    estimates: PaintEstimate,
    ranking: Vec<RankedOutput<'a>>,
}

impl RecommendArgs {
    /// Execute the recommend command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let answers = self.answers.to_answers()?;
        let catalog = self.catalog.load(&config);

        let options = resolve_estimate_options(config.estimate_options(), None, None)?;

        let recommendation = engine::recommend(&catalog, &answers)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let estimate = estimate_with(&answers.room, options);

        if self.json {
            let output = RecommendOutput {
                catalog: catalog.source().to_string(),
                palette: ExportPalette::from(&recommendation.palette),
                explanation: &recommendation.explanation,
                estimates: estimate,
                ranking: self.ranking(&recommendation),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            self.print_human(&recommendation, &estimate);
        }

        Ok(())
    }

    fn ranking<'a>(&self, recommendation: &'a Recommendation<'_>) -> Vec<RankedOutput<'a>> {
        recommendation
            .ranked
            .iter()
            .map(|s| RankedOutput {
                id: &s.entry.id,
                name: &s.entry.name,
                score: s.score,
                breakdown: self
                    .explain_scores
                    .then(|| ScoreBreakdown::compute(s.entry, &recommendation.model)),
            })
            .collect()
    }

    fn print_human(&self, recommendation: &Recommendation<'_>, estimate: &PaintEstimate) {
        let palette = &recommendation.palette;

        println!("Recommended Palette");
        println!("===================");
        println!();
        for role in Role::ALL {
            print_shade(role.title(), &ExportedShade::from(palette.get(role)));
        }
        println!();
        println!("{}", recommendation.explanation);
        println!();
        println!("{estimate}");

        if self.explain_scores {
            println!();
            print_breakdowns(recommendation);
        }
    }
}

fn print_shade(label: &str, shade: &ExportedShade) {
    let entry = &shade.entry;
    println!(
        "  {:<7} {:<16} {} {:<9} LRV {:>3}  score {}  (text {})",
        format!("{label}:"),
        entry.name,
        entry.hex,
        entry.id,
        entry.lrv,
        shade.score,
        entry.hsl.label_text_color()
    );
}

fn print_breakdowns(recommendation: &Recommendation<'_>) {
    println!("Score Breakdown");
    println!("===============");
    println!(
        "  {:<9} {:>5} {:>6} {:>5} {:>5} {:>7} {:>6} {:>5} {:>5} {:>5} {:>6} {:>5}",
        "ID", "Score", "LRVfit", "Warm", "Cool", "Neutral", "Accent", "Kids", "Pets", "Floor",
        "Prefer", "Common"
    );
    for (id, b) in recommendation.breakdowns() {
        let score = b.score();
        println!(
            "  {id:<9} {score:>5} {:>6.1} {:>5.1} {:>5.1} {:>7.1} {:>6.1} {:>5.1} {:>5.1} {:>5.1} {:>6.1} {:>5.1}",
            b.lrv_fit,
            b.warm_bias,
            b.cool_boost,
            b.neutral_family,
            b.accent_family,
            b.kids,
            b.pets,
            b.flooring,
            b.preferred_accent,
            b.common_neutral
        );
    }
}
