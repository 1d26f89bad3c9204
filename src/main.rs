//! MoodBot - paint palette recommender
//!
//! Scores a paint catalog against room and personality answers and prints a
//! base, accent and trim palette with a paint estimate.

use clap::{Parser, Subcommand};
use moodbot::cli::{
    CatalogListArgs, CliError, ConfigArgs, EstimateArgs, ExitCode, ExportArgs, RecommendArgs,
};
use moodbot::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MoodBot - paint palette recommender
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend a base, accent and trim color
    Recommend(RecommendArgs),
    /// Write a recommendation to a JSON file
    Export(ExportArgs),
    /// Estimate paint litres for a room
    Estimate(EstimateArgs),
    /// List catalog colors
    Catalog(CatalogListArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Recommend(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Estimate(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
