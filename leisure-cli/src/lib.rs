//! Command-line host for the leisure recommendation engine.
//!
//! `leisure recommend` filters a catalog, ranks it against a visitor's likes
//! and dislikes and prints a JSON report. `leisure insights` summarises the
//! visitor's taste. Options are layered from flags, configuration files and
//! `LEISURE_CMDS_<COMMAND>_<FIELD>` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod insights;
mod recommend;

pub use error::CliError;

use insights::{InsightsArgs, run_insights};
use recommend::{RecommendArgs, run_recommend};

const ARG_CATALOG: &str = "catalog";
const ARG_FEEDBACK: &str = "feedback";
const ARG_CATEGORY: &str = "category";
const ARG_BUDGET: &str = "budget";
const ARG_DATE: &str = "date";
const ARG_PARTY: &str = "party";
const ARG_LIMIT: &str = "limit";
const ARG_EXPLORE_RATE: &str = "explore-rate";
const ARG_SEED: &str = "seed";
const ARG_DISLIKE_WEIGHT: &str = "dislike-weight";
const ARG_OUTPUT: &str = "output";
const ENV_RECOMMEND_CATALOG: &str = "LEISURE_CMDS_RECOMMEND_CATALOG";
const ENV_RECOMMEND_FEEDBACK: &str = "LEISURE_CMDS_RECOMMEND_FEEDBACK";
const ENV_INSIGHTS_CATALOG: &str = "LEISURE_CMDS_INSIGHTS_CATALOG";
const ENV_INSIGHTS_FEEDBACK: &str = "LEISURE_CMDS_INSIGHTS_FEEDBACK";

/// Run the leisure CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or input files are
/// invalid, or when the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Insights(args) => run_insights(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "leisure",
    about = "Recommend leisure activities from likes and dislikes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank unrated activities for a visitor.
    Recommend(RecommendArgs),
    /// Summarise a visitor's preferences.
    Insights(InsightsArgs),
}

#[cfg(test)]
mod tests;
