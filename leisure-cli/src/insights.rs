//! Insights command implementation for the leisure CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use leisure_recommender::PreferenceInsights;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_catalog, load_feedback, require_existing, write_report};
use crate::{
    ARG_CATALOG, ARG_FEEDBACK, ARG_OUTPUT, CliError, ENV_INSIGHTS_CATALOG, ENV_INSIGHTS_FEEDBACK,
};

/// CLI arguments for the `insights` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise what a visitor likes: favourite categories, a \
                 short profile label, the most common target groups and the \
                 prices of liked activities.",
    about = "Summarise a visitor's preferences"
)]
#[ortho_config(prefix = "LEISURE")]
pub(crate) struct InsightsArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the feedback JSON file.
    #[arg(long = ARG_FEEDBACK, value_name = "path")]
    #[serde(default)]
    pub(crate) feedback: Option<Utf8PathBuf>,
    /// Write the insights here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

/// Resolved `insights` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InsightsConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) feedback: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<InsightsArgs> for InsightsConfig {
    type Error = CliError;

    fn try_from(args: InsightsArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_INSIGHTS_CATALOG,
        })?;
        let feedback = args.feedback.ok_or(CliError::MissingArgument {
            field: ARG_FEEDBACK,
            env: ENV_INSIGHTS_FEEDBACK,
        })?;
        Ok(Self {
            catalog,
            feedback,
            output: args.output,
        })
    }
}

pub(super) fn run_insights(args: InsightsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_insights_with(args, &mut stdout)
}

pub(super) fn run_insights_with(
    args: InsightsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = InsightsConfig::try_from(merged)?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    require_existing(&config.feedback, ARG_FEEDBACK)?;

    let catalog = load_catalog(&config.catalog)?;
    let feedback = load_feedback(&config.feedback)?;
    let insights = PreferenceInsights::from_feedback(&catalog, &feedback);
    write_report(&insights, config.output.as_ref(), writer)
}
