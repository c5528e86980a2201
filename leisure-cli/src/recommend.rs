//! Recommend command implementation for the leisure CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use leisure_core::{
    ActivityFilter, ActivityId, Catalog, Category, Diagnostics, Exploration, PartySize, Ranking,
    RecommendError, RecommendRequest, Recommender, UserFeedback,
};
use leisure_recommender::{FeatureWeights, PreferenceScorer, ScoreWeights};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_catalog, load_feedback, require_existing, write_report};
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_CATEGORY, ARG_DATE, ARG_DISLIKE_WEIGHT, ARG_EXPLORE_RATE,
    ARG_FEEDBACK, ARG_LIMIT, ARG_OUTPUT, ARG_PARTY, ARG_SEED, CliError, ENV_RECOMMEND_CATALOG,
    ENV_RECOMMEND_FEEDBACK,
};

/// Seed used when exploration is enabled without `--seed`.
pub(crate) const DEFAULT_EXPLORATION_SEED: u64 = 0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the activities a visitor has not rated yet. The catalog \
                 is a JSON array of activity records and the feedback file \
                 lists liked and disliked ids. Manual filters narrow the \
                 candidates before ranking.",
    about = "Recommend activities from likes and dislikes"
)]
#[ortho_config(prefix = "LEISURE")]
pub(crate) struct RecommendArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the feedback JSON file.
    #[arg(long = ARG_FEEDBACK, value_name = "path")]
    #[serde(default)]
    pub(crate) feedback: Option<Utf8PathBuf>,
    /// Only rank activities of this category.
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Maximum price per person in CHF.
    #[arg(long = ARG_BUDGET, value_name = "chf")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Day of the visit (YYYY-MM-DD).
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Planned party size, e.g. "pair" or "large-group".
    #[arg(long = ARG_PARTY, value_name = "size")]
    #[serde(default)]
    pub(crate) party: Option<String>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Probability of injecting one unexpected activity.
    #[arg(long = ARG_EXPLORE_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) explore_rate: Option<f64>,
    /// Seed for the exploration draw.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Weight of the dislike penalty.
    #[arg(long = ARG_DISLIKE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) dislike_weight: Option<f32>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) feedback: Utf8PathBuf,
    pub(crate) filter: ActivityFilter,
    pub(crate) limit: Option<usize>,
    pub(crate) exploration: Option<Exploration>,
    pub(crate) weights: ScoreWeights,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        require_existing(&self.feedback, ARG_FEEDBACK)?;
        Ok(())
    }

    fn request(&self, candidates: BTreeSet<ActivityId>) -> RecommendRequest {
        RecommendRequest {
            candidates: Some(candidates),
            limit: self.limit,
            exploration: self.exploration,
        }
    }
}

fn invalid(field: &'static str, message: impl ToString) -> CliError {
    CliError::InvalidArgument {
        field,
        message: message.to_string(),
    }
}

fn parse_filter(args: &RecommendArgs) -> Result<ActivityFilter, CliError> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|message| invalid(ARG_CATEGORY, message))?;
    let party = args
        .party
        .as_deref()
        .map(str::parse::<PartySize>)
        .transpose()
        .map_err(|message| invalid(ARG_PARTY, message))?;
    let date = args
        .date
        .as_deref()
        .map(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT))
        .transpose()
        .map_err(|err| invalid(ARG_DATE, err))?;
    if let Some(budget) = args.budget
        && !(budget.is_finite() && budget >= 0.0)
    {
        return Err(invalid(ARG_BUDGET, format!("{budget} is not a price")));
    }
    Ok(ActivityFilter {
        date,
        category,
        party,
        budget: args.budget,
    })
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let filter = parse_filter(&args)?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let feedback = args.feedback.ok_or(CliError::MissingArgument {
            field: ARG_FEEDBACK,
            env: ENV_RECOMMEND_FEEDBACK,
        })?;
        let seed = args.seed.unwrap_or(DEFAULT_EXPLORATION_SEED);
        let exploration = args
            .explore_rate
            .map(|rate| Exploration::new(rate, seed))
            .transpose()
            .map_err(|err| invalid(ARG_EXPLORE_RATE, err))?;
        let weights = args
            .dislike_weight
            .map_or_else(
                || Ok(ScoreWeights::default()),
                |disliked| {
                    ScoreWeights {
                        disliked,
                        ..ScoreWeights::default()
                    }
                    .validate()
                },
            )
            .map_err(|err| invalid(ARG_DISLIKE_WEIGHT, err))?;

        Ok(Self {
            catalog,
            feedback,
            filter,
            limit: args.limit,
            exploration,
            weights,
            output: args.output,
        })
    }
}

/// Outcome reported by the `recommend` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReportStatus {
    /// Entries are ranked by preference score.
    Ranked,
    /// Nothing has been liked yet; entries are unranked candidates.
    InsufficientPreferenceData,
}

/// One activity in a [`RecommendReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ReportEntry {
    pub(crate) id: ActivityId,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) score: Option<f32>,
    #[serde(default)]
    pub(crate) explored: bool,
}

/// JSON document printed by the `recommend` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendReport {
    pub(crate) status: ReportStatus,
    /// Activities left after the manual filters.
    pub(crate) candidates: usize,
    pub(crate) entries: Vec<ReportEntry>,
    pub(crate) diagnostics: Diagnostics,
}

impl RecommendReport {
    fn ranked(catalog: &Catalog, candidates: usize, ranking: Ranking) -> Self {
        let entries = ranking
            .entries
            .iter()
            .filter_map(|scored| {
                catalog.get(scored.id).map(|activity| ReportEntry {
                    id: activity.id,
                    name: activity.name.clone(),
                    category: activity.category,
                    cost: activity.cost,
                    score: Some(scored.score),
                    explored: scored.explored,
                })
            })
            .collect();
        Self {
            status: ReportStatus::Ranked,
            candidates,
            entries,
            diagnostics: ranking.diagnostics,
        }
    }

    /// Unrated candidates in catalog order, for visitors with no likes yet.
    fn fallback(
        catalog: &Catalog,
        feedback: &UserFeedback,
        candidates: &BTreeSet<ActivityId>,
        limit: Option<usize>,
    ) -> Self {
        let entries = catalog
            .iter()
            .filter(|activity| candidates.contains(&activity.id) && !feedback.is_rated(activity.id))
            .take(limit.unwrap_or(usize::MAX))
            .map(|activity| ReportEntry {
                id: activity.id,
                name: activity.name.clone(),
                category: activity.category,
                cost: activity.cost,
                score: None,
                explored: false,
            })
            .collect();
        let dangling_feedback = feedback
            .iter()
            .map(|(id, _)| id)
            .filter(|id| !catalog.contains(*id))
            .collect();
        Self {
            status: ReportStatus::InsufficientPreferenceData,
            candidates: candidates.len(),
            entries,
            diagnostics: Diagnostics {
                dangling_feedback,
                unknown_candidates: Vec::new(),
            },
        }
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let report = execute_recommend(&config)?;
    write_report(&report, config.output.as_ref(), writer)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendReport, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let feedback = load_feedback(&config.feedback)?;
    let scorer = PreferenceScorer::new(config.weights, FeatureWeights::default())?;

    let candidates = config.filter.candidates(&catalog);
    let candidate_count = candidates.len();
    log::info!(
        "{candidate_count} of {} activities pass the filters",
        catalog.len()
    );

    match scorer.recommend(&catalog, &feedback, &config.request(candidates.clone())) {
        Ok(ranking) => Ok(RecommendReport::ranked(&catalog, candidate_count, ranking)),
        Err(RecommendError::InsufficientPreferenceData) => Ok(RecommendReport::fallback(
            &catalog,
            &feedback,
            &candidates,
            config.limit,
        )),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
