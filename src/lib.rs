//! Facade crate for the leisure recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the
//! `recommender` feature, the content-based preference scorer.

#![forbid(unsafe_code)]

pub use leisure_core::{
    Activity, ActivityError, ActivityFilter, ActivityId, Audience, Availability, Capacity,
    Catalog, CatalogError, CatalogRecord, Category, Diagnostics, Exploration, ForecastProvider,
    ForecastSlot, PartySize, Ranking, Rating, RecommendError, RecommendRequest, Recommender,
    RecordError, ScoredActivity, Setting, UserFeedback, WeatherAnnotation, WeatherError,
    WeatherNote, WeatherPreference, WeatherReport, WeatherStatus, WeatherVerdict,
    annotate_weather,
};

#[cfg(feature = "test-support")]
pub use leisure_core::test_support;

#[cfg(feature = "recommender")]
pub use leisure_recommender::{
    FeatureEncoder, FeatureVector, FeatureWeights, PreferenceInsights, PreferenceScorer,
    ScoreWeights, ScorerConfigError,
};
