//! Core domain types for the leisure engine.
//!
//! The crate models the static activity catalog, the visitor's like/dislike
//! feedback, the manual and weather filters that narrow the catalog, and the
//! [`Recommender`] seam that ranking strategies implement. Constructors
//! validate their input and return `Result` so bad data surfaces early.
#![forbid(unsafe_code)]

mod activity;
mod attributes;
pub mod catalog;
mod category;
mod feedback;
pub mod filter;
pub mod recommender;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod weather;

pub use activity::{Activity, ActivityError, ActivityId, Availability, Capacity};
pub use attributes::{Audience, Setting, WeatherPreference};
pub use catalog::{Catalog, CatalogError, CatalogRecord, RecordError};
pub use category::Category;
pub use feedback::{Rating, UserFeedback};
pub use filter::{ActivityFilter, PartySize};
pub use recommender::{
    Diagnostics, Exploration, Ranking, RecommendError, RecommendRequest, Recommender,
    ScoredActivity,
};
pub use weather::{
    ForecastProvider, ForecastSlot, WeatherAnnotation, WeatherError, WeatherNote, WeatherReport,
    WeatherStatus, WeatherVerdict, annotate_weather,
};
