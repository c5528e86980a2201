//! Content-based recommendations for leisure activities.
//!
//! The crate provides:
//! - **Feature extraction**: [`FeatureEncoder`] turns an
//!   [`Activity`](leisure_core::Activity) into a fixed-shape, versioned
//!   [`FeatureVector`].
//! - **Preference scoring**: [`PreferenceScorer`] implements the
//!   [`Recommender`](leisure_core::Recommender) trait. It ranks unrated
//!   activities by cosine similarity to the liked centroid, penalised by
//!   similarity to the disliked centroid.
//! - **Insights**: [`PreferenceInsights`] summarises favourite categories,
//!   audiences and prices for display.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use leisure_core::{Activity, Catalog, Category, RecommendRequest, Recommender, UserFeedback};
//! use leisure_recommender::PreferenceScorer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let origin = Coord { x: 9.37, y: 47.42 };
//! let catalog = Catalog::new(vec![
//!     Activity::new(1, "Abbey library", Category::Culture, origin),
//!     Activity::new(2, "Textile museum", Category::Culture, origin),
//!     Activity::new(3, "Climbing hall", Category::Sport, origin),
//! ])?;
//! let mut feedback = UserFeedback::new();
//! feedback.rate(1, leisure_core::Rating::Liked);
//!
//! let ranking = PreferenceScorer::default().recommend(
//!     &catalog,
//!     &feedback,
//!     &RecommendRequest::new().with_limit(1),
//! )?;
//! assert_eq!(ranking.ids().collect::<Vec<_>>(), vec![2]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod features;
pub mod insights;
mod profile;
mod scorer;

pub use error::ScorerConfigError;
pub use features::{FEATURE_DIMENSIONS, FEATURE_VERSION, FeatureEncoder, FeatureVector, FeatureWeights};
pub use insights::{
    AudienceCount, CategoryCount, MIN_LIKES_FOR_PROFILE, PreferenceInsights, category_counts,
    liked_prices, profile_label, top_audiences,
};
pub use profile::{PreferenceProfile, ProfileBuild};
pub use scorer::{PreferenceScorer, ScoreWeights};
