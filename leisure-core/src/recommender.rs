//! Rank unrated activities for a visitor.
//!
//! The [`Recommender`] trait is the seam between hosts and ranking
//! strategies. Implementations receive the whole catalog, the visitor's
//! current [`UserFeedback`] and a [`RecommendRequest`], and return a
//! [`Ranking`] of activities the visitor has not rated yet.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{ActivityId, Catalog, UserFeedback};

/// Seeded, optional injection of an unexpected candidate.
///
/// # Examples
/// ```
/// use leisure_core::Exploration;
///
/// let exploration = Exploration::new(0.15, 7)?;
/// assert_eq!(exploration.seed(), 7);
/// assert!(Exploration::new(1.5, 7).is_err());
/// # Ok::<(), leisure_core::RecommendError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exploration {
    rate: f64,
    seed: u64,
}

impl Exploration {
    /// Validate and build an exploration setting.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidExplorationRate`] unless `rate` lies
    /// in `0.0..=1.0`.
    pub fn new(rate: f64, seed: u64) -> Result<Self, RecommendError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(RecommendError::InvalidExplorationRate { rate });
        }
        Ok(Self { rate, seed })
    }

    /// Probability of injecting an exploratory candidate.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Seed for the random draw.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Parameters for a recommendation call.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use leisure_core::RecommendRequest;
///
/// let request = RecommendRequest::new()
///     .with_candidates(BTreeSet::from([1, 2, 3]))
///     .with_limit(2);
/// assert_eq!(request.limit, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendRequest {
    /// Restrict the ranking to these ids. `None` means the whole catalog.
    pub candidates: Option<BTreeSet<ActivityId>>,
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
    /// Optional exploratory injection.
    pub exploration: Option<Exploration>,
}

impl RecommendRequest {
    /// Request a ranking of the whole catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict ranking to `candidates`.
    #[must_use]
    pub fn with_candidates(mut self, candidates: BTreeSet<ActivityId>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Cap the number of returned entries.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enable exploratory injection.
    #[must_use]
    pub const fn with_exploration(mut self, exploration: Exploration) -> Self {
        self.exploration = Some(exploration);
        self
    }

    /// Report whether `id` may appear in the ranking.
    #[must_use]
    pub fn admits(&self, id: ActivityId) -> bool {
        self.candidates
            .as_ref()
            .is_none_or(|candidates| candidates.contains(&id))
    }
}

/// One ranked activity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredActivity {
    /// Activity identifier.
    pub id: ActivityId,
    /// Relevance score; higher is better.
    pub score: f32,
    /// Whether the entry was injected by exploration.
    pub explored: bool,
}

/// Non-fatal problems noticed while ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Rated ids that are missing from the catalog.
    pub dangling_feedback: Vec<ActivityId>,
    /// Candidate ids that are missing from the catalog.
    pub unknown_candidates: Vec<ActivityId>,
}

impl Diagnostics {
    /// Report whether nothing was noticed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling_feedback.is_empty() && self.unknown_candidates.is_empty()
    }
}

/// Ordered recommendation result.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Entries sorted by descending score.
    pub entries: Vec<ScoredActivity>,
    /// Problems that did not prevent ranking.
    pub diagnostics: Diagnostics,
}

impl Ranking {
    /// Iterate over ranked ids in order.
    pub fn ids(&self) -> impl Iterator<Item = ActivityId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Return the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the ranking is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The visitor has not liked any catalog activity yet.
    #[error("at least one liked activity is required to rank recommendations")]
    InsufficientPreferenceData,
    /// An exploration rate outside `0.0..=1.0` was requested.
    #[error("exploration rate {rate} must lie between 0 and 1")]
    InvalidExplorationRate {
        /// Rejected rate.
        rate: f64,
    },
}

/// Rank catalog activities against a visitor's feedback.
///
/// Implementations must:
/// - Exclude every rated activity from the ranking.
/// - Return [`RecommendError::InsufficientPreferenceData`] when no liked
///   activity exists in the catalog.
/// - Produce identical output for identical inputs.
/// - Treat feedback as read-only.
///
/// Recommenders must be `Send + Sync` so hosts can share them across threads.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{
///     Activity, Catalog, Category, Ranking, RecommendError, RecommendRequest, Recommender,
///     ScoredActivity, UserFeedback,
/// };
///
/// struct CatalogOrder;
///
/// impl Recommender for CatalogOrder {
///     fn recommend(
///         &self,
///         catalog: &Catalog,
///         feedback: &UserFeedback,
///         request: &RecommendRequest,
///     ) -> Result<Ranking, RecommendError> {
///         if feedback.liked().next().is_none() {
///             return Err(RecommendError::InsufficientPreferenceData);
///         }
///         let entries = catalog
///             .iter()
///             .filter(|a| !feedback.is_rated(a.id) && request.admits(a.id))
///             .map(|a| ScoredActivity { id: a.id, score: 0.0, explored: false })
///             .collect();
///         Ok(Ranking { entries, ..Ranking::default() })
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let catalog = Catalog::new(vec![
///     Activity::new(1, "Zoo", Category::Family, origin),
///     Activity::new(2, "Spa", Category::Wellness, origin),
/// ])?;
/// let feedback = UserFeedback::from_lists(&[1], &[]);
/// let ranking = CatalogOrder.recommend(&catalog, &feedback, &RecommendRequest::new())?;
/// assert_eq!(ranking.ids().collect::<Vec<_>>(), vec![2]);
/// # Ok(())
/// # }
/// ```
pub trait Recommender: Send + Sync {
    /// Rank unrated activities for the visitor.
    fn recommend(
        &self,
        catalog: &Catalog,
        feedback: &UserFeedback,
        request: &RecommendRequest,
    ) -> Result<Ranking, RecommendError>;

    /// Replace non-finite scores with `0.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if score.is_finite() { score } else { 0.0 }
    }
}
