//! Content-based ranking from liked and disliked activities.
//!
//! For every candidate the scorer computes
//! `liked · cos(candidate, liked centroid) − disliked · cos(candidate,
//! disliked centroid)`, where the centroids are means of encoded activities
//! and the dislike term vanishes without dislikes. Candidates are sorted by
//! descending score with catalog order breaking ties.

use std::cmp::Ordering;

use leisure_core::{
    Activity, ActivityId, Catalog, Diagnostics, Exploration, Ranking, RecommendError,
    RecommendRequest, Recommender, ScoredActivity, UserFeedback,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{FeatureEncoder, FeatureWeights, PreferenceProfile, ScorerConfigError};

/// Relative weighting of the like and dislike terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier for similarity to liked activities.
    pub liked: f32,
    /// Multiplier for similarity to disliked activities.
    pub disliked: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when either value is not
    /// finite or negative, or when the liked weight is zero.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerConfigError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.liked.is_finite()
            && self.disliked.is_finite()
            && self.liked > 0.0
            && self.disliked >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blends weighted similarities"
    )]
    fn blend(self, affinity: f32, aversion: f32) -> f32 {
        self.liked * affinity - self.disliked * aversion
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            liked: 1.0,
            disliked: 1.5,
        }
    }
}

/// Deterministic content-based [`Recommender`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{Activity, Catalog, Category, RecommendRequest, Recommender, UserFeedback};
/// use leisure_recommender::PreferenceScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let catalog = Catalog::new(vec![
///     Activity::new(1, "Säntis trail", Category::Hiking, origin).with_cost(5.0)?,
///     Activity::new(2, "Gäbris trail", Category::Hiking, origin).with_cost(8.0)?,
///     Activity::new(3, "Textile museum", Category::Culture, origin).with_cost(40.0)?,
/// ])?;
/// let feedback = UserFeedback::from_lists(&[1], &[]);
/// let ranking = PreferenceScorer::default().recommend(&catalog, &feedback, &RecommendRequest::new())?;
/// assert_eq!(ranking.ids().collect::<Vec<_>>(), vec![2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreferenceScorer {
    weights: ScoreWeights,
    features: FeatureWeights,
}

impl PreferenceScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError`] when either weight set is unusable.
    pub fn new(weights: ScoreWeights, features: FeatureWeights) -> Result<Self, ScorerConfigError> {
        Ok(Self {
            weights: weights.validate()?,
            features: features.validate()?,
        })
    }

    /// Like/dislike weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score every catalog activity, rated ones included, in catalog order.
    ///
    /// Useful for explaining a ranking: the scores are the ones
    /// [`Recommender::recommend`] would assign.
    ///
    /// # Errors
    /// Returns [`RecommendError::InsufficientPreferenceData`] when no liked
    /// activity exists in the catalog.
    pub fn score_catalog(
        &self,
        catalog: &Catalog,
        feedback: &UserFeedback,
    ) -> Result<Vec<ScoredActivity>, RecommendError> {
        let model = self.fit(catalog, feedback)?;
        Ok(catalog
            .iter()
            .map(|activity| model.score(activity))
            .collect())
    }

    fn fit(&self, catalog: &Catalog, feedback: &UserFeedback) -> Result<Model, RecommendError> {
        let encoder = FeatureEncoder::fit(catalog, self.features);
        let build = PreferenceProfile::from_feedback(&encoder, catalog, feedback);
        for id in &build.dangling {
            log::warn!("Ignoring feedback for activity {id}: not in the catalog");
        }
        let profile = build
            .profile
            .ok_or(RecommendError::InsufficientPreferenceData)?;
        Ok(Model {
            encoder,
            profile,
            weights: self.weights,
            dangling: build.dangling,
        })
    }
}

struct Model {
    encoder: FeatureEncoder,
    profile: PreferenceProfile,
    weights: ScoreWeights,
    dangling: Vec<ActivityId>,
}

impl Model {
    fn score(&self, activity: &Activity) -> ScoredActivity {
        let vector = self.encoder.encode(activity);
        let raw = self
            .weights
            .blend(self.profile.affinity(&vector), self.profile.aversion(&vector));
        ScoredActivity {
            id: activity.id,
            score: PreferenceScorer::sanitise(raw),
            explored: false,
        }
    }
}

impl Recommender for PreferenceScorer {
    fn recommend(
        &self,
        catalog: &Catalog,
        feedback: &UserFeedback,
        request: &RecommendRequest,
    ) -> Result<Ranking, RecommendError> {
        let model = self.fit(catalog, feedback)?;
        let unknown_candidates = unknown_candidates(catalog, request);

        let mut entries: Vec<ScoredActivity> = catalog
            .iter()
            .filter(|activity| !feedback.is_rated(activity.id) && request.admits(activity.id))
            .map(|activity| model.score(activity))
            .collect();
        // `sort_by` is stable, so equal scores keep catalog order.
        entries.sort_by(|a, b| descending(a.score, b.score));

        let mut ranked = entries.clone();
        if let Some(limit) = request.limit {
            ranked.truncate(limit);
        }
        if let Some(exploration) = request.exploration {
            explore(&mut ranked, &entries, exploration);
        }

        Ok(Ranking {
            entries: ranked,
            diagnostics: Diagnostics {
                dangling_feedback: model.dangling,
                unknown_candidates,
            },
        })
    }
}

fn descending(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

fn unknown_candidates(catalog: &Catalog, request: &RecommendRequest) -> Vec<ActivityId> {
    let Some(candidates) = request.candidates.as_ref() else {
        return Vec::new();
    };
    let unknown: Vec<ActivityId> = candidates
        .iter()
        .copied()
        .filter(|id| !catalog.contains(*id))
        .collect();
    for id in &unknown {
        log::warn!("Ignoring candidate {id}: not in the catalog");
    }
    unknown
}

/// Possibly swap in one random eligible activity.
///
/// With probability `rate` one entry of `pool` is drawn. A pick that is not
/// ranked yet replaces the last (least similar) entry; a pick that is already
/// ranked leaves the ranking as it is. Without a truncating limit every pick
/// is already ranked, so exploration only matters under a limit.
fn explore(ranked: &mut [ScoredActivity], pool: &[ScoredActivity], exploration: Exploration) {
    if pool.is_empty() {
        return;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(exploration.seed());
    if !rng.gen_bool(exploration.rate()) {
        return;
    }
    let Some(pick) = pool.get(rng.gen_range(0..pool.len())) else {
        return;
    };
    if ranked.iter().any(|entry| entry.id == pick.id) {
        return;
    }
    if let Some(last) = ranked.last_mut() {
        *last = ScoredActivity {
            explored: true,
            ..*pick
        };
    }
}
