//! Preference profiles derived from feedback.

use leisure_core::{ActivityId, Catalog, Rating, UserFeedback};

use crate::{FeatureEncoder, FeatureVector};

/// Liked and disliked centroids for one visitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceProfile {
    liked: FeatureVector,
    disliked: Option<FeatureVector>,
}

/// Outcome of [`PreferenceProfile::from_feedback`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBuild {
    /// The profile, absent when nothing liked exists in the catalog.
    pub profile: Option<PreferenceProfile>,
    /// Rated ids missing from the catalog, in ascending order.
    pub dangling: Vec<ActivityId>,
}

impl PreferenceProfile {
    /// Average the encoded liked and disliked activities.
    ///
    /// Ratings that point at ids outside the catalog are reported in
    /// [`ProfileBuild::dangling`] and otherwise ignored.
    #[must_use]
    pub fn from_feedback(
        encoder: &FeatureEncoder,
        catalog: &Catalog,
        feedback: &UserFeedback,
    ) -> ProfileBuild {
        let mut liked = Vec::new();
        let mut disliked = Vec::new();
        let mut dangling = Vec::new();
        for (id, rating) in feedback.iter() {
            let Some(activity) = catalog.get(id) else {
                dangling.push(id);
                continue;
            };
            let vector = encoder.encode(activity);
            match rating {
                Rating::Liked => liked.push(vector),
                Rating::Disliked => disliked.push(vector),
            }
        }
        let profile = FeatureVector::centroid(&liked).map(|liked_centroid| Self {
            liked: liked_centroid,
            disliked: FeatureVector::centroid(&disliked),
        });
        ProfileBuild { profile, dangling }
    }

    /// Centroid of liked activities.
    #[must_use]
    pub const fn liked(&self) -> &FeatureVector {
        &self.liked
    }

    /// Centroid of disliked activities, if any.
    #[must_use]
    pub const fn disliked(&self) -> Option<&FeatureVector> {
        self.disliked.as_ref()
    }

    /// Similarity of `candidate` to the liked centroid.
    #[must_use]
    pub fn affinity(&self, candidate: &FeatureVector) -> f32 {
        candidate.cosine(&self.liked)
    }

    /// Similarity of `candidate` to the disliked centroid, `0.0` without
    /// dislikes.
    #[must_use]
    pub fn aversion(&self, candidate: &FeatureVector) -> f32 {
        self.disliked
            .as_ref()
            .map_or(0.0, |disliked| candidate.cosine(disliked))
    }
}
