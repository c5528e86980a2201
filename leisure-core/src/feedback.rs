//! Like/dislike feedback collected during a session.
//!
//! Feedback is a plain value owned by the caller. Recommenders only ever read
//! it; growing or resetting it is the host's job.

use std::collections::{BTreeMap, BTreeSet};

use crate::ActivityId;

/// Binary opinion about an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rating {
    /// Thumbs up.
    Liked,
    /// Thumbs down.
    Disliked,
}

/// Ratings keyed by activity id.
///
/// An activity holds at most one rating: rating it again replaces the
/// previous opinion.
///
/// # Examples
/// ```
/// use leisure_core::{Rating, UserFeedback};
///
/// let mut feedback = UserFeedback::new();
/// feedback.rate(3, Rating::Disliked);
/// feedback.rate(3, Rating::Liked);
/// assert_eq!(feedback.rating(3), Some(Rating::Liked));
/// assert_eq!(feedback.disliked().count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFeedback {
    ratings: BTreeMap<ActivityId, Rating>,
}

impl UserFeedback {
    /// Construct empty feedback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build feedback from separate liked and disliked id lists.
    ///
    /// An id present in both lists is contradictory; it is dropped with a
    /// warning rather than guessed.
    #[must_use]
    pub fn from_lists(liked: &[ActivityId], disliked: &[ActivityId]) -> Self {
        let liked_set: BTreeSet<ActivityId> = liked.iter().copied().collect();
        let disliked_set: BTreeSet<ActivityId> = disliked.iter().copied().collect();
        let mut feedback = Self::new();
        for (ids, rating) in [(&liked_set, Rating::Liked), (&disliked_set, Rating::Disliked)] {
            for &id in ids {
                if liked_set.contains(&id) && disliked_set.contains(&id) {
                    continue;
                }
                feedback.rate(id, rating);
            }
        }
        for id in liked_set.intersection(&disliked_set) {
            log::warn!("Activity {id} is both liked and disliked; ignoring its feedback");
        }
        feedback
    }

    /// Record a rating, replacing any previous one for the same activity.
    pub fn rate(&mut self, id: ActivityId, rating: Rating) {
        self.ratings.insert(id, rating);
    }

    /// Forget the rating for `id`, returning it if present.
    pub fn clear(&mut self, id: ActivityId) -> Option<Rating> {
        self.ratings.remove(&id)
    }

    /// Forget every rating.
    pub fn reset(&mut self) {
        self.ratings.clear();
    }

    /// Return the rating for `id`, if any.
    #[must_use]
    pub fn rating(&self, id: ActivityId) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    /// Report whether `id` has been rated either way.
    #[must_use]
    pub fn is_rated(&self, id: ActivityId) -> bool {
        self.ratings.contains_key(&id)
    }

    /// Iterate over every rating in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivityId, Rating)> + '_ {
        self.ratings.iter().map(|(&id, &rating)| (id, rating))
    }

    /// Iterate over liked ids in ascending order.
    pub fn liked(&self) -> impl Iterator<Item = ActivityId> + '_ {
        self.with_rating(Rating::Liked)
    }

    /// Iterate over disliked ids in ascending order.
    pub fn disliked(&self) -> impl Iterator<Item = ActivityId> + '_ {
        self.with_rating(Rating::Disliked)
    }

    /// Return the number of rated activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Report whether nothing has been rated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    fn with_rating(&self, wanted: Rating) -> impl Iterator<Item = ActivityId> + '_ {
        self.iter()
            .filter(move |&(_, rating)| rating == wanted)
            .map(|(id, _)| id)
    }
}
