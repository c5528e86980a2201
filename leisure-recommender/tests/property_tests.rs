#![expect(
    clippy::expect_used,
    reason = "property tests should fail fast when setup breaks"
)]

//! Property-based tests for the preference scorer.
//!
//! # Invariants tested
//!
//! - **Exclusion:** rated activities never appear in a ranking.
//! - **Insufficient data:** no liked catalog activity means an error,
//!   whatever the dislikes.
//! - **Determinism:** identical inputs give identical rankings.
//! - **Monotonic penalty:** adding dislikes never raises a score and lowers
//!   the disliked activity's own score.
//! - **Ordering:** scores are finite and sorted in descending order.

mod proptest_support;

use leisure_core::{
    Exploration, Rating, RecommendError, RecommendRequest, Recommender, UserFeedback,
};
use leisure_recommender::PreferenceScorer;
use proptest::prelude::*;

use proptest_support::{catalog_strategy, feedback_strategy, has_catalog_like};

const MAX_ACTIVITIES: usize = 12;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the ranking never contains a rated id and only holds
    /// catalog activities.
    #[test]
    fn ranking_excludes_rated_activities(
        catalog in catalog_strategy(MAX_ACTIVITIES),
        feedback in feedback_strategy(MAX_ACTIVITIES as u64),
        limit in proptest::option::of(0_usize..6),
    ) {
        prop_assume!(has_catalog_like(&catalog, &feedback));
        let request = RecommendRequest { limit, ..RecommendRequest::new() };
        let ranking = PreferenceScorer::default()
            .recommend(&catalog, &feedback, &request)
            .expect("liked activity present");
        for id in ranking.ids() {
            prop_assert!(!feedback.is_rated(id));
            prop_assert!(catalog.contains(id));
        }
        if let Some(cap) = limit {
            prop_assert!(ranking.len() <= cap);
        }
    }

    /// Property: without a liked catalog activity the scorer refuses to rank.
    #[test]
    fn no_likes_is_insufficient(
        catalog in catalog_strategy(MAX_ACTIVITIES),
        disliked in proptest::collection::vec(1_u64..=MAX_ACTIVITIES as u64, 0..6),
    ) {
        let feedback = UserFeedback::from_lists(&[], &disliked);
        let result = PreferenceScorer::default()
            .recommend(&catalog, &feedback, &RecommendRequest::new());
        prop_assert_eq!(result, Err(RecommendError::InsufficientPreferenceData));
    }

    /// Property: repeated calls with the same inputs agree exactly, with
    /// exploration enabled.
    #[test]
    fn ranking_is_deterministic(
        catalog in catalog_strategy(MAX_ACTIVITIES),
        feedback in feedback_strategy(MAX_ACTIVITIES as u64),
        seed in any::<u64>(),
        rate in 0.0_f64..=1.0,
    ) {
        prop_assume!(has_catalog_like(&catalog, &feedback));
        let request = RecommendRequest::new()
            .with_limit(3)
            .with_exploration(Exploration::new(rate, seed).expect("rate in range"));
        let scorer = PreferenceScorer::default();
        let first = scorer.recommend(&catalog, &feedback, &request);
        let second = scorer.recommend(&catalog, &feedback, &request);
        prop_assert_eq!(first, second);
    }

    /// Property: dislikes only ever subtract from scores.
    #[test]
    fn dislikes_never_raise_scores(
        catalog in catalog_strategy(MAX_ACTIVITIES),
        liked in 1_u64..=MAX_ACTIVITIES as u64,
        disliked in 1_u64..=MAX_ACTIVITIES as u64,
    ) {
        prop_assume!(liked != disliked);
        prop_assume!(catalog.contains(liked) && catalog.contains(disliked));
        let scorer = PreferenceScorer::default();
        let likes_only = UserFeedback::from_lists(&[liked], &[]);
        let mut with_dislike = likes_only.clone();
        with_dislike.rate(disliked, Rating::Disliked);

        let before = scorer.score_catalog(&catalog, &likes_only).expect("scores");
        let after = scorer.score_catalog(&catalog, &with_dislike).expect("scores");
        for (old, new) in before.iter().zip(&after) {
            prop_assert_eq!(old.id, new.id);
            prop_assert!(new.score <= old.score);
            if new.id == disliked {
                prop_assert!(new.score < old.score);
            }
        }
    }

    /// Property: scores are finite and non-increasing along the ranking.
    #[test]
    fn scores_are_finite_and_sorted(
        catalog in catalog_strategy(MAX_ACTIVITIES),
        feedback in feedback_strategy(MAX_ACTIVITIES as u64),
    ) {
        prop_assume!(has_catalog_like(&catalog, &feedback));
        let ranking = PreferenceScorer::default()
            .recommend(&catalog, &feedback, &RecommendRequest::new())
            .expect("liked activity present");
        prop_assert!(ranking.entries.iter().all(|entry| entry.score.is_finite()));
        prop_assert!(
            ranking
                .entries
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.score >= b.score))
        );
    }
}
