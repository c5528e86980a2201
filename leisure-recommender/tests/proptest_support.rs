//! Proptest strategies for preference scoring properties.

use geo::Coord;
use leisure_core::{
    Activity, ActivityId, Audience, Capacity, Catalog, Category, Rating, Setting, UserFeedback,
};
use proptest::prelude::*;

/// Ids above this value never appear in generated catalogs.
pub const DANGLING_BASE: ActivityId = 1_000;

fn category_strategy() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

fn setting_strategy() -> impl Strategy<Value = Setting> {
    proptest::sample::select(Setting::ALL.to_vec())
}

fn audiences_strategy() -> impl Strategy<Value = Vec<Audience>> {
    proptest::sample::subsequence(Audience::ALL.to_vec(), 0..=4)
}

fn capacity_strategy() -> impl Strategy<Value = Capacity> {
    (1_u32..=8, proptest::option::of(0_u32..=10)).prop_map(|(min, extra)| {
        Capacity::new(min, extra.map(|e| min.saturating_add(e))).unwrap_or_default()
    })
}

/// Strategy for a catalog of `1..=max` activities with ids `1..=n`.
pub fn catalog_strategy(max: usize) -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(
        (
            category_strategy(),
            setting_strategy(),
            0.0_f64..120.0,
            capacity_strategy(),
            audiences_strategy(),
        ),
        1..=max,
    )
    .prop_map(|rows| {
        let activities = (1_u64..)
            .zip(rows)
            .map(|(id, (category, setting, cost, capacity, audiences))| {
                let origin = Coord { x: 0.0, y: 0.0 };
                let base = Activity::new(id, format!("activity {id}"), category, origin)
                    .with_setting(setting)
                    .with_capacity(capacity)
                    .with_audiences(audiences);
                base.clone().with_cost(cost).unwrap_or(base)
            })
            .collect();
        Catalog::new(activities).unwrap_or_default()
    })
}

/// Strategy for feedback over ids `1..=max_id` plus a few dangling ids.
pub fn feedback_strategy(max_id: ActivityId) -> impl Strategy<Value = UserFeedback> {
    let ids = prop_oneof![
        4 => 1..=max_id,
        1 => DANGLING_BASE..DANGLING_BASE + 5,
    ];
    proptest::collection::vec((ids, any::<bool>()), 0..8).prop_map(|ratings| {
        let mut feedback = UserFeedback::new();
        for (id, liked) in ratings {
            let rating = if liked { Rating::Liked } else { Rating::Disliked };
            feedback.rate(id, rating);
        }
        feedback
    })
}

/// Report whether any liked id exists in `catalog`.
pub fn has_catalog_like(catalog: &Catalog, feedback: &UserFeedback) -> bool {
    feedback.liked().any(|id| catalog.contains(id))
}
