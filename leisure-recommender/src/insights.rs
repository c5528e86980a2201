//! Summaries of what a visitor tends to like.

use serde::Serialize;

use leisure_core::{Activity, Audience, Catalog, Category, Rating, UserFeedback};

/// Likes needed before a profile label is worth showing.
pub const MIN_LIKES_FOR_PROFILE: usize = 5;

/// Default number of audiences reported by [`PreferenceInsights`].
pub const DEFAULT_TOP_AUDIENCES: usize = 5;

/// How often a category was liked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Liked category.
    pub category: Category,
    /// Number of liked activities in it.
    pub count: usize,
}

/// How often an audience appeared among liked activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudienceCount {
    /// Target group.
    pub audience: Audience,
    /// Number of liked activities tagged with it.
    pub count: usize,
}

/// Liked activities present in the catalog, in catalog order.
fn liked_activities<'a>(
    catalog: &'a Catalog,
    feedback: &'a UserFeedback,
) -> impl Iterator<Item = &'a Activity> + 'a {
    catalog
        .iter()
        .filter(|activity| feedback.rating(activity.id) == Some(Rating::Liked))
}

/// Count likes per category, most liked first.
///
/// Ties keep the order in which the categories first appear among liked
/// activities in the catalog.
#[must_use]
pub fn category_counts(catalog: &Catalog, feedback: &UserFeedback) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for activity in liked_activities(catalog, feedback) {
        if let Some(entry) = counts.iter_mut().find(|c| c.category == activity.category) {
            entry.count += 1;
        } else {
            counts.push(CategoryCount {
                category: activity.category,
                count: 1,
            });
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Describe the visitor from their two favourite categories.
///
/// Returns `None` when nothing has been liked.
///
/// # Examples
/// ```
/// use leisure_core::Category;
/// use leisure_recommender::{CategoryCount, profile_label};
///
/// let counts = [
///     CategoryCount { category: Category::Culture, count: 4 },
///     CategoryCount { category: Category::Food, count: 2 },
/// ];
/// assert_eq!(profile_label(&counts).as_deref(), Some("culture fan (also food)"));
/// ```
#[must_use]
pub fn profile_label(counts: &[CategoryCount]) -> Option<String> {
    match counts {
        [] => None,
        [only] => Some(format!("{} fan", only.category)),
        [first, second, ..] => Some(pair_label(*first, *second)),
    }
}

fn pair_label(first: CategoryCount, second: CategoryCount) -> String {
    let pair = (first.category, second.category);
    if matches_pair(pair, Category::Sport, Category::Action) {
        return "sport & action type".to_owned();
    }
    if matches_pair(pair, Category::Nature, Category::Hiking) {
        return "nature lover".to_owned();
    }
    if matches_pair(pair, Category::Food, Category::Shopping) {
        return "food & shopping type".to_owned();
    }
    // count1 > 1.5 * count2, kept in integers.
    if first.count * 2 > second.count * 3 {
        format!("{} fan (also {})", first.category, second.category)
    } else {
        format!("{} & {} type", first.category, second.category)
    }
}

fn matches_pair(pair: (Category, Category), a: Category, b: Category) -> bool {
    pair == (a, b) || pair == (b, a)
}

/// The `n` audiences most often tagged on liked activities.
///
/// Ties keep the order of first appearance.
#[must_use]
pub fn top_audiences(catalog: &Catalog, feedback: &UserFeedback, n: usize) -> Vec<AudienceCount> {
    let mut counts: Vec<AudienceCount> = Vec::new();
    for audience in liked_activities(catalog, feedback).flat_map(|a| a.audiences.iter().copied()) {
        if let Some(entry) = counts.iter_mut().find(|c| c.audience == audience) {
            entry.count += 1;
        } else {
            counts.push(AudienceCount { audience, count: 1 });
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Prices of liked activities in catalog order.
///
/// Free activities are skipped unless `include_free` is set.
#[must_use]
pub fn liked_prices(catalog: &Catalog, feedback: &UserFeedback, include_free: bool) -> Vec<f64> {
    liked_activities(catalog, feedback)
        .map(|activity| activity.cost)
        .filter(|cost| include_free || *cost > 0.0)
        .collect()
}

/// Everything the host shows about a visitor's taste.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceInsights {
    /// Liked activities found in the catalog.
    pub liked: usize,
    /// Whether enough likes exist to show the profile.
    pub profile_ready: bool,
    /// Likes per category, most liked first.
    pub categories: Vec<CategoryCount>,
    /// Short description of the visitor.
    pub label: Option<String>,
    /// Most common target groups.
    pub audiences: Vec<AudienceCount>,
    /// Non-zero prices of liked activities.
    pub prices: Vec<f64>,
}

impl PreferenceInsights {
    /// Summarise `feedback` against `catalog`.
    #[must_use]
    pub fn from_feedback(catalog: &Catalog, feedback: &UserFeedback) -> Self {
        let liked = liked_activities(catalog, feedback).count();
        let categories = category_counts(catalog, feedback);
        let label = profile_label(&categories);
        Self {
            liked,
            profile_ready: liked >= MIN_LIKES_FOR_PROFILE,
            categories,
            label,
            audiences: top_audiences(catalog, feedback, DEFAULT_TOP_AUDIENCES),
            prices: liked_prices(catalog, feedback, false),
        }
    }
}
