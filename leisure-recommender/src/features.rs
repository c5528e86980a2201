//! Explicit, versioned feature extraction for activities.
//!
//! Every activity maps to a fixed-shape vector laid out as:
//!
//! | Block | Width | Encoding |
//! |-------|-------|----------|
//! | category | [`Category::COUNT`] | one-hot |
//! | setting | [`Setting::COUNT`] | one-hot |
//! | cost | 1 | min–max scaled over the catalog |
//! | party fit | 2 | accepts small parties, accepts large groups |
//! | audiences | [`Audience::COUNT`] | multi-hot scaled by `1/sqrt(n)` |
//!
//! Each block is multiplied by its [`FeatureWeights`] entry. All components
//! are non-negative, so cosine similarity between two vectors lies in
//! `0.0..=1.0`.

use leisure_core::{Activity, Audience, Catalog, Category, Setting};

use crate::ScorerConfigError;

/// Layout version of [`FeatureVector`]; bump when the block layout changes.
pub const FEATURE_VERSION: u32 = 1;

const CATEGORY_OFFSET: usize = 0;
const SETTING_OFFSET: usize = CATEGORY_OFFSET + Category::COUNT;
const COST_OFFSET: usize = SETTING_OFFSET + Setting::COUNT;
const SMALL_PARTY_OFFSET: usize = COST_OFFSET + 1;
const LARGE_PARTY_OFFSET: usize = SMALL_PARTY_OFFSET + 1;
const AUDIENCE_OFFSET: usize = LARGE_PARTY_OFFSET + 1;

/// Number of components in a [`FeatureVector`].
pub const FEATURE_DIMENSIONS: usize = AUDIENCE_OFFSET + Audience::COUNT;

const SMALL_PARTY: u32 = 2;
const LARGE_PARTY: u32 = 6;

/// Encoded activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_DIMENSIONS]);

impl FeatureVector {
    /// The all-zero vector.
    pub const ZERO: Self = Self([0.0; FEATURE_DIMENSIONS]);

    /// Borrow the raw components.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; FEATURE_DIMENSIONS] {
        &self.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "dot product sums component products"
    )]
    fn dot(&self, other: &Self) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Cosine similarity, `0.0` when either vector has zero length.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "cosine similarity divides by the product of norms"
    )]
    pub fn cosine(&self, other: &Self) -> f32 {
        let denominator = self.norm() * other.norm();
        if denominator <= 0.0 || !denominator.is_finite() {
            return 0.0;
        }
        let similarity = self.dot(other) / denominator;
        if similarity.is_finite() {
            // Rounding can push parallel vectors just past one.
            similarity.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Component-wise mean of `vectors`, or `None` when empty.
    #[expect(
        clippy::float_arithmetic,
        reason = "centroid accumulates and averages components"
    )]
    pub fn centroid<'a, I>(vectors: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut sum = Self::ZERO;
        let mut count = 0.0_f32;
        for vector in vectors {
            for (total, value) in sum.0.iter_mut().zip(vector.0.iter()) {
                *total += value;
            }
            count += 1.0;
        }
        if count == 0.0 {
            return None;
        }
        for total in &mut sum.0 {
            *total /= count;
        }
        Some(sum)
    }

    fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }
}

/// Multipliers applied to each feature block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeights {
    /// Category one-hot block.
    pub category: f32,
    /// Setting one-hot block.
    pub setting: f32,
    /// Normalised cost.
    pub cost: f32,
    /// Party-size fit flags.
    pub party: f32,
    /// Audience multi-hot block.
    pub audience: f32,
}

impl FeatureWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidFeatureWeights`] when a weight is
    /// negative or not finite, or when every weight is zero.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        let weights = self.as_array();
        let usable = weights.iter().all(|w| w.is_finite() && *w >= 0.0);
        let any_positive = weights.iter().any(|w| *w > 0.0);
        if usable && any_positive {
            Ok(self)
        } else {
            Err(ScorerConfigError::InvalidFeatureWeights)
        }
    }

    const fn as_array(self) -> [f32; 5] {
        [
            self.category,
            self.setting,
            self.cost,
            self.party,
            self.audience,
        ]
    }
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            category: 1.0,
            setting: 0.5,
            cost: 0.75,
            party: 0.5,
            audience: 1.0,
        }
    }
}

/// Encoder fitted on a catalog.
///
/// Fitting records the catalog's cost range so costs scale into `0.0..=1.0`.
/// A degenerate range (empty catalog or a single price) maps every cost to
/// `0.0`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{Activity, Catalog, Category};
/// use leisure_recommender::{FeatureEncoder, FeatureWeights};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let catalog = Catalog::new(vec![
///     Activity::new(1, "Museum", Category::Culture, origin).with_cost(20.0)?,
///     Activity::new(2, "Gallery", Category::Culture, origin).with_cost(10.0)?,
///     Activity::new(3, "Trail", Category::Hiking, origin),
/// ])?;
/// let encoder = FeatureEncoder::fit(&catalog, FeatureWeights::default());
/// let museum = encoder.encode(catalog.get(1).ok_or("missing")?);
/// let gallery = encoder.encode(catalog.get(2).ok_or("missing")?);
/// let trail = encoder.encode(catalog.get(3).ok_or("missing")?);
/// assert!(museum.cosine(&gallery) > museum.cosine(&trail));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureEncoder {
    weights: FeatureWeights,
    cost_min: f64,
    cost_max: f64,
}

impl FeatureEncoder {
    /// Fit the cost scaling on `catalog`.
    #[must_use]
    pub fn fit(catalog: &Catalog, weights: FeatureWeights) -> Self {
        let (cost_min, cost_max) = catalog
            .iter()
            .map(|activity| activity.cost)
            .fold(None, |range: Option<(f64, f64)>, cost| {
                Some(range.map_or((cost, cost), |(lo, hi)| (lo.min(cost), hi.max(cost))))
            })
            .unwrap_or((0.0, 0.0));
        Self {
            weights,
            cost_min,
            cost_max,
        }
    }

    /// Encode one activity.
    #[must_use]
    pub fn encode(&self, activity: &Activity) -> FeatureVector {
        let mut vector = FeatureVector::ZERO;
        let weights = self.weights;
        vector.set(CATEGORY_OFFSET + activity.category.index(), weights.category);
        vector.set(SETTING_OFFSET + activity.setting.index(), weights.setting);
        vector.set(COST_OFFSET, self.scaled_cost(activity.cost));
        if activity.capacity.min <= SMALL_PARTY {
            vector.set(SMALL_PARTY_OFFSET, weights.party);
        }
        if activity.capacity.admits_at_least(LARGE_PARTY) {
            vector.set(LARGE_PARTY_OFFSET, weights.party);
        }
        let audience_value = audience_value(weights.audience, activity.audiences.len());
        for audience in &activity.audiences {
            vector.set(AUDIENCE_OFFSET + audience.index(), audience_value);
        }
        vector
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling subtracts and divides"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scaled cost lies in 0..=1 and fits f32"
    )]
    fn scaled_cost(&self, cost: f64) -> f32 {
        let range = self.cost_max - self.cost_min;
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        let unit = ((cost - self.cost_min) / range).clamp(0.0, 1.0);
        (unit as f32) * self.weights.cost
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "multi-hot entries are scaled by 1/sqrt(n)"
)]
fn audience_value(weight: f32, tags: usize) -> f32 {
    if tags == 0 {
        return 0.0;
    }
    let count = f32::from(u16::try_from(tags).unwrap_or(u16::MAX));
    weight / count.sqrt()
}
