//! Manual filters that narrow the catalog to a candidate set.
//!
//! Every criterion is optional; an empty [`ActivityFilter`] keeps the whole
//! catalog.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{Activity, ActivityId, Capacity, Catalog, Category};

/// Party size a visitor is planning for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PartySize {
    /// One person.
    Solo,
    /// Two people.
    Pair,
    /// One to four people.
    UpToFour,
    /// Five or more people.
    MoreThanFour,
    /// Roughly two to five people.
    SmallGroup,
    /// Six or more people.
    LargeGroup,
}

impl PartySize {
    /// Report whether an activity with `capacity` can host this party.
    #[must_use]
    pub const fn fits(self, capacity: Capacity) -> bool {
        match self {
            Self::Solo => capacity.admits(1),
            Self::Pair => capacity.admits(2),
            Self::UpToFour => capacity.min <= 4 && capacity.admits_at_least(1),
            Self::MoreThanFour => capacity.admits_at_least(5),
            Self::SmallGroup => capacity.min <= 5 && capacity.admits_at_least(2),
            Self::LargeGroup => capacity.admits_at_least(6),
        }
    }
}

impl FromStr for PartySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "solo" => Ok(Self::Solo),
            "pair" => Ok(Self::Pair),
            "up_to_four" => Ok(Self::UpToFour),
            "more_than_four" => Ok(Self::MoreThanFour),
            "small_group" => Ok(Self::SmallGroup),
            "large_group" => Ok(Self::LargeGroup),
            _ => Err(format!("unknown party size '{s}'")),
        }
    }
}

/// Criteria applied before recommendation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{Activity, ActivityFilter, Catalog, Category};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Activity::new(1, "Spa", Category::Wellness, Coord { x: 0.0, y: 0.0 }).with_cost(60.0)?,
///     Activity::new(2, "Park", Category::Nature, Coord { x: 0.0, y: 0.0 }),
/// ])?;
/// let filter = ActivityFilter {
///     budget: Some(20.0),
///     ..ActivityFilter::default()
/// };
/// assert_eq!(filter.candidates(&catalog).into_iter().collect::<Vec<_>>(), vec![2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityFilter {
    /// Day of the visit.
    pub date: Option<NaiveDate>,
    /// Required category.
    pub category: Option<Category>,
    /// Planned party size.
    pub party: Option<PartySize>,
    /// Maximum price per person in CHF.
    pub budget: Option<f64>,
}

impl ActivityFilter {
    /// Report whether `activity` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        self.date
            .is_none_or(|date| activity.availability.covers(date))
            && self
                .category
                .is_none_or(|category| activity.category == category)
            && self
                .party
                .is_none_or(|party| party.fits(activity.capacity))
            && self.usable_budget().is_none_or(|budget| activity.cost <= budget)
    }

    /// Return the ids of every matching activity.
    #[must_use]
    pub fn candidates(&self, catalog: &Catalog) -> BTreeSet<ActivityId> {
        if let Some(budget) = self.budget
            && !budget.is_finite()
        {
            log::warn!("Ignoring non-finite budget {budget}");
        }
        catalog
            .iter()
            .filter(|activity| self.matches(activity))
            .map(|activity| activity.id)
            .collect()
    }

    fn usable_budget(&self) -> Option<f64> {
        self.budget.filter(|budget| budget.is_finite())
    }
}
