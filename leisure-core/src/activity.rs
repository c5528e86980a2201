//! Leisure activities and their validated attributes.

use chrono::NaiveDate;
use geo::Coord;
use thiserror::Error;

use crate::{Audience, Category, Setting, WeatherPreference};

/// Unique identifier of an activity within a catalog.
pub type ActivityId = u64;

/// Party sizes an activity can host.
///
/// `max` is `None` when the activity has no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capacity {
    /// Smallest party admitted.
    pub min: u32,
    /// Largest party admitted, if bounded.
    pub max: Option<u32>,
}

impl Capacity {
    /// Build a capacity range.
    ///
    /// # Errors
    /// Returns [`ActivityError::InvalidCapacity`] when `max < min`.
    pub const fn new(min: u32, max: Option<u32>) -> Result<Self, ActivityError> {
        if let Some(upper) = max
            && upper < min
        {
            return Err(ActivityError::InvalidCapacity { min, max: upper });
        }
        Ok(Self { min, max })
    }

    /// Report whether a party of `people` fits.
    #[must_use]
    pub const fn admits(self, people: u32) -> bool {
        self.min <= people && self.admits_at_least(people)
    }

    /// Report whether the upper bound reaches `people`.
    #[must_use]
    pub const fn admits_at_least(self, people: u32) -> bool {
        match self.max {
            Some(upper) => upper >= people,
            None => true,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

/// Calendar window in which an activity can be visited.
///
/// Missing bounds are open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Availability {
    /// First day the activity is offered.
    pub from: Option<NaiveDate>,
    /// Last day the activity is offered.
    pub until: Option<NaiveDate>,
}

impl Availability {
    /// Report whether the activity is offered on `date`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= date) && self.until.is_none_or(|until| until >= date)
    }
}

/// A leisure activity from the static catalog.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{Activity, Category};
///
/// # fn main() -> Result<(), leisure_core::ActivityError> {
/// let activity = Activity::new(7, "Abbey library", Category::Culture, Coord { x: 9.377, y: 47.423 })
///     .with_cost(18.0)?;
/// assert_eq!(activity.id, 7);
/// assert_eq!(activity.cost, 18.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Unique identifier.
    pub id: ActivityId,
    /// Display name.
    pub name: String,
    /// Broad kind of activity.
    pub category: Category,
    /// Indoor, outdoor, or mixed.
    pub setting: Setting,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Estimated price per person in CHF.
    pub cost: f64,
    /// Party sizes the activity can host.
    pub capacity: Capacity,
    /// Target groups.
    pub audiences: Vec<Audience>,
    /// Free-text description.
    pub description: String,
    /// Weather the activity needs.
    pub weather: WeatherPreference,
    /// Dates on which the activity is offered.
    pub availability: Availability,
}

/// Errors returned while constructing an [`Activity`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// Cost was negative or not finite.
    #[error("cost {cost} must be a finite, non-negative amount")]
    InvalidCost {
        /// Rejected value.
        cost: f64,
    },
    /// The maximum party size was below the minimum.
    #[error("capacity maximum {max} is below minimum {min}")]
    InvalidCapacity {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
    /// The availability window ends before it starts.
    #[error("availability ends on {until} before it starts on {from}")]
    InvalidAvailability {
        /// Requested first day.
        from: NaiveDate,
        /// Requested last day.
        until: NaiveDate,
    },
}

impl Activity {
    /// Construct a free, mixed-setting activity open to any party.
    pub fn new(
        id: ActivityId,
        name: impl Into<String>,
        category: Category,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            setting: Setting::default(),
            location,
            cost: 0.0,
            capacity: Capacity::default(),
            audiences: Vec::new(),
            description: String::new(),
            weather: WeatherPreference::default(),
            availability: Availability::default(),
        }
    }

    /// Set the estimated cost.
    ///
    /// # Errors
    /// Returns [`ActivityError::InvalidCost`] for negative or non-finite
    /// values.
    pub fn with_cost(mut self, cost: f64) -> Result<Self, ActivityError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(ActivityError::InvalidCost { cost });
        }
        self.cost = cost;
        Ok(self)
    }

    /// Set the availability window.
    ///
    /// # Errors
    /// Returns [`ActivityError::InvalidAvailability`] when both bounds are
    /// present and `until` precedes `from`.
    pub fn with_availability(mut self, availability: Availability) -> Result<Self, ActivityError> {
        if let (Some(from), Some(until)) = (availability.from, availability.until)
            && until < from
        {
            return Err(ActivityError::InvalidAvailability { from, until });
        }
        self.availability = availability;
        Ok(self)
    }

    /// Set the setting while returning `self` for chaining.
    #[must_use]
    pub const fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = setting;
        self
    }

    /// Set the capacity while returning `self` for chaining.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the target groups while returning `self` for chaining.
    #[must_use]
    pub fn with_audiences(mut self, audiences: impl IntoIterator<Item = Audience>) -> Self {
        self.audiences = audiences.into_iter().collect();
        self
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the weather preference while returning `self` for chaining.
    #[must_use]
    pub const fn with_weather(mut self, weather: WeatherPreference) -> Self {
        self.weather = weather;
        self
    }
}
