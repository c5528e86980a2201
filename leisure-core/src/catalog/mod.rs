//! The static activity catalog.
//!
//! A [`Catalog`] keeps activities in insertion order. That order is the
//! tie-breaker for every ranking built on top of it, so it never changes after
//! construction.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Activity, ActivityId};

mod record;

pub use record::{CatalogRecord, RecordError};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two activities share an identifier.
    #[error("activity id {id} appears more than once in the catalog")]
    DuplicateId {
        /// Identifier seen twice.
        id: ActivityId,
    },
}

/// Immutable, ordered collection of activities indexed by id.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use leisure_core::{Activity, Catalog, Category};
///
/// # fn main() -> Result<(), leisure_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Activity::new(1, "Lake walk", Category::Nature, Coord { x: 9.4, y: 47.4 }),
///     Activity::new(2, "Cathedral", Category::Sightseeing, Coord { x: 9.38, y: 47.42 }),
/// ])?;
/// assert_eq!(catalog.position(2), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<Activity>,
    index: HashMap<ActivityId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(activities.len());
        for (position, activity) in activities.iter().enumerate() {
            if index.insert(activity.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: activity.id });
            }
        }
        Ok(Self { activities, index })
    }

    /// Build a catalog from loose records, applying loader defaults.
    ///
    /// Records that cannot become an [`Activity`] are skipped with a warning;
    /// see [`CatalogRecord::into_activity`].
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two usable records share an
    /// id.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let activities = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                record
                    .into_activity()
                    .inspect_err(|err| log::warn!("Skipped catalog record {id}: {err}"))
                    .ok()
            })
            .collect();
        Self::new(activities)
    }

    /// Look up an activity by id.
    #[must_use]
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.position(id)
            .and_then(|position| self.activities.get(position))
    }

    /// Return the insertion position of an activity.
    #[must_use]
    pub fn position(&self, id: ActivityId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Report whether the catalog holds `id`.
    #[must_use]
    pub fn contains(&self, id: ActivityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate over activities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Return the number of activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
