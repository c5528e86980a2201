//! Loose catalog rows and the defaults applied when loading them.

use chrono::NaiveDate;
use geo::Coord;
use thiserror::Error;

use crate::{
    Activity, ActivityError, ActivityId, Audience, Availability, Capacity, Category, Setting,
    WeatherPreference,
};

/// One row of the static activity catalog as it appears on disk.
///
/// Only the identifier is mandatory. Everything else falls back to the loader
/// defaults in [`CatalogRecord::into_activity`]. When deserialising, numeric
/// and date fields accept numbers written as strings; any other unusable value
/// is read as absent with a warning, so one bad cell never rejects the file.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogRecord {
    /// Unique identifier.
    pub id: ActivityId,
    /// Display name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Category label, e.g. `"culture"`.
    pub category: Option<String>,
    /// Setting label: `"indoor"`, `"outdoor"` or `"mixed"`.
    pub setting: Option<String>,
    /// WGS84 latitude.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub latitude: Option<f64>,
    /// WGS84 longitude.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub longitude: Option<f64>,
    /// Estimated price per person in CHF.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub price: Option<f64>,
    /// Smallest party admitted.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub min_people: Option<u32>,
    /// Largest party admitted.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub max_people: Option<u32>,
    /// Weather preference label, e.g. `"sun_only"`.
    pub weather: Option<String>,
    /// First day the activity is offered.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub available_from: Option<NaiveDate>,
    /// Last day the activity is offered.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::optional"))]
    pub available_until: Option<NaiveDate>,
    /// Comma-separated target groups.
    pub audiences: Option<String>,
}

/// Reasons a [`CatalogRecord`] cannot become an [`Activity`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Latitude or longitude was missing or not finite.
    #[error("record has no usable coordinates")]
    MissingCoordinates,
    /// A field failed activity validation.
    #[error("record failed validation: {source}")]
    Invalid {
        /// Validation failure.
        #[source]
        source: ActivityError,
    },
}

impl From<ActivityError> for RecordError {
    fn from(source: ActivityError) -> Self {
        Self::Invalid { source }
    }
}

impl CatalogRecord {
    /// Convert the record into a validated [`Activity`].
    ///
    /// Defaults: missing price is free, missing minimum party is one person,
    /// missing maximum is unbounded, missing weather preference is
    /// [`WeatherPreference::Any`], missing setting is [`Setting::Mixed`] and a
    /// missing category is [`Category::Leisure`]. Unrecognised labels fall
    /// back to the same defaults with a warning.
    ///
    /// # Errors
    /// Returns [`RecordError::MissingCoordinates`] when the record cannot be
    /// placed on a map, and [`RecordError::Invalid`] for out-of-range values.
    pub fn into_activity(self) -> Result<Activity, RecordError> {
        let location = match (self.longitude, self.latitude) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Coord { x, y },
            _ => return Err(RecordError::MissingCoordinates),
        };
        let id = self.id;
        let category = parse_or_default(id, "category", self.category.as_deref());
        let setting = parse_or_default::<Setting>(id, "setting", self.setting.as_deref());
        let weather = parse_or_default::<WeatherPreference>(id, "weather", self.weather.as_deref());
        let capacity = Capacity::new(self.min_people.unwrap_or(1), self.max_people)?;
        let audiences = self.audiences.as_deref().map_or_else(Vec::new, |raw| {
            let (known, unknown) = Audience::parse_list(raw);
            for label in unknown {
                log::warn!("Ignored unknown audience '{label}' on activity {id}");
            }
            known
        });

        let activity = Activity::new(
            id,
            self.name.unwrap_or_default(),
            category.unwrap_or(Category::Leisure),
            location,
        )
        .with_cost(self.price.unwrap_or(0.0))?
        .with_availability(Availability {
            from: self.available_from,
            until: self.available_until,
        })?
        .with_setting(setting.unwrap_or_default())
        .with_weather(weather.unwrap_or_default())
        .with_capacity(capacity)
        .with_audiences(audiences)
        .with_description(self.description.unwrap_or_default());
        Ok(activity)
    }
}

#[cfg(feature = "serde")]
mod lenient {
    use std::str::FromStr;

    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Value(T),
        Text(String),
        Other(IgnoredAny),
    }

    pub(super) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
    {
        let value = match Option::<Loose<T>>::deserialize(deserializer)? {
            None => None,
            Some(Loose::Value(value)) => Some(value),
            Some(Loose::Text(raw)) => {
                let parsed = raw.trim().parse().ok();
                if parsed.is_none() {
                    log::warn!("Ignoring unreadable catalog value '{raw}'");
                }
                parsed
            }
            Some(Loose::Other(IgnoredAny)) => {
                log::warn!("Ignoring catalog value of unexpected type");
                None
            }
        };
        Ok(value)
    }
}

fn parse_or_default<T>(id: ActivityId, field: &str, raw: Option<&str>) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    let label = raw.map(str::trim).filter(|label| !label.is_empty())?;
    label
        .parse()
        .inspect_err(|err| log::warn!("Activity {id}: {err} in {field}; using the default"))
        .ok()
}
