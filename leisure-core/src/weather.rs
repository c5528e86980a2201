//! Weather suitability of activities on a given day.
//!
//! Forecasts come from a [`ForecastProvider`]. The engine only interprets
//! them: [`WeatherStatus::assess`] condenses a day of three-hourly slots into
//! one status and [`WeatherPreference::verdict`] decides whether an activity
//! still makes sense under that status.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use geo::Coord;
use thiserror::Error;

use crate::{ActivityId, Catalog, WeatherPreference};

const MIDDAY_HOUR: u32 = 12;

const LIGHT_RAIN: [&str; 2] = ["drizzle", "light rain"];

/// Description words that mark bad weather on top of [`BAD_CONDITIONS`].
const BAD_DESCRIPTIONS: [&str; 3] = ["shower", "hail", "sleet"];

const BAD_CONDITIONS: [&str; 12] = [
    "rain",
    "snow",
    "thunderstorm",
    "squall",
    "tornado",
    "mist",
    "smoke",
    "haze",
    "dust",
    "fog",
    "sand",
    "ash",
];

/// One forecast entry, typically covering three hours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastSlot {
    /// Start of the slot in UTC.
    pub at: NaiveDateTime,
    /// Main condition group, e.g. `"Clouds"`.
    pub main: String,
    /// Detailed description, e.g. `"light rain"`.
    pub description: String,
    /// Temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Provider icon code.
    pub icon: Option<String>,
}

impl ForecastSlot {
    /// Construct a slot without temperature or icon.
    pub fn new(at: NaiveDateTime, main: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            at,
            main: main.into(),
            description: description.into(),
            temperature: None,
            icon: None,
        }
    }

    /// Pick the slot that stands for the whole day: the first at or after
    /// noon, otherwise the first one.
    #[must_use]
    pub fn representative(slots: &[Self]) -> Option<&Self> {
        slots
            .iter()
            .find(|slot| slot.at.hour() >= MIDDAY_HOUR)
            .or_else(|| slots.first())
    }
}

/// Overall weather assessment for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherStatus {
    /// Clear sky.
    Good,
    /// Neither clearly good nor bad, e.g. clouds or drizzle.
    Uncertain,
    /// Precipitation, storms or poor visibility.
    Bad,
    /// No forecast available.
    Unknown,
}

impl WeatherStatus {
    /// Assess a day of forecast slots.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use leisure_core::{ForecastSlot, WeatherStatus};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap_or_default();
    /// let slots = vec![
    ///     ForecastSlot::new(day.and_hms_opt(9, 0, 0).unwrap_or_default(), "Rain", "moderate rain"),
    ///     ForecastSlot::new(day.and_hms_opt(12, 0, 0).unwrap_or_default(), "Clear", "clear sky"),
    /// ];
    /// assert_eq!(WeatherStatus::assess(&slots), WeatherStatus::Good);
    /// assert_eq!(WeatherStatus::assess(&[]), WeatherStatus::Unknown);
    /// ```
    #[must_use]
    pub fn assess(slots: &[ForecastSlot]) -> Self {
        ForecastSlot::representative(slots).map_or(Self::Unknown, Self::classify)
    }

    fn classify(slot: &ForecastSlot) -> Self {
        let main = slot.main.trim().to_lowercase();
        let description = slot.description.to_lowercase();
        if main == "drizzle" || LIGHT_RAIN.iter().any(|word| description.contains(word)) {
            return Self::Uncertain;
        }
        if BAD_CONDITIONS.contains(&main.as_str())
            || BAD_CONDITIONS
                .iter()
                .chain(BAD_DESCRIPTIONS.iter())
                .any(|word| description.contains(word))
        {
            return Self::Bad;
        }
        if main == "clear" {
            Self::Good
        } else {
            Self::Uncertain
        }
    }

    /// Return the lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Uncertain => "uncertain",
            Self::Bad => "bad",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WeatherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explanation attached to a weather verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherNote {
    /// Sun preferred but the forecast is unsettled.
    UncertainForSun,
    /// No forecast could be checked.
    Unavailable,
    /// Bad weather forecast for a sun-only activity.
    BadForSun,
    /// Dry weather forecast for a rain-only activity.
    DryForRain,
}

impl WeatherNote {
    /// Human-readable message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UncertainForSun => "weather uncertain; this activity prefers sunshine",
            Self::Unavailable => "weather data not available",
            Self::BadForSun => "bad weather forecast but sunshine is required",
            Self::DryForRain => "good or unsettled weather but rain is required",
        }
    }
}

impl fmt::Display for WeatherNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of checking one activity against the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherVerdict {
    /// Whether the activity survives weather filtering.
    pub keep: bool,
    /// Optional explanation for the visitor.
    pub note: Option<WeatherNote>,
}

impl WeatherVerdict {
    const fn keep() -> Self {
        Self {
            keep: true,
            note: None,
        }
    }

    const fn keep_with(note: WeatherNote) -> Self {
        Self {
            keep: true,
            note: Some(note),
        }
    }

    const fn drop_with(note: WeatherNote) -> Self {
        Self {
            keep: false,
            note: Some(note),
        }
    }
}

impl WeatherPreference {
    /// Decide whether an activity with this preference suits `status`.
    #[must_use]
    pub const fn verdict(self, status: WeatherStatus) -> WeatherVerdict {
        match (self, status) {
            (Self::Any, _)
            | (Self::SunOnly, WeatherStatus::Good)
            | (Self::RainOnly, WeatherStatus::Bad) => WeatherVerdict::keep(),
            (Self::SunOnly | Self::RainOnly, WeatherStatus::Unknown) => {
                WeatherVerdict::keep_with(WeatherNote::Unavailable)
            }
            (Self::SunOnly, WeatherStatus::Uncertain) => {
                WeatherVerdict::keep_with(WeatherNote::UncertainForSun)
            }
            (Self::SunOnly, WeatherStatus::Bad) => WeatherVerdict::drop_with(WeatherNote::BadForSun),
            (Self::RainOnly, WeatherStatus::Good | WeatherStatus::Uncertain) => {
                WeatherVerdict::drop_with(WeatherNote::DryForRain)
            }
        }
    }
}

/// Errors from [`ForecastProvider::forecast`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider could not be reached or answered with an error.
    #[error("forecast provider unavailable: {message}")]
    Unavailable {
        /// Provider-specific description.
        message: String,
    },
    /// The requested day lies outside the forecast horizon.
    #[error("no forecast available for {date}")]
    OutOfRange {
        /// Requested day.
        date: NaiveDate,
    },
}

/// Source of daily forecasts for a location.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use leisure_core::{ForecastProvider, ForecastSlot, WeatherError};
///
/// struct AlwaysClear;
///
/// impl ForecastProvider for AlwaysClear {
///     fn forecast(
///         &self,
///         _location: Coord<f64>,
///         date: NaiveDate,
///     ) -> Result<Vec<ForecastSlot>, WeatherError> {
///         let noon = date.and_hms_opt(12, 0, 0).ok_or(WeatherError::OutOfRange { date })?;
///         Ok(vec![ForecastSlot::new(noon, "Clear", "clear sky")])
///     }
/// }
///
/// let day = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap_or_default();
/// let slots = AlwaysClear.forecast(Coord { x: 9.37, y: 47.42 }, day)?;
/// assert_eq!(slots.len(), 1);
/// # Ok::<(), WeatherError>(())
/// ```
pub trait ForecastProvider {
    /// Return the forecast slots covering `date` at `location`.
    fn forecast(
        &self,
        location: Coord<f64>,
        date: NaiveDate,
    ) -> Result<Vec<ForecastSlot>, WeatherError>;
}

/// Weather details attached to one candidate activity.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAnnotation {
    /// Assessment of the day.
    pub status: WeatherStatus,
    /// Explanation, present only when weather filtering is enforced.
    pub note: Option<WeatherNote>,
    /// Representative temperature.
    pub temperature: Option<f64>,
    /// Representative provider icon.
    pub icon: Option<String>,
    /// Representative description.
    pub description: Option<String>,
}

/// Result of [`annotate_weather`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherReport {
    /// Annotation for every examined candidate.
    pub annotations: BTreeMap<ActivityId, WeatherAnnotation>,
    /// Candidates that survive weather filtering.
    pub kept: BTreeSet<ActivityId>,
}

/// Fetch and assess the forecast for every candidate.
///
/// When `enforce` is false every candidate is kept and only annotated.
/// Provider failures degrade to [`WeatherStatus::Unknown`] with a warning.
/// Candidate ids absent from the catalog are skipped.
pub fn annotate_weather<P>(
    catalog: &Catalog,
    candidates: &BTreeSet<ActivityId>,
    provider: &P,
    date: NaiveDate,
    enforce: bool,
) -> WeatherReport
where
    P: ForecastProvider + ?Sized,
{
    let mut report = WeatherReport::default();
    for &id in candidates {
        let Some(activity) = catalog.get(id) else {
            log::warn!("Weather check skipped unknown activity {id}");
            continue;
        };
        let slots = provider
            .forecast(activity.location, date)
            .inspect_err(|err| log::warn!("Forecast for activity {id} failed: {err}"))
            .unwrap_or_default();
        let status = WeatherStatus::assess(&slots);
        let verdict = if enforce {
            activity.weather.verdict(status)
        } else {
            WeatherVerdict::keep()
        };
        let representative = ForecastSlot::representative(&slots);
        report.annotations.insert(
            id,
            WeatherAnnotation {
                status,
                note: verdict.note,
                temperature: representative.and_then(|slot| slot.temperature),
                icon: representative.and_then(|slot| slot.icon.clone()),
                description: representative.map(|slot| slot.description.clone()),
            },
        );
        if verdict.keep {
            report.kept.insert(id);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Activity, Category};
    use rstest::{fixture, rstest};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 17).expect("valid date")
    }

    fn slot(hour: u32, main: &str, description: &str) -> ForecastSlot {
        ForecastSlot::new(
            day().and_hms_opt(hour, 0, 0).expect("valid time"),
            main,
            description,
        )
    }

    #[rstest]
    #[case("Clear", "clear sky", WeatherStatus::Good)]
    #[case("Clouds", "broken clouds", WeatherStatus::Uncertain)]
    #[case("Drizzle", "drizzle", WeatherStatus::Uncertain)]
    #[case("Rain", "light rain", WeatherStatus::Uncertain)]
    #[case("Rain", "heavy intensity rain", WeatherStatus::Bad)]
    #[case("Snow", "snow", WeatherStatus::Bad)]
    #[case("Fog", "fog", WeatherStatus::Bad)]
    #[case("Thunderstorm", "thunderstorm with rain", WeatherStatus::Bad)]
    #[case("Clouds", "patches of fog", WeatherStatus::Bad)]
    #[case("Clouds", "smoke", WeatherStatus::Bad)]
    #[case("Clouds", "squalls", WeatherStatus::Bad)]
    #[case("Clouds", "snow showers", WeatherStatus::Bad)]
    fn classifies_conditions(
        #[case] main: &str,
        #[case] description: &str,
        #[case] expected: WeatherStatus,
    ) {
        assert_eq!(WeatherStatus::assess(&[slot(12, main, description)]), expected);
    }

    #[rstest]
    fn prefers_midday_slot() {
        let slots = vec![
            slot(6, "Clear", "clear sky"),
            slot(15, "Rain", "moderate rain"),
            slot(18, "Clear", "clear sky"),
        ];
        assert_eq!(WeatherStatus::assess(&slots), WeatherStatus::Bad);
    }

    #[rstest]
    fn falls_back_to_first_slot() {
        let slots = vec![slot(3, "Clear", "clear sky"), slot(9, "Rain", "rain")];
        assert_eq!(WeatherStatus::assess(&slots), WeatherStatus::Good);
    }

    #[rstest]
    fn empty_forecast_is_unknown() {
        assert_eq!(WeatherStatus::assess(&[]), WeatherStatus::Unknown);
    }

    #[rstest]
    #[case(WeatherPreference::Any, WeatherStatus::Bad, true, None)]
    #[case(WeatherPreference::SunOnly, WeatherStatus::Good, true, None)]
    #[case(WeatherPreference::SunOnly, WeatherStatus::Uncertain, true, Some(WeatherNote::UncertainForSun))]
    #[case(WeatherPreference::SunOnly, WeatherStatus::Unknown, true, Some(WeatherNote::Unavailable))]
    #[case(WeatherPreference::SunOnly, WeatherStatus::Bad, false, Some(WeatherNote::BadForSun))]
    #[case(WeatherPreference::RainOnly, WeatherStatus::Bad, true, None)]
    #[case(WeatherPreference::RainOnly, WeatherStatus::Unknown, true, Some(WeatherNote::Unavailable))]
    #[case(WeatherPreference::RainOnly, WeatherStatus::Good, false, Some(WeatherNote::DryForRain))]
    #[case(WeatherPreference::RainOnly, WeatherStatus::Uncertain, false, Some(WeatherNote::DryForRain))]
    fn verdict_table(
        #[case] preference: WeatherPreference,
        #[case] status: WeatherStatus,
        #[case] keep: bool,
        #[case] note: Option<WeatherNote>,
    ) {
        assert_eq!(preference.verdict(status), WeatherVerdict { keep, note });
    }

    #[rstest]
    #[case(WeatherStatus::Good, "good")]
    #[case(WeatherStatus::Uncertain, "uncertain")]
    #[case(WeatherStatus::Bad, "bad")]
    #[case(WeatherStatus::Unknown, "unknown")]
    fn status_displays_its_label(#[case] status: WeatherStatus, #[case] label: &str) {
        assert_eq!(status.to_string(), label);
        assert_eq!(status.as_str(), label);
    }

    #[rstest]
    fn notes_display_their_message() {
        assert_eq!(
            WeatherNote::BadForSun.to_string(),
            "bad weather forecast but sunshine is required"
        );
        assert_eq!(
            WeatherNote::Unavailable.to_string(),
            WeatherNote::Unavailable.message()
        );
    }

    struct RainyWest;

    impl ForecastProvider for RainyWest {
        fn forecast(
            &self,
            location: Coord<f64>,
            date: NaiveDate,
        ) -> Result<Vec<ForecastSlot>, WeatherError> {
            if location.x < 0.0 {
                return Err(WeatherError::Unavailable {
                    message: "offline".to_owned(),
                });
            }
            let noon = date.and_hms_opt(12, 0, 0).expect("valid time");
            Ok(vec![ForecastSlot {
                temperature: Some(11.5),
                icon: Some("10d".to_owned()),
                ..ForecastSlot::new(noon, "Rain", "moderate rain")
            }])
        }
    }

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::new(vec![
            Activity::new(1, "Lake swim", Category::Nature, Coord { x: 9.4, y: 47.4 })
                .with_weather(WeatherPreference::SunOnly),
            Activity::new(2, "Cinema", Category::Entertainment, Coord { x: 9.4, y: 47.4 }),
            Activity::new(3, "Hike", Category::Hiking, Coord { x: -1.0, y: 47.4 })
                .with_weather(WeatherPreference::SunOnly),
        ])
        .expect("catalog")
    }

    #[rstest]
    fn enforcement_drops_unsuitable_activities(catalog: Catalog) {
        let candidates = BTreeSet::from([1, 2, 3, 99]);
        let report = annotate_weather(&catalog, &candidates, &RainyWest, day(), true);
        assert_eq!(report.kept, BTreeSet::from([2, 3]));
        let swim = report.annotations.get(&1).expect("annotation");
        assert_eq!(swim.status, WeatherStatus::Bad);
        assert_eq!(swim.note, Some(WeatherNote::BadForSun));
        assert_eq!(swim.temperature, Some(11.5));
        let hike = report.annotations.get(&3).expect("annotation");
        assert_eq!(hike.status, WeatherStatus::Unknown);
        assert_eq!(hike.note, Some(WeatherNote::Unavailable));
        assert!(!report.annotations.contains_key(&99));
    }

    #[rstest]
    fn annotation_without_enforcement_keeps_all(catalog: Catalog) {
        let candidates = BTreeSet::from([1, 2, 3]);
        let report = annotate_weather(&catalog, &candidates, &RainyWest, day(), false);
        assert_eq!(report.kept, candidates);
        assert!(report.annotations.values().all(|a| a.note.is_none()));
    }
}
