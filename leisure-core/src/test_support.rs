//! Test-only helpers shared by unit and behaviour tests.

use std::collections::HashMap;

use chrono::NaiveDate;
use geo::Coord;

use crate::{Activity, ActivityId, Category, ForecastProvider, ForecastSlot, WeatherError};

/// Build a free activity at the origin.
#[must_use]
pub fn activity(id: ActivityId, category: Category) -> Activity {
    Activity::new(
        id,
        format!("{category} {id}"),
        category,
        Coord { x: 0.0, y: 0.0 },
    )
}

/// `ForecastProvider` returning one noon slot per registered longitude.
///
/// Locations whose longitude has no registered condition fail with
/// [`WeatherError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct StubForecast {
    conditions: HashMap<u64, (String, String)>,
}

impl StubForecast {
    /// Register `main`/`description` for activities at longitude `x`.
    #[must_use]
    pub fn with_condition(mut self, x: f64, main: &str, description: &str) -> Self {
        self.conditions
            .insert(x.to_bits(), (main.to_owned(), description.to_owned()));
        self
    }
}

impl ForecastProvider for StubForecast {
    fn forecast(
        &self,
        location: Coord<f64>,
        date: NaiveDate,
    ) -> Result<Vec<ForecastSlot>, WeatherError> {
        let (main, description) =
            self.conditions
                .get(&location.x.to_bits())
                .ok_or_else(|| WeatherError::Unavailable {
                    message: format!("no forecast registered for longitude {}", location.x),
                })?;
        let noon = date
            .and_hms_opt(12, 0, 0)
            .ok_or(WeatherError::OutOfRange { date })?;
        Ok(vec![ForecastSlot::new(noon, main.clone(), description.clone())])
    }
}
