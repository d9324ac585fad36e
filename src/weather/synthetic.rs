//! Deterministic stand-in forecast
//!
//! Weather is derived from the start date's day of the year plus the night
//! offset, so the same dates always get the same conditions. The count keeps
//! running past Dec 31 instead of restarting with the new year. Used whenever
//! no live forecast is available.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use super::ForecastProvider;
use crate::models::{LocationProfile, WeatherCondition, WeatherObservation};

const TEMPERATURE_CYCLE: [i32; 6] = [15, 18, 20, 22, 25, 28];

/// Weather for the day `day_number` of a running day-of-year count
#[must_use]
pub fn observation_for_day(day_number: u32) -> WeatherObservation {
    let seed = (day_number % 7) as usize;
    let condition = WeatherCondition::CYCLE[seed % WeatherCondition::CYCLE.len()];
    let temperature = TEMPERATURE_CYCLE[seed % TEMPERATURE_CYCLE.len()];
    WeatherObservation::new(condition, temperature)
}

/// Weather for the first night of a trip starting on `date`
#[must_use]
pub fn observation_for(date: NaiveDate) -> WeatherObservation {
    observation_for_day(date.ordinal())
}

/// One observation per night starting at `start`
#[must_use]
pub fn forecast(start: NaiveDate, nights: u32) -> Vec<WeatherObservation> {
    let first = start.ordinal();
    (0..nights)
        .map(|offset| observation_for_day(first + offset))
        .collect()
}

/// Provider wrapper around [`forecast`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticForecast;

#[async_trait]
impl ForecastProvider for SyntheticForecast {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn forecast(
        &self,
        _location: &LocationProfile,
        start: NaiveDate,
        nights: u32,
    ) -> Result<Vec<WeatherObservation>> {
        Ok(forecast(start, nights))
    }
}
