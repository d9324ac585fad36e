//! Itinerary planner
//!
//! Turns a recommendation bundle and a per-day forecast into day plans.
//! Pure and synchronous: identical inputs always give an identical itinerary.
//!
//! Per day `d` (0-based):
//! - morning: outdoor[d] in good weather, else indoor[d], else any activity[d]
//! - afternoon: attractions[d], plus outdoor[d+1] in good weather unless it is
//!   already the morning activity
//! - evening: indoor[d+2]
//! - dining: cuisine[d]

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{DayPlan, Itinerary, RecommendationBundle, WeatherObservation};

pub mod rotation;

pub use rotation::{ActivityPartitions, EVENING_FALLBACK, MORNING_FALLBACK};

const DATE_LABEL_FORMAT: &str = "%A, %b %-d";

/// Human-readable day label, e.g. "Monday, Jun 2"
#[must_use]
pub fn format_date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// Build an itinerary of exactly `nights` days starting at `start`.
///
/// Days beyond the end of `weather` get a sunny 20° stand-in.
#[must_use]
pub fn plan(
    bundle: &RecommendationBundle,
    weather: &[WeatherObservation],
    start: NaiveDate,
    nights: u32,
) -> Itinerary {
    let partitions = ActivityPartitions::new(&bundle.activities);
    debug!(
        nights,
        forecast_days = weather.len(),
        outdoor = partitions.outdoor.len(),
        indoor = partitions.indoor.len(),
        "Planning itinerary"
    );

    let days = (0..nights)
        .map(|day| {
            let date = start
                .checked_add_days(Days::new(u64::from(day)))
                .unwrap_or(NaiveDate::MAX);
            let observation = weather
                .get(day as usize)
                .map(normalize)
                .unwrap_or_else(WeatherObservation::fallback);
            plan_day(bundle, &partitions, day, date, observation)
        })
        .collect();

    Itinerary::new(start, days)
}

/// Plan for one day; `day` is the 0-based rotation index
#[must_use]
pub fn plan_day(
    bundle: &RecommendationBundle,
    partitions: &ActivityPartitions<'_>,
    day: u32,
    date: NaiveDate,
    weather: WeatherObservation,
) -> DayPlan {
    let index = day as usize;
    let good_weather = weather.is_good_weather();

    let morning = vec![partitions.morning(index, good_weather).to_string()];

    let mut afternoon = Vec::new();
    if let Some(attraction) = rotation::rotate(&bundle.attractions, index) {
        afternoon.push(attraction.to_string());
    }
    if let Some(outdoor) = partitions.afternoon_outdoor(index, good_weather) {
        if !morning.iter().any(|m| m == outdoor) {
            afternoon.push(outdoor.to_string());
        }
    }

    let evening = vec![partitions.evening(index).to_string()];

    let dining = rotation::rotate(&bundle.cuisine, index)
        .map(|cuisine| vec![cuisine.to_string()])
        .unwrap_or_default();

    DayPlan {
        day: day + 1,
        date,
        date_label: format_date_label(date),
        weather,
        morning,
        afternoon,
        evening,
        dining,
    }
}

fn normalize(observation: &WeatherObservation) -> WeatherObservation {
    let mut observation = observation.clone();
    if observation.description.trim().is_empty() {
        observation.description = WeatherObservation::fallback().description;
    }
    observation
}
