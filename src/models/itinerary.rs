//! Trip request and generated itinerary models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeatherObservation;
use crate::{Result, TripError, duration};

/// Start and end dates of a requested trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripRequest {
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `YYYY-MM-DD` form values. Both dates are required.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let (Some(start), Some(end)) = (
            start.map(str::trim).filter(|s| !s.is_empty()),
            end.map(str::trim).filter(|s| !s.is_empty()),
        ) else {
            return Err(TripError::validation("Please select both start and end dates"));
        };
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Validated night count for this request
    pub fn nights(&self) -> Result<u32> {
        duration::nights(self.start, self.end)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, TripRequest::DATE_FORMAT).map_err(|_| {
        TripError::validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

/// Plan for a single day of the trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    pub date: NaiveDate,
    /// Human-readable date, e.g. "Monday, Jun 2"
    pub date_label: String,
    pub weather: WeatherObservation,
    pub morning: Vec<String>,
    pub afternoon: Vec<String>,
    pub evening: Vec<String>,
    pub dining: Vec<String>,
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {} - {}  {}", self.day, self.date_label, self.weather)?;
        let slots = [
            ("🌅 Morning", &self.morning),
            ("☀️ Afternoon", &self.afternoon),
            ("🌙 Evening", &self.evening),
            ("🍽️ Dining", &self.dining),
        ];
        for (label, items) in slots {
            if !items.is_empty() {
                writeln!(f, "   {label}: {}", items.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Ordered day plans for one trip. Never mutated after generation;
/// a new request produces a new itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    start_date: NaiveDate,
    days: Vec<DayPlan>,
}

impl Itinerary {
    pub(crate) fn new(start_date: NaiveDate, days: Vec<DayPlan>) -> Self {
        Self { start_date, days }
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Day plan by 1-based day number
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            writeln!(f, "{day}")?;
        }
        Ok(())
    }
}
