//! Per-day weather for a trip
//!
//! A [`ForecastProvider`] yields one observation per night. [`WeatherService`]
//! is the single place that decides which provider answers: an optional live
//! source first, the synthetic forecast otherwise.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::models::{LocationProfile, WeatherObservation};

pub mod synthetic;

pub use synthetic::SyntheticForecast;

/// Source of a per-day forecast for a date range
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn forecast(
        &self,
        location: &LocationProfile,
        start: NaiveDate,
        nights: u32,
    ) -> Result<Vec<WeatherObservation>>;
}

/// Fixed sequence of observations, regardless of location or dates
#[derive(Debug, Clone, Default)]
pub struct CannedForecast {
    observations: Vec<WeatherObservation>,
}

impl CannedForecast {
    #[must_use]
    pub fn new(observations: Vec<WeatherObservation>) -> Self {
        Self { observations }
    }
}

#[async_trait]
impl ForecastProvider for CannedForecast {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn forecast(
        &self,
        _location: &LocationProfile,
        _start: NaiveDate,
        nights: u32,
    ) -> Result<Vec<WeatherObservation>> {
        Ok(self
            .observations
            .iter()
            .take(nights as usize)
            .cloned()
            .collect())
    }
}

/// Chooses between a live provider and the synthetic fallback
#[derive(Clone, Default)]
pub struct WeatherService {
    live: Option<Arc<dyn ForecastProvider>>,
    synthetic: SyntheticForecast,
}

impl WeatherService {
    /// Synthetic forecast only
    #[must_use]
    pub fn synthetic() -> Self {
        Self::default()
    }

    /// Prefer `provider`, falling back to the synthetic forecast on failure
    #[must_use]
    pub fn with_live(provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            live: Some(provider),
            synthetic: SyntheticForecast,
        }
    }

    #[must_use]
    pub fn has_live_source(&self) -> bool {
        self.live.is_some()
    }

    /// Forecast for the trip. Never fails: live errors or empty answers
    /// degrade to the synthetic forecast.
    #[instrument(skip(self, location), fields(location = %location.display_name()))]
    pub async fn forecast(
        &self,
        location: &LocationProfile,
        start: NaiveDate,
        nights: u32,
    ) -> Vec<WeatherObservation> {
        if let Some(live) = &self.live {
            match live.forecast(location, start, nights).await {
                Ok(observations) if !observations.is_empty() => {
                    debug!(
                        provider = live.name(),
                        days = observations.len(),
                        "Using live forecast"
                    );
                    return observations;
                }
                Ok(_) => {
                    warn!(provider = live.name(), "Live forecast was empty, using synthetic weather");
                }
                Err(e) => {
                    warn!(provider = live.name(), "Live forecast failed: {e:#}, using synthetic weather");
                }
            }
        }

        synthetic::forecast(start, nights)
    }
}
