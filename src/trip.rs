//! Trip orchestration
//!
//! Ties the profile lookup, recommendation source, weather service and
//! itinerary planner together for the two user-facing operations.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::itinerary;
use crate::location_resolver::{LocationResolver, ProfileProvider};
use crate::models::{Itinerary, LocationIdentity, LocationProfile, RecommendationBundle, TripRequest};
use crate::recommendations::{CuratedRecommendations, RecommendationSource};
use crate::weather::{ForecastProvider, WeatherService};
use crate::{Result, TripError};

/// A destination with its profile and recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub profile: LocationProfile,
    pub recommendations: RecommendationBundle,
}

/// A generated trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub destination: Destination,
    pub nights: u32,
    pub itinerary: Itinerary,
}

/// Trip planning service
#[derive(Clone)]
pub struct TripPlanner {
    resolver: LocationResolver,
    recommendations: Arc<dyn RecommendationSource>,
    weather: WeatherService,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::offline()
    }
}

impl TripPlanner {
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileProvider>,
        recommendations: Arc<dyn RecommendationSource>,
        weather: WeatherService,
    ) -> Self {
        Self {
            resolver: LocationResolver::new(profiles),
            recommendations,
            weather,
        }
    }

    /// Embedded directory, curated recommendations and synthetic weather
    #[must_use]
    pub fn offline() -> Self {
        Self {
            resolver: LocationResolver::default(),
            recommendations: Arc::new(CuratedRecommendations),
            weather: WeatherService::synthetic(),
        }
    }

    /// Same planner with `provider` as the live forecast source
    #[must_use]
    pub fn with_weather(mut self, provider: Arc<dyn ForecastProvider>) -> Self {
        self.weather = WeatherService::with_live(provider);
        self
    }

    /// Whether itineraries try a live forecast before the synthetic one
    #[must_use]
    pub fn has_live_weather(&self) -> bool {
        self.weather.has_live_source()
    }

    /// Profile and recommendations for a destination
    #[instrument(skip(self))]
    pub async fn recommend(&self, identity: Option<&LocationIdentity>) -> Result<Destination> {
        let identity = identity.ok_or(TripError::MissingLocation)?;
        let profile = self.resolver.resolve_profile(identity).await;
        let recommendations = self
            .recommendations
            .recommendations(&profile)
            .await
            .ok_or_else(|| TripError::NoRecommendationsAvailable {
                location: identity.to_string(),
            })?;

        Ok(Destination {
            profile,
            recommendations,
        })
    }

    /// Generate a day-by-day itinerary for the requested dates
    #[instrument(skip(self))]
    pub async fn plan_trip(
        &self,
        identity: Option<&LocationIdentity>,
        request: TripRequest,
    ) -> Result<TripPlan> {
        if identity.is_none() {
            return Err(TripError::MissingLocation);
        }
        let nights = request.nights()?;
        let destination = self.recommend(identity).await?;
        let weather = self
            .weather
            .forecast(&destination.profile, request.start, nights)
            .await;

        let itinerary = itinerary::plan(&destination.recommendations, &weather, request.start, nights);
        info!(
            location = %destination.profile.identity,
            nights,
            days = itinerary.len(),
            live_weather = self.has_live_weather(),
            "Generated itinerary"
        );

        Ok(TripPlan {
            destination,
            nights,
            itinerary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location_resolver::StaticDirectory;
    use crate::models::{WeatherCondition, WeatherObservation};
    use crate::weather::CannedForecast;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct EmptySource;

    #[async_trait]
    impl RecommendationSource for EmptySource {
        async fn recommendations(&self, _profile: &LocationProfile) -> Option<RecommendationBundle> {
            None
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[tokio::test]
    async fn test_recommend_curated_city() {
        let paris = LocationIdentity::city("Paris", "France");
        let destination = TripPlanner::offline().recommend(Some(&paris)).await.unwrap();
        assert_eq!(destination.profile.region, "Europe");
        assert_eq!(destination.recommendations.attractions[0], "Eiffel Tower");
    }

    #[tokio::test]
    async fn test_recommend_requires_location() {
        let err = TripPlanner::offline().recommend(None).await.unwrap_err();
        assert!(matches!(err, TripError::MissingLocation));
    }

    #[tokio::test]
    async fn test_empty_source_reports_no_recommendations() {
        let planner = TripPlanner::new(
            Arc::new(StaticDirectory),
            Arc::new(EmptySource),
            WeatherService::synthetic(),
        );
        let err = planner
            .recommend(Some(&LocationIdentity::country("Japan")))
            .await
            .unwrap_err();
        assert!(matches!(err, TripError::NoRecommendationsAvailable { .. }));
    }

    #[tokio::test]
    async fn test_plan_trip_uses_synthetic_weather() {
        let japan = LocationIdentity::country("Japan");
        let plan = TripPlanner::offline()
            .plan_trip(Some(&japan), TripRequest::new(date(1), date(5)))
            .await
            .unwrap();
        assert_eq!(plan.nights, 4);
        assert_eq!(plan.itinerary.len(), 4);
        assert_eq!(plan.itinerary.days()[0].weather, crate::weather::synthetic::observation_for(date(1)));
    }

    #[tokio::test]
    async fn test_plan_trip_with_live_weather() {
        let rainy = vec![WeatherObservation::new(WeatherCondition::Rainy, 9); 2];
        let planner = TripPlanner::offline().with_weather(Arc::new(CannedForecast::new(rainy)));
        let plan = planner
            .plan_trip(Some(&LocationIdentity::country("Italy")), TripRequest::new(date(1), date(3)))
            .await
            .unwrap();
        assert!(plan.itinerary.days().iter().all(|d| d.weather.temperature == 9));
    }

    #[test]
    fn test_live_weather_flag() {
        let planner = TripPlanner::offline();
        assert!(!planner.has_live_weather());
        let planner = planner.with_weather(Arc::new(CannedForecast::new(Vec::new())));
        assert!(planner.has_live_weather());
    }

    #[tokio::test]
    async fn test_plan_trip_validates_location_first() {
        // Invalid dates too, but the missing location is reported
        let err = TripPlanner::offline()
            .plan_trip(None, TripRequest::new(date(5), date(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, TripError::MissingLocation));
    }

    #[tokio::test]
    async fn test_plan_trip_rejects_long_trip() {
        let request = TripRequest::new(date(1), NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        let err = TripPlanner::offline()
            .plan_trip(Some(&LocationIdentity::country("Spain")), request)
            .await
            .unwrap_err();
        assert!(matches!(err, TripError::TripTooLong { nights: 15, .. }));
    }

    #[tokio::test]
    async fn test_plan_trip_rejects_inverted_range() {
        let err = TripPlanner::offline()
            .plan_trip(Some(&LocationIdentity::country("Spain")), TripRequest::new(date(3), date(3)))
            .await
            .unwrap_err();
        assert!(matches!(err, TripError::InvalidRange { .. }));
    }
}
