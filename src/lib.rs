//! `Tripwise` - Destination recommendations and weather-aware trip itineraries
//!
//! This library provides destination search, curated recommendations,
//! synthetic or supplied weather, and a deterministic day-by-day planner.

pub mod api;
pub mod config;
pub mod directory;
pub mod duration;
pub mod error;
pub mod itinerary;
pub mod location_resolver;
pub mod models;
pub mod recommendations;
pub mod search;
pub mod telemetry;
pub mod trip;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::TripwiseConfig;
pub use error::TripError;
pub use location_resolver::{LocationResolver, ProfileProvider, StaticDirectory};
pub use models::{
    DayPlan, Itinerary, LocationIdentity, LocationKind, LocationProfile, RecommendationBundle,
    TripRequest, WeatherCondition, WeatherObservation,
};
pub use recommendations::{CuratedRecommendations, RecommendationSource};
pub use search::{LocationMatch, LocationSearch};
pub use trip::{Destination, TripPlan, TripPlanner};
pub use weather::{CannedForecast, ForecastProvider, SyntheticForecast, WeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
