//! Data models for Tripwise
//!
//! This module contains the core domain models organized by concern:
//! - Location: destination identity and descriptive profile
//! - Weather: per-day weather observations
//! - Recommendation: curated attraction/activity/cuisine bundles
//! - Itinerary: trip requests and generated day plans

pub mod itinerary;
pub mod location;
pub mod recommendation;
pub mod weather;

// Re-export all public types for convenient access
pub use itinerary::{DayPlan, Itinerary, TripRequest};
pub use location::{Coordinates, LocationIdentity, LocationKind, LocationProfile};
pub use recommendation::RecommendationBundle;
pub use weather::{WeatherCondition, WeatherObservation};
