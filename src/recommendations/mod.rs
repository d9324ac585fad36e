//! Recommendation lookup for a destination
//!
//! Resolution order: curated city, curated country, region, generic.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::models::{LocationProfile, RecommendationBundle};

pub mod catalog;

/// Which table answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationOrigin {
    CuratedCity,
    CuratedCountry,
    Region,
    Generic,
}

/// Source of a recommendation bundle for a destination
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// `None` means nothing at all is known for the destination
    async fn recommendations(&self, profile: &LocationProfile) -> Option<RecommendationBundle>;
}

/// Lookup over the static curated tables. Always answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedRecommendations;

impl CuratedRecommendations {
    /// Resolve a bundle and report which table it came from
    #[must_use]
    pub fn resolve(&self, profile: &LocationProfile) -> (RecommendationOrigin, RecommendationBundle) {
        let identity = &profile.identity;

        if let Some(bundle) = identity
            .city_name()
            .and_then(|city| catalog::CITIES.get(city.trim()))
        {
            return (RecommendationOrigin::CuratedCity, bundle.to_bundle());
        }

        if let Some(bundle) = identity
            .country_name()
            .and_then(|country| catalog::COUNTRIES.get(country.trim()))
        {
            return (RecommendationOrigin::CuratedCountry, bundle.to_bundle());
        }

        if let Some(bundle) = profile
            .known_region()
            .and_then(|region| catalog::REGION_BUNDLES.get(region.trim()))
        {
            return (RecommendationOrigin::Region, bundle.to_bundle());
        }

        (RecommendationOrigin::Generic, catalog::GENERIC.to_bundle())
    }
}

#[async_trait]
impl RecommendationSource for CuratedRecommendations {
    async fn recommendations(&self, profile: &LocationProfile) -> Option<RecommendationBundle> {
        let (origin, bundle) = self.resolve(profile);
        debug!(
            location = %profile.identity,
            region = %profile.region,
            ?origin,
            "Resolved recommendations"
        );
        Some(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationIdentity;

    fn profile(identity: LocationIdentity, region: &str) -> LocationProfile {
        let mut profile = LocationProfile::unknown(identity);
        profile.region = region.to_string();
        profile
    }

    #[test]
    fn test_curated_city_wins_over_country_and_region() {
        let paris = profile(LocationIdentity::city("Paris", "France"), "Europe");
        let (origin, bundle) = CuratedRecommendations.resolve(&paris);
        assert_eq!(origin, RecommendationOrigin::CuratedCity);
        assert_eq!(bundle, catalog::CITIES["Paris"].to_bundle());
        assert_eq!(bundle.attractions[0], "Eiffel Tower");
        assert_eq!(bundle.activities[0], "Museum Visits");
    }

    #[test]
    fn test_uncurated_city_uses_curated_country() {
        let lyon = profile(LocationIdentity::city("Lyon", "France"), "Europe");
        let (origin, bundle) = CuratedRecommendations.resolve(&lyon);
        assert_eq!(origin, RecommendationOrigin::CuratedCountry);
        assert_eq!(bundle.activities[0], "Wine tasting in Bordeaux");
    }

    #[test]
    fn test_curated_country() {
        let japan = profile(LocationIdentity::country("Japan"), "Asia");
        let (origin, bundle) = CuratedRecommendations.resolve(&japan);
        assert_eq!(origin, RecommendationOrigin::CuratedCountry);
        assert_eq!(bundle.attractions[0], "Mount Fuji");
    }

    #[test]
    fn test_region_fallback() {
        let kenya = profile(LocationIdentity::country("Kenya"), "Africa");
        let (origin, bundle) = CuratedRecommendations.resolve(&kenya);
        assert_eq!(origin, RecommendationOrigin::Region);
        assert_eq!(bundle.activities[0], "Safari Tours");
    }

    #[test]
    fn test_generic_fallback_for_unknown_region() {
        let nowhere = LocationProfile::unknown(LocationIdentity::country("Atlantis"));
        let (origin, bundle) = CuratedRecommendations.resolve(&nowhere);
        assert_eq!(origin, RecommendationOrigin::Generic);
        assert_eq!(bundle.attractions[0], "Local Attractions");

        let antarctic = profile(LocationIdentity::country("Antarctica"), "Antarctic");
        assert_eq!(
            CuratedRecommendations.resolve(&antarctic).0,
            RecommendationOrigin::Generic
        );
    }

    #[tokio::test]
    async fn test_source_always_answers() {
        let nowhere = LocationProfile::unknown(LocationIdentity::country("Atlantis"));
        assert!(CuratedRecommendations.recommendations(&nowhere).await.is_some());
    }
}
