//! Location Resolution Module
//!
//! Enriches a selected destination with descriptive country data. Lookups
//! are best effort: a failed or empty lookup yields a profile with every
//! descriptive field defaulted.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::directory::{self, CountryRecord};
use crate::models::{LocationIdentity, LocationProfile};

/// Source of country records for a destination
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn profile(&self, identity: &LocationIdentity) -> Result<Option<CountryRecord>>;
}

/// Provider backed by the embedded country directory
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDirectory;

#[async_trait]
impl ProfileProvider for StaticDirectory {
    async fn profile(&self, identity: &LocationIdentity) -> Result<Option<CountryRecord>> {
        Ok(identity
            .country_name()
            .and_then(directory::find_country)
            .cloned())
    }
}

/// Service for resolving a destination into a profile
#[derive(Clone)]
pub struct LocationResolver {
    provider: Arc<dyn ProfileProvider>,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(Arc::new(StaticDirectory))
    }
}

impl LocationResolver {
    #[must_use]
    pub fn new(provider: Arc<dyn ProfileProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a profile for `identity`. Never fails.
    pub async fn resolve_profile(&self, identity: &LocationIdentity) -> LocationProfile {
        debug!("Resolving profile for {identity}");

        match self.provider.profile(identity).await {
            Ok(Some(record)) => Self::merge(identity.clone(), record),
            Ok(None) => {
                debug!("No country record for {identity}, using defaults");
                LocationProfile::unknown(identity.clone())
            }
            Err(e) => {
                warn!("Profile lookup for {identity} failed: {e:#}");
                LocationProfile::unknown(identity.clone())
            }
        }
    }

    /// Identity population and coordinates take precedence over the record's
    fn merge(identity: LocationIdentity, record: CountryRecord) -> LocationProfile {
        let coordinates = identity.coordinates.or_else(|| record.coordinates());
        let population = identity.population.or(record.population);
        let text = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        LocationProfile {
            identity,
            capital: text(record.capital, LocationProfile::NOT_AVAILABLE),
            region: text(record.region, LocationProfile::UNKNOWN),
            subregion: text(record.subregion, LocationProfile::UNKNOWN),
            population,
            area: record.area,
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    struct BrokenProvider;

    #[async_trait]
    impl ProfileProvider for BrokenProvider {
        async fn profile(&self, _identity: &LocationIdentity) -> Result<Option<CountryRecord>> {
            Err(anyhow::anyhow!("directory offline"))
        }
    }

    #[tokio::test]
    async fn test_country_profile_from_directory() {
        let profile = LocationResolver::default()
            .resolve_profile(&LocationIdentity::country("Japan"))
            .await;
        assert_eq!(profile.capital, "Tokyo");
        assert_eq!(profile.region, "Asia");
        assert_eq!(profile.subregion, "Eastern Asia");
        assert!(profile.area.is_some());
        assert_eq!(profile.coordinates, Some(Coordinates::new(36.0, 138.0)));
    }

    #[tokio::test]
    async fn test_city_uses_its_country_record() {
        let profile = LocationResolver::default()
            .resolve_profile(&LocationIdentity::city("Kyoto", "Japan"))
            .await;
        assert_eq!(profile.region, "Asia");
        assert_eq!(profile.display_name(), "Kyoto");
        assert_eq!(profile.headline(), "Kyoto, Japan");
    }

    #[tokio::test]
    async fn test_identity_values_take_precedence() {
        let identity = LocationIdentity::country("France")
            .with_coordinates(Coordinates::new(1.0, 1.0))
            .with_population(7);
        let profile = LocationResolver::default().resolve_profile(&identity).await;
        assert_eq!(profile.population, Some(7));
        assert_eq!(profile.coordinates, Some(Coordinates::new(1.0, 1.0)));
        assert_eq!(profile.capital, "Paris");
    }

    #[tokio::test]
    async fn test_missing_record_fields_default() {
        let profile = LocationResolver::default()
            .resolve_profile(&LocationIdentity::country("Antarctica"))
            .await;
        assert_eq!(profile.capital, "N/A");
        assert_eq!(profile.subregion, "Unknown");
        assert_eq!(profile.region, "Antarctic");
    }

    #[tokio::test]
    async fn test_unknown_country_defaults() {
        let identity = LocationIdentity::country("Atlantis");
        let profile = LocationResolver::default().resolve_profile(&identity).await;
        assert_eq!(profile, LocationProfile::unknown(identity));
    }

    #[tokio::test]
    async fn test_provider_failure_is_not_fatal() {
        let identity = LocationIdentity::country("France");
        let profile = LocationResolver::new(Arc::new(BrokenProvider))
            .resolve_profile(&identity)
            .await;
        assert_eq!(profile.region, "Unknown");
        assert_eq!(profile.capital, "N/A");
    }
}
