//! Destination identity and descriptive profile

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the traveler picked the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    #[default]
    Country,
    Capital,
    City,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationKind::Country => "country",
            LocationKind::Capital => "capital",
            LocationKind::City => "city",
        };
        f.pad(name)
    }
}

/// Location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A destination as selected from search.
///
/// For cities `name` is the city and `country` its country. For countries and
/// capitals `name` is the country itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationIdentity {
    #[serde(default)]
    pub kind: LocationKind,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub population: Option<u64>,
}

impl LocationIdentity {
    /// Identity for a whole country
    #[must_use]
    pub fn country(name: impl Into<String>) -> Self {
        Self {
            kind: LocationKind::Country,
            name: name.into(),
            country: None,
            coordinates: None,
            population: None,
        }
    }

    /// Identity for a city within a country
    #[must_use]
    pub fn city(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            kind: LocationKind::City,
            name: name.into(),
            country: Some(country.into()),
            coordinates: None,
            population: None,
        }
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    #[must_use]
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    #[must_use]
    pub fn is_city(&self) -> bool {
        self.kind == LocationKind::City
    }

    /// City name, only for city identities
    #[must_use]
    pub fn city_name(&self) -> Option<&str> {
        self.is_city().then_some(self.name.as_str())
    }

    /// Country the destination belongs to
    #[must_use]
    pub fn country_name(&self) -> Option<&str> {
        if self.is_city() {
            self.country.as_deref()
        } else {
            Some(self.name.as_str())
        }
    }
}

impl fmt::Display for LocationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.city_name(), self.country_name()) {
            (Some(city), Some(country)) => write!(f, "{city}, {country}"),
            _ => f.write_str(&self.name),
        }
    }
}

/// Descriptive profile of a destination. Informational only; the planner
/// reads nothing but `region` (for the recommendation fallback).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationProfile {
    pub identity: LocationIdentity,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: Option<u64>,
    /// Area in km²
    pub area: Option<f64>,
    pub coordinates: Option<Coordinates>,
}

impl LocationProfile {
    pub const UNKNOWN: &'static str = "Unknown";
    pub const NOT_AVAILABLE: &'static str = "N/A";

    /// Profile with every lookup field defaulted
    #[must_use]
    pub fn unknown(identity: LocationIdentity) -> Self {
        Self {
            population: identity.population,
            coordinates: identity.coordinates,
            identity,
            capital: Self::NOT_AVAILABLE.to_string(),
            region: Self::UNKNOWN.to_string(),
            subregion: Self::UNKNOWN.to_string(),
            area: None,
        }
    }

    /// City name when the destination is a city, else the country name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.identity
            .city_name()
            .or_else(|| self.identity.country_name())
            .unwrap_or(&self.identity.name)
    }

    /// Secondary heading: "City, Country" for cities, "Capital: X" otherwise
    #[must_use]
    pub fn headline(&self) -> String {
        match (self.identity.city_name(), self.identity.country_name()) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.to_string(),
            _ => format!("Capital: {}", self.capital),
        }
    }

    /// Region usable for recommendation lookup
    #[must_use]
    pub fn known_region(&self) -> Option<&str> {
        (!self.region.is_empty() && self.region != Self::UNKNOWN).then_some(self.region.as_str())
    }
}
