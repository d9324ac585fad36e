//! Destination search over the embedded directory
//!
//! Results come in three groups: countries matching by name, countries matching
//! by capital, then curated major cities.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::config::SearchConfig;
use crate::directory::{self, CountryRecord, MajorCity};
use crate::models::{Coordinates, LocationIdentity, LocationKind, LocationProfile};

/// One search suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMatch {
    pub kind: LocationKind,
    /// Country name for countries and capitals, city name for cities
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl LocationMatch {
    fn from_country(kind: LocationKind, record: &CountryRecord) -> Self {
        Self {
            kind,
            name: record.name.clone(),
            country: None,
            capital: Some(
                record
                    .capital
                    .clone()
                    .unwrap_or_else(|| LocationProfile::NOT_AVAILABLE.to_string()),
            ),
            coordinates: record.coordinates(),
            population: record.population,
        }
    }

    fn from_city(city: &MajorCity) -> Self {
        Self {
            kind: LocationKind::City,
            name: city.name.to_string(),
            country: Some(city.country.to_string()),
            capital: None,
            coordinates: None,
            population: None,
        }
    }

    /// Key used to drop repeated suggestions
    fn dedup_key(&self) -> String {
        let qualifier = self
            .country
            .as_deref()
            .or(self.capital.as_deref())
            .unwrap_or_default();
        format!("{}-{qualifier}", self.name)
    }

    /// Identity handed to the planner when this suggestion is chosen
    #[must_use]
    pub fn identity(&self) -> LocationIdentity {
        LocationIdentity {
            kind: self.kind,
            name: self.name.clone(),
            country: self.country.clone(),
            coordinates: self.coordinates,
            population: self.population,
        }
    }
}

/// Search service configured with result limits
#[derive(Debug, Clone, Default)]
pub struct LocationSearch {
    config: SearchConfig,
}

impl LocationSearch {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Suggestions for a free-text query. Short queries yield nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<LocationMatch> {
        let query = query.trim();
        if query.chars().count() < self.config.min_query_length {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let matches = |value: &str| value.to_lowercase().contains(&needle);

        let mut results: Vec<LocationMatch> = directory::COUNTRIES
            .iter()
            .filter(|country| matches(&country.name))
            .map(|country| LocationMatch::from_country(LocationKind::Country, country))
            .collect();

        for country in directory::COUNTRIES.iter() {
            if !country.capital.as_deref().is_some_and(matches) {
                continue;
            }
            let candidate = LocationMatch::from_country(LocationKind::Capital, country);
            let duplicate = results
                .iter()
                .any(|r| r.name == candidate.name && r.capital == candidate.capital);
            if !duplicate {
                results.push(candidate);
            }
        }

        results.extend(
            directory::MAJOR_CITIES
                .iter()
                .filter(|city| matches(city.name) || matches(city.country))
                .take(self.config.max_city_matches)
                .map(LocationMatch::from_city),
        );

        let mut seen = HashSet::new();
        results.retain(|r| seen.insert(r.dedup_key()));
        results.truncate(self.config.max_results);

        debug!(query, results = results.len(), "Location search");
        results
    }
}
