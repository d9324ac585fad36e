//! Embedded country directory and curated major-city list

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Coordinates;

/// One country as stored in `data/countries.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub latlng: Option<[f64; 2]>,
}

impl CountryRecord {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.latlng.map(|[lat, lng]| Coordinates::new(lat, lng))
    }
}

/// A city that search offers even without a geocoding backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorCity {
    pub name: &'static str,
    pub country: &'static str,
}

const fn city(name: &'static str, country: &'static str) -> MajorCity {
    MajorCity { name, country }
}

pub const MAJOR_CITIES: &[MajorCity] = &[
    city("New York", "United States"),
    city("Los Angeles", "United States"),
    city("Chicago", "United States"),
    city("San Francisco", "United States"),
    city("Miami", "United States"),
    city("London", "United Kingdom"),
    city("Manchester", "United Kingdom"),
    city("Edinburgh", "United Kingdom"),
    city("Paris", "France"),
    city("Lyon", "France"),
    city("Marseille", "France"),
    city("Tokyo", "Japan"),
    city("Osaka", "Japan"),
    city("Kyoto", "Japan"),
    city("Sydney", "Australia"),
    city("Melbourne", "Australia"),
    city("Brisbane", "Australia"),
    city("Toronto", "Canada"),
    city("Vancouver", "Canada"),
    city("Montreal", "Canada"),
    city("Berlin", "Germany"),
    city("Munich", "Germany"),
    city("Hamburg", "Germany"),
    city("Rome", "Italy"),
    city("Milan", "Italy"),
    city("Venice", "Italy"),
    city("Barcelona", "Spain"),
    city("Madrid", "Spain"),
    city("Seville", "Spain"),
    city("Amsterdam", "Netherlands"),
    city("Rotterdam", "Netherlands"),
    city("Dubai", "United Arab Emirates"),
    city("Singapore", "Singapore"),
    city("Hong Kong", "Hong Kong"),
    city("Bangkok", "Thailand"),
    city("Seoul", "South Korea"),
    city("Shanghai", "China"),
    city("Beijing", "China"),
    city("Mumbai", "India"),
    city("Delhi", "India"),
    city("Bangalore", "India"),
    city("São Paulo", "Brazil"),
    city("Rio de Janeiro", "Brazil"),
    city("Buenos Aires", "Argentina"),
    city("Mexico City", "Mexico"),
    city("Cairo", "Egypt"),
    city("Cape Town", "South Africa"),
    city("Istanbul", "Turkey"),
    city("Moscow", "Russia"),
    city("Saint Petersburg", "Russia"),
    city("Tel Aviv", "Israel"),
    city("Jerusalem", "Israel"),
    city("Haifa", "Israel"),
    city("Athens", "Greece"),
    city("Prague", "Czech Republic"),
    city("Vienna", "Austria"),
    city("Stockholm", "Sweden"),
    city("Copenhagen", "Denmark"),
    city("Oslo", "Norway"),
    city("Dublin", "Ireland"),
    city("Lisbon", "Portugal"),
    city("Warsaw", "Poland"),
    city("Budapest", "Hungary"),
    city("Zurich", "Switzerland"),
    city("Brussels", "Belgium"),
    city("Jakarta", "Indonesia"),
    city("Manila", "Philippines"),
    city("Ho Chi Minh City", "Vietnam"),
    city("Kuala Lumpur", "Malaysia"),
];

/// All countries, sorted by name
pub static COUNTRIES: LazyLock<Vec<CountryRecord>> = LazyLock::new(|| {
    let mut countries: Vec<CountryRecord> =
        serde_json::from_str(include_str!("../data/countries.json"))
            .expect("embedded country directory is valid JSON");
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
});

static BY_NAME: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    COUNTRIES
        .iter()
        .enumerate()
        .map(|(index, country)| (country.name.to_lowercase(), index))
        .collect()
});

/// Case-insensitive lookup by exact country name
#[must_use]
pub fn find_country(name: &str) -> Option<&'static CountryRecord> {
    BY_NAME
        .get(&name.trim().to_lowercase())
        .map(|&index| &COUNTRIES[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_loads() {
        assert!(COUNTRIES.len() > 40);
        assert!(COUNTRIES.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_find_country_ignores_case() {
        let france = find_country("  fRaNcE ").unwrap();
        assert_eq!(france.capital.as_deref(), Some("Paris"));
        assert_eq!(france.region.as_deref(), Some("Europe"));
        assert_eq!(france.coordinates(), Some(Coordinates::new(46.0, 2.0)));
        assert!(find_country("Atlantis").is_none());
    }

    #[test]
    fn test_missing_fields_are_none() {
        let antarctica = find_country("Antarctica").unwrap();
        assert!(antarctica.capital.is_none());
        assert!(antarctica.subregion.is_none());
    }

    #[test]
    fn test_every_major_city_country_is_known() {
        for city in MAJOR_CITIES {
            assert!(find_country(city.country).is_some(), "{} missing", city.country);
        }
    }
}
