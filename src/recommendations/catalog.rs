//! Curated recommendation tables
//!
//! Static reference data keyed by city, country and region, plus the
//! generic bundle used when nothing else matches.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::RecommendationBundle;

/// Bundle stored as static string slices
#[derive(Debug, Clone, Copy)]
pub struct StaticBundle {
    pub attractions: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub cuisine: &'static [&'static str],
}

impl StaticBundle {
    #[must_use]
    pub fn to_bundle(&self) -> RecommendationBundle {
        RecommendationBundle::new(
            self.attractions.iter().copied(),
            self.activities.iter().copied(),
            self.cuisine.iter().copied(),
        )
    }
}

/// Regions with a generic bundle
pub const REGIONS: [&str; 5] = ["Europe", "Asia", "Americas", "Africa", "Oceania"];

const CITY_TABLE: &[(&str, StaticBundle)] = &[
    (
        "New York",
        StaticBundle {
            attractions: &["Statue of Liberty", "Central Park", "Times Square", "Empire State Building", "Brooklyn Bridge"],
            activities: &["Broadway Shows", "Museum Visits", "Food Tours", "Shopping", "Skyline Views"],
            cuisine: &["Pizza", "Bagels", "Food Trucks", "Fine Dining", "International Cuisine"],
        },
    ),
    (
        "London",
        StaticBundle {
            attractions: &["Big Ben", "Tower Bridge", "British Museum", "Buckingham Palace", "London Eye"],
            activities: &["Theater Shows", "Museum Tours", "River Cruises", "Pub Crawls", "Shopping"],
            cuisine: &["Fish & Chips", "Afternoon Tea", "Indian Cuisine", "Traditional Pubs", "Street Food"],
        },
    ),
    (
        "Paris",
        StaticBundle {
            attractions: &["Eiffel Tower", "Louvre Museum", "Notre-Dame", "Arc de Triomphe", "Montmartre"],
            activities: &["Museum Visits", "Seine Cruises", "Cafe Culture", "Shopping", "Art Galleries"],
            cuisine: &["Croissants", "French Wine", "Cheese", "Fine Dining", "Patisseries"],
        },
    ),
    (
        "Tokyo",
        StaticBundle {
            attractions: &["Tokyo Skytree", "Senso-ji Temple", "Shibuya Crossing", "Meiji Shrine", "Tsukiji Market"],
            activities: &["Temple Visits", "Shopping", "Anime Culture", "Food Tours", "Nightlife"],
            cuisine: &["Sushi", "Ramen", "Tempura", "Street Food", "Kaiseki"],
        },
    ),
    (
        "Sydney",
        StaticBundle {
            attractions: &["Sydney Opera House", "Harbour Bridge", "Bondi Beach", "Royal Botanic Gardens", "Taronga Zoo"],
            activities: &["Beach Activities", "Harbor Cruises", "Hiking", "Wildlife Watching", "Water Sports"],
            cuisine: &["Seafood", "BBQ", "Australian Wine", "Coffee Culture", "Modern Australian"],
        },
    ),
    (
        "Tel Aviv",
        StaticBundle {
            attractions: &["Old Jaffa", "Tel Aviv Beaches", "Carmel Market", "Rothschild Boulevard", "Tel Aviv Museum of Art"],
            activities: &["Beach Activities", "Nightlife", "Food Tours", "Bike Tours", "Street Art Tours"],
            cuisine: &["Hummus & Falafel", "Shakshuka", "Fresh Seafood", "Israeli Wine", "Street Food"],
        },
    ),
    (
        "Jerusalem",
        StaticBundle {
            attractions: &["Old City", "Western Wall", "Church of the Holy Sepulchre", "Dome of the Rock", "Mount of Olives"],
            activities: &["Historical Tours", "Religious Sites", "Market Visits", "Museum Tours", "Cultural Experiences"],
            cuisine: &["Middle Eastern Cuisine", "Traditional Dishes", "Street Food", "Local Markets", "Kosher Restaurants"],
        },
    ),
];

const COUNTRY_TABLE: &[(&str, StaticBundle)] = &[
    (
        "France",
        StaticBundle {
            attractions: &["Eiffel Tower", "Louvre Museum", "Notre-Dame Cathedral", "Mont Saint-Michel", "Palace of Versailles"],
            activities: &["Wine tasting in Bordeaux", "Skiing in the Alps", "Exploring Provence", "Cruise on the Seine", "Visit French Riviera"],
            cuisine: &["Croissants & Pastries", "French Wine", "Cheese Tasting", "Fine Dining", "Street Food Markets"],
        },
    ),
    (
        "Japan",
        StaticBundle {
            attractions: &["Mount Fuji", "Tokyo Skytree", "Fushimi Inari Shrine", "Hiroshima Peace Memorial", "Osaka Castle"],
            activities: &["Cherry Blossom Viewing", "Onsen Hot Springs", "Temple Visits", "Anime & Manga Culture", "Traditional Tea Ceremony"],
            cuisine: &["Sushi & Sashimi", "Ramen", "Tempura", "Wagyu Beef", "Matcha & Green Tea"],
        },
    ),
    (
        "Italy",
        StaticBundle {
            attractions: &["Colosseum", "Leaning Tower of Pisa", "Venice Canals", "Vatican City", "Amalfi Coast"],
            activities: &["Gondola Rides", "Wine Tours in Tuscany", "Art Museum Visits", "Cooking Classes", "Coastal Hiking"],
            cuisine: &["Pizza & Pasta", "Gelato", "Italian Wine", "Espresso", "Regional Specialties"],
        },
    ),
    (
        "United States",
        StaticBundle {
            attractions: &["Statue of Liberty", "Grand Canyon", "Golden Gate Bridge", "Times Square", "Yellowstone National Park"],
            activities: &["National Park Hiking", "City Tours", "Beach Activities", "Museum Visits", "Road Trips"],
            cuisine: &["BBQ", "Burgers & Fries", "Regional Cuisines", "Food Trucks", "Farm-to-Table Dining"],
        },
    ),
    (
        "United Kingdom",
        StaticBundle {
            attractions: &["Big Ben", "Stonehenge", "Tower of London", "Edinburgh Castle", "Lake District"],
            activities: &["Pub Crawls", "Museum Tours", "Countryside Walks", "Theater Shows", "Historical Tours"],
            cuisine: &["Fish & Chips", "Afternoon Tea", "Sunday Roast", "Scottish Whisky", "Traditional Pubs"],
        },
    ),
    (
        "Spain",
        StaticBundle {
            attractions: &["Sagrada Familia", "Alhambra", "Park Güell", "Prado Museum", "Ibiza Beaches"],
            activities: &["Flamenco Shows", "Beach Activities", "Tapas Tours", "Architecture Tours", "Festival Visits"],
            cuisine: &["Tapas", "Paella", "Sangria", "Jamón Ibérico", "Churros"],
        },
    ),
    (
        "Australia",
        StaticBundle {
            attractions: &["Sydney Opera House", "Great Barrier Reef", "Uluru", "Great Ocean Road", "Bondi Beach"],
            activities: &["Snorkeling & Diving", "Wildlife Watching", "Beach Activities", "Outback Adventures", "Wine Tasting"],
            cuisine: &["BBQ & Grilled Meats", "Seafood", "Australian Wine", "Vegemite", "Modern Australian Cuisine"],
        },
    ),
    (
        "Brazil",
        StaticBundle {
            attractions: &["Christ the Redeemer", "Iguazu Falls", "Amazon Rainforest", "Copacabana Beach", "Salvador Historic Center"],
            activities: &["Carnival Experience", "Jungle Tours", "Beach Activities", "Samba Shows", "Wildlife Watching"],
            cuisine: &["Feijoada", "Churrasco", "Caipirinha", "Açaí", "Brazilian Coffee"],
        },
    ),
];

const REGION_TABLE: &[(&str, StaticBundle)] = &[
    (
        "Europe",
        StaticBundle {
            attractions: &["Historic Castles", "Medieval Towns", "Art Museums", "Cathedrals", "Scenic Countryside"],
            activities: &["City Walking Tours", "Museum Visits", "Cultural Festivals", "Mountain Hiking", "Beach Activities"],
            cuisine: &["Local Wines", "Traditional Dishes", "Street Food", "Fine Dining", "Regional Specialties"],
        },
    ),
    (
        "Asia",
        StaticBundle {
            attractions: &["Ancient Temples", "Modern Skyscrapers", "Historic Sites", "Natural Landscapes", "Cultural Districts"],
            activities: &["Temple Visits", "Street Food Tours", "Shopping", "Traditional Performances", "Nature Excursions"],
            cuisine: &["Local Street Food", "Traditional Cuisine", "Tea Culture", "Spicy Dishes", "Regional Flavors"],
        },
    ),
    (
        "Americas",
        StaticBundle {
            attractions: &["National Parks", "Historic Cities", "Natural Wonders", "Beaches", "Cultural Sites"],
            activities: &["Outdoor Adventures", "City Tours", "Beach Activities", "Wildlife Watching", "Cultural Experiences"],
            cuisine: &["Local Specialties", "Street Food", "Regional Cuisine", "Traditional Dishes", "Local Beverages"],
        },
    ),
    (
        "Africa",
        StaticBundle {
            attractions: &["Wildlife Reserves", "Historic Sites", "Natural Landscapes", "Cultural Villages", "Coastal Areas"],
            activities: &["Safari Tours", "Wildlife Watching", "Cultural Tours", "Beach Activities", "Adventure Sports"],
            cuisine: &["Traditional Dishes", "Local Spices", "Street Food", "Regional Specialties", "Local Beverages"],
        },
    ),
    (
        "Oceania",
        StaticBundle {
            attractions: &["Natural Landscapes", "Beaches", "Islands", "National Parks", "Cultural Sites"],
            activities: &["Beach Activities", "Water Sports", "Wildlife Watching", "Hiking", "Island Hopping"],
            cuisine: &["Seafood", "Local Specialties", "Fresh Produce", "Regional Cuisine", "Beachside Dining"],
        },
    ),
];

/// Used when the region is missing or unrecognised
pub const GENERIC: StaticBundle = StaticBundle {
    attractions: &["Local Attractions", "Historic Sites", "Natural Landscapes", "Cultural Centers", "Scenic Views"],
    activities: &["City Tours", "Cultural Experiences", "Local Activities", "Nature Excursions", "Shopping"],
    cuisine: &["Local Cuisine", "Traditional Dishes", "Street Food", "Regional Specialties", "Local Beverages"],
};

pub static CITIES: LazyLock<HashMap<&'static str, StaticBundle>> =
    LazyLock::new(|| CITY_TABLE.iter().copied().collect());

pub static COUNTRIES: LazyLock<HashMap<&'static str, StaticBundle>> =
    LazyLock::new(|| COUNTRY_TABLE.iter().copied().collect());

pub static REGION_BUNDLES: LazyLock<HashMap<&'static str, StaticBundle>> =
    LazyLock::new(|| REGION_TABLE.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_three_non_empty_lists() {
        let all = CITY_TABLE
            .iter()
            .chain(COUNTRY_TABLE)
            .chain(REGION_TABLE)
            .map(|(_, bundle)| bundle)
            .chain(std::iter::once(&GENERIC));
        for bundle in all {
            assert!(!bundle.attractions.is_empty());
            assert!(!bundle.activities.is_empty());
            assert!(!bundle.cuisine.is_empty());
        }
    }

    #[test]
    fn test_every_region_has_a_bundle() {
        for region in REGIONS {
            assert!(REGION_BUNDLES.contains_key(region), "missing {region}");
        }
        assert_eq!(REGION_BUNDLES.len(), REGIONS.len());
    }

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(CITIES.len(), CITY_TABLE.len());
        assert_eq!(COUNTRIES.len(), COUNTRY_TABLE.len());
    }
}
