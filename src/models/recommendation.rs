//! Recommendation bundle model

use serde::{Deserialize, Serialize};

/// Attractions, activities and cuisine for a destination.
///
/// Order matters: the itinerary planner rotates through each list by day index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    #[serde(default)]
    pub attractions: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub cuisine: Vec<String>,
}

impl RecommendationBundle {
    #[must_use]
    pub fn new<S: Into<String>>(
        attractions: impl IntoIterator<Item = S>,
        activities: impl IntoIterator<Item = S>,
        cuisine: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            attractions: attractions.into_iter().map(Into::into).collect(),
            activities: activities.into_iter().map(Into::into).collect(),
            cuisine: cuisine.into_iter().map(Into::into).collect(),
        }
    }

    /// True when all three lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty() && self.activities.is_empty() && self.cuisine.is_empty()
    }
}
