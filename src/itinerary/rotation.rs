//! Slot selection by day index
//!
//! Each list is rotated independently with `index mod len`, so short lists
//! cycle through the trip instead of repeating one entry.

/// Activities containing any of these are suitable for good weather
pub const OUTDOOR_KEYWORDS: [&str; 6] = ["hiking", "beach", "walking", "outdoor", "safari", "water"];

/// Activities containing any of these work in any weather
pub const INDOOR_KEYWORDS: [&str; 6] = ["museum", "theater", "cooking", "shopping", "temple", "indoor"];

pub const MORNING_FALLBACK: &str = "Explore local area";
pub const EVENING_FALLBACK: &str = "Evening stroll or local entertainment";

/// Entry at `index mod len`, `None` for an empty list
#[must_use]
pub fn rotate<S: AsRef<str>>(labels: &[S], index: usize) -> Option<&str> {
    if labels.is_empty() {
        None
    } else {
        Some(labels[index % labels.len()].as_ref())
    }
}

/// Case-insensitive substring match against a keyword list
#[must_use]
pub fn matches_any(label: &str, keywords: &[&str]) -> bool {
    let label = label.to_lowercase();
    keywords.iter().any(|keyword| label.contains(keyword))
}

/// Activities split by weather suitability. An activity matching neither
/// keyword list appears only in `all`; one matching both appears in both.
#[derive(Debug, Clone)]
pub struct ActivityPartitions<'a> {
    pub all: &'a [String],
    pub outdoor: Vec<&'a str>,
    pub indoor: Vec<&'a str>,
}

impl<'a> ActivityPartitions<'a> {
    #[must_use]
    pub fn new(activities: &'a [String]) -> Self {
        let pick = |keywords: &[&str]| {
            activities
                .iter()
                .map(String::as_str)
                .filter(|activity| matches_any(activity, keywords))
                .collect::<Vec<_>>()
        };
        Self {
            all: activities,
            outdoor: pick(&OUTDOOR_KEYWORDS),
            indoor: pick(&INDOOR_KEYWORDS),
        }
    }

    /// Outdoor if the weather allows, then indoor, then any activity
    #[must_use]
    pub fn morning(&self, day: usize, good_weather: bool) -> &str {
        if good_weather {
            if let Some(outdoor) = rotate(&self.outdoor, day) {
                return outdoor;
            }
        }
        rotate(&self.indoor, day)
            .or_else(|| rotate(self.all, day))
            .unwrap_or(MORNING_FALLBACK)
    }

    /// The next outdoor activity after the morning one, in good weather only
    #[must_use]
    pub fn afternoon_outdoor(&self, day: usize, good_weather: bool) -> Option<&str> {
        if good_weather {
            rotate(&self.outdoor, day + 1)
        } else {
            None
        }
    }

    #[must_use]
    pub fn evening(&self, day: usize) -> &str {
        rotate(&self.indoor, day + 2).unwrap_or(EVENING_FALLBACK)
    }
}
