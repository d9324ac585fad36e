//! Weather observation model and display methods

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TripError;

/// Coarse daily sky condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    /// Fixed cycle used by the synthetic forecast
    pub const CYCLE: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly-cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
        }
    }

    /// Standard description attached to each condition
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Clear sky",
            WeatherCondition::Rainy => "Light rain",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁️",
            WeatherCondition::Rainy => "🌧️",
        }
    }

    /// Sunny or partly cloudy: outdoor activities are preferred
    #[must_use]
    pub fn is_good(self) -> bool {
        matches!(self, WeatherCondition::Sunny | WeatherCondition::PartlyCloudy)
    }

    /// Map a free-text forecast summary ("Light rain", "Overcast clouds", ...)
    /// onto a condition: rain, then cloud, then clear. Anything else counts
    /// as partly cloudy.
    #[must_use]
    pub fn classify(summary: &str) -> Self {
        let summary = summary.to_lowercase();
        if summary.contains("rain") {
            WeatherCondition::Rainy
        } else if summary.contains("cloud") {
            WeatherCondition::Cloudy
        } else if summary.contains("clear") {
            WeatherCondition::Sunny
        } else {
            WeatherCondition::PartlyCloudy
        }
    }

    /// Canonical tag if `value` is one, otherwise a classified summary
    #[must_use]
    pub fn from_tag_or_summary(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| Self::classify(value))
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunny" => Ok(WeatherCondition::Sunny),
            "partly-cloudy" => Ok(WeatherCondition::PartlyCloudy),
            "cloudy" => Ok(WeatherCondition::Cloudy),
            "rainy" => Ok(WeatherCondition::Rainy),
            other => Err(TripError::validation(format!(
                "Unknown weather condition '{other}'. Must be one of: sunny, partly-cloudy, cloudy, rainy"
            ))),
        }
    }
}

fn default_temperature() -> i32 {
    WeatherObservation::FALLBACK_TEMPERATURE
}

fn default_description() -> String {
    WeatherCondition::Sunny.description().to_string()
}

/// Weather for a single trip day. Missing fields deserialize to
/// sunny / 20° / "Clear sky".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub condition: WeatherCondition,
    /// Temperature in Celsius
    #[serde(default = "default_temperature")]
    pub temperature: i32,
    #[serde(default = "default_description")]
    pub description: String,
}

impl WeatherObservation {
    pub const FALLBACK_TEMPERATURE: i32 = 20;

    /// Observation with the condition's standard description
    #[must_use]
    pub fn new(condition: WeatherCondition, temperature: i32) -> Self {
        Self {
            condition,
            temperature,
            description: condition.description().to_string(),
        }
    }

    /// Uniform stand-in for days without any forecast
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(WeatherCondition::Sunny, Self::FALLBACK_TEMPERATURE)
    }

    #[must_use]
    pub fn is_good_weather(&self) -> bool {
        self.condition.is_good()
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}

/// Condition-only observation at the fallback temperature
impl From<WeatherCondition> for WeatherObservation {
    fn from(condition: WeatherCondition) -> Self {
        Self::new(condition, Self::FALLBACK_TEMPERATURE)
    }
}

impl Default for WeatherObservation {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for WeatherObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.condition.icon(),
            self.format_temperature(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WeatherCondition::Sunny, true)]
    #[case(WeatherCondition::PartlyCloudy, true)]
    #[case(WeatherCondition::Cloudy, false)]
    #[case(WeatherCondition::Rainy, false)]
    fn test_good_weather(#[case] condition: WeatherCondition, #[case] good: bool) {
        assert_eq!(condition.is_good(), good);
    }

    #[rstest]
    #[case("Light rain", WeatherCondition::Rainy)]
    #[case("overcast clouds", WeatherCondition::Cloudy)]
    #[case("Partly cloudy", WeatherCondition::Cloudy)]
    #[case("Clear sky", WeatherCondition::Sunny)]
    #[case("Sunny spells", WeatherCondition::PartlyCloudy)]
    #[case("Fog", WeatherCondition::PartlyCloudy)]
    #[case("Rain clouds", WeatherCondition::Rainy)]
    fn test_classify_summary(#[case] summary: &str, #[case] expected: WeatherCondition) {
        assert_eq!(WeatherCondition::classify(summary), expected);
    }

    #[rstest]
    #[case("partly-cloudy", WeatherCondition::PartlyCloudy)]
    #[case("Sunny", WeatherCondition::Sunny)]
    #[case("Partly cloudy", WeatherCondition::Cloudy)]
    #[case("heavy rain", WeatherCondition::Rainy)]
    #[case("mist", WeatherCondition::PartlyCloudy)]
    fn test_tag_or_summary(#[case] value: &str, #[case] expected: WeatherCondition) {
        assert_eq!(WeatherCondition::from_tag_or_summary(value), expected);
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!("partly-cloudy".parse::<WeatherCondition>().unwrap(), WeatherCondition::PartlyCloudy);
        assert_eq!(" Rainy ".parse::<WeatherCondition>().unwrap(), WeatherCondition::Rainy);
        assert!("snowy".parse::<WeatherCondition>().is_err());
    }

    #[test]
    fn test_condition_serializes_kebab_case() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
    }

    #[test]
    fn test_observation_missing_fields_default() {
        let obs: WeatherObservation = serde_json::from_str("{}").unwrap();
        assert_eq!(obs, WeatherObservation::fallback());
        assert_eq!(obs.description, "Clear sky");

        let obs: WeatherObservation = serde_json::from_str(r#"{"condition":"rainy"}"#).unwrap();
        assert_eq!(obs.condition, WeatherCondition::Rainy);
        assert_eq!(obs.temperature, 20);
    }

    #[test]
    fn test_zero_temperature_is_kept() {
        // Only a missing temperature defaults; 0° is a real reading
        let obs: WeatherObservation =
            serde_json::from_str(r#"{"condition":"cloudy","temperature":0}"#).unwrap();
        assert_eq!(obs.temperature, 0);
    }

    #[test]
    fn test_new_uses_condition_description() {
        assert_eq!(WeatherObservation::new(WeatherCondition::Rainy, 15).description, "Light rain");
        assert_eq!(WeatherObservation::new(WeatherCondition::Cloudy, 15).description, "Cloudy");
        assert_eq!(
            WeatherObservation::new(WeatherCondition::PartlyCloudy, 15).description,
            "Partly cloudy"
        );
        assert_eq!(WeatherObservation::new(WeatherCondition::Sunny, 28).format_temperature(), "28°C");
    }
}
