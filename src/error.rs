//! Error types and handling for `Tripwise`

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for trip planning
#[derive(Error, Debug)]
pub enum TripError {
    /// End date is not after the start date
    #[error("Invalid date range: {end} is not after {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The requested trip exceeds the supported number of nights
    #[error("Trip of {nights} nights exceeds the maximum of {max}")]
    TripTooLong { nights: i64, max: u32 },

    /// Planning was requested without a destination
    #[error("No location selected")]
    MissingLocation,

    /// Neither curated, regional nor fallback recommendations could be found
    #[error("No recommendations available for {location}")]
    NoRecommendationsAvailable { location: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TripError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable name of the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            TripError::InvalidRange { .. } => "InvalidRange",
            TripError::TripTooLong { .. } => "TripTooLong",
            TripError::MissingLocation => "MissingLocation",
            TripError::NoRecommendationsAvailable { .. } => "NoRecommendationsAvailable",
            TripError::Validation { .. } => "Validation",
            TripError::Config { .. } => "Config",
        }
    }

    /// Whether the caller can fix this by changing the request
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            TripError::InvalidRange { .. }
                | TripError::TripTooLong { .. }
                | TripError::MissingLocation
                | TripError::Validation { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripError::InvalidRange { .. } => "End date must be after start date".to_string(),
            TripError::TripTooLong { max, .. } => {
                format!("Trip planner currently supports trips up to {max} nights")
            }
            TripError::MissingLocation => {
                "Please select a destination before planning a trip".to_string()
            }
            TripError::NoRecommendationsAvailable { .. } => {
                "Unable to load recommendations. Please try again.".to_string()
            }
            TripError::Validation { message } => format!("Invalid input: {message}"),
            TripError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripError::config("bad port");
        assert!(matches!(config_err, TripError::Config { .. }));

        let validation_err = TripError::validation("missing date");
        assert!(matches!(validation_err, TripError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let range = TripError::InvalidRange { start, end: start };
        assert_eq!(range.user_message(), "End date must be after start date");

        let too_long = TripError::TripTooLong { nights: 15, max: 14 };
        assert!(too_long.user_message().contains("up to 14 nights"));

        let validation_err = TripError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_user_correctable_kinds() {
        assert!(TripError::MissingLocation.is_user_correctable());
        assert!(TripError::TripTooLong { nights: 20, max: 14 }.is_user_correctable());
        assert!(
            !TripError::NoRecommendationsAvailable {
                location: "Atlantis".into()
            }
            .is_user_correctable()
        );
        assert_eq!(TripError::MissingLocation.kind(), "MissingLocation");
    }

    #[test]
    fn test_config_error_is_not_user_correctable() {
        let err = TripError::config("bad port");
        assert!(!err.is_user_correctable());
        assert_eq!(err.kind(), "Config");
        assert!(err.user_message().contains("config file"));
    }
}
