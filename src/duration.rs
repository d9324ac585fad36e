//! Trip length calculation

use chrono::NaiveDate;
use tracing::debug;

use crate::{Result, TripError};

/// Longest trip the planner supports
pub const MAX_TRIP_NIGHTS: u32 = 14;

/// Number of nights between two calendar dates.
///
/// Calendar dates carry no time of day, so the day difference is already
/// whole. Rejects `end <= start` before checking the length cap.
pub fn nights(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    let days = end.signed_duration_since(start).num_days();
    debug!(%start, %end, days, "Calculated trip length");

    if days <= 0 {
        return Err(TripError::InvalidRange { start, end });
    }
    if days > i64::from(MAX_TRIP_NIGHTS) {
        return Err(TripError::TripTooLong {
            nights: days,
            max: MAX_TRIP_NIGHTS,
        });
    }

    u32::try_from(days).map_err(|_| TripError::TripTooLong {
        nights: days,
        max: MAX_TRIP_NIGHTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2025, 6, 1), date(2025, 6, 2), 1)]
    #[case(date(2025, 6, 1), date(2025, 6, 8), 7)]
    #[case(date(2024, 2, 28), date(2024, 3, 1), 2)]
    #[case(date(2025, 12, 30), date(2026, 1, 2), 3)]
    fn test_nights_counts_calendar_days(
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] expected: u32,
    ) {
        assert_eq!(nights(start, end).unwrap(), expected);
    }

    #[test]
    fn test_same_day_is_invalid_range() {
        let day = date(2025, 6, 1);
        assert!(matches!(nights(day, day), Err(TripError::InvalidRange { .. })));
    }

    #[test]
    fn test_end_before_start_is_invalid_range() {
        let result = nights(date(2025, 6, 10), date(2025, 6, 1));
        assert!(matches!(result, Err(TripError::InvalidRange { .. })));
    }

    #[test]
    fn test_fourteen_nights_allowed() {
        assert_eq!(nights(date(2025, 6, 1), date(2025, 6, 15)).unwrap(), 14);
    }

    #[test]
    fn test_fifteen_nights_too_long() {
        let result = nights(date(2025, 6, 1), date(2025, 6, 16));
        assert!(matches!(
            result,
            Err(TripError::TripTooLong { nights: 15, max: 14 })
        ));
    }
}
