//! Expected-delivery-date estimation.

use chrono::{Duration, NaiveDate};
use shared::Species;

/// Gestation length in days for goats.
pub const GOAT_GESTATION_DAYS: i64 = 150;

/// Gestation length in days for sheep.
pub const SHEEP_GESTATION_DAYS: i64 = 147;

/// Estimate the delivery date for a mating on `mating_date`.
///
/// Pure day arithmetic, so month and year rollovers follow the calendar.
/// Callers with no recorded mating date must treat the expected delivery
/// date as absent rather than calling this.
pub fn estimate_delivery_date(mating_date: NaiveDate, species: Species) -> NaiveDate {
    let gestation = match species {
        Species::Goat => GOAT_GESTATION_DAYS,
        Species::Sheep => SHEEP_GESTATION_DAYS,
    };
    mating_date + Duration::days(gestation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_goat_gestation_crosses_year_boundary() {
        let due = estimate_delivery_date(date(2024, 12, 20), Species::Goat);
        assert_eq!(due, date(2025, 5, 19));
    }

    #[test]
    fn test_sheep_gestation_is_three_days_shorter() {
        let mating = date(2024, 12, 20);
        let goat_due = estimate_delivery_date(mating, Species::Goat);
        let sheep_due = estimate_delivery_date(mating, Species::Sheep);
        assert_eq!(sheep_due, date(2025, 5, 16));
        assert_eq!(goat_due - sheep_due, Duration::days(3));
    }

    #[test]
    fn test_offset_is_exact_day_count() {
        let mating = date(2023, 10, 5);
        let due = estimate_delivery_date(mating, Species::Goat);
        assert_eq!((due - mating).num_days(), GOAT_GESTATION_DAYS);
    }

    #[test]
    fn test_crosses_leap_february() {
        // 2024 is a leap year; the offset must count Feb 29 as a real day.
        let due = estimate_delivery_date(date(2023, 11, 1), Species::Sheep);
        assert_eq!((due - date(2023, 11, 1)).num_days(), SHEEP_GESTATION_DAYS);
        assert_eq!(due, date(2024, 3, 27));
    }
}
