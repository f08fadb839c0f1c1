//! Calendar windows used by the spending caps.
//!
//! Weeks start on Sunday and week 1 is the week containing January 1, so
//! the days before the first Sunday of a year form a (short) week 1. A
//! week number alone repeats every year, which is why the week cap keys
//! on [`WeekKey`] (year and week together).

use chrono::{Datelike, NaiveDate};

/// Week of the year, 1-based, Sunday-first, week 1 contains January 1
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    // Weekday of January 1, counted from Sunday
    let jan1_offset = (weekday + 7 - ordinal0 % 7) % 7;

    (ordinal0 + jan1_offset) / 7 + 1
}

/// Compound key identifying one calendar week
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            week: week_of_year(date),
        }
    }
}

/// Compound key identifying one calendar month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_first_is_week_one() {
        for year in 2018..2030 {
            assert_eq!(week_of_year(ymd(year, 1, 1)), 1, "year {year}");
        }
    }

    #[test]
    fn test_weeks_start_on_sunday() {
        // 2024-01-01 is a Monday
        assert_eq!(week_of_year(ymd(2024, 1, 6)), 1); // Saturday
        assert_eq!(week_of_year(ymd(2024, 1, 7)), 2); // Sunday
        assert_eq!(week_of_year(ymd(2024, 1, 13)), 2);
        assert_eq!(week_of_year(ymd(2024, 1, 14)), 3);

        // 2023-01-01 is itself a Sunday
        assert_eq!(week_of_year(ymd(2023, 1, 7)), 1);
        assert_eq!(week_of_year(ymd(2023, 1, 8)), 2);
    }

    #[test]
    fn test_year_end_week() {
        assert_eq!(week_of_year(ymd(2022, 12, 31)), 53);
        assert_eq!(week_of_year(ymd(2024, 12, 31)), 53);
    }

    #[test]
    fn test_week_key_includes_year() {
        // Same week number, one year apart
        let a = ymd(2023, 1, 10);
        let b = ymd(2024, 1, 10);
        assert_eq!(week_of_year(a), week_of_year(b));
        assert_ne!(WeekKey::of(a), WeekKey::of(b));

        // A Sunday-week straddling New Year splits into two keys
        assert_ne!(WeekKey::of(ymd(2024, 12, 31)), WeekKey::of(ymd(2025, 1, 1)));
    }

    #[test]
    fn test_month_key() {
        assert_eq!(MonthKey::of(ymd(2024, 3, 1)), MonthKey::of(ymd(2024, 3, 31)));
        assert_ne!(MonthKey::of(ymd(2024, 3, 1)), MonthKey::of(ymd(2025, 3, 1)));
        assert_ne!(MonthKey::of(ymd(2024, 3, 31)), MonthKey::of(ymd(2024, 4, 1)));
    }
}
