//! Calendar primitives.
//!
//! All dates are whole calendar days ([`NaiveDate`]). Weekends are fixed to
//! Saturday and Sunday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true if `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, unless also divisible by 400.
///
/// ```
/// use lifecal_core::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Every date of `year` in ascending order.
pub fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    first
        .zip(last)
        .into_iter()
        .flat_map(|(first, last)| date_range(first, last))
}

/// Every date from `start` to `end` inclusive. Empty when `end < start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ISO-8601 week number of `date`.
///
/// Near year boundaries the week may belong to the adjacent ISO year, e.g.
/// 2021-01-01 falls in week 53 of 2020.
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn month_lengths_sum_to_year_length() {
        for year in [1900, 2000, 2023, 2024] {
            let total: u32 = (1..=12).map(|m| days_in_month(year, m)).sum();
            assert_eq!(total, days_in_year(year));
        }
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn year_days_covers_whole_year() {
        let days: Vec<_> = year_days(2024).collect();
        assert_eq!(days.len(), 366);
        assert_eq!(days[0], date(2024, 1, 1));
        assert_eq!(days[365], date(2024, 12, 31));
        assert_eq!(year_days(1900).count(), 365);
        assert!(days.contains(&date(2024, 2, 29)));
    }

    #[test]
    fn date_range_is_inclusive() {
        let days: Vec<_> = date_range(date(2024, 6, 1), date(2024, 6, 3)).collect();
        assert_eq!(days, vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
        assert_eq!(date_range(date(2024, 6, 3), date(2024, 6, 1)).count(), 0);
    }

    #[test]
    fn weekend_detection() {
        // 2024-06-01 is a Saturday
        assert!(is_weekend(date(2024, 6, 1)));
        assert!(is_weekend(date(2024, 6, 2)));
        assert!(!is_weekend(date(2024, 6, 3)));
        assert!(!is_weekend(date(2024, 6, 7)));
    }

    #[test]
    fn iso_week_at_year_boundaries() {
        assert_eq!(iso_week(date(2024, 1, 1)), 1);
        assert_eq!(iso_week(date(2021, 1, 1)), 53);
        assert_eq!(iso_week(date(2024, 12, 30)), 1);
        assert_eq!(iso_week(date(2026, 12, 31)), 53);
    }
}
