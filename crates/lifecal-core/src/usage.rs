//! Usage statistics.
//!
//! Counts working days consumed by vacation-like categories, and weekends
//! and holidays inside arbitrary ranges.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{date_range, is_weekend};
use crate::models::{Category, CategorySet, DayCounts, PERSONAL_DAYS, VACATIONS};

/// A maximal run of consecutive calendar days, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRun {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        date_range(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.days().count()
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Count weekend days and holidays from `start` to `end` inclusive.
///
/// The counters are independent: a holiday on a Saturday counts toward both.
///
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use lifecal_core::usage::count_weekends_and_holidays;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
/// let holidays = BTreeSet::from([d(5)]);
/// let counts = count_weekends_and_holidays(d(1), d(7), &holidays);
///
/// assert_eq!(counts.weekends, 2);
/// assert_eq!(counts.holidays, 1);
/// ```
pub fn count_weekends_and_holidays(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
) -> DayCounts {
    date_range(start, end).fold(DayCounts::default(), |mut counts, date| {
        if is_weekend(date) {
            counts.weekends += 1;
        }
        if holidays.contains(&date) {
            counts.holidays += 1;
        }
        counts
    })
}

/// Group ascending dates into maximal runs of consecutive days.
///
/// A run breaks whenever the next date is not exactly one day after the
/// previous one. Input must be sorted ascending.
pub fn continuous_ranges(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<DateRun> {
    let mut runs: Vec<DateRun> = Vec::new();

    for date in dates {
        match runs.last_mut() {
            Some(run) if run.end.succ_opt() == Some(date) => run.end = date,
            Some(run) if run.end == date => {}
            _ => runs.push(DateRun {
                start: date,
                end: date,
            }),
        }
    }

    runs
}

/// Working days consumed by `category` in `year`.
///
/// Days that are weekends or holidays are not counted even when they sit
/// inside a run of the category. A missing category uses no days.
pub fn working_days_used(
    category: Option<&Category>,
    holidays: &BTreeSet<NaiveDate>,
    year: i32,
) -> usize {
    let Some(category) = category else {
        return 0;
    };

    let in_year = category.dates.iter().copied().filter(|date| date.year() == year);

    continuous_ranges(in_year)
        .iter()
        .map(|run| {
            run.days()
                .filter(|date| !is_weekend(*date) && !holidays.contains(date))
                .count()
        })
        .sum()
}

/// Leave actually taken in a year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    pub vacation_days: usize,
    pub personal_days: usize,
}

impl UsageSummary {
    /// Working days used by `vacations` and `personal_days`, net of
    /// `public_holidays` and weekends.
    pub fn for_set(set: &CategorySet) -> Self {
        let holidays = set.holidays();
        Self {
            vacation_days: working_days_used(set.get(VACATIONS), holidays, set.year),
            personal_days: working_days_used(set.get(PERSONAL_DAYS), holidays, set.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryEntry, CategoryKind, PUBLIC_HOLIDAYS};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vacations(dates: &[NaiveDate]) -> Category {
        Category::from_dates(
            VACATIONS,
            CategoryKind::Custom(VACATIONS.to_string()),
            dates.iter().copied(),
        )
    }

    #[test]
    fn weekday_vacation_uses_every_day() {
        let category = vacations(&[date(2024, 6, 3), date(2024, 6, 4), date(2024, 6, 5)]);
        assert_eq!(working_days_used(Some(&category), &BTreeSet::new(), 2024), 3);
    }

    #[test]
    fn weekend_inside_vacation_is_free() {
        let category = vacations(&[
            date(2024, 6, 1),
            date(2024, 6, 2),
            date(2024, 6, 3),
            date(2024, 6, 4),
            date(2024, 6, 5),
        ]);
        assert_eq!(working_days_used(Some(&category), &BTreeSet::new(), 2024), 3);

        let runs = continuous_ranges(category.dates.iter().copied());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 5);
    }

    #[test]
    fn holiday_inside_vacation_is_free() {
        let category = vacations(&[date(2024, 12, 24), date(2024, 12, 25), date(2024, 12, 26)]);
        let holidays = BTreeSet::from([date(2024, 12, 25), date(2024, 12, 26)]);
        assert_eq!(working_days_used(Some(&category), &holidays, 2024), 1);
    }

    #[test]
    fn other_years_are_ignored() {
        let category = vacations(&[date(2023, 12, 29), date(2024, 1, 2)]);
        assert_eq!(working_days_used(Some(&category), &BTreeSet::new(), 2024), 1);
    }

    #[test]
    fn empty_or_missing_category_uses_nothing() {
        assert_eq!(working_days_used(None, &BTreeSet::new(), 2024), 0);
        assert_eq!(working_days_used(Some(&vacations(&[])), &BTreeSet::new(), 2024), 0);
    }

    #[test]
    fn runs_break_on_gaps() {
        let runs = continuous_ranges([
            date(2024, 2, 28),
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2024, 3, 4),
        ]);
        assert_eq!(
            runs,
            vec![
                DateRun {
                    start: date(2024, 2, 28),
                    end: date(2024, 3, 1),
                },
                DateRun {
                    start: date(2024, 3, 4),
                    end: date(2024, 3, 4),
                },
            ]
        );
        assert!(continuous_ranges(Vec::<NaiveDate>::new()).is_empty());
    }

    #[test]
    fn weekend_and_holiday_counts_are_independent() {
        let holidays = BTreeSet::from([date(2024, 6, 5)]);
        let counts = count_weekends_and_holidays(date(2024, 6, 1), date(2024, 6, 7), &holidays);
        assert_eq!(
            counts,
            DayCounts {
                weekends: 2,
                holidays: 1
            }
        );

        // Two full weekends in 2024-06-01..=2024-06-09
        let counts = count_weekends_and_holidays(date(2024, 6, 1), date(2024, 6, 9), &holidays);
        assert_eq!(
            counts,
            DayCounts {
                weekends: 4,
                holidays: 1
            }
        );

        // A holiday on a Saturday counts twice
        let holidays = BTreeSet::from([date(2024, 6, 1)]);
        let counts = count_weekends_and_holidays(date(2024, 6, 1), date(2024, 6, 1), &holidays);
        assert_eq!(
            counts,
            DayCounts {
                weekends: 1,
                holidays: 1
            }
        );
    }

    #[test]
    fn summary_for_set() {
        let mut set = CategorySet::new(2024);
        set.insert(
            Category::from_entries(
                VACATIONS,
                None,
                vec![CategoryEntry::new(date(2024, 12, 23), date(2024, 12, 27), "Winter")],
            )
            .unwrap(),
        );
        set.insert(
            Category::from_entries(
                PUBLIC_HOLIDAYS,
                None,
                vec![CategoryEntry::new(date(2024, 12, 25), date(2024, 12, 26), "Christmas")],
            )
            .unwrap(),
        );

        let summary = UsageSummary::for_set(&set);
        assert_eq!(summary.vacation_days, 3);
        assert_eq!(summary.personal_days, 0);
    }
}
