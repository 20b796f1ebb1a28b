//! Day classification.
//!
//! Every date of a year is assigned at most one category: the one with the
//! smallest priority among all categories containing the date. Ties go to
//! the lexicographically smallest category name.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::year_days;
use crate::models::{CategorySet, DayInfo};
use crate::priority::CategoryPriority;

/// Classify a single date.
///
/// Returns `None` when no category contains `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lifecal_core::models::CategorySet;
/// use lifecal_core::priority::CategoryPriority;
/// use lifecal_core::resolve::classify_day;
/// use lifecal_core::synthetic::with_synthetic;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let set = with_synthetic(&CategorySet::new(2024), today);
/// let priorities = CategoryPriority::default().with_priority("weekends", 1);
///
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// let info = classify_day(&set, &priorities, saturday).unwrap();
/// assert_eq!(info.category, "weekends");
/// assert_eq!(info.priority, 1);
/// ```
pub fn classify_day(
    set: &CategorySet,
    priorities: &CategoryPriority,
    date: NaiveDate,
) -> Option<DayInfo> {
    // Categories come in name order, so keeping the first strict minimum
    // breaks ties by name.
    let mut winner: Option<DayInfo> = None;

    for category in set.iter().filter(|category| category.contains(date)) {
        let priority = priorities.priority(&category.name);
        if winner.as_ref().is_none_or(|best| priority < best.priority) {
            winner = Some(DayInfo {
                category: category.name.clone(),
                priority,
            });
        }
    }

    winner
}

/// Classify every date of the set's year.
///
/// Dates contained in no category are absent from the result. Dates of
/// other years that happen to be in a category's date-set are ignored.
pub fn classify_year(
    set: &CategorySet,
    priorities: &CategoryPriority,
) -> BTreeMap<NaiveDate, DayInfo> {
    let days: BTreeMap<NaiveDate, DayInfo> = year_days(set.year)
        .filter_map(|date| classify_day(set, priorities, date).map(|info| (date, info)))
        .collect();

    debug!(
        year = set.year,
        categories = set.len(),
        classified = days.len(),
        "classified year"
    );

    days
}

/// Number of days won by each category.
pub fn category_day_counts(days: &BTreeMap<NaiveDate, DayInfo>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for info in days.values() {
        *counts.entry(info.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryEntry, CategoryKind};
    use crate::priority::DEFAULT_PRIORITY;
    use crate::synthetic::with_synthetic;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn category(name: &str, start: NaiveDate, end: NaiveDate) -> Category {
        Category::from_entries(name, None, vec![CategoryEntry::new(start, end, "x")]).unwrap()
    }

    fn sample_set() -> CategorySet {
        let mut base = CategorySet::new(2024);
        base.insert(category("vacations", date(2024, 7, 1), date(2024, 7, 14)));
        base.insert(category("public_holidays", date(2024, 1, 1), date(2024, 1, 1)));
        base.insert(category("personal_days", date(2024, 7, 10), date(2024, 7, 10)));
        with_synthetic(&base, date(2024, 7, 3))
    }

    fn sample_priorities() -> CategoryPriority {
        CategoryPriority::default()
            .with_priority("current_day", 0)
            .with_priority("public_holidays", 1)
            .with_priority("personal_days", 2)
            .with_priority("vacations", 3)
            .with_priority("weekends", 4)
    }

    #[test]
    fn lowest_priority_wins() {
        let set = sample_set();
        let priorities = sample_priorities();

        // Saturday inside the vacation
        let info = classify_day(&set, &priorities, date(2024, 7, 6)).unwrap();
        assert_eq!(info.category, "vacations");
        assert_eq!(info.priority, 3);

        let info = classify_day(&set, &priorities, date(2024, 7, 10)).unwrap();
        assert_eq!(info.category, "personal_days");

        let info = classify_day(&set, &priorities, date(2024, 7, 3)).unwrap();
        assert_eq!(info.category, "current_day");

        let info = classify_day(&set, &priorities, date(2024, 1, 1)).unwrap();
        assert_eq!(info.category, "public_holidays");
    }

    #[test]
    fn unconfigured_categories_still_win_alone() {
        let set = with_synthetic(&CategorySet::new(2024), date(2030, 1, 1));
        let priorities = CategoryPriority::default();

        // A Tuesday in ISO week 1 is only in odd_week, which has no configured priority
        let info = classify_day(&set, &priorities, date(2024, 1, 2)).unwrap();
        assert_eq!(info.category, "odd_week");
        assert_eq!(info.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn ties_break_by_name() {
        let mut set = CategorySet::new(2024);
        set.insert(category("zeta", date(2024, 5, 1), date(2024, 5, 3)));
        set.insert(category("alpha", date(2024, 5, 2), date(2024, 5, 4)));
        let priorities = CategoryPriority::default()
            .with_priority("zeta", 5)
            .with_priority("alpha", 5);

        let winner = |day| {
            classify_day(&set, &priorities, date(2024, 5, day))
                .unwrap()
                .category
        };
        assert_eq!(winner(1), "zeta");
        assert_eq!(winner(2), "alpha");
        assert_eq!(winner(4), "alpha");
    }

    #[test]
    fn uncategorized_days_are_absent() {
        let mut set = CategorySet::new(2024);
        set.insert(category("vacations", date(2024, 7, 1), date(2024, 7, 2)));
        let days = classify_year(&set, &CategoryPriority::default());

        assert_eq!(days.len(), 2);
        assert!(days.contains_key(&date(2024, 7, 1)));
        assert!(!days.contains_key(&date(2024, 7, 3)));
    }

    #[test]
    fn classify_year_stays_inside_year() {
        let mut set = CategorySet::new(2024);
        set.insert(category("vacations", date(2023, 12, 30), date(2024, 1, 2)));
        let days = classify_year(&set, &CategoryPriority::default());

        assert_eq!(days.len(), 2);
        assert!(days.keys().all(|d| *d >= date(2024, 1, 1)));
    }

    #[test]
    fn every_date_obeys_priority_invariant() {
        let set = sample_set();
        let priorities = sample_priorities();
        let days = classify_year(&set, &priorities);

        // Synthetic parity covers every day
        assert_eq!(days.len(), 366);

        for (day, info) in &days {
            assert_eq!(priorities.priority(&info.category), info.priority);
            for category in set.iter().filter(|c| c.contains(*day)) {
                assert!(priorities.priority(&category.name) >= info.priority);
            }
        }
    }

    #[test]
    fn day_counts_per_category() {
        let mut set = CategorySet::new(2024);
        set.insert(Category::from_dates(
            "weekends",
            CategoryKind::Weekends,
            [date(2024, 1, 6), date(2024, 1, 7)],
        ));
        set.insert(category("vacations", date(2024, 1, 5), date(2024, 1, 6)));
        let priorities = CategoryPriority::default()
            .with_priority("vacations", 1)
            .with_priority("weekends", 2);

        let counts = category_day_counts(&classify_year(&set, &priorities));
        assert_eq!(counts.get("vacations"), Some(&2));
        assert_eq!(counts.get("weekends"), Some(&1));
    }
}
