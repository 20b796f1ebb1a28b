//! Calendar-derived categories.
//!
//! `weekends`, `odd_week`, `even_week` and `current_day` are computed from
//! the year alone and layered over the loaded data on every run. They are
//! never persisted.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::{is_weekend, iso_week, year_days};
use crate::models::{Category, CategoryKind, CategorySet};

/// Every Saturday and Sunday of `year`.
pub fn weekends(year: i32) -> Category {
    Category::from_dates(
        "weekends",
        CategoryKind::Weekends,
        year_days(year).filter(|date| is_weekend(*date)),
    )
}

/// Every day of `year` whose ISO week number is odd.
pub fn odd_weeks(year: i32) -> Category {
    Category::from_dates(
        "odd_week",
        CategoryKind::OddWeek,
        year_days(year).filter(|date| iso_week(*date) % 2 == 1),
    )
}

/// Every day of `year` whose ISO week number is even.
pub fn even_weeks(year: i32) -> Category {
    Category::from_dates(
        "even_week",
        CategoryKind::EvenWeek,
        year_days(year).filter(|date| iso_week(*date) % 2 == 0),
    )
}

/// `today` as a single-day category, or `None` when it is outside `year`.
pub fn current_day(year: i32, today: NaiveDate) -> Option<Category> {
    (today.year() == year)
        .then(|| Category::from_dates("current_day", CategoryKind::CurrentDay, [today]))
}

/// All synthetic categories of `year`.
pub fn synthetic_categories(year: i32, today: NaiveDate) -> Vec<Category> {
    let mut categories = vec![weekends(year), odd_weeks(year), even_weeks(year)];
    categories.extend(current_day(year, today));
    categories
}

/// Return a copy of `base` with the synthetic categories of its year added.
///
/// Synthetic categories replace any same-named category of `base`.
///
/// ```
/// use chrono::NaiveDate;
/// use lifecal_core::models::CategorySet;
/// use lifecal_core::synthetic::with_synthetic;
///
/// let base = CategorySet::new(2024);
/// let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
/// let set = with_synthetic(&base, today);
///
/// assert!(set.contains("weekends"));
/// assert!(set.contains("current_day"));
/// assert!(base.is_empty());
/// ```
pub fn with_synthetic(base: &CategorySet, today: NaiveDate) -> CategorySet {
    let mut set = base.clone();
    for category in synthetic_categories(base.year, today) {
        debug!(
            year = base.year,
            category = %category.name,
            days = category.dates.len(),
            "adding synthetic category"
        );
        if set.insert(category).is_some() {
            debug!(year = base.year, "replaced loaded category with synthetic one");
        }
    }
    set
}
