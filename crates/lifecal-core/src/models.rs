//! Core data types for lifecal.
//!
//! This module defines the primary types used throughout the library:
//! - [`CategoryKind`] - What a category represents (synthetic or user data)
//! - [`CategoryEntry`] - A labeled inclusive date range
//! - [`Category`] - A named set of dates plus its entries
//! - [`CategorySet`] - All categories of one year
//! - [`DayInfo`] - The winning category of one date
//! - [`VacationPlan`] / [`PotentialVacation`] / [`YearPlan`] - Plan export records

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::date_range;
use crate::error::{LifecalError, Result};

/// Category holding vacation days.
pub const VACATIONS: &str = "vacations";
/// Category holding personal days off.
pub const PERSONAL_DAYS: &str = "personal_days";
/// Category holding public holidays.
pub const PUBLIC_HOLIDAYS: &str = "public_holidays";

/// Label given to entries that carry neither a label nor a description.
pub const DEFAULT_LABEL: &str = "Event";

/// What a category represents.
///
/// The calendar-derived kinds are a closed set; anything loaded from user
/// data that is not a plan is [`CategoryKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Free-form plans.
    Plan,
    /// Saturdays and Sundays.
    Weekends,
    /// Days in an odd ISO week.
    OddWeek,
    /// Days in an even ISO week.
    EvenWeek,
    /// Today, when it falls in the year.
    CurrentDay,
    /// User-defined kind such as `vacations` or `public_holidays`.
    Custom(String),
}

impl CategoryKind {
    /// Map a category name to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "plans" => CategoryKind::Plan,
            "weekends" => CategoryKind::Weekends,
            "odd_week" => CategoryKind::OddWeek,
            "even_week" => CategoryKind::EvenWeek,
            "current_day" => CategoryKind::CurrentDay,
            other => CategoryKind::Custom(other.to_string()),
        }
    }

    /// Canonical name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryKind::Plan => "plans",
            CategoryKind::Weekends => "weekends",
            CategoryKind::OddWeek => "odd_week",
            CategoryKind::EvenWeek => "even_week",
            CategoryKind::CurrentDay => "current_day",
            CategoryKind::Custom(name) => name,
        }
    }

    /// Returns true for kinds computed from the calendar alone.
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            CategoryKind::Weekends
                | CategoryKind::OddWeek
                | CategoryKind::EvenWeek
                | CategoryKind::CurrentDay
        )
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled, inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl CategoryEntry {
    pub fn new(start: NaiveDate, end: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Returns true when the entry carries a label of its own.
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty() && self.label != DEFAULT_LABEL
    }

    /// Number of days covered, both ends included.
    pub fn total_days(&self) -> usize {
        date_range(self.start, self.end).count()
    }
}

/// A named set of calendar dates with optional labeled entries.
///
/// Every day of every entry is in `dates`. `dates` may hold days that belong
/// to no entry, which is how synthetic categories look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub kind: CategoryKind,
    pub description: Option<String>,
    pub dates: BTreeSet<NaiveDate>,
    pub entries: Vec<CategoryEntry>,
}

impl Category {
    /// Build a category from entries, expanding each into its days.
    ///
    /// Fails with [`LifecalError::InvalidRange`] if an entry ends before it
    /// starts.
    pub fn from_entries(
        name: impl Into<String>,
        description: Option<String>,
        entries: Vec<CategoryEntry>,
    ) -> Result<Self> {
        let name = name.into();
        let mut dates = BTreeSet::new();

        for entry in &entries {
            if entry.end < entry.start {
                return Err(LifecalError::InvalidRange {
                    start: entry.start,
                    end: entry.end,
                });
            }
            dates.extend(date_range(entry.start, entry.end));
        }

        Ok(Self {
            kind: CategoryKind::from_name(&name),
            name,
            description,
            dates,
            entries,
        })
    }

    /// Build an entry-less category from a set of dates.
    pub fn from_dates(
        name: impl Into<String>,
        kind: CategoryKind,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            dates: dates.into_iter().collect(),
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Entries that carry their own label.
    pub fn labeled_entries(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter().filter(|entry| entry.is_labeled())
    }
}

/// A category with at least one labeled entry, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCategory {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub entries: Vec<CategoryEntry>,
}

/// All categories of one year, keyed by name.
///
/// Categories are kept in name order, so every walk over the set is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    pub year: i32,
    categories: BTreeMap<String, Category>,
}

impl CategorySet {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            categories: BTreeMap::new(),
        }
    }

    /// Insert a category, replacing and returning any previous one of the same name.
    pub fn insert(&mut self, category: Category) -> Option<Category> {
        self.categories.insert(category.name.clone(), category)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Dates of the named category; empty when the category is absent.
    pub fn dates_of(&self, name: &str) -> &BTreeSet<NaiveDate> {
        static EMPTY: BTreeSet<NaiveDate> = BTreeSet::new();
        self.categories
            .get(name)
            .map(|category| &category.dates)
            .unwrap_or(&EMPTY)
    }

    /// Dates of the `public_holidays` category.
    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        self.dates_of(PUBLIC_HOLIDAYS)
    }

    /// Categories that have labeled entries, sorted by display name.
    pub fn labeled_categories(&self) -> Vec<LabeledCategory> {
        let mut labeled: Vec<LabeledCategory> = self
            .iter()
            .filter_map(|category| {
                let entries: Vec<CategoryEntry> = category.labeled_entries().cloned().collect();
                if entries.is_empty() {
                    return None;
                }
                Some(LabeledCategory {
                    name: category.name.clone(),
                    display_name: category.name.replace('_', " "),
                    description: category.description.clone(),
                    entries,
                })
            })
            .collect();

        labeled.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        labeled
    }
}

/// The winning category of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    pub category: String,
    pub priority: i32,
}

/// Weekend and holiday counts inside a date range. A day may count toward both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    pub weekends: usize,
    pub holidays: usize,
}

/// An existing labeled entry with its weekend and holiday counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationPlan {
    /// First day, `YYYY-MM-DD`.
    pub date_start: String,
    /// Last day (inclusive), `YYYY-MM-DD`.
    pub date_end: String,
    pub label: String,
    pub weekend_count: usize,
    pub holiday_count: usize,
    pub total_days: usize,
}

/// A run of three or more non-working days not covered by any plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotentialVacation {
    /// First day, `YYYY-MM-DD`.
    pub date_start: String,
    /// Last day (inclusive), `YYYY-MM-DD`.
    pub date_end: String,
    pub weekend_count: usize,
    pub holiday_count: usize,
    pub total_days: usize,
    pub description: String,
}

/// Existing and potential vacations of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearPlan {
    pub year: i32,
    pub existing_vacations: Vec<VacationPlan>,
    pub potential_vacations: Vec<PotentialVacation>,
}
