//! # lifecal-core
//!
//! Day classification and vacation opportunity engine.
//!
//! A year's data is a [`CategorySet`]: named sets of dates such as
//! `vacations`, `public_holidays` or `personal_days`, each with optional
//! labeled ranges. The library
//!
//! - layers calendar-derived categories (weekends, ISO-week parity, today)
//!   over the loaded data,
//! - assigns every day of the year a single winning category by priority,
//! - counts the working days actually consumed by leave,
//! - finds natural breaks of three or more non-working days that no plan
//!   covers yet.
//!
//! All operations are pure functions over an immutable [`CategorySet`];
//! the evaluation date is passed in explicitly.
//!
//! ## Example
//!
//! ```rust
//! use lifecal_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let holidays = vec![CategoryEntry::new(
//!     NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
//!     "Whit Monday",
//! )];
//! let mut base = CategorySet::new(2024);
//! base.insert(Category::from_entries("public_holidays", None, holidays).unwrap());
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
//! let set = with_synthetic(&base, today);
//!
//! let priorities = CategoryPriority::default()
//!     .with_priority("public_holidays", 1)
//!     .with_priority("weekends", 2);
//! let days = classify_year(&set, &priorities);
//! let monday = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
//! assert_eq!(days[&monday].category, "public_holidays");
//!
//! let plan = plan_year(&set).unwrap();
//! assert_eq!(plan.potential_vacations[0].total_days, 3);
//! ```

pub mod calendar;
pub mod error;
pub mod models;
pub mod opportunity;
pub mod parse;
pub mod priority;
pub mod resolve;
pub mod synthetic;
pub mod tz;
pub mod usage;

// Re-export commonly used types at the crate root
pub use error::{LifecalError, Result};
pub use models::{
    Category, CategoryEntry, CategoryKind, CategorySet, DayCounts, DayInfo, LabeledCategory,
    PotentialVacation, VacationPlan, YearPlan,
};
pub use opportunity::{existing_plans, find_potential_vacations, plan_year};
pub use parse::{EntryRecord, parse_date, parse_entry};
pub use priority::{CategoryPriority, CategoryStyle, DEFAULT_PRIORITY};
pub use resolve::{category_day_counts, classify_day, classify_year};
pub use synthetic::with_synthetic;
pub use usage::{UsageSummary, count_weekends_and_holidays, working_days_used};

/// Prelude module for convenient imports.
///
/// ```
/// use lifecal_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{LifecalError, Result};
    pub use crate::models::*;
    pub use crate::opportunity::{existing_plans, find_potential_vacations, plan_year};
    pub use crate::parse::{EntryRecord, parse_date, parse_entry};
    pub use crate::priority::{CategoryPriority, CategoryStyle, DEFAULT_PRIORITY};
    pub use crate::resolve::{category_day_counts, classify_day, classify_year};
    pub use crate::synthetic::with_synthetic;
    pub use crate::tz::{parse_tz, today_in};
    pub use crate::usage::{UsageSummary, count_weekends_and_holidays, working_days_used};
}
