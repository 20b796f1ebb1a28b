//! Vacation opportunity finder.
//!
//! Scans a year for runs of consecutive non-working days (weekends and
//! public holidays) that no existing plan already covers. Runs longer than
//! two days are natural breaks worth extending into a real vacation.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::calendar::{date_range, is_weekend, year_days};
use crate::error::Result;
use crate::models::{CategorySet, PotentialVacation, PUBLIC_HOLIDAYS, VacationPlan, YearPlan};
use crate::parse::{format_date, parse_date};
use crate::usage::count_weekends_and_holidays;

/// Runs of this many days or fewer are not reported.
const MIN_BREAK_EXCLUSIVE: usize = 2;

/// Find natural breaks in `year` that are not covered by `existing` plans.
///
/// Days of existing plans count as working days, so a plan splits any run
/// it touches. Results are in chronological order.
///
/// Fails with [`crate::LifecalError::InvalidDate`] if a plan's dates do not
/// parse; a partial exclusion set would silently corrupt the result.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use lifecal_core::opportunity::find_potential_vacations;
///
/// // Good Friday and Easter Monday 2024 around a weekend
/// let holidays = BTreeSet::from([
///     NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
/// ]);
/// let found = find_potential_vacations(2024, &holidays, &[]).unwrap();
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].date_start, "2024-03-29");
/// assert_eq!(found[0].date_end, "2024-04-01");
/// assert_eq!(found[0].total_days, 4);
/// ```
pub fn find_potential_vacations(
    year: i32,
    holidays: &BTreeSet<NaiveDate>,
    existing: &[VacationPlan],
) -> Result<Vec<PotentialVacation>> {
    let days: Vec<NaiveDate> = year_days(year).collect();
    let mut non_working: Vec<bool> = days
        .iter()
        .map(|date| is_weekend(*date) || holidays.contains(date))
        .collect();

    for plan in existing {
        let start = parse_date(&plan.date_start)?;
        let end = parse_date(&plan.date_end)?;
        for date in date_range(start, end).filter(|date| date.year() == year) {
            non_working[date.ordinal0() as usize] = false;
        }
    }

    let mut found = Vec::new();
    let mut run: Vec<NaiveDate> = Vec::new();

    for (date, free) in days.iter().zip(&non_working) {
        if *free {
            run.push(*date);
            continue;
        }
        if let Some(potential) = close_run(&run, holidays) {
            found.push(potential);
        }
        run.clear();
    }
    // A run reaching Dec 31 is closed by the end of the year.
    found.extend(close_run(&run, holidays));

    debug!(year, found = found.len(), "found potential vacations");
    Ok(found)
}

fn close_run(run: &[NaiveDate], holidays: &BTreeSet<NaiveDate>) -> Option<PotentialVacation> {
    if run.len() <= MIN_BREAK_EXCLUSIVE {
        return None;
    }
    let (first, last) = (*run.first()?, *run.last()?);
    let weekend_count = run.iter().filter(|date| is_weekend(**date)).count();
    let holiday_count = run.iter().filter(|date| holidays.contains(date)).count();

    trace!(start = %first, end = %last, "natural break");

    Some(PotentialVacation {
        date_start: format_date(first),
        date_end: format_date(last),
        weekend_count,
        holiday_count,
        total_days: run.len(),
        description: describe(run.len(), weekend_count, holiday_count),
    })
}

fn describe(total_days: usize, weekend_count: usize, holiday_count: usize) -> String {
    format!(
        "{}-day natural break: {} weekends, {} holidays",
        total_days, weekend_count, holiday_count
    )
}

/// Labeled entries of every category except `public_holidays`.
///
/// Categories come in display-name order, entries in their stored order.
pub fn existing_plans(set: &CategorySet) -> Vec<VacationPlan> {
    let holidays = set.holidays();

    set.labeled_categories()
        .into_iter()
        .filter(|category| category.name != PUBLIC_HOLIDAYS)
        .flat_map(|category| category.entries)
        .map(|entry| {
            let counts = count_weekends_and_holidays(entry.start, entry.end, holidays);
            VacationPlan {
                date_start: format_date(entry.start),
                date_end: format_date(entry.end),
                total_days: entry.total_days(),
                label: entry.label,
                weekend_count: counts.weekends,
                holiday_count: counts.holidays,
            }
        })
        .collect()
}

/// Existing plans and natural breaks of the set's year.
pub fn plan_year(set: &CategorySet) -> Result<YearPlan> {
    let existing_vacations = existing_plans(set);
    let potential_vacations =
        find_potential_vacations(set.year, set.holidays(), &existing_vacations)?;

    Ok(YearPlan {
        year: set.year,
        existing_vacations,
        potential_vacations,
    })
}
