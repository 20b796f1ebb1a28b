//! Evaluation date.
//!
//! The only clock reading in lifecal is "what calendar date is it now",
//! which decides the `current_day` category. It happens here, at the edge,
//! and the result is passed into the pure functions of this crate.

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{LifecalError, Result};

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use lifecal_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/Berlin").unwrap();
/// assert_eq!(tz.to_string(), "Europe/Berlin");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| LifecalError::InvalidTimezone(name.to_string()))
}

/// Today's calendar date in `tz`, or in the system's local zone.
pub fn today_in(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parse_valid_timezone() {
        let tz = parse_tz("Europe/Berlin").unwrap();
        assert_eq!(tz.to_string(), "Europe/Berlin");
    }

    #[test]
    fn parse_invalid_timezone() {
        let result = parse_tz("Invalid/Timezone");
        if let Err(LifecalError::InvalidTimezone(name)) = result {
            assert_eq!(name, "Invalid/Timezone");
        } else {
            panic!("Expected InvalidTimezone error");
        }
    }

    #[test]
    fn today_is_within_a_day_of_utc() {
        let utc_today = Utc::now().date_naive();
        for tz in [None, Some(parse_tz("Pacific/Kiritimati").unwrap())] {
            let today = today_in(tz);
            let diff = (today - utc_today).num_days().abs();
            assert!(diff <= 1, "{today} vs {utc_today}");
            assert!(today.year() >= 2024);
        }
    }
}
