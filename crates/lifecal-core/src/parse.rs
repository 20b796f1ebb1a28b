//! Input parsing for dates and category records.
//!
//! Records are the flat rows produced by ingestion: optional
//! `date_start`/`date_end`/`date` columns plus an optional `label` or
//! `desc`. Dates use the `YYYY-MM-DD` format.

use chrono::NaiveDate;

use crate::error::{LifecalError, Result};
use crate::models::{CategoryEntry, DEFAULT_LABEL};

/// The only accepted calendar-date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One ingested row before interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRecord {
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub date: Option<String>,
    pub label: Option<String>,
    pub desc: Option<String>,
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use lifecal_core::parse::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date(" 2024-02-29 ").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(parse_date("2023-02-29").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        LifecalError::InvalidDate(format!(
            "'{}'. Expected YYYY-MM-DD. Error: {}",
            trimmed, e
        ))
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Interpret a record as a [`CategoryEntry`].
///
/// The start comes from `date_start` and the end from `date_end`. Without an
/// end, `date` supplies both; failing that a lone start is a single day.
/// The label is `label`, then `desc`, then `"Event"`.
pub fn parse_entry(record: &EntryRecord) -> Result<CategoryEntry> {
    let mut start = parse_field(&record.date_start)?;
    let mut end = parse_field(&record.date_end)?;

    if end.is_none() {
        if let Some(date) = parse_field(&record.date)? {
            start = Some(date);
            end = Some(date);
        } else {
            end = start;
        }
    }

    let (Some(start), Some(end)) = (start, end) else {
        return Err(LifecalError::ParseError(
            "record has no date_start, date_end or date".to_string(),
        ));
    };

    if end < start {
        return Err(LifecalError::InvalidRange { start, end });
    }

    let label = present(&record.label)
        .or_else(|| present(&record.desc))
        .unwrap_or(DEFAULT_LABEL);

    Ok(CategoryEntry::new(start, end, label))
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_field(field: &Option<String>) -> Result<Option<NaiveDate>> {
    present(field).map(parse_date).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(start: Option<&str>, end: Option<&str>, single: Option<&str>) -> EntryRecord {
        EntryRecord {
            date_start: start.map(str::to_string),
            date_end: end.map(str::to_string),
            date: single.map(str::to_string),
            ..EntryRecord::default()
        }
    }

    #[test]
    fn parse_valid_date() {
        assert_eq!(parse_date("2024-07-01").unwrap(), date(2024, 7, 1));
    }

    #[test]
    fn parse_invalid_dates() {
        assert!(matches!(parse_date("2024/07/01"), Err(LifecalError::InvalidDate(_))));
        assert!(parse_date("1900-02-29").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn format_roundtrip() {
        assert_eq!(format_date(date(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn entry_from_range() {
        let mut rec = record(Some("2024-07-01"), Some("2024-07-05"), None);
        rec.label = Some(" Summer ".to_string());
        let entry = parse_entry(&rec).unwrap();
        assert_eq!(entry.start, date(2024, 7, 1));
        assert_eq!(entry.end, date(2024, 7, 5));
        assert_eq!(entry.label, "Summer");
    }

    #[test]
    fn entry_from_single_date() {
        let mut rec = record(None, None, Some("2024-01-01"));
        rec.desc = Some("New Year".to_string());
        let entry = parse_entry(&rec).unwrap();
        assert_eq!(entry.start, date(2024, 1, 1));
        assert_eq!(entry.end, date(2024, 1, 1));
        assert_eq!(entry.label, "New Year");
    }

    #[test]
    fn entry_with_only_start_is_one_day() {
        let entry = parse_entry(&record(Some("2024-03-08"), None, None)).unwrap();
        assert_eq!(entry.start, entry.end);
        assert_eq!(entry.label, DEFAULT_LABEL);
    }

    #[test]
    fn entry_without_dates_is_rejected() {
        let result = parse_entry(&record(None, Some(" "), None));
        assert!(matches!(result, Err(LifecalError::ParseError(_))));

        let result = parse_entry(&EntryRecord {
            label: Some("Summer".to_string()),
            ..EntryRecord::default()
        });
        let err = result.unwrap_err();
        assert!(matches!(err, LifecalError::ParseError(_)));
        assert!(err.to_string().contains("no date_start"));
    }

    #[test]
    fn entry_with_reversed_range_is_rejected() {
        let result = parse_entry(&record(Some("2024-07-05"), Some("2024-07-01"), None));
        assert!(matches!(result, Err(LifecalError::InvalidRange { .. })));
    }

    #[test]
    fn entry_with_malformed_date_is_rejected() {
        let result = parse_entry(&record(Some("2024-13-01"), None, None));
        assert!(matches!(result, Err(LifecalError::InvalidDate(_))));
    }
}
