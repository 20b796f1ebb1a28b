//! Error types for lifecal-core.
//!
//! Classification and aggregation are total functions and never fail.
//! Errors only arise while turning external strings into dates, entries
//! and timezones.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for lifecal operations.
#[derive(Debug, Error)]
pub enum LifecalError {
    /// A date string did not match `YYYY-MM-DD` or was missing.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// An entry ends before it starts.
    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A record carries no usable date column.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for lifecal operations.
pub type Result<T> = std::result::Result<T, LifecalError>;
