//! Error types for calendar conversion and stem-branch parsing.

use thiserror::Error;

/// Errors from solar/lunar conversion or cycle-label parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Solar date lies outside the lunar table (1900-01-31 ..= 2100-12-31).
    #[error("solar date {year:04}-{month:02}-{day:02} is outside the supported range 1900-01-31..=2100-12-31")]
    OutOfRange { year: i32, month: u32, day: u32 },
    /// Month/day combination does not exist in the Gregorian calendar.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Label is not one of the canonical stems, branches, or hours.
    #[error("invalid {kind} label: {label:?}")]
    InvalidPosition { kind: &'static str, label: String },
}
