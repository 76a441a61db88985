//! Error types for chart construction and table lookups.

use thiserror::Error;
use ziwei_calendar::CalendarError;

/// Errors from chart construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the lunar calendar layer (range, date validity, label parsing).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// A derived palace index fell outside the 12 branch slots.
    #[error("invalid {what} position: {index}")]
    InvalidPosition { what: &'static str, index: i64 },
    /// Transformation lookup for a label that is not one of the 10 stems.
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),
    /// Malformed birth input (gender label, hour, lunar day).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
