//! Error type shared by every calculator.

use thiserror::Error;

/// Errors raised by the calculators.
///
/// Every error is raised at the point of the offending computation and
/// returned to the caller; no calculator returns a partial result alongside
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character has no entry in the alphabet map.
    #[error("unsupported character for name chart: {0:?}")]
    UnsupportedCharacter(char),

    /// A date string is not three numeric `-`/`/` separated fields.
    #[error("invalid date format {0:?}: use YYYY-MM-DD or DD-MM-YYYY or DD/MM/YYYY")]
    InvalidDateFormat(String),

    /// A month index outside 1-12.
    #[error("month must be 1..12, got {0}")]
    InvalidMonth(u32),

    /// A ruling number outside 1-9.
    #[error("ruling number must be 1..9, got {0}")]
    InvalidRulingNumber(u32),

    /// A year/month/day combination that is not on the calendar.
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
        /// Requested day of month.
        day: u32,
    },
}

/// Result alias for calculator operations.
pub type Result<T> = core::result::Result<T, Error>;
