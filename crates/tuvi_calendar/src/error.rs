//! Error types for calendar conversions.

use thiserror::Error;

/// Errors from date parsing and solar/lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date string is not `YYYY-MM-DD`.
    #[error("malformed date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),
    /// Month outside 1..=12.
    #[error("month {0} out of range 1..=12")]
    MonthOutOfRange(u8),
    /// Day outside the valid range for its month.
    #[error("day {day} out of range 1..={max}")]
    DayOutOfRange { day: u8, max: u8 },
    /// A leap month was requested for a month that is not leap in that year.
    #[error("lunar year {year} has no leap month {month}")]
    NoSuchLeapMonth { year: i32, month: u8 },
}
