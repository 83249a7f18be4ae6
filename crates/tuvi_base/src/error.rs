//! Error types for chart generation.

use tuvi_calendar::CalendarError;

/// Errors from chart generation and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth input could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Date conversion failed.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ChartError::InvalidInput("unknown gender \"x\"".into());
        assert_eq!(e.to_string(), "invalid input: unknown gender \"x\"");
        let e: ChartError = CalendarError::MonthOutOfRange(13).into();
        assert!(e.to_string().starts_with("calendar error:"));
    }
}
