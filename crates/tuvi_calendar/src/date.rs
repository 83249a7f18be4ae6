//! Solar (Gregorian) and lunar calendar dates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::days_in_month;

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SolarDate {
    /// Create a validated solar date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        let max = days_in_month(year, month);
        if day == 0 || day > max {
            return Err(CalendarError::DayOutOfRange { day, max });
        }
        Ok(Self { year, month, day })
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// Month number 1..=12. A leap month repeats the number of the month before it.
    pub month: u8,
    /// Day of the lunar month, 1..=30.
    pub day: u8,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Create a lunar date, checking only the static ranges (month 1..=12,
    /// day 1..=30). Whether a 30th day or leap month exists in a given year
    /// is checked by [`crate::LunarCalendar::lunar_to_solar`].
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::DayOutOfRange { day, max: 30 });
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Parse `YYYY-MM-DD` as a non-leap lunar date.
    pub fn parse(s: &str) -> Result<Self, CalendarError> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day, false)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

fn parse_ymd(s: &str) -> Result<(i32, u8, u8), CalendarError> {
    let malformed = || CalendarError::MalformedDate(s.to_string());
    let mut parts = s.trim().splitn(3, '-');
    let year = parts.next().ok_or_else(malformed)?;
    let month = parts.next().ok_or_else(malformed)?;
    let day = parts.next().ok_or_else(malformed)?;
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(malformed());
    }
    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u8 = month.parse().map_err(|_| malformed())?;
    let day: u8 = day.parse().map_err(|_| malformed())?;
    Ok((year, month, day))
}
