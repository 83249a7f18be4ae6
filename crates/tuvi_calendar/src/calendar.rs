//! The calendar boundary consumed by the chart engine.

use serde::{Deserialize, Serialize};

use crate::date::{LunarDate, SolarDate};
use crate::error::CalendarError;
use crate::lunar;

/// Vietnam civil time (UTC+7).
pub const VIETNAM_TZ_HOURS: f64 = 7.0;

/// Solar ↔ lunar conversion.
///
/// Implementations must be pure: the same input always yields the same
/// output, so charts built from either calendar form agree.
pub trait LunarCalendar {
    /// Convert a Gregorian date to its lunar date.
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;

    /// Convert a lunar date to its Gregorian date.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError>;
}

/// The astronomical Vietnamese lunisolar calendar.
///
/// The time zone only matters for new moons and solar terms close to local
/// midnight; 7.0 reproduces the official Vietnamese calendar and 8.0 the
/// Chinese one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VietnameseCalendar {
    pub timezone_offset_hours: f64,
}

impl VietnameseCalendar {
    pub fn new(timezone_offset_hours: f64) -> Self {
        Self {
            timezone_offset_hours,
        }
    }
}

impl Default for VietnameseCalendar {
    fn default() -> Self {
        Self::new(VIETNAM_TZ_HOURS)
    }
}

impl LunarCalendar for VietnameseCalendar {
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        Ok(lunar::solar_to_lunar(
            date.year,
            date.month,
            date.day,
            self.timezone_offset_hours,
        ))
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        let (year, month, day) = lunar::lunar_to_solar(&date, self.timezone_offset_hours)?;
        SolarDate::new(year, month, day)
    }
}
