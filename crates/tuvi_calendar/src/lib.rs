//! Calendar support for the Tử Vi engine.
//!
//! This crate provides:
//! - Julian Day Number ↔ Gregorian conversions
//! - `SolarDate` / `LunarDate` value types with `YYYY-MM-DD` parsing
//! - The astronomical Vietnamese lunisolar calendar behind the
//!   [`LunarCalendar`] trait

pub mod calendar;
pub mod date;
pub mod error;
pub mod julian;
pub mod lunar;

pub use calendar::{LunarCalendar, VIETNAM_TZ_HOURS, VietnameseCalendar};
pub use date::{LunarDate, SolarDate};
pub use error::CalendarError;
pub use julian::{days_in_month, is_gregorian_leap_year, jd_from_date, jd_to_date};
