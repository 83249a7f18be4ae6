//! Astronomical lunisolar calendar arithmetic.
//!
//! Month boundaries are the local civil days containing each new moon; the
//! month containing the December solstice is month 11. A 13-month year
//! inserts a leap month at the first month without a major solar term.
//!
//! New-moon and solar-longitude series are the low-precision forms from
//! Meeus, *Astronomical Algorithms* (ch. 47-49), good to a few minutes
//! over 1800-2200.

use std::f64::consts::PI;

use crate::date::LunarDate;
use crate::error::CalendarError;
use crate::julian::{jd_from_date, jd_to_date};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// JD of the new moon of 1900-01-01 (lunation 0 of the series below).
const LUNATION_EPOCH_JD: f64 = 2_415_021.076_998_695;

/// Julian Date (TT) of the `k`-th new moon after 1900-01-01.
pub fn new_moon_jd(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;
    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * dr).sin();
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;
    let mut c1 = (0.1734 - 0.000_393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 -= 0.4068 * (mpr * dr).sin() - 0.0161 * (2.0 * dr * mpr).sin();
    c1 -= 0.0004 * (3.0 * dr * mpr).sin();
    c1 += 0.0104 * (2.0 * dr * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 -= 0.0074 * (dr * (m - mpr)).sin() - 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 -= 0.0004 * (dr * (2.0 * f - m)).sin() + 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 += 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();
    let delta_t = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };
    jd1 + c1 - delta_t
}

/// Local day number on which the `k`-th new moon falls.
pub fn new_moon_day(k: i64, tz_hours: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + tz_hours / 24.0).floor() as i64
}

/// Apparent solar longitude in radians [0, 2π) at Julian Date `jd`.
pub fn sun_longitude_rad(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    let dr = PI / 180.0;
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (dr * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (dr * 2.0 * m).sin() + 0.000_290 * (dr * 3.0 * m).sin();
    let l = (l0 + dl) * dr;
    l.rem_euclid(2.0 * PI)
}

/// Major solar term sector (0..=11, 30° each) at local midnight starting `day`.
pub fn sun_sector(day: i64, tz_hours: f64) -> u8 {
    let lon = sun_longitude_rad(day as f64 - 0.5 - tz_hours / 24.0);
    ((lon / PI * 6.0).floor() as u8).min(11)
}

/// First day of the lunar month 11 (the month holding the December solstice)
/// of Gregorian `year`.
pub fn lunar_month_11(year: i32, tz_hours: f64) -> i64 {
    let off = jd_from_date(year, 12, 31) - 2_415_021;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
    let nm = new_moon_day(k, tz_hours);
    if sun_sector(nm, tz_hours) >= 9 {
        new_moon_day(k - 1, tz_hours)
    } else {
        nm
    }
}

/// Offset (in months after month 11 starting at `a11`) of the leap month.
pub fn leap_month_offset(a11: i64, tz_hours: f64) -> i64 {
    let k = ((a11 as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut i = 1;
    let mut arc = sun_sector(new_moon_day(k + i, tz_hours), tz_hours);
    loop {
        let last = arc;
        i += 1;
        arc = sun_sector(new_moon_day(k + i, tz_hours), tz_hours);
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}

/// Convert a Gregorian date to the lunisolar calendar.
pub fn solar_to_lunar(year: i32, month: u8, day: u8, tz_hours: f64) -> LunarDate {
    let day_number = jd_from_date(year, month, day);
    let k = ((day_number as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;
    let mut month_start = new_moon_day(k + 1, tz_hours);
    if month_start > day_number {
        month_start = new_moon_day(k, tz_hours);
    }

    let mut a11 = lunar_month_11(year, tz_hours);
    let mut b11 = a11;
    let mut lunar_year = if a11 >= month_start {
        a11 = lunar_month_11(year - 1, tz_hours);
        year
    } else {
        b11 = lunar_month_11(year + 1, tz_hours);
        year + 1
    };

    let lunar_day = (day_number - month_start + 1) as u8;
    let diff = (month_start - a11).div_euclid(29);
    let mut is_leap_month = false;
    let mut lunar_month = diff + 11;
    if b11 - a11 > 365 {
        let leap_diff = leap_month_offset(a11, tz_hours);
        if diff >= leap_diff {
            lunar_month = diff + 10;
            is_leap_month = diff == leap_diff;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    LunarDate {
        year: lunar_year,
        month: lunar_month as u8,
        day: lunar_day,
        is_leap_month,
    }
}

/// First day (local day number) of a lunar month and its length in days.
pub fn lunar_month_span(
    year: i32,
    month: u8,
    is_leap_month: bool,
    tz_hours: f64,
) -> Result<(i64, u8), CalendarError> {
    let (a11, b11) = if month < 11 {
        (lunar_month_11(year - 1, tz_hours), lunar_month_11(year, tz_hours))
    } else {
        (lunar_month_11(year, tz_hours), lunar_month_11(year + 1, tz_hours))
    };
    let mut off = (month as i64 - 11).rem_euclid(12);
    if b11 - a11 > 365 {
        let leap_off = leap_month_offset(a11, tz_hours);
        let leap_month = (leap_off - 2).rem_euclid(12);
        if is_leap_month && leap_month != month as i64 {
            return Err(CalendarError::NoSuchLeapMonth { year, month });
        }
        if is_leap_month || off >= leap_off {
            off += 1;
        }
    } else if is_leap_month {
        return Err(CalendarError::NoSuchLeapMonth { year, month });
    }
    let k = (0.5 + (a11 as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;
    let start = new_moon_day(k + off, tz_hours);
    let next = new_moon_day(k + off + 1, tz_hours);
    Ok((start, (next - start) as u8))
}

/// Convert a lunisolar date to the Gregorian calendar.
pub fn lunar_to_solar(date: &LunarDate, tz_hours: f64) -> Result<(i32, u8, u8), CalendarError> {
    let (start, len) = lunar_month_span(date.year, date.month, date.is_leap_month, tz_hours)?;
    if date.day == 0 || date.day > len {
        return Err(CalendarError::DayOutOfRange {
            day: date.day,
            max: len,
        });
    }
    Ok(jd_to_date(start + date.day as i64 - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VN: f64 = 7.0;

    #[test]
    fn synodic_spacing() {
        let a = new_moon_jd(1000);
        let b = new_moon_jd(1001);
        assert!((b - a - SYNODIC_MONTH).abs() < 0.6, "spacing {}", b - a);
    }

    #[test]
    fn sun_at_march_equinox() {
        // 2024-03-20 03:06 UT
        let jd = jd_from_date(2024, 3, 20) as f64 - 0.5 + 3.1 / 24.0;
        let lon = sun_longitude_rad(jd).to_degrees();
        assert!(lon < 0.1 || lon > 359.9, "lon = {lon}");
    }

    #[test]
    fn tet_2024() {
        let d = solar_to_lunar(2024, 2, 10, VN);
        assert_eq!(d, LunarDate { year: 2024, month: 1, day: 1, is_leap_month: false });
    }

    #[test]
    fn lunar_month_lengths_are_29_or_30() {
        for month in 1..=12 {
            let (_, len) = lunar_month_span(2024, month, false, VN).unwrap();
            assert!(len == 29 || len == 30, "month {month} has {len} days");
        }
    }

    #[test]
    fn non_leap_year_rejects_leap_request() {
        // 2024 has twelve months.
        assert_eq!(
            lunar_month_span(2024, 4, true, VN),
            Err(CalendarError::NoSuchLeapMonth { year: 2024, month: 4 })
        );
    }
}
