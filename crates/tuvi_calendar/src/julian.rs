//! Julian Day Number ↔ calendar conversions.
//!
//! Integer day numbers (noon-based JDN). Dates from 1582-10-15 onward are
//! Gregorian; earlier dates are proleptic Julian, matching the historical
//! switch.

/// First Gregorian day (1582-10-15) as a Julian Day Number.
pub const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Julian Day Number of a calendar date.
pub fn jd_from_date(year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (14 - m).div_euclid(12);
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    let jd = d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    if jd < GREGORIAN_START_JDN {
        d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
    } else {
        jd
    }
}

/// Calendar date `(year, month, day)` of a Julian Day Number.
pub fn jd_to_date(jd: i64) -> (i32, u8, u8) {
    let (b, c) = if jd >= GREGORIAN_START_JDN {
        let a = jd + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (146_097 * b).div_euclid(4))
    } else {
        (0, jd + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = b * 100 + d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, day as u8)
}

/// Whether `year` is a leap year in the Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(jd_from_date(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(jd_from_date(1970, 1, 1), 2_440_588);
    }

    #[test]
    fn gregorian_switch() {
        assert_eq!(jd_from_date(1582, 10, 15), GREGORIAN_START_JDN);
        // The day before the switch is Julian 1582-10-04.
        assert_eq!(jd_to_date(GREGORIAN_START_JDN - 1), (1582, 10, 4));
    }

    #[test]
    fn round_trip_leap_day() {
        let jd = jd_from_date(2024, 2, 29);
        assert_eq!(jd_to_date(jd), (2024, 2, 29));
        assert_eq!(jd_to_date(jd + 1), (2024, 3, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 13), 0);
    }
}
