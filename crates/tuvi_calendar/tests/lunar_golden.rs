//! Golden solar ↔ lunar conversions against the published Vietnamese calendar.

use proptest::prelude::*;
use tuvi_calendar::{LunarCalendar, LunarDate, SolarDate, VietnameseCalendar};

fn solar(s: &str) -> SolarDate {
    s.parse().unwrap()
}

fn lunar(year: i32, month: u8, day: u8, leap: bool) -> LunarDate {
    LunarDate::new(year, month, day, leap).unwrap()
}

#[test]
fn tet_dates() {
    let cal = VietnameseCalendar::default();
    for (date, year) in [
        ("2000-02-05", 2000),
        ("2020-01-25", 2020),
        ("2023-01-22", 2023),
        ("2024-02-10", 2024),
    ] {
        let got = cal.solar_to_lunar(solar(date)).unwrap();
        assert_eq!(got, lunar(year, 1, 1, false), "Tết {year}");
    }
}

#[test]
fn day_before_tet_is_last_month() {
    let cal = VietnameseCalendar::default();
    let got = cal.solar_to_lunar(solar("2024-02-09")).unwrap();
    assert_eq!(got.year, 2023);
    assert_eq!(got.month, 12);
    assert!(!got.is_leap_month);
    assert!(got.day == 29 || got.day == 30);
}

#[test]
fn leap_fourth_month_2020() {
    let cal = VietnameseCalendar::default();
    let got = cal.solar_to_lunar(solar("2020-05-23")).unwrap();
    assert_eq!(got, lunar(2020, 4, 1, true));

    let back = cal.lunar_to_solar(lunar(2020, 4, 1, true)).unwrap();
    assert_eq!(back, solar("2020-05-23"));
}

#[test]
fn mid_may_1990() {
    let cal = VietnameseCalendar::default();
    let got = cal.solar_to_lunar(solar("1990-05-15")).unwrap();
    assert_eq!(got, lunar(1990, 4, 21, false));
}

#[test]
fn missing_leap_month_is_an_error() {
    let cal = VietnameseCalendar::default();
    assert!(cal.lunar_to_solar(lunar(2024, 6, 1, true)).is_err());
}

proptest! {
    #[test]
    fn solar_lunar_round_trip(year in 1950i32..2030, month in 1u8..=12, day in 1u8..=28) {
        let cal = VietnameseCalendar::default();
        let date = SolarDate::new(year, month, day).unwrap();
        let l = cal.solar_to_lunar(date).unwrap();
        prop_assert!((1..=12).contains(&l.month));
        prop_assert!((1..=30).contains(&l.day));
        prop_assert_eq!(cal.lunar_to_solar(l).unwrap(), date);
    }
}
