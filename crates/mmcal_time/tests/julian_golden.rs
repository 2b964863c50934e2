//! Golden tests for Julian Date ↔ Western conversions.
//!
//! Reference values are standard JDNs for well-known dates.

use mmcal_time::{
    ALL_CALENDAR_TYPES, CalendarType, ClockConfig, Weekday, julian_to_western, parse_julian,
    western_month_length, western_to_julian,
};

fn noon(y: i32, m: i32, d: i32, config: &ClockConfig) -> f64 {
    western_to_julian(y, m, d, 12, 0, 0.0, config)
}

// ---------------------------------------------------------------------------
// Known dates
// ---------------------------------------------------------------------------

#[test]
fn gregorian_reference_dates() {
    let c = ClockConfig::with_calendar(CalendarType::Gregorian);
    assert_eq!(noon(1858, 11, 17, &c), 2_400_001.0);
    assert_eq!(noon(1970, 1, 1, &c), 2_440_588.0);
    assert_eq!(noon(2024, 4, 17, &c), 2_460_418.0);
    assert_eq!(noon(-4713, 11, 24, &c), 0.0);
}

#[test]
fn julian_reference_dates() {
    let c = ClockConfig::with_calendar(CalendarType::Julian);
    assert_eq!(noon(-4712, 1, 1, &c), 0.0);
    assert_eq!(noon(1582, 10, 4, &c), 2_299_160.0);
}

#[test]
fn british_matches_julian_before_and_gregorian_after() {
    let british = ClockConfig::default();
    let julian = ClockConfig::with_calendar(CalendarType::Julian);
    let gregorian = ClockConfig::with_calendar(CalendarType::Gregorian);
    assert_eq!(noon(1600, 6, 1, &british), noon(1600, 6, 1, &julian));
    assert_eq!(noon(1900, 6, 1, &british), noon(1900, 6, 1, &gregorian));
}

#[test]
fn custom_gregorian_start() {
    // Catholic reform: 1582-10-15 Gregorian follows 1582-10-04 Julian
    let papal = ClockConfig {
        gregorian_start: 2_299_161,
        ..ClockConfig::default()
    };
    assert_eq!(noon(1582, 10, 15, &papal), 2_299_161.0);
    assert_eq!(noon(1582, 10, 4, &papal), 2_299_160.0);
    let dt = julian_to_western(2_299_161.0, &papal);
    assert_eq!((dt.year, dt.month, dt.day), (1582, 10, 15));
    assert_eq!(western_month_length(1582, 10, &papal), 21);
}

#[test]
fn out_of_range_components_carry() {
    let c = ClockConfig::default();
    assert_eq!(noon(2024, 1, 32, &c), noon(2024, 2, 1, &c));
    assert_eq!(noon(2023, 13, 1, &c), noon(2024, 1, 1, &c));
    assert_eq!(noon(2024, 3, 0, &c), noon(2024, 2, 29, &c));
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn jd_round_trip_across_transition() {
    for ct in ALL_CALENDAR_TYPES {
        let c = ClockConfig::with_calendar(ct);
        for jdn in (2_361_222 - 400)..(2_361_222 + 400) {
            let jd = jdn as f64 + 0.3;
            let dt = julian_to_western(jd, &c);
            let back = western_to_julian(dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second, &c);
            assert!((back - jd).abs() < 1e-6, "{ct:?} jd {jd}: {dt} -> {back}");
        }
    }
}

#[test]
fn component_round_trip_sample() {
    let samples = [
        (-500, 3, 1, 6, 15, 30.0),
        (1000, 2, 29, 23, 59, 59.5),
        (1752, 9, 2, 0, 0, 0.0),
        (1752, 9, 14, 12, 30, 0.0),
        (2000, 2, 29, 18, 45, 10.25),
        (2024, 12, 31, 23, 0, 0.0),
    ];
    for ct in ALL_CALENDAR_TYPES {
        let c = ClockConfig::with_calendar(ct);
        for &(y, m, d, h, n, s) in &samples {
            if ct == CalendarType::Gregorian && (y, m, d) == (1000, 2, 29) {
                continue;
            }
            let jd = western_to_julian(y, m, d, h, n, s, &c);
            let dt = julian_to_western(jd, &c);
            assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (y, m, d, h, n), "{ct:?}");
            assert!((dt.second - s).abs() < 1e-3, "{ct:?} {dt}");
        }
    }
}

#[test]
fn weekday_agrees_with_western_path() {
    let c = ClockConfig::default();
    // 2024-04-13 Saturday .. 2024-04-19 Friday
    for (i, d) in (13..20).enumerate() {
        let jdn = noon(2024, 4, d, &c) as i64;
        assert_eq!(Weekday::from_jdn(jdn).index() as usize, i);
    }
}

#[test]
fn parse_matches_components() {
    let c = ClockConfig::default();
    let parsed = parse_julian("1752/09/14 06:00:00", &c).unwrap();
    assert_eq!(parsed, western_to_julian(1752, 9, 14, 6, 0, 0.0, &c));
}
