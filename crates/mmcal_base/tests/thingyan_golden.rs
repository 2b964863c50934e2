//! Golden-value tests for Thingyan moments and festival windows.
//!
//! Times are UTC and rendered to the second (floored).

use mmcal_base::{
    AKYA_INTERVAL, AKYA_INTERVAL_OLD, ThingyanWindow, julian_to_myanmar, thingyan_moments,
    thingyan_window,
};
use mmcal_time::{ClockConfig, Weekday, format_julian};

fn utc(jd: f64) -> String {
    format_julian(jd, "%yyyy-%mm-%dd %HH:%nn:%ss", &ClockConfig::default())
}

fn day(jdn: i64) -> String {
    format_julian(jdn as f64, "%yyyy-%mm-%dd %Www", &ClockConfig::default())
}

// ---------------------------------------------------------------------------
// 1386 (2024)
// ---------------------------------------------------------------------------

#[test]
fn thingyan_1386_moments() {
    let w = thingyan_window(1386);
    assert_eq!(utc(w.akya_time), "2024-04-14 00:24:44");
    assert_eq!(utc(w.atat_time), "2024-04-16 04:29:25");
}

#[test]
fn thingyan_1386_days() {
    let w = thingyan_window(1386);
    assert_eq!(day(w.akyo_day), "2024-04-13 Sat");
    assert_eq!(day(w.akya_day), "2024-04-14 Sun");
    assert_eq!(day(w.akyat_day), "2024-04-15 Mon");
    assert_eq!(w.akyat_day2, None);
    assert_eq!(day(w.atat_day), "2024-04-16 Tue");
    assert_eq!(day(w.new_year_day), "2024-04-17 Wed");
    assert_eq!(Weekday::from_jdn(w.new_year_day), Weekday::Wednesday);
}

#[test]
fn new_year_day_is_in_the_new_year() {
    for my in 1300..1420 {
        let w = thingyan_window(my);
        assert_eq!(julian_to_myanmar(w.new_year_day).year, my, "year {my}");
        assert_eq!(julian_to_myanmar(w.atat_day).year, my - 1, "year {my}");
    }
}

// ---------------------------------------------------------------------------
// Interval change at 1312
// ---------------------------------------------------------------------------

#[test]
fn thingyan_1311_uses_old_interval() {
    let m = thingyan_moments(1311);
    assert!((m.atat_time - 2_433_022.280_370_222).abs() < 1e-6);
    assert!((m.akya_time - 2_433_020.112_870_222).abs() < 1e-6);
    assert!((m.atat_time - m.akya_time - AKYA_INTERVAL_OLD).abs() < 1e-6);
    assert_eq!(utc(m.atat_time), "1949-04-15 18:43:43");
    assert_eq!(utc(m.akya_time), "1949-04-13 14:42:31");
    assert_eq!((m.atat_day(), m.akya_day()), (2_433_022, 2_433_020));
}

#[test]
fn thingyan_1312_uses_new_interval() {
    let m = thingyan_moments(1312);
    assert!((m.atat_time - 2_433_387.539_126_703).abs() < 1e-6);
    assert!((m.akya_time - 2_433_385.369_207_722).abs() < 1e-6);
    assert!((m.atat_time - m.akya_time - AKYA_INTERVAL).abs() < 1e-6);
    assert_eq!((m.atat_day(), m.akya_day()), (2_433_388, 2_433_385));
    assert_eq!(thingyan_window(1312).akyat_day2, Some(2_433_387));
}

// ---------------------------------------------------------------------------
// Window shape
// ---------------------------------------------------------------------------

#[test]
fn long_thingyan_years() {
    let long: Vec<i32> = (1370..1400)
        .filter(|&my| thingyan_window(my).akyat_day2.is_some())
        .collect();
    assert_eq!(long, vec![1370, 1374, 1378, 1382, 1397]);

    let w = thingyan_window(1382);
    assert_eq!(day(w.akya_day), "2020-04-13 Mon");
    assert_eq!(w.akyat_day2.map(day).as_deref(), Some("2020-04-15 Wed"));
    assert_eq!(day(w.new_year_day), "2020-04-17 Fri");
}

#[test]
fn window_is_contiguous() {
    for my in 1000..1500 {
        let ThingyanWindow {
            akyo_day,
            akya_day,
            akyat_day,
            akyat_day2,
            atat_day,
            new_year_day,
            ..
        } = thingyan_window(my);
        assert_eq!(akya_day - akyo_day, 1);
        assert_eq!(akyat_day - akya_day, 1);
        assert_eq!(new_year_day - atat_day, 1);
        match akyat_day2 {
            Some(d) => {
                assert_eq!(atat_day - akya_day, 3, "year {my}");
                assert_eq!(atat_day - d, 1);
            }
            None => assert_eq!(atat_day - akya_day, 2, "year {my}"),
        }
    }
}

#[test]
fn window_serializes() {
    let w = thingyan_window(1386);
    let json = serde_json::to_value(w).unwrap();
    assert_eq!(json["year"], 1386);
    assert_eq!(json["akya_day"], 2_460_415);
    assert!(json["akyat_day2"].is_null());
}
