//! Observances and other notable days that are not public holidays.

use mmcal_time::{CalendarType, ClockConfig, jdn_from_jd, western_to_julian};

use crate::day::Day;
use crate::holiday::Holiday;

/// First year Easter and Good Friday are reported.
pub const EASTER_START_YEAR: i32 = 1876;

/// JDN of Easter Sunday in Gregorian year `year` (Meeus/Jones/Butcher).
///
/// # Examples
///
/// ```
/// use mmcal_holiday::easter_jdn;
///
/// assert_eq!(easter_jdn(2024), 2_460_401); // 2024-03-31
/// ```
pub fn easter_jdn(year: i32) -> i64 {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let q = h + l - 7 * m + 114;
    let day = q.rem_euclid(31) + 1;
    let month = q.div_euclid(31);
    let gregorian = ClockConfig::with_calendar(CalendarType::Gregorian);
    jdn_from_jd(western_to_julian(year, month, day, 12, 0, 0.0, &gregorian))
}

/// Observances on a JDN, in reporting order.
pub fn holidays_alt(jdn: i64) -> Vec<Holiday> {
    let day = Day::new(jdn);
    let mut out = Vec::new();
    out.extend(gregorian(&day));
    out.extend(easter(&day));
    myanmar(&day, &mut out);
    out
}

fn gregorian(day: &Day) -> Option<Holiday> {
    let y = day.year;
    if y <= 2017 && day.is(1, 1) {
        Some(Holiday::NewYearDay)
    } else if y >= 1915 && day.is(2, 13) {
        Some(Holiday::AungSanBirthday)
    } else if y >= 1969 && day.is(2, 14) {
        Some(Holiday::ValentinesDay)
    } else if y >= 1970 && day.is(4, 22) {
        Some(Holiday::EarthDay)
    } else if y >= 1392 && day.is(4, 1) {
        Some(Holiday::AprilFoolsDay)
    } else if y >= 1948 && day.is(5, 8) {
        Some(Holiday::RedCrossDay)
    } else if y >= 1994 && day.is(10, 5) {
        Some(Holiday::WorldTeachersDay)
    } else if y >= 1947 && day.is(10, 24) {
        Some(Holiday::UnitedNationsDay)
    } else if y >= 1753 && day.is(10, 31) {
        Some(Holiday::Halloween)
    } else {
        None
    }
}

fn easter(day: &Day) -> Option<Holiday> {
    if day.year < EASTER_START_YEAR {
        return None;
    }
    let easter = easter_jdn(day.year);
    if day.jdn == easter {
        Some(Holiday::Easter)
    } else if day.jdn == easter - 2 {
        Some(Holiday::GoodFriday)
    } else {
        None
    }
}

fn myanmar(day: &Day, out: &mut Vec<Holiday>) {
    let my = day.myanmar.year;
    if my >= 1309 && day.is_myanmar(11, 16) {
        out.push(Holiday::MonNationalDay);
    } else if day.is_myanmar(9, 1) {
        out.push(Holiday::ShanNewYearDay);
        if my >= 1306 {
            out.push(Holiday::AuthorsDay);
        }
    } else if day.is_full_moon_of(3) {
        out.push(Holiday::MahathamayaDay);
    } else if day.is_full_moon_of(6) {
        out.push(Holiday::GarudhammaDay);
    } else if my >= 1356 && day.is_full_moon_of(10) {
        out.push(Holiday::MothersDay);
    } else if my >= 1370 && day.is_full_moon_of(12) {
        out.push(Holiday::FathersDay);
    } else if day.is_full_moon_of(5) {
        out.push(Holiday::MettaDay);
    } else if day.is_myanmar(5, 10) {
        out.push(Holiday::TaungpyonePwe);
    } else if day.is_myanmar(5, 23) {
        out.push(Holiday::YadanaguPwe);
    }
}
