//! Public holidays: Thingyan, Gregorian-dated and Myanmar-dated holidays,
//! and the substitute days of 2019-2021.
//!
//! Each group is an if/else chain, so a group reports at most one holiday
//! (New Year Day aside). Groups are independent of each other.

use mmcal_base::{MYANMAR_EPOCH, SOLAR_YEAR, akya_interval};
use mmcal_time::jdn_from_jd;

use crate::day::Day;
use crate::holiday::Holiday;

/// First Myanmar year with Thingyan holidays.
pub const THINGYAN_START_YEAR: i32 = 1100;

/// Substitute holidays declared for 2019-2021 (sorted JDNs).
pub const SUBSTITUTE_HOLIDAYS: [i64; 21] = [
    // 2019
    2_458_768, 2_458_772, 2_458_785, 2_458_800,
    // 2020
    2_458_855, 2_458_918, 2_458_950, 2_459_051, 2_459_062, 2_459_152, 2_459_156, 2_459_167,
    2_459_181, 2_459_184,
    // 2021
    2_459_300, 2_459_303, 2_459_323, 2_459_324, 2_459_335, 2_459_548, 2_459_573,
];

/// Public holidays on a JDN, in reporting order.
///
/// # Examples
///
/// ```
/// use mmcal_holiday::{Holiday, holidays};
///
/// // 2024-04-17
/// assert_eq!(holidays(2_460_418), vec![Holiday::MyanmarNewYearDay]);
/// ```
pub fn holidays(jdn: i64) -> Vec<Holiday> {
    let day = Day::new(jdn);
    let mut out = Vec::new();
    thingyan(&day, &mut out);
    out.extend(gregorian(&day));
    out.extend(myanmar(&day));
    if is_substitute(&day) {
        out.push(Holiday::Additional);
    }
    out
}

/// Whether a JDN has at least one public holiday.
pub fn is_public_holiday(jdn: i64) -> bool {
    !holidays(jdn).is_empty()
}

fn thingyan(day: &Day, out: &mut Vec<Holiday>) {
    let my = day.myanmar.year;
    // days in Late Tagu/Kason already belong to the next Thingyan
    let ny = my + day.myanmar.month.div_euclid(13);
    let atat_time = SOLAR_YEAR * ny as f64 + MYANMAR_EPOCH;
    // the interval follows the date's own year, not the year being entered
    let akya = jdn_from_jd(atat_time - akya_interval(my));
    let atat = jdn_from_jd(atat_time);
    let jdn = day.jdn;

    if jdn == atat + 1 {
        out.push(Holiday::MyanmarNewYearDay);
    }
    if ny < THINGYAN_START_YEAR {
        return;
    }

    let extra = if (1369..1379).contains(&ny) {
        jdn == akya - 2 || (atat + 2..=akya + 7).contains(&jdn)
    } else if (1384..=1385).contains(&ny) {
        (akya - 5..=akya - 2).contains(&jdn)
    } else {
        ny >= 1386 && (atat + 2..=akya + 7).contains(&jdn)
    };

    let holiday = if jdn == atat {
        Some(Holiday::ThingyanAtat)
    } else if jdn > akya && jdn < atat {
        Some(Holiday::ThingyanAkyat)
    } else if jdn == akya {
        Some(Holiday::ThingyanAkya)
    } else if jdn == akya - 1 {
        Some(Holiday::ThingyanAkyo)
    } else if extra {
        Some(Holiday::Additional)
    } else {
        None
    };
    out.extend(holiday);
}

fn gregorian(day: &Day) -> Option<Holiday> {
    let y = day.year;
    if (2018..=2021).contains(&y) && day.is(1, 1) {
        Some(Holiday::NewYearDay)
    } else if y >= 1948 && day.is(1, 4) {
        Some(Holiday::IndependenceDay)
    } else if y >= 1947 && day.is(2, 12) {
        Some(Holiday::UnionDay)
    } else if y >= 1958 && day.is(3, 2) {
        Some(Holiday::PeasantsDay)
    } else if y >= 1945 && day.is(3, 27) {
        Some(Holiday::ResistanceDay)
    } else if y >= 1923 && day.is(5, 1) {
        Some(Holiday::LabourDay)
    } else if y >= 1947 && day.is(7, 19) {
        Some(Holiday::MartyrsDay)
    } else if y >= 1752 && day.is(12, 25) {
        Some(Holiday::ChristmasDay)
    } else if y == 2017 && day.is(12, 30) {
        Some(Holiday::Additional)
    } else if (2017..=2021).contains(&y) && day.is(12, 31) {
        Some(Holiday::Additional)
    } else {
        None
    }
}

fn myanmar(day: &Day) -> Option<Holiday> {
    let my = day.myanmar.year;
    let md = day.myanmar.day;
    if day.is_full_moon_of(2) {
        Some(Holiday::BuddhaDay)
    } else if day.is_full_moon_of(4) {
        Some(Holiday::StartOfBuddhistLent)
    } else if day.is_full_moon_of(7) {
        Some(Holiday::EndOfBuddhistLent)
    } else if my >= 1379 && day.myanmar.month == 7 && (md == 14 || md == 16) {
        Some(Holiday::Additional)
    } else if day.is_full_moon_of(8) {
        Some(Holiday::Tazaungdaing)
    } else if my >= 1379 && day.is_myanmar(8, 14) {
        Some(Holiday::Additional)
    } else if my >= 1282 && day.is_myanmar(8, 25) {
        Some(Holiday::NationalDay)
    } else if day.is_myanmar(10, 1) {
        Some(Holiday::KarenNewYearDay)
    } else if day.is_full_moon_of(12) {
        Some(Holiday::TabaungPwe)
    } else {
        None
    }
}

fn is_substitute(day: &Day) -> bool {
    (2019..=2021).contains(&day.year) && SUBSTITUTE_HOLIDAYS.binary_search(&day.jdn).is_ok()
}
