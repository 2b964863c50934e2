//! JDN ↔ Myanmar date conversion and day-level derivations.
//!
//! Months are carried as integer codes (see [`MyanmarMonth`]) so that the
//! closed-form formulas stay close to their arithmetic. None of the inputs
//! are validated here; [`validate_myanmar`] is the strict check.

use serde::{Deserialize, Serialize};

use crate::era::{MYANMAR_EPOCH, SOLAR_YEAR};
use crate::error::CalendarError;
use crate::month::{MoonPhase, MyanmarMonth};
use crate::year::{YearType, year_info, year_length};

/// A Myanmar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MyanmarDate {
    /// Myanmar year.
    pub year: i32,
    /// Month code (0 = First Waso, 1 = Tagu .. 12 = Tabaung, 13/14 = Late Tagu/Kason).
    pub month: i32,
    /// Day of the month (1-30).
    pub day: i32,
    /// Type of the year the date falls in.
    pub year_type: YearType,
}

impl MyanmarDate {
    /// Month as an enum, `None` for codes outside 0..=14.
    pub fn month_kind(&self) -> Option<MyanmarMonth> {
        MyanmarMonth::from_code(self.month)
    }

    /// Moon phase of this day.
    pub fn moon_phase(&self) -> MoonPhase {
        moon_phase(self.day, self.month, self.year_type)
    }

    /// Day within the fortnight (1-15).
    pub fn fortnight_day(&self) -> i32 {
        fortnight_day(self.day)
    }

    /// Length of this month.
    pub fn month_length(&self) -> i32 {
        month_length(self.month, self.year_type)
    }

    /// Sasana (Buddhist era) year.
    pub fn sasana_year(&self) -> i32 {
        sasana_year(self.year, self.month, self.day)
    }

    /// Month name, with "Second" for Waso of a watat year.
    pub fn month_name(&self) -> String {
        self.month_kind()
            .map(|m| m.display_name(self.year_type))
            .unwrap_or_default()
    }
}

/// Myanmar year in which a JDN falls (the year whose solar start precedes it).
pub fn myanmar_year_of(jdn: i64) -> i32 {
    ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i32
}

/// Convert a Julian Day Number to a Myanmar date.
///
/// # Examples
///
/// ```
/// use mmcal_base::julian_to_myanmar;
///
/// // 2024-04-17, Myanmar New Year Day 1386
/// let d = julian_to_myanmar(2_460_418);
/// assert_eq!((d.year, d.month, d.day), (1386, 1, 9));
/// ```
pub fn julian_to_myanmar(jdn: i64) -> MyanmarDate {
    let my = myanmar_year_of(jdn);
    let info = year_info(my);
    let myt = info.year_type.code() as i64;

    let mut dd = jdn - info.first_day_of_tagu + 1;
    let b = myt / 2;
    let c = 1 / (myt + 1);
    let myl = year_length(info.year_type) as i64;
    let late = (dd - 1).div_euclid(myl);
    dd -= late * myl;

    let a = (dd + 423).div_euclid(512);
    let mm = (((dd - b * a + c * a * 30) as f64 + 29.26) / 29.544).floor() as i64;
    let e = (mm + 12).div_euclid(16);
    let f = (mm + 11).div_euclid(16);
    let md = dd - (29.544 * mm as f64 - 29.26).floor() as i64 - b * e + c * f * 30;
    let mm = mm + f * 3 - e * 4 + 12 * late;

    MyanmarDate {
        year: my,
        month: mm as i32,
        day: md as i32,
        year_type: info.year_type,
    }
}

/// Convert a Myanmar date to a Julian Day Number.
pub fn myanmar_to_julian(my: i32, mm: i32, md: i32) -> i64 {
    let info = year_info(my);
    let myt = info.year_type.code() as i64;
    let (mm, md) = (mm as i64, md as i64);

    let late = mm.div_euclid(13);
    let mut mm = mm.rem_euclid(13) + late;
    let b = myt / 2;
    let c = 1 - (myt + 1) / 2;
    mm += 4 - (mm + 15).div_euclid(16) * 4 + (mm + 12).div_euclid(16);

    let mut dd = md + (29.544 * mm as f64 - 29.26).floor() as i64
        - c * (mm + 11).div_euclid(16) * 30
        + b * (mm + 12).div_euclid(16);
    dd += late * year_length(info.year_type) as i64;
    dd + info.first_day_of_tagu - 1
}

/// Length of a month (29 or 30; Nayon gains a day in big watat years).
pub fn month_length(mm: i32, year_type: YearType) -> i32 {
    let len = 30 - mm.rem_euclid(2);
    if mm == 3 {
        len + year_type.code() / 2
    } else {
        len
    }
}

/// Moon phase from day of month.
pub fn moon_phase(md: i32, mm: i32, year_type: YearType) -> MoonPhase {
    let mml = month_length(mm, year_type);
    let code = (md + 1).div_euclid(16) + md.div_euclid(16) + md.div_euclid(mml);
    MoonPhase::from_code(code)
}

/// Day within the fortnight (1-15).
pub fn fortnight_day(md: i32) -> i32 {
    md - 15 * md.div_euclid(16)
}

/// Day of month from fortnight day and moon phase.
pub fn day_from_fortnight(mf: i32, phase: MoonPhase, mm: i32, year_type: YearType) -> i32 {
    let mml = month_length(mm, year_type);
    let mp = phase.code();
    let m1 = mp % 2;
    let m2 = mp / 2;
    m1 * (15 + m2 * (mml - 15)) + (1 - m1) * (mf + 15 * m2)
}

/// Sasana year for a Myanmar date.
///
/// The Buddhist era turns over on the full moon of Kason.
pub fn sasana_year(my: i32, mm: i32, md: i32) -> i32 {
    let offset = if mm == 1 || (mm == 2 && md < 16) {
        1181
    } else {
        1182
    };
    my + offset
}

const YEAR_NAMES: [&str; 12] = [
    "Hpusha",
    "Magha",
    "Phalguni",
    "Chitra",
    "Visakha",
    "Jyeshtha",
    "Ashadha",
    "Sravana",
    "Bhadrapaha",
    "Asvini",
    "Krittika",
    "Mrigasiras",
];

/// Name of the year in the 12-year cycle.
pub fn year_name(my: i32) -> &'static str {
    YEAR_NAMES[my.rem_euclid(12) as usize]
}

/// Check that a Myanmar date exists.
pub fn validate_myanmar(my: i32, mm: i32, md: i32) -> Result<(), CalendarError> {
    if !(0..=14).contains(&mm) {
        return Err(CalendarError::InvalidMonth { month: mm });
    }
    let year_type = year_info(my).year_type;
    if mm == 0 && !year_type.is_watat() {
        return Err(CalendarError::InvalidWatatMonth { year: my });
    }
    let max = month_length(mm, year_type);
    if md < 1 || md > max {
        return Err(CalendarError::InvalidDay {
            year: my,
            month: mm,
            day: md,
            max,
        });
    }
    // late months only exist when the year runs past Tabaung
    if mm >= 13 {
        let jdn = myanmar_to_julian(my, mm, md);
        if julian_to_myanmar(jdn).year != my {
            return Err(CalendarError::InvalidDay {
                year: my,
                month: mm,
                day: md,
                max: 0,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_year_1386() {
        let d = julian_to_myanmar(2_460_418);
        assert_eq!(d.year, 1386);
        assert_eq!(d.month, 1);
        assert_eq!(d.day, 9);
        assert_eq!(d.year_type, YearType::Common);
        assert_eq!(myanmar_to_julian(1386, 1, 9), 2_460_418);
    }

    #[test]
    fn j2000_is_nadaw() {
        let d = julian_to_myanmar(2_451_545);
        assert_eq!((d.year, d.month, d.day), (1361, 9, 25));
        assert_eq!(d.year_type, YearType::LittleWatat);
        assert_eq!(d.month_kind(), Some(MyanmarMonth::Nadaw));
        assert_eq!(d.moon_phase(), MoonPhase::Waning);
        assert_eq!(d.fortnight_day(), 10);
    }

    #[test]
    fn first_day_of_tagu_is_day_one() {
        let info = year_info(1386);
        let d = julian_to_myanmar(info.first_day_of_tagu);
        assert_eq!((d.year, d.month, d.day), (1386, 1, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(month_length(1, YearType::Common), 29);
        assert_eq!(month_length(2, YearType::Common), 30);
        assert_eq!(month_length(3, YearType::Common), 29);
        assert_eq!(month_length(3, YearType::LittleWatat), 29);
        assert_eq!(month_length(3, YearType::BigWatat), 30);
        assert_eq!(month_length(0, YearType::LittleWatat), 30);
        assert_eq!(month_length(4, YearType::LittleWatat), 30);
    }

    #[test]
    fn phases_through_a_month() {
        let yt = YearType::Common;
        assert_eq!(moon_phase(1, 2, yt), MoonPhase::Waxing);
        assert_eq!(moon_phase(14, 2, yt), MoonPhase::Waxing);
        assert_eq!(moon_phase(15, 2, yt), MoonPhase::FullMoon);
        assert_eq!(moon_phase(16, 2, yt), MoonPhase::Waning);
        assert_eq!(moon_phase(29, 2, yt), MoonPhase::Waning);
        assert_eq!(moon_phase(30, 2, yt), MoonPhase::NewMoon);
        assert_eq!(moon_phase(29, 1, yt), MoonPhase::NewMoon);
    }

    #[test]
    fn fortnight_days() {
        assert_eq!(fortnight_day(1), 1);
        assert_eq!(fortnight_day(15), 15);
        assert_eq!(fortnight_day(16), 1);
        assert_eq!(fortnight_day(30), 15);
    }

    #[test]
    fn day_from_fortnight_inverts() {
        for yt in [YearType::Common, YearType::LittleWatat, YearType::BigWatat] {
            for mm in 0..=14 {
                for md in 1..=month_length(mm, yt) {
                    let back = day_from_fortnight(fortnight_day(md), moon_phase(md, mm, yt), mm, yt);
                    assert_eq!(back, md, "mm {mm} md {md} {yt:?}");
                }
            }
        }
    }

    #[test]
    fn sasana_turns_over_at_kason_full_moon() {
        assert_eq!(sasana_year(1386, 1, 9), 2567);
        assert_eq!(sasana_year(1386, 2, 15), 2567);
        assert_eq!(sasana_year(1386, 2, 16), 2568);
        assert_eq!(sasana_year(1386, 12, 1), 2568);
    }

    #[test]
    fn year_names_cycle() {
        assert_eq!(year_name(0), "Hpusha");
        assert_eq!(year_name(11), "Mrigasiras");
        assert_eq!(year_name(1386), year_name(1386 - 12));
        assert_eq!(year_name(-1), "Mrigasiras");
    }

    #[test]
    fn validation() {
        assert!(validate_myanmar(1386, 1, 1).is_ok());
        assert_eq!(
            validate_myanmar(1386, 15, 1),
            Err(CalendarError::InvalidMonth { month: 15 })
        );
        assert_eq!(
            validate_myanmar(1386, 0, 1),
            Err(CalendarError::InvalidWatatMonth { year: 1386 })
        );
        assert!(validate_myanmar(1385, 0, 1).is_ok());
        assert!(matches!(
            validate_myanmar(1386, 1, 30),
            Err(CalendarError::InvalidDay { max: 29, .. })
        ));
    }
}
