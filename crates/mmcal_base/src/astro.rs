//! Astrological day classification.
//!
//! Sabbath, yatyaza, pyathada, nagahle direction, mahabote, nakhat and the
//! named auspicious or inauspicious day categories of a Myanmar date.
//!
//! Every predicate is an independent function of month, day, weekday or
//! year. Late Tagu/Kason fold to Tagu/Kason and First Waso counts as Waso.

use mmcal_time::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::{MyanmarDate, fortnight_day, julian_to_myanmar, month_length};
use crate::year::YearType;

/// Sabbath (uposatha) state of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sabbath {
    Sabbath,
    SabbathEve,
}

impl Sabbath {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sabbath => "Sabbath",
            Self::SabbathEve => "Sabbath Eve",
        }
    }
}

/// Pyathada state of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pyathada {
    Pyathada,
    AfternoonPyathada,
}

impl Pyathada {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pyathada => "Pyathada",
            Self::AfternoonPyathada => "Afternoon Pyathada",
        }
    }
}

/// Direction the dragon (naga) head faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NagahleDirection {
    West,
    North,
    East,
    South,
}

const NAGAHLE_DIRECTIONS: [NagahleDirection; 4] = [
    NagahleDirection::West,
    NagahleDirection::North,
    NagahleDirection::East,
    NagahleDirection::South,
];

impl NagahleDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::West => "West",
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
        }
    }
}

/// Mahabote house of a year and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mahabote {
    Binga,
    Atun,
    Yaza,
    Adipati,
    Marana,
    Thike,
    Puti,
}

/// All Mahabote houses in order (index 0 = Binga).
pub const ALL_MAHABOTES: [Mahabote; 7] = [
    Mahabote::Binga,
    Mahabote::Atun,
    Mahabote::Yaza,
    Mahabote::Adipati,
    Mahabote::Marana,
    Mahabote::Thike,
    Mahabote::Puti,
];

impl Mahabote {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binga => "Binga",
            Self::Atun => "Atun",
            Self::Yaza => "Yaza",
            Self::Adipati => "Adipati",
            Self::Marana => "Marana",
            Self::Thike => "Thike",
            Self::Puti => "Puti",
        }
    }
}

/// Nakhat of a year in the three-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakhat {
    Ogre,
    Elf,
    Human,
}

impl Nakhat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ogre => "Ogre",
            Self::Elf => "Elf",
            Self::Human => "Human",
        }
    }
}

/// Named astrological day categories reported by [`astro_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstroDay {
    Thamanyo,
    Amyeittasote,
    Warameittugyi,
    Warameittunge,
    Yatpote,
    Thamaphyu,
    Nagapor,
    Yatyotema,
    Mahayatkyan,
    Shanyat,
}

/// All categories in reporting order.
pub const ALL_ASTRO_DAYS: [AstroDay; 10] = [
    AstroDay::Thamanyo,
    AstroDay::Amyeittasote,
    AstroDay::Warameittugyi,
    AstroDay::Warameittunge,
    AstroDay::Yatpote,
    AstroDay::Thamaphyu,
    AstroDay::Nagapor,
    AstroDay::Yatyotema,
    AstroDay::Mahayatkyan,
    AstroDay::Shanyat,
];

impl AstroDay {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thamanyo => "Thamanyo",
            Self::Amyeittasote => "Amyeittasote",
            Self::Warameittugyi => "Warameittugyi",
            Self::Warameittunge => "Warameittunge",
            Self::Yatpote => "Yatpote",
            Self::Thamaphyu => "Thamaphyu",
            Self::Nagapor => "Nagapor",
            Self::Yatyotema => "Yatyotema",
            Self::Mahayatkyan => "Mahayatkyan",
            Self::Shanyat => "Shanyat",
        }
    }

    fn applies(self, date: &MyanmarDate, weekday: Weekday) -> bool {
        let (mm, md) = (date.month, date.day);
        match self {
            Self::Thamanyo => thamanyo(mm, weekday),
            Self::Amyeittasote => amyeittasote(md, weekday),
            Self::Warameittugyi => warameittugyi(md, weekday),
            Self::Warameittunge => warameittunge(md, weekday),
            Self::Yatpote => yatpote(md, weekday),
            Self::Thamaphyu => thamaphyu(md, weekday),
            Self::Nagapor => nagapor(md, weekday),
            Self::Yatyotema => yatyotema(mm, md),
            Self::Mahayatkyan => mahayatkyan(mm, md),
            Self::Shanyat => shanyat(mm, md),
        }
    }
}

/// Fold late months onto Tagu/Kason and First Waso onto Waso (result 1..=12).
fn base_month(mm: i32) -> i32 {
    let late = mm.div_euclid(13);
    let mm = mm.rem_euclid(13) + late;
    if mm <= 0 { 4 } else { mm }
}

#[inline]
fn wd(weekday: Weekday) -> i32 {
    weekday.index() as i32
}

#[inline]
fn by_weekday(table: &[i32; 7], weekday: Weekday) -> i32 {
    table[weekday.index() as usize]
}

/// Sabbath on days 8, 15, 23 and the last day; eve on the day before each.
pub fn sabbath(md: i32, mm: i32, year_type: YearType) -> Option<Sabbath> {
    let mml = month_length(mm, year_type);
    if md == 7 || md == 14 || md == 22 || md == mml - 1 {
        Some(Sabbath::SabbathEve)
    } else if md == 8 || md == 15 || md == 23 || md == mml {
        Some(Sabbath::Sabbath)
    } else {
        None
    }
}

/// Yatyaza: two weekdays per month, cycling every four months.
pub fn yatyaza(mm: i32, weekday: Weekday) -> bool {
    let m1 = mm.rem_euclid(4);
    let wd1 = m1 / 2 + 4;
    let wd2 = (1 - m1 / 2 + m1 % 2) * (1 + 2 * (m1 % 2));
    wd(weekday) == wd1 || wd(weekday) == wd2
}

/// Pyathada (full day) or afternoon pyathada for a month and weekday.
pub fn pyathada(mm: i32, weekday: Weekday) -> Option<Pyathada> {
    const FULL: [i32; 7] = [1, 3, 3, 0, 2, 1, 2];
    let m1 = mm.rem_euclid(4);
    if m1 == by_weekday(&FULL, weekday) {
        Some(Pyathada::Pyathada)
    } else if m1 == 0 && weekday == Weekday::Wednesday {
        Some(Pyathada::AfternoonPyathada)
    } else {
        None
    }
}

/// Direction the dragon's head faces in a month.
pub fn nagahle(mm: i32) -> NagahleDirection {
    let mm = if mm <= 0 { 4 } else { mm };
    NAGAHLE_DIRECTIONS[(mm.rem_euclid(12) / 3) as usize]
}

/// Mahabote sign of a year and weekday.
pub fn mahabote(my: i32, weekday: Weekday) -> Mahabote {
    ALL_MAHABOTES[(my - wd(weekday)).rem_euclid(7) as usize]
}

/// Nakhat of a Myanmar year, on a three-year cycle.
pub fn nakhat(my: i32) -> Nakhat {
    match my.rem_euclid(3) {
        0 => Nakhat::Ogre,
        1 => Nakhat::Elf,
        _ => Nakhat::Human,
    }
}

/// Thamanyo: two consecutive weekdays per month.
pub fn thamanyo(mm: i32, weekday: Weekday) -> bool {
    let mm = base_month(mm);
    let m1 = mm - 1 - mm / 9;
    let wd1 = (m1 * 2 - m1 / 8).rem_euclid(7);
    (wd(weekday) + 7 - wd1).rem_euclid(7) <= 1
}

/// Amyeittasote: one fortnight day per weekday.
pub fn amyeittasote(md: i32, weekday: Weekday) -> bool {
    fortnight_day(md) == by_weekday(&[5, 8, 3, 7, 2, 4, 1], weekday)
}

/// Warameittugyi: one fortnight day per weekday.
pub fn warameittugyi(md: i32, weekday: Weekday) -> bool {
    fortnight_day(md) == by_weekday(&[7, 1, 4, 8, 9, 6, 3], weekday)
}

/// Warameittunge: fortnight day tied to the weekday number.
pub fn warameittunge(md: i32, weekday: Weekday) -> bool {
    12 - fortnight_day(md) == (wd(weekday) + 6) % 7
}

/// Yatpote: one fortnight day per weekday.
pub fn yatpote(md: i32, weekday: Weekday) -> bool {
    fortnight_day(md) == by_weekday(&[8, 1, 4, 6, 9, 8, 7], weekday)
}

/// Thamaphyu: up to three fortnight days per weekday.
pub fn thamaphyu(md: i32, weekday: Weekday) -> bool {
    let mf = fortnight_day(md);
    mf == by_weekday(&[1, 2, 6, 6, 5, 6, 7], weekday)
        || mf == by_weekday(&[0, 1, 0, 0, 0, 3, 3], weekday)
        || (mf == 4 && weekday == Weekday::Thursday)
}

/// Nagapor by day of the month and weekday.
///
/// Uses the day of the month, not the fortnight day.
pub fn nagapor(md: i32, weekday: Weekday) -> bool {
    md == by_weekday(&[26, 21, 2, 10, 18, 2, 21], weekday)
        || md == by_weekday(&[17, 19, 1, 0, 9, 0, 0], weekday)
        || (md == 2 && weekday == Weekday::Sunday)
        || (matches!(md, 4 | 12 | 18) && weekday == Weekday::Monday)
}

/// Yatyotema: one fortnight day per month pair.
pub fn yatyotema(mm: i32, md: i32) -> bool {
    let mm = base_month(mm);
    let m1 = if mm % 2 == 1 { mm } else { (mm + 9) % 12 };
    fortnight_day(md) == (m1 + 4) % 12 + 1
}

/// Mahayatkyan: one fortnight day per two months.
pub fn mahayatkyan(mm: i32, md: i32) -> bool {
    let mm = if mm <= 0 { 4 } else { mm };
    fortnight_day(md) == (mm.rem_euclid(12) / 2 + 4) % 6 + 1
}

/// Shanyat: one fortnight day per month.
pub fn shanyat(mm: i32, md: i32) -> bool {
    const BY_MONTH: [i32; 12] = [8, 8, 2, 2, 9, 3, 3, 5, 1, 4, 7, 4];
    fortnight_day(md) == BY_MONTH[(base_month(mm) - 1) as usize]
}

/// All per-day astrological results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstroInfo {
    /// Sabbath or sabbath eve.
    pub sabbath: Option<Sabbath>,
    /// Inauspicious weekday for the month.
    pub yatyaza: bool,
    /// Pyathada or afternoon pyathada.
    pub pyathada: Option<Pyathada>,
    /// Dragon head direction for the month.
    pub nagahle: NagahleDirection,
    /// Mahabote house for year and weekday.
    pub mahabote: Mahabote,
    /// Nakhat of the year.
    pub nakhat: Nakhat,
    /// Named day categories that apply, in reporting order.
    pub days: Vec<AstroDay>,
}

/// Categories from [`ALL_ASTRO_DAYS`] that apply to a date.
pub fn astro_days_for(date: &MyanmarDate, weekday: Weekday) -> Vec<AstroDay> {
    ALL_ASTRO_DAYS
        .into_iter()
        .filter(|d| d.applies(date, weekday))
        .collect()
}

/// Named astrological day categories for a JDN.
pub fn astro_days(jdn: i64) -> Vec<AstroDay> {
    astro_days_for(&julian_to_myanmar(jdn), Weekday::from_jdn(jdn))
}

/// Full astrological classification of a date.
pub fn astro_info(date: &MyanmarDate, weekday: Weekday) -> AstroInfo {
    AstroInfo {
        sabbath: sabbath(date.day, date.month, date.year_type),
        yatyaza: yatyaza(date.month, weekday),
        pyathada: pyathada(date.month, weekday),
        nagahle: nagahle(date.month),
        mahabote: mahabote(date.year, weekday),
        nakhat: nakhat(date.year),
        days: astro_days_for(date, weekday),
    }
}

/// Full astrological classification of a JDN.
pub fn astro_info_for_jdn(jdn: i64) -> AstroInfo {
    astro_info(&julian_to_myanmar(jdn), Weekday::from_jdn(jdn))
}
