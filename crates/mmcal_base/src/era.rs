//! Myanmar calendar eras and their constants.
//!
//! Calculation rules changed several times in history. Each era carries a
//! watat offset, the number of months used to test excess days, and two
//! sorted exception tables keyed by Myanmar year.

/// Solar year in days (1577917828 / 4320000 = 365.2587565...).
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Lunar month in days (1577917828 / 53433336 = 29.53058795...).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Julian Date of the beginning of Myanmar year 0.
pub const MYANMAR_EPOCH: f64 = 1_954_168.050_623;

/// First year of the third era (after independence).
pub const THIRD_ERA_START: i32 = 1312;

/// Calendar era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// First era, Makaranta system 1 (before 798).
    FirstMakaranta,
    /// First era, Makaranta system 2 (798-1099).
    SecondMakaranta,
    /// First era, Thandeikta (1100-1216).
    Thandeikta,
    /// Second era, British colony (1217-1311).
    Colonial,
    /// Third era, after independence (1312 onward).
    Independence,
}

/// All eras in chronological order.
pub const ALL_ERAS: [Era; 5] = [
    Era::FirstMakaranta,
    Era::SecondMakaranta,
    Era::Thandeikta,
    Era::Colonial,
    Era::Independence,
];

impl Era {
    /// Numeric era id (1.1, 1.2, 1.3, 2, 3).
    ///
    /// Ids of 2 and above use the excess-day watat rule.
    pub const fn id(self) -> f64 {
        match self {
            Self::FirstMakaranta => 1.1,
            Self::SecondMakaranta => 1.2,
            Self::Thandeikta => 1.3,
            Self::Colonial => 2.0,
            Self::Independence => 3.0,
        }
    }

    /// First Myanmar year of the era (`None` for the earliest).
    pub const fn start_year(self) -> Option<i32> {
        match self {
            Self::FirstMakaranta => None,
            Self::SecondMakaranta => Some(798),
            Self::Thandeikta => Some(1100),
            Self::Colonial => Some(1217),
            Self::Independence => Some(THIRD_ERA_START),
        }
    }

    /// Era of a Myanmar year.
    pub fn of_year(my: i32) -> Self {
        era_row(my).era
    }
}

/// Constants for one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraConstants {
    /// Era the year falls in.
    pub era: Era,
    /// Watat offset in days, including any full-moon exception.
    pub watat_offset: f64,
    /// Months used to find excess days; -1 selects the metonic rule.
    pub excess_day_months: i32,
    /// The watat decision for this year is inverted.
    pub watat_exception: bool,
}

struct EraRow {
    era: Era,
    watat_offset: f64,
    excess_day_months: i32,
    full_moon_exceptions: &'static [(i32, f64)],
    watat_exceptions: &'static [i32],
}

/// Eras, latest first. Exception tables are sorted by year.
const ERA_ROWS: [EraRow; 5] = [
    EraRow {
        era: Era::Independence,
        watat_offset: -0.5,
        excess_day_months: 8,
        full_moon_exceptions: &[(1377, 1.0)],
        watat_exceptions: &[1344, 1345],
    },
    EraRow {
        era: Era::Colonial,
        watat_offset: -1.0,
        excess_day_months: 4,
        full_moon_exceptions: &[(1234, 1.0), (1261, -1.0)],
        watat_exceptions: &[1263, 1264],
    },
    EraRow {
        era: Era::Thandeikta,
        watat_offset: -0.85,
        excess_day_months: -1,
        full_moon_exceptions: &[
            (1120, 1.0),
            (1126, -1.0),
            (1150, 1.0),
            (1172, -1.0),
            (1207, 1.0),
        ],
        watat_exceptions: &[1201, 1202],
    },
    EraRow {
        era: Era::SecondMakaranta,
        watat_offset: -1.1,
        excess_day_months: -1,
        full_moon_exceptions: &[
            (813, -1.0),
            (849, -1.0),
            (851, -1.0),
            (854, -1.0),
            (927, -1.0),
            (933, -1.0),
            (936, -1.0),
            (938, -1.0),
            (949, -1.0),
            (952, -1.0),
            (963, -1.0),
            (968, -1.0),
            (1039, -1.0),
        ],
        watat_exceptions: &[],
    },
    EraRow {
        era: Era::FirstMakaranta,
        watat_offset: -1.1,
        excess_day_months: -1,
        full_moon_exceptions: &[
            (205, 1.0),
            (246, 1.0),
            (471, 1.0),
            (572, -1.0),
            (651, 1.0),
            (653, 2.0),
            (656, 1.0),
            (672, 1.0),
            (729, 1.0),
            (767, -1.0),
        ],
        watat_exceptions: &[],
    },
];

fn era_row(my: i32) -> &'static EraRow {
    let idx = ERA_ROWS
        .iter()
        .position(|s| s.era.start_year().is_none_or(|start| my >= start))
        .unwrap_or(ERA_ROWS.len() - 1);
    &ERA_ROWS[idx]
}

/// Era constants for a Myanmar year, with exceptions applied.
pub fn era_constants(my: i32) -> EraConstants {
    let row = era_row(my);
    let mut watat_offset = row.watat_offset;
    if let Ok(i) = row
        .full_moon_exceptions
        .binary_search_by_key(&my, |&(year, _)| year)
    {
        watat_offset += row.full_moon_exceptions[i].1;
    }
    EraConstants {
        era: row.era,
        watat_offset,
        excess_day_months: row.excess_day_months,
        watat_exception: row.watat_exceptions.binary_search(&my).is_ok(),
    }
}
