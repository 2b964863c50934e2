//! Myanmar months and moon phases.

use serde::{Deserialize, Serialize};

use crate::year::YearType;

/// Myanmar lunar month, numbered by its calendar code.
///
/// `FirstWaso` (code 0) exists only in watat years; `LateTagu` (13) and
/// `LateKason` (14) are the days of a year that spill past Tabaung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MyanmarMonth {
    FirstWaso,
    Tagu,
    Kason,
    Nayon,
    Waso,
    Wagaung,
    Tawthalin,
    Thadingyut,
    Tazaungmon,
    Nadaw,
    Pyatho,
    Tabodwe,
    Tabaung,
    LateTagu,
    LateKason,
}

/// All months in code order (index 0 = First Waso).
pub const ALL_MYANMAR_MONTHS: [MyanmarMonth; 15] = [
    MyanmarMonth::FirstWaso,
    MyanmarMonth::Tagu,
    MyanmarMonth::Kason,
    MyanmarMonth::Nayon,
    MyanmarMonth::Waso,
    MyanmarMonth::Wagaung,
    MyanmarMonth::Tawthalin,
    MyanmarMonth::Thadingyut,
    MyanmarMonth::Tazaungmon,
    MyanmarMonth::Nadaw,
    MyanmarMonth::Pyatho,
    MyanmarMonth::Tabodwe,
    MyanmarMonth::Tabaung,
    MyanmarMonth::LateTagu,
    MyanmarMonth::LateKason,
];

const MONTH_NAMES: [&str; 15] = [
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
    "Late Tagu",
    "Late Kason",
];

impl MyanmarMonth {
    /// Month for a calendar code (0..=14).
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| ALL_MYANMAR_MONTHS.get(i).copied())
    }

    /// Calendar code (First Waso=0 .. Late Kason=14).
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// English name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.code() as usize]
    }

    /// Name as shown in a year of the given type ("Second Waso" in watat years).
    pub fn display_name(self, year_type: YearType) -> String {
        match self {
            Self::Waso if year_type.is_watat() => format!("Second {}", self.name()),
            _ => self.name().to_string(),
        }
    }
}

/// Phase of the moon on a Myanmar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    Waxing,
    FullMoon,
    Waning,
    NewMoon,
}

/// All moon phases in code order.
pub const ALL_MOON_PHASES: [MoonPhase; 4] = [
    MoonPhase::Waxing,
    MoonPhase::FullMoon,
    MoonPhase::Waning,
    MoonPhase::NewMoon,
];

impl MoonPhase {
    /// Numeric code (Waxing=0, FullMoon=1, Waning=2, NewMoon=3).
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Phase for a code, folded mod 4.
    pub const fn from_code(code: i32) -> Self {
        ALL_MOON_PHASES[code.rem_euclid(4) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Waxing",
            Self::FullMoon => "Full Moon",
            Self::Waning => "Waning",
            Self::NewMoon => "New Moon",
        }
    }
}
