//! Myanmar year type and year boundaries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::watat::watat_for_year;

/// Days in a common Myanmar year (12 lunar months).
pub const COMMON_YEAR_DAYS: i32 = 354;

/// How far back the previous watat year is searched.
const WATAT_SEARCH_DEPTH: i32 = 3;

/// Myanmar year type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YearType {
    /// 12 months, 354 days.
    #[default]
    Common,
    /// Extra Waso month, 384 days.
    LittleWatat,
    /// Extra Waso month and an extra day in Nayon, 385 days.
    BigWatat,
}

impl YearType {
    /// Numeric code (Common=0, LittleWatat=1, BigWatat=2).
    pub const fn code(self) -> i32 {
        match self {
            Self::Common => 0,
            Self::LittleWatat => 1,
            Self::BigWatat => 2,
        }
    }

    /// Year type for a code; codes above 2 saturate to [`YearType::BigWatat`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            i32::MIN..=0 => Self::Common,
            1 => Self::LittleWatat,
            _ => Self::BigWatat,
        }
    }

    /// Whether the year has an intercalary month.
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::LittleWatat => "Little Watat",
            Self::BigWatat => "Big Watat",
        }
    }
}

/// Year-level data for a Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyanmarYearInfo {
    /// Year type.
    pub year_type: YearType,
    /// JDN of the first day of Tagu.
    pub first_day_of_tagu: i64,
    /// JDN of the full moon of (second) Waso.
    pub full_moon_of_waso: i64,
    /// Consecutive watat full moons were not 30 or 31 days apart.
    pub watat_discrepancy: bool,
}

/// Resolve year type and boundaries of a Myanmar year.
///
/// Walks back at most three years to find the previous watat year. When
/// none is found the three-year-back values are used as they are.
pub fn year_info(my: i32) -> MyanmarYearInfo {
    let this = watat_for_year(my);

    let mut back = 0;
    let prev = loop {
        back += 1;
        let prev = watat_for_year(my - back);
        if prev.is_watat || back >= WATAT_SEARCH_DEPTH {
            break prev;
        }
    };
    let span = (COMMON_YEAR_DAYS * back) as i64;

    let mut year_type = YearType::Common;
    let mut watat_discrepancy = false;
    let full_moon_of_waso = if this.is_watat {
        let nd = (this.full_moon_jdn - prev.full_moon_jdn).rem_euclid(COMMON_YEAR_DAYS as i64);
        year_type = YearType::from_code((nd / 31) as i32 + 1);
        if nd != 30 && nd != 31 {
            watat_discrepancy = true;
            debug!(year = my, days = nd, "watat full moon spacing is not 30 or 31 days");
        }
        this.full_moon_jdn
    } else {
        prev.full_moon_jdn + span
    };

    MyanmarYearInfo {
        year_type,
        first_day_of_tagu: prev.full_moon_jdn + span - 102,
        full_moon_of_waso,
        watat_discrepancy,
    }
}

/// Number of days in a year of the given type (354, 384 or 385).
pub const fn year_length(year_type: YearType) -> i32 {
    match year_type {
        YearType::Common => 354,
        YearType::LittleWatat => 384,
        YearType::BigWatat => 385,
    }
}
