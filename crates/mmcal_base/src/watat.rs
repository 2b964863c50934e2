//! Watat (intercalary month) determination.
//!
//! From era 2 onward a year is watat when its excess lunar days pass a
//! threshold. Earlier eras follow the 19-year metonic cycle.

use mmcal_time::round_half_up;

use crate::era::{LUNAR_MONTH, MYANMAR_EPOCH, SOLAR_YEAR, era_constants};

/// Watat status of one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatatInfo {
    /// Year contains an intercalary Waso.
    pub is_watat: bool,
    /// JDN of the full moon of (second) Waso.
    pub full_moon_jdn: i64,
}

/// Excess days of a year over whole lunar months, folded above the era threshold.
pub fn excess_days(my: i32, excess_day_months: i32) -> f64 {
    let threshold = (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * (12 - excess_day_months) as f64;
    let ed = (SOLAR_YEAR * (my as f64 + 3739.0)) % LUNAR_MONTH;
    if ed < threshold { ed + LUNAR_MONTH } else { ed }
}

/// Watat status and Waso full moon for a Myanmar year.
pub fn watat_for_year(my: i32) -> WatatInfo {
    let c = era_constants(my);
    let ed = excess_days(my, c.excess_day_months);
    let full_moon = SOLAR_YEAR * my as f64 + MYANMAR_EPOCH - ed + 4.5 * LUNAR_MONTH + c.watat_offset;

    let watat = if c.era.id() >= 2.0 {
        let threshold = LUNAR_MONTH - (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * c.excess_day_months as f64;
        ed >= threshold
    } else {
        metonic_watat(my)
    };

    WatatInfo {
        is_watat: watat ^ c.watat_exception,
        full_moon_jdn: round_half_up(full_moon) as i64,
    }
}

/// 19-year cycle rule: remainders 12..=18 of `(7y + 2) mod 19` are watat.
pub fn metonic_watat(my: i32) -> bool {
    (my as i64 * 7 + 2).rem_euclid(19) >= 12
}
