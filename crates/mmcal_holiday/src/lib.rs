//! Myanmar holiday classification.
//!
//! This crate provides:
//! - Public holidays, including the Thingyan days and substitute holidays
//! - A second list of observances and religious days
//! - Easter by the Meeus/Jones/Butcher rule
//!
//! Holidays are keyed by JDN; Western dates are taken on the default
//! British calendar.

mod day;
pub mod holiday;
pub mod observance;
pub mod public;

use serde::{Deserialize, Serialize};

pub use holiday::{Holiday, holiday_names};
pub use observance::{EASTER_START_YEAR, easter_jdn, holidays_alt};
pub use public::{SUBSTITUTE_HOLIDAYS, THINGYAN_START_YEAR, holidays, is_public_holiday};

/// Which holiday list to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayList {
    /// [`holidays`].
    #[default]
    Public,
    /// [`holidays_alt`].
    Observance,
}

impl HolidayList {
    /// Holidays on `jdn` from this list.
    pub fn on(self, jdn: i64) -> Vec<Holiday> {
        match self {
            Self::Public => holidays(jdn),
            Self::Observance => holidays_alt(jdn),
        }
    }
}

/// Days with at least one holiday in `start..end`, with their holidays.
pub fn holidays_between(start: i64, end: i64, list: HolidayList) -> Vec<(i64, Vec<Holiday>)> {
    (start..end)
        .map(|jdn| (jdn, list.on(jdn)))
        .filter(|(_, h)| !h.is_empty())
        .collect()
}
