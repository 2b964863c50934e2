//! Calendar facts about a day shared by both holiday lists.

use mmcal_base::{MoonPhase, MyanmarDate, julian_to_myanmar};
use mmcal_time::{ClockConfig, julian_to_western};

/// A JDN resolved on both calendars.
///
/// The Western date always uses the default British clock.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Day {
    pub jdn: i64,
    pub myanmar: MyanmarDate,
    pub phase: MoonPhase,
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Day {
    pub fn new(jdn: i64) -> Self {
        let myanmar = julian_to_myanmar(jdn);
        let western = julian_to_western(jdn as f64, &ClockConfig::default());
        Self {
            jdn,
            myanmar,
            phase: myanmar.moon_phase(),
            year: western.year,
            month: western.month,
            day: western.day,
        }
    }

    /// Western month and day.
    pub fn is(&self, month: i32, day: i32) -> bool {
        self.month == month && self.day == day
    }

    /// Full moon of Myanmar month `mm`.
    pub fn is_full_moon_of(&self, mm: i32) -> bool {
        self.myanmar.month == mm && self.phase == MoonPhase::FullMoon
    }

    /// Myanmar month and day.
    pub fn is_myanmar(&self, mm: i32, md: i32) -> bool {
        self.myanmar.month == mm && self.myanmar.day == md
    }
}
