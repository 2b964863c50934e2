//! Western calendar date-time and weekday types.

use serde::{Deserialize, Serialize};

use crate::config::ClockConfig;
use crate::error::TimeError;
use crate::julian::{in_british_gap, western_month_length};

/// Western calendar date-time with sub-second precision.
///
/// Produced by [`crate::julian_to_western`]; the numeric conversions never
/// validate, see [`validate_western`] for the strict check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WesternDateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl WesternDateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Whole seconds, floored so the value never reaches 60.
    pub fn whole_second(&self) -> i32 {
        self.second.floor() as i32
    }

    /// Milliseconds within the second, floored.
    pub fn millisecond(&self) -> i32 {
        ((self.second - self.second.floor()) * 1000.0).floor() as i32
    }

    /// Hour on a 12-hour clock (0 becomes 12).
    pub fn hour12(&self) -> i32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

impl std::fmt::Display for WesternDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.whole_second()
        )
    }
}

/// Check Western components against the calendar in `config`.
pub fn validate_western(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    config: &ClockConfig,
) -> Result<(), TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth { month });
    }
    let max = western_month_length(year, month, config);
    // the British transition month is short but keeps its day numbers (1..=30)
    let max = max.max(day_span_of_month(year, month));
    if day < 1 || day > max || in_british_gap(year, month, day, config) {
        return Err(TimeError::InvalidDay {
            year,
            month,
            day,
            max,
        });
    }
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0.0..60.0).contains(&second) {
        return Err(TimeError::InvalidTime {
            hour,
            minute,
            second,
        });
    }
    Ok(())
}

fn day_span_of_month(year: i32, month: i32) -> i32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of the week, numbered from Saturday as the Myanmar calendar does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All weekdays in order (index 0 = Saturday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Saturday,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

impl Weekday {
    /// Weekday of a Julian Day Number.
    pub const fn from_jdn(jdn: i64) -> Self {
        ALL_WEEKDAYS[(jdn + 2).rem_euclid(7) as usize]
    }

    /// 0-based index (Saturday=0 .. Friday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Saturday => 0,
            Self::Sunday => 1,
            Self::Monday => 2,
            Self::Tuesday => 3,
            Self::Wednesday => 4,
            Self::Thursday => 5,
            Self::Friday => 6,
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }

    /// Three-letter abbreviation (e.g. "Sat").
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

/// Weekday number of a JDN (0 = Saturday).
#[inline]
pub fn weekday_of_jdn(jdn: i64) -> i32 {
    (jdn + 2).rem_euclid(7) as i32
}
