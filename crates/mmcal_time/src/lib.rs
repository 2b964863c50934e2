//! Julian Date ↔ Western calendar conversions.
//!
//! This crate provides:
//! - Julian Date ↔ Western date-time for British, Gregorian and Julian calendars
//! - A single [`ClockConfig`] carrying calendar type, Gregorian start and time zone
//! - Unix-time and system-clock helpers
//! - `%`-token formatting and digit-string parsing

pub mod config;
pub mod error;
pub mod format;
pub mod julian;
pub mod western;

pub use config::{ALL_CALENDAR_TYPES, CalendarType, ClockConfig, DEFAULT_GREGORIAN_START};
pub use error::TimeError;
pub use format::{DEFAULT_WESTERN_PATTERN, MONTH_NAMES, format_julian, format_tz, parse_julian};
pub use julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, jdn_from_jd, julian_now, julian_to_unix, julian_to_western,
    round_half_up, time_to_day_fraction, unix_to_julian, western_month_length, western_to_julian,
};
pub use western::{ALL_WEEKDAYS, Weekday, WesternDateTime, validate_western, weekday_of_jdn};
