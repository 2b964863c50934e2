//! Myanmar calendar date-time values.
//!
//! [`MyanmarDateTime`] pairs a UTC Julian Date with the [`ClockConfig`]
//! used to read it, and exposes the Western date, the Myanmar date, the
//! astrological days, holidays and Thingyan for that moment.
//!
//! # Quick start
//!
//! ```
//! use mmcal_rs::*;
//!
//! let dt = MyanmarDateTime::from_western(2024, 4, 17, 12, 0, 0.0, ClockConfig::default());
//! assert_eq!(dt.myanmar_year(), 1386);
//! assert_eq!(dt.holidays(), vec![Holiday::MyanmarNewYearDay]);
//!
//! let window = thingyan(1386);
//! assert_eq!(window.new_year_day, dt.jdn_local());
//! ```

pub mod convenience;
pub mod datetime;
pub mod error;

// Primary re-exports, `use mmcal_rs::*` should be enough for most callers
pub use convenience::{holidays_in_year, holidays_on, myanmar_date_of, thingyan, western_date_of};
pub use datetime::MyanmarDateTime;
pub use error::MmcalError;

// Re-export the building blocks so callers don't need the lower crates directly.
pub use mmcal_base::{
    AstroDay, AstroInfo, CalendarError, Mahabote, MoonPhase, MyanmarDate, MyanmarMonth,
    NagahleDirection, Nakhat, Pyathada, Sabbath, ThingyanWindow, YearType,
};
pub use mmcal_holiday::{Holiday, HolidayList};
pub use mmcal_time::{CalendarType, ClockConfig, TimeError, Weekday, WesternDateTime};
