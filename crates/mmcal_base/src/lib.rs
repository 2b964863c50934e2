//! Myanmar calendar arithmetic built on Julian Day Numbers.
//!
//! This crate provides:
//! - Era constants and watat (intercalary year) resolution
//! - Year type and year boundaries, JDN ↔ Myanmar date conversion
//! - Moon phase, fortnight day, month and year lengths, Sasana year
//! - Astrological day classification
//! - Thingyan (New Year festival) moments and day window
//! - `&`-token Myanmar date formatting
//!
//! Everything here is pure arithmetic on integer and floating-point day
//! counts; the Western side lives in `mmcal_time`.

pub mod astro;
pub mod calendar;
pub mod era;
pub mod error;
pub mod format;
pub mod month;
pub mod thingyan;
pub mod watat;
pub mod year;

pub use astro::{
    ALL_ASTRO_DAYS, ALL_MAHABOTES, AstroDay, AstroInfo, Mahabote, NagahleDirection, Nakhat,
    Pyathada, Sabbath, amyeittasote, astro_days, astro_days_for, astro_info, astro_info_for_jdn,
    mahabote, mahayatkyan, nagahle, nagapor, nakhat, pyathada, sabbath, shanyat, thamanyo,
    thamaphyu, warameittugyi, warameittunge, yatpote, yatyaza, yatyotema,
};
pub use calendar::{
    MyanmarDate, day_from_fortnight, fortnight_day, julian_to_myanmar, month_length, moon_phase,
    myanmar_to_julian, myanmar_year_of, sasana_year, validate_myanmar, year_name,
};
pub use era::{
    ALL_ERAS, Era, EraConstants, LUNAR_MONTH, MYANMAR_EPOCH, SOLAR_YEAR, THIRD_ERA_START,
    era_constants,
};
pub use error::CalendarError;
pub use format::{DEFAULT_MYANMAR_PATTERN, format_myanmar, format_myanmar_date};
pub use month::{ALL_MOON_PHASES, ALL_MYANMAR_MONTHS, MoonPhase, MyanmarMonth};
pub use thingyan::{
    AKYA_INTERVAL, AKYA_INTERVAL_OLD, ThingyanMoments, ThingyanWindow, akya_interval,
    thingyan_moments, thingyan_window,
};
pub use watat::{WatatInfo, excess_days, metonic_watat, watat_for_year};
pub use year::{COMMON_YEAR_DAYS, MyanmarYearInfo, YearType, year_info, year_length};
