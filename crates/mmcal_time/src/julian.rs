//! Julian Date ↔ Western calendar conversions.
//!
//! Dates are proleptic: no component is validated, so out-of-range months
//! or days simply carry into neighbouring months. British dates switch from
//! Julian to Gregorian rules at [`ClockConfig::gregorian_start`].

use crate::config::{CalendarType, ClockConfig};
use crate::western::WesternDateTime;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Offset between the Gregorian day count used by [`julian_to_western`]
/// and the Julian Day Number (JDN of 0000-03-01 Gregorian).
const GREGORIAN_MARCH_EPOCH: i64 = 1_721_119;

/// Round half up, matching the conventional JD → JDN rounding.
///
/// `f64::round` rounds half away from zero, which differs for negative
/// halves; calendar arithmetic needs `floor(x + 0.5)`.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Julian Day Number of the civil day containing `jd` (days start at midnight).
#[inline]
pub fn jdn_from_jd(jd: f64) -> i64 {
    round_half_up(jd) as i64
}

/// Fraction of a day measured from noon.
pub fn time_to_day_fraction(hour: i32, minute: i32, second: f64) -> f64 {
    (hour as f64 - 12.0) / 24.0 + minute as f64 / 1440.0 + second / SECONDS_PER_DAY
}

/// Day-count terms shared by both calendars, with March as month 3.
///
/// Returns `(base, shifted_year)` where `base` still lacks the
/// calendar-specific century correction.
fn march_based_day_count(year: i32, month: i32, day: i32) -> (i64, i64) {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let base = day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    (base, y)
}

/// Convert a Western date-time to a Julian Date.
///
/// Components are interpreted in the calendar selected by `config`; the
/// time-zone offset is not applied here (callers shift local times).
///
/// # Examples
///
/// ```
/// use mmcal_time::{ClockConfig, western_to_julian};
///
/// let jd = western_to_julian(2000, 1, 1, 12, 0, 0.0, &ClockConfig::default());
/// assert_eq!(jd, 2_451_545.0);
/// ```
pub fn western_to_julian(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    config: &ClockConfig,
) -> f64 {
    let (base, y) = march_based_day_count(year, month, day);
    let gregorian = base - y.div_euclid(100) + y.div_euclid(400) - 32_045;
    let julian = base - 32_083;
    let jdn = match config.calendar {
        CalendarType::Gregorian => gregorian,
        CalendarType::Julian => julian,
        CalendarType::British => {
            if gregorian < config.gregorian_start {
                julian.min(config.gregorian_start)
            } else {
                gregorian
            }
        }
    };
    jdn as f64 + time_to_day_fraction(hour, minute, second)
}

/// Whether a British date falls in the days dropped at the Gregorian switch
/// (1752-09-03..=13 with the default start).
pub(crate) fn in_british_gap(year: i32, month: i32, day: i32, config: &ClockConfig) -> bool {
    if config.calendar != CalendarType::British {
        return false;
    }
    let (base, y) = march_based_day_count(year, month, day);
    let gregorian = base - y.div_euclid(100) + y.div_euclid(400) - 32_045;
    let julian = base - 32_083;
    gregorian < config.gregorian_start && julian >= config.gregorian_start
}

/// Convert a Julian Date to a Western date-time.
///
/// The fraction of the day is split into hour and minute by successive
/// floor; the second keeps its sub-second part.
pub fn julian_to_western(jd: f64, config: &ClockConfig) -> WesternDateTime {
    let j = round_half_up(jd);
    let mut jf = jd + 0.5 - j;
    let j = j as i64;

    let (year, month, day) = if config.uses_julian_rules(jd) {
        julian_calendar_date(j)
    } else {
        gregorian_calendar_date(j)
    };

    jf *= 24.0;
    let hour = jf.floor();
    jf = (jf - hour) * 60.0;
    let minute = jf.floor();
    let second = (jf - minute) * 60.0;

    WesternDateTime {
        year,
        month,
        day,
        hour: hour as i32,
        minute: minute as i32,
        second,
    }
}

fn julian_calendar_date(jdn: i64) -> (i32, i32, i32) {
    let b = (jdn + 1524) as f64;
    let c = ((b - 122.1) / 365.25).floor();
    let f = (365.25 * c).floor();
    let e = ((b - f) / 30.6001).floor();
    let m = if e > 13.0 { e - 13.0 } else { e - 1.0 };
    let d = b - f - (30.6001 * e).floor();
    let y = if m < 3.0 { c - 4715.0 } else { c - 4716.0 };
    (y as i32, m as i32, d as i32)
}

fn gregorian_calendar_date(jdn: i64) -> (i32, i32, i32) {
    let j = jdn - GREGORIAN_MARCH_EPOCH;
    let mut y = (4 * j - 1).div_euclid(146_097);
    let j = 4 * j - 1 - 146_097 * y;
    let mut d = j.div_euclid(4);
    let j = (4 * d + 3).div_euclid(1461);
    d = 4 * d + 3 - 1461 * j;
    d = (d + 4).div_euclid(4);
    let mut m = (5 * d - 3).div_euclid(153);
    d = 5 * d - 3 - 153 * m;
    d = (d + 5).div_euclid(5);
    y = 100 * y + j;
    if m < 10 {
        m += 3;
    } else {
        m -= 9;
        y += 1;
    }
    (y as i32, m as i32, d as i32)
}

/// Number of days in a Western month (year rolls over after December).
///
/// Across the British transition this yields the shortened month, e.g.
/// September 1752 has 19 days.
pub fn western_month_length(year: i32, month: i32, config: &ClockConfig) -> i32 {
    let (next_year, next_month) = if month + 1 > 12 {
        (year + 1, (month + 1) % 12)
    } else {
        (year, month + 1)
    };
    let j1 = western_to_julian(year, month, 1, 12, 0, 0.0, config);
    let j2 = western_to_julian(next_year, next_month, 1, 12, 0, 0.0, config);
    (j2 - j1) as i32
}

/// Julian Date for a Unix timestamp in seconds.
pub fn unix_to_julian(unix_seconds: f64) -> f64 {
    UNIX_EPOCH_JD + unix_seconds / SECONDS_PER_DAY
}

/// Unix timestamp for a Julian Date.
///
/// Carries a half-second bias so that truncating the result to an integer
/// rounds to the nearest second.
pub fn julian_to_unix(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY + 0.5
}

/// Current Julian Date (UTC) from the system clock.
///
/// A clock set before 1970 yields the Unix epoch.
pub fn julian_now() -> f64 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    unix_to_julian(secs)
}
