//! Token formatting and digit-string parsing for Western date-times.
//!
//! Tokens are substituted one after another in a fixed order, so longer
//! tokens (`%yyyy`) are consumed before their prefixes (`%y`):
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `%yyyy` / `%yy` / `%y` | year, 4-digit / 2-digit / plain |
//! | `%MMM` / `%Mmm` / `%M` | month name, `JAN` / `Jan` / `January` |
//! | `%mm` / `%m` | month number, padded / plain |
//! | `%dd` / `%d` | day of month |
//! | `%HH` / `%H` | hour 0-23 |
//! | `%hh` / `%h` | hour 1-12 |
//! | `%AA` / `%aa` | `AM`/`PM`, `am`/`pm` |
//! | `%nn` / `%n` | minute |
//! | `%ss` / `%s` | second |
//! | `%lll` / `%l` | millisecond |
//! | `%WWW` / `%Www` / `%W` | weekday name, `SAT` / `Sat` / `Saturday` |
//! | `%w` | weekday number, 0 = Saturday |
//! | `%zz` | time zone, `+06:30` |

use crate::config::ClockConfig;
use crate::error::TimeError;
use crate::julian::{jdn_from_jd, julian_to_western, round_half_up, western_to_julian};
use crate::western::Weekday;

/// Default Western pattern, e.g. `Sat 2000-01-01 12:00:00 +00`.
pub const DEFAULT_WESTERN_PATTERN: &str = "%Www %y-%mm-%dd %HH:%nn:%ss %zz";

/// English month names (index 0 = January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn pad(value: i64, width: usize) -> String {
    let digits = format!("{:0width$}", value.abs() % 10_i64.pow(width as u32));
    if value < 0 { format!("-{digits}") } else { digits }
}

fn month_name(month: i32) -> &'static str {
    MONTH_NAMES[(month - 1).rem_euclid(12) as usize]
}

/// Render the UTC Julian Date `jd` in the time zone of `config`.
///
/// # Examples
///
/// ```
/// use mmcal_time::{ClockConfig, format_julian};
///
/// let s = format_julian(2_451_545.0, "%Www %yyyy-%mm-%dd %HH:%nn", &ClockConfig::default());
/// assert_eq!(s, "Sat 2000-01-01 12:00");
/// ```
pub fn format_julian(jd: f64, pattern: &str, config: &ClockConfig) -> String {
    let local = jd + config.tz_hours / 24.0;
    let dt = julian_to_western(local, config);
    let weekday = Weekday::from_jdn(jdn_from_jd(local));
    let second = dt.whole_second() as i64;
    let milli = dt.millisecond() as i64;
    let month = month_name(dt.month);
    let am_pm = dt.hour < 12;

    let replacements: [(&str, String); 27] = [
        ("%yyyy", pad(dt.year as i64, 4)),
        ("%yy", pad((dt.year % 100) as i64, 2)),
        ("%y", dt.year.to_string()),
        ("%MMM", month[..3].to_uppercase()),
        ("%Mmm", month[..3].to_string()),
        ("%mm", pad(dt.month as i64, 2)),
        ("%M", month.to_string()),
        ("%m", dt.month.to_string()),
        ("%dd", pad(dt.day as i64, 2)),
        ("%d", dt.day.to_string()),
        ("%HH", pad(dt.hour as i64, 2)),
        ("%H", dt.hour.to_string()),
        ("%hh", pad(dt.hour12() as i64, 2)),
        ("%h", dt.hour12().to_string()),
        ("%AA", if am_pm { "AM" } else { "PM" }.to_string()),
        ("%aa", if am_pm { "am" } else { "pm" }.to_string()),
        ("%nn", pad(dt.minute as i64, 2)),
        ("%n", dt.minute.to_string()),
        ("%ss", pad(second, 2)),
        ("%s", second.to_string()),
        ("%lll", pad(milli, 3)),
        ("%l", milli.to_string()),
        ("%WWW", weekday.short_name().to_uppercase()),
        ("%Www", weekday.short_name().to_string()),
        ("%W", weekday.name().to_string()),
        ("%w", weekday.index().to_string()),
        ("%zz", format_tz(config.tz_hours)),
    ];

    replacements
        .iter()
        .fold(pattern.to_string(), |acc, (token, value)| {
            acc.replace(token, value)
        })
}

/// Time-zone offset as `±HH`, with `:MM` when the offset has minutes.
pub fn format_tz(tz_hours: f64) -> String {
    let sign = if tz_hours < 0.0 { '-' } else { '+' };
    let abs = tz_hours.abs();
    let hours = abs.floor();
    let minutes = round_half_up((abs - hours) * 60.0) as i64;
    if minutes > 0 {
        format!("{sign}{:02}:{minutes:02}", hours as i64)
    } else {
        format!("{sign}{:02}", hours as i64)
    }
}

/// Parse a local date-time string into a UTC Julian Date.
///
/// Only ASCII digits are kept, so separators are free-form. Accepted digit
/// counts:
/// - 8: `yyyymmdd`, time defaults to 12:00:00
/// - 14: `yyyymmddhhnnss`
/// - 17: `yyyymmddhhnnssttt` (milliseconds)
///
/// The result is shifted by the time zone of `config` to UTC.
pub fn parse_julian(text: &str, config: &ClockConfig) -> Result<f64, TimeError> {
    let digits: Vec<i32> = text
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| (b - b'0') as i32)
        .collect();
    if !matches!(digits.len(), 8 | 14 | 17) {
        return Err(TimeError::Parse {
            input: text.to_string(),
            digits: digits.len(),
        });
    }

    let field = |start: usize, len: usize| {
        digits[start..start + len]
            .iter()
            .fold(0, |acc, d| acc * 10 + d)
    };

    let (year, month, day) = (field(0, 4), field(4, 2), field(6, 2));
    let (mut hour, mut minute, mut second) = (12, 0, 0.0);
    if digits.len() >= 14 {
        hour = field(8, 2);
        minute = field(10, 2);
        second = field(12, 2) as f64;
    }
    if digits.len() == 17 {
        second += field(14, 3) as f64 / 1000.0;
    }

    let jd = western_to_julian(year, month, day, hour, minute, second, config);
    Ok(jd - config.tz_hours / 24.0)
}
