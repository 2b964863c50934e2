//! `&`-token formatting of Myanmar dates.
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `&yyyy` / `&y` | Myanmar year, 4-digit / plain |
//! | `&YYYY` | Sasana year |
//! | `&mm` / `&m` | month code, padded / plain |
//! | `&M` | month name |
//! | `&P` | moon phase |
//! | `&dd` / `&d` | day of month |
//! | `&ff` / `&f` | fortnight day |

use mmcal_time::jdn_from_jd;

use crate::calendar::{MyanmarDate, julian_to_myanmar};

/// Default pattern, e.g. `1386 Tagu Waxing 09`.
pub const DEFAULT_MYANMAR_PATTERN: &str = "&yyyy &M &P &ff";

fn pad(value: i32, width: usize) -> String {
    let s = format!("{value:0width$}");
    s[s.len().saturating_sub(width)..].to_string()
}

/// Render a Myanmar date with `&` tokens.
pub fn format_myanmar_date(date: &MyanmarDate, pattern: &str) -> String {
    let sasana = date.sasana_year();
    let fortnight = date.fortnight_day();

    let replacements: [(&str, String); 11] = [
        ("&yyyy", pad(date.year, 4)),
        ("&YYYY", pad(sasana, 4)),
        ("&y", date.year.to_string()),
        ("&mm", pad(date.month, 2)),
        ("&M", date.month_name()),
        ("&m", date.month.to_string()),
        ("&P", date.moon_phase().name().to_string()),
        ("&dd", pad(date.day, 2)),
        ("&d", date.day.to_string()),
        ("&ff", pad(fortnight, 2)),
        ("&f", fortnight.to_string()),
    ];

    replacements
        .iter()
        .fold(pattern.to_string(), |acc, (token, value)| {
            acc.replace(token, value)
        })
}

/// Render the UTC Julian Date `jd` as a Myanmar date in time zone `tz_hours`.
///
/// # Examples
///
/// ```
/// use mmcal_base::format_myanmar;
///
/// assert_eq!(format_myanmar(2_460_418.0, "&y &M &P &f", 0.0), "1386 Tagu Waxing 9");
/// ```
pub fn format_myanmar(jd: f64, pattern: &str, tz_hours: f64) -> String {
    let date = julian_to_myanmar(jdn_from_jd(jd + tz_hours / 24.0));
    format_myanmar_date(&date, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern() {
        assert_eq!(
            format_myanmar(2_460_418.0, DEFAULT_MYANMAR_PATTERN, 0.0),
            "1386 Tagu Waxing 09"
        );
    }

    #[test]
    fn all_tokens() {
        // 2000-01-01, Nadaw 25 of 1361
        let s = format_myanmar(2_451_545.0, "&yyyy|&YYYY|&y|&mm|&M|&m|&P|&dd|&d|&ff|&f", 0.0);
        assert_eq!(s, "1361|2543|1361|09|Nadaw|9|Waning|25|25|10|10");
    }

    #[test]
    fn second_waso_in_watat_year() {
        let d = MyanmarDate {
            year: 1385,
            month: 4,
            day: 1,
            year_type: crate::year::YearType::BigWatat,
        };
        assert_eq!(format_myanmar_date(&d, "&M"), "Second Waso");
    }

    #[test]
    fn time_zone_shifts_day() {
        // 2024-04-16 20:00 UTC is already 2024-04-17 in Yangon
        let jd = 2_460_417.333_333;
        assert_eq!(format_myanmar(jd, "&d", 0.0), "8");
        assert_eq!(format_myanmar(jd, "&d", 6.5), "9");
    }

    #[test]
    fn pad_keeps_trailing_digits() {
        assert_eq!(pad(5, 2), "05");
        assert_eq!(pad(12345, 4), "2345");
    }
}
