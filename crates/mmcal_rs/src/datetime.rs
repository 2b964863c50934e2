//! Immutable date-time value viewed through both calendars.

use serde::{Deserialize, Serialize};

use mmcal_base::{
    AstroInfo, DEFAULT_MYANMAR_PATTERN, MoonPhase, MyanmarDate, MyanmarMonth, ThingyanWindow,
    YearType, astro_info_for_jdn, format_myanmar, julian_to_myanmar, myanmar_to_julian,
    thingyan_window, validate_myanmar, year_name,
};
use mmcal_holiday::{Holiday, holidays, holidays_alt};
use mmcal_time::{
    CalendarType, ClockConfig, DEFAULT_WESTERN_PATTERN, TimeError, Weekday, WesternDateTime,
    format_julian, jdn_from_jd, julian_now, julian_to_unix, julian_to_western, parse_julian,
    round_half_up, time_to_day_fraction, unix_to_julian, validate_western, western_month_length,
    western_to_julian,
};

use crate::error::MmcalError;

/// A moment in time with the clock settings used to read it.
///
/// `jd` is always UTC. Every calendar accessor reads the local Julian Date
/// (`jd + tz/24`) under the calendar rules of the [`ClockConfig`]; the
/// Myanmar side always works on the local JDN.
///
/// # Examples
///
/// ```
/// use mmcal_rs::{ClockConfig, MyanmarDateTime};
///
/// let yangon = ClockConfig::default().tz(6.5);
/// let dt = MyanmarDateTime::from_western(2024, 4, 17, 9, 0, 0.0, yangon);
/// assert_eq!(dt.myanmar_year(), 1386);
/// assert_eq!(dt.format_myanmar("&y &M &P &f"), "1386 Tagu Waxing 9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MyanmarDateTime {
    jd: f64,
    config: ClockConfig,
}

impl MyanmarDateTime {
    /// Value at UTC Julian Date `jd`.
    pub fn from_jd(jd: f64, config: ClockConfig) -> Self {
        Self { jd, config }
    }

    /// Value at a Unix timestamp in seconds.
    pub fn from_unix(unix_seconds: f64, config: ClockConfig) -> Self {
        Self::from_jd(unix_to_julian(unix_seconds), config)
    }

    /// Value at the current system time.
    pub fn now(config: ClockConfig) -> Self {
        Self::from_jd(julian_now(), config)
    }

    /// Value from local Western components. Nothing is validated.
    pub fn from_western(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        config: ClockConfig,
    ) -> Self {
        let local = western_to_julian(year, month, day, hour, minute, second, &config);
        Self::from_jd(local - config.tz_hours / 24.0, config)
    }

    /// Value from a Myanmar date and a local time of day. Nothing is validated.
    pub fn from_myanmar(
        my: i32,
        mm: i32,
        md: i32,
        hour: i32,
        minute: i32,
        second: f64,
        config: ClockConfig,
    ) -> Self {
        let local =
            myanmar_to_julian(my, mm, md) as f64 + time_to_day_fraction(hour, minute, second);
        Self::from_jd(local - config.tz_hours / 24.0, config)
    }

    /// [`MyanmarDateTime::from_western`] after checking every component.
    pub fn try_from_western(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        config: ClockConfig,
    ) -> Result<Self, MmcalError> {
        validate_western(year, month, day, hour, minute, second, &config)?;
        Ok(Self::from_western(year, month, day, hour, minute, second, config))
    }

    /// [`MyanmarDateTime::from_myanmar`] after checking every component.
    pub fn try_from_myanmar(
        my: i32,
        mm: i32,
        md: i32,
        hour: i32,
        minute: i32,
        second: f64,
        config: ClockConfig,
    ) -> Result<Self, MmcalError> {
        validate_myanmar(my, mm, md)?;
        validate_time(hour, minute, second)?;
        Ok(Self::from_myanmar(my, mm, md, hour, minute, second, config))
    }

    /// Parse a local date-time string of 8, 14 or 17 digits
    /// (`2024-04-17`, `2024-04-17 09:00:00`, `20240417090000123`).
    pub fn parse(text: &str, config: ClockConfig) -> Result<Self, MmcalError> {
        let jd = parse_julian(text, &config)?;
        Ok(Self::from_jd(jd, config))
    }

    /// Same moment read in another time zone.
    pub fn with_timezone(self, tz_hours: f64) -> Self {
        Self {
            config: self.config.tz(tz_hours),
            ..self
        }
    }

    /// Same moment read with another calendar.
    pub fn with_calendar(self, calendar: CalendarType) -> Self {
        Self {
            config: ClockConfig {
                calendar,
                ..self.config
            },
            ..self
        }
    }

    /// Same moment with a calendar code, folded into 0..=2.
    pub fn with_calendar_code(self, code: i32) -> Self {
        self.with_calendar(CalendarType::from_code(code))
    }

    /// Same moment with another British transition day, rounded to a JDN.
    pub fn with_gregorian_start(self, gregorian_start: f64) -> Self {
        Self {
            config: ClockConfig {
                gregorian_start: round_half_up(gregorian_start) as i64,
                ..self.config
            },
            ..self
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// UTC Julian Date.
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Local Julian Date.
    pub fn jd_local(&self) -> f64 {
        self.jd + self.config.tz_hours / 24.0
    }

    /// UTC Julian Day Number.
    pub fn jdn(&self) -> i64 {
        jdn_from_jd(self.jd)
    }

    /// Local Julian Day Number.
    pub fn jdn_local(&self) -> i64 {
        jdn_from_jd(self.jd_local())
    }

    pub fn tz_hours(&self) -> f64 {
        self.config.tz_hours
    }

    /// Unix timestamp in seconds.
    pub fn unix_time(&self) -> f64 {
        julian_to_unix(self.jd)
    }

    /// Local Western date-time.
    pub fn western(&self) -> WesternDateTime {
        julian_to_western(self.jd_local(), &self.config)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_jdn(self.jdn_local())
    }

    /// Length of the local Western month.
    pub fn month_length(&self) -> i32 {
        let w = self.western();
        western_month_length(w.year, w.month, &self.config)
    }

    /// Local Myanmar date.
    pub fn myanmar(&self) -> MyanmarDate {
        julian_to_myanmar(self.jdn_local())
    }

    pub fn year_type(&self) -> YearType {
        self.myanmar().year_type
    }

    pub fn myanmar_year(&self) -> i32 {
        self.myanmar().year
    }

    pub fn sasana_year(&self) -> i32 {
        self.myanmar().sasana_year()
    }

    /// Name of the year in the 12-year cycle.
    pub fn year_name(&self) -> &'static str {
        year_name(self.myanmar_year())
    }

    /// Month code (0 = First Waso .. 14 = Late Kason).
    pub fn myanmar_month(&self) -> i32 {
        self.myanmar().month
    }

    pub fn myanmar_month_kind(&self) -> Option<MyanmarMonth> {
        self.myanmar().month_kind()
    }

    pub fn myanmar_day(&self) -> i32 {
        self.myanmar().day
    }

    pub fn moon_phase(&self) -> MoonPhase {
        self.myanmar().moon_phase()
    }

    pub fn fortnight_day(&self) -> i32 {
        self.myanmar().fortnight_day()
    }

    pub fn myanmar_month_length(&self) -> i32 {
        self.myanmar().month_length()
    }

    /// Astrological classification of the local day.
    pub fn astro(&self) -> AstroInfo {
        astro_info_for_jdn(self.jdn_local())
    }

    /// Public holidays on the local day.
    pub fn holidays(&self) -> Vec<Holiday> {
        holidays(self.jdn_local())
    }

    /// Observances on the local day.
    pub fn holidays_alt(&self) -> Vec<Holiday> {
        holidays_alt(self.jdn_local())
    }

    /// Thingyan leading into the Myanmar year of the local day.
    pub fn thingyan(&self) -> ThingyanWindow {
        thingyan_window(self.myanmar_year())
    }

    /// Render with `%` tokens in this value's time zone and calendar.
    pub fn format(&self, pattern: &str) -> String {
        format_julian(self.jd, pattern, &self.config)
    }

    /// Render the Myanmar date with `&` tokens.
    pub fn format_myanmar(&self, pattern: &str) -> String {
        format_myanmar(self.jd, pattern, self.config.tz_hours)
    }
}

impl std::fmt::Display for MyanmarDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.format(DEFAULT_WESTERN_PATTERN),
            self.format_myanmar(DEFAULT_MYANMAR_PATTERN)
        )
    }
}

fn validate_time(hour: i32, minute: i32, second: f64) -> Result<(), TimeError> {
    if (0..24).contains(&hour) && (0..60).contains(&minute) && (0.0..60.0).contains(&second) {
        Ok(())
    } else {
        Err(TimeError::InvalidTime {
            hour,
            minute,
            second,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> ClockConfig {
        ClockConfig::default()
    }

    #[test]
    fn western_round_trip_in_zone() {
        let dt = MyanmarDateTime::from_western(2024, 4, 17, 9, 30, 0.0, utc().tz(6.5));
        // 09:30 in Yangon is 03:00 UTC
        assert!((dt.jd() - 2_460_417.625).abs() < 1e-6);
        let w = dt.western();
        assert_eq!((w.year, w.month, w.day, w.hour, w.minute), (2024, 4, 17, 9, 30));
    }

    #[test]
    fn myanmar_components() {
        let dt = MyanmarDateTime::from_jd(2_460_418.0, utc());
        assert_eq!(dt.myanmar_year(), 1386);
        assert_eq!(dt.myanmar_month(), 1);
        assert_eq!(dt.myanmar_month_kind(), Some(MyanmarMonth::Tagu));
        assert_eq!(dt.myanmar_day(), 9);
        assert_eq!(dt.fortnight_day(), 9);
        assert_eq!(dt.moon_phase(), MoonPhase::Waxing);
        assert_eq!(dt.year_type(), YearType::Common);
        assert_eq!(dt.sasana_year(), 2567);
        assert_eq!(dt.myanmar_month_length(), 29);
        assert_eq!(dt.weekday(), Weekday::Wednesday);
        assert_eq!(dt.month_length(), 30);
    }

    #[test]
    fn from_myanmar_matches_from_western() {
        let a = MyanmarDateTime::from_myanmar(1386, 1, 9, 12, 0, 0.0, utc());
        let b = MyanmarDateTime::from_western(2024, 4, 17, 12, 0, 0.0, utc());
        assert_eq!(a.jd(), b.jd());
    }

    #[test]
    fn builders_keep_the_moment() {
        let dt = MyanmarDateTime::from_jd(2_361_222.0, utc());
        let julian = dt.with_calendar_code(5);
        assert_eq!(julian.config().calendar, CalendarType::Julian);
        assert_eq!(julian.jd(), dt.jd());
        assert_eq!(dt.western().day, 14);
        assert_eq!(julian.western().day, 3);

        let moved = dt.with_gregorian_start(2_299_160.6);
        assert_eq!(moved.config().gregorian_start, 2_299_161);

        let zoned = dt.with_timezone(-5.0);
        assert_eq!(zoned.jd(), dt.jd());
        assert_eq!(zoned.tz_hours(), -5.0);
    }

    #[test]
    fn strict_constructors() {
        assert!(MyanmarDateTime::try_from_western(2024, 2, 30, 0, 0, 0.0, utc()).is_err());
        assert!(MyanmarDateTime::try_from_western(2024, 2, 29, 23, 59, 59.5, utc()).is_ok());
        assert!(matches!(
            MyanmarDateTime::try_from_myanmar(1386, 0, 1, 12, 0, 0.0, utc()),
            Err(MmcalError::Calendar(_))
        ));
        assert!(matches!(
            MyanmarDateTime::try_from_myanmar(1386, 1, 1, 24, 0, 0.0, utc()),
            Err(MmcalError::Time(TimeError::InvalidTime { hour: 24, .. }))
        ));
    }

    #[test]
    fn parse_rejects_short_input() {
        assert!(MyanmarDateTime::parse("2024-04", utc()).is_err());
        let dt = MyanmarDateTime::parse("2024-04-17", utc()).unwrap();
        assert_eq!(dt.jd(), 2_460_418.0);
    }

    #[test]
    fn display_shows_both_calendars() {
        let dt = MyanmarDateTime::from_jd(2_460_418.0, utc());
        assert_eq!(dt.to_string(), "Wed 2024-04-17 12:00:00 +00 (1386 Tagu Waxing 09)");
    }
}
