//! Calendar selection and clock configuration.

use serde::{Deserialize, Serialize};

/// First Gregorian day of the British calendar (1752-09-14), as a JDN.
pub const DEFAULT_GREGORIAN_START: i64 = 2_361_222;

/// Western calendar rules used to interpret year/month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    /// Julian before the Gregorian start, Gregorian from it onward.
    #[default]
    British,
    /// Proleptic Gregorian.
    Gregorian,
    /// Proleptic Julian.
    Julian,
}

/// All calendar types in code order.
pub const ALL_CALENDAR_TYPES: [CalendarType; 3] = [
    CalendarType::British,
    CalendarType::Gregorian,
    CalendarType::Julian,
];

impl CalendarType {
    /// Numeric code (British=0, Gregorian=1, Julian=2).
    pub const fn code(self) -> i32 {
        match self {
            Self::British => 0,
            Self::Gregorian => 1,
            Self::Julian => 2,
        }
    }

    /// Calendar for a numeric code. Any integer is accepted and folded mod 3.
    pub const fn from_code(code: i32) -> Self {
        ALL_CALENDAR_TYPES[code.rem_euclid(3) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::British => "British",
            Self::Gregorian => "Gregorian",
            Self::Julian => "Julian",
        }
    }
}

/// Configuration shared by every Western conversion.
///
/// Replaces per-call default arguments: build one with [`ClockConfig::default`]
/// and override the fields that differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Calendar rules for Western dates.
    pub calendar: CalendarType,
    /// JDN of the first Gregorian day for [`CalendarType::British`].
    pub gregorian_start: i64,
    /// Time-zone offset in hours, east positive.
    pub tz_hours: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarType::British,
            gregorian_start: DEFAULT_GREGORIAN_START,
            tz_hours: 0.0,
        }
    }
}

impl ClockConfig {
    /// Default configuration with another calendar.
    pub fn with_calendar(calendar: CalendarType) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    /// Same configuration with another time-zone offset.
    pub fn tz(self, tz_hours: f64) -> Self {
        Self { tz_hours, ..self }
    }

    /// Whether a JD falls under Julian rules with this configuration.
    pub fn uses_julian_rules(&self, jd: f64) -> bool {
        match self.calendar {
            CalendarType::Julian => true,
            CalendarType::Gregorian => false,
            CalendarType::British => jd < self.gregorian_start as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_sequential() {
        for (i, ct) in ALL_CALENDAR_TYPES.iter().enumerate() {
            assert_eq!(ct.code() as usize, i);
            assert_eq!(CalendarType::from_code(i as i32), *ct);
        }
    }

    #[test]
    fn from_code_folds() {
        assert_eq!(CalendarType::from_code(3), CalendarType::British);
        assert_eq!(CalendarType::from_code(5), CalendarType::Julian);
        assert_eq!(CalendarType::from_code(-1), CalendarType::Julian);
    }

    #[test]
    fn default_config() {
        let c = ClockConfig::default();
        assert_eq!(c.calendar, CalendarType::British);
        assert_eq!(c.gregorian_start, 2_361_222);
        assert_eq!(c.tz_hours, 0.0);
    }

    #[test]
    fn julian_rules_by_calendar() {
        let british = ClockConfig::default();
        assert!(british.uses_julian_rules(2_361_221.0));
        assert!(!british.uses_julian_rules(2_361_222.0));
        assert!(ClockConfig::with_calendar(CalendarType::Julian).uses_julian_rules(2_460_000.0));
        assert!(!ClockConfig::with_calendar(CalendarType::Gregorian).uses_julian_rules(0.0));
    }

    #[test]
    fn serde_lowercase_names() {
        let c = ClockConfig::with_calendar(CalendarType::Gregorian).tz(6.5);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"gregorian\""), "{json}");
        let back: ClockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn serde_fills_defaults() {
        let c: ClockConfig = serde_json::from_str(r#"{"tz_hours": 6.5}"#).unwrap();
        assert_eq!(c.calendar, CalendarType::British);
        assert_eq!(c.gregorian_start, DEFAULT_GREGORIAN_START);
        assert_eq!(c.tz_hours, 6.5);
    }

    #[test]
    fn serde_rejects_unknown_fields() {
        assert!(serde_json::from_str::<ClockConfig>(r#"{"zone": 1}"#).is_err());
    }
}
