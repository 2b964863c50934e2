use std::path::Path;

use anyhow::{Context, Result};
use mmcal_time::{CalendarType, ClockConfig};
use tracing::debug;

use crate::cli::ClockArgs;

/// Parse a clock configuration from TOML text.
///
/// Every key is optional; unknown keys are rejected.
///
/// ```toml
/// calendar = "gregorian"
/// gregorian_start = 2361222
/// tz_hours = 6.5
/// ```
pub fn parse_clock(text: &str) -> Result<ClockConfig> {
    toml::from_str(text).context("failed to parse TOML config")
}

/// Read a clock configuration file.
pub fn load_clock(path: &Path) -> Result<ClockConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_clock(&text)
}

/// Configuration file (if any) with command-line overrides applied.
pub fn resolve_clock(args: &ClockArgs) -> Result<ClockConfig> {
    let base = match &args.config {
        Some(path) => load_clock(path)?,
        None => ClockConfig::default(),
    };
    let config = apply_overrides(base, args);
    debug!(?config, "clock configuration");
    Ok(config)
}

fn apply_overrides(mut config: ClockConfig, args: &ClockArgs) -> ClockConfig {
    if let Some(calendar) = args.calendar {
        config.calendar = CalendarType::from(calendar);
    }
    if let Some(start) = args.gregorian_start {
        config.gregorian_start = start;
    }
    if let Some(tz) = args.tz {
        config.tz_hours = tz;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CalendarArg;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_clock("").unwrap(), ClockConfig::default());
    }

    #[test]
    fn all_keys() {
        let config =
            parse_clock("calendar = \"julian\"\ngregorian_start = 2299161\ntz_hours = 6.5\n")
                .unwrap();
        assert_eq!(config.calendar, CalendarType::Julian);
        assert_eq!(config.gregorian_start, 2_299_161);
        assert_eq!(config.tz_hours, 6.5);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(parse_clock("timezone = 6.5").is_err());
        assert!(parse_clock("calendar = \"lunar\"").is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = parse_clock("calendar = \"julian\"\ntz_hours = 6.5\n").unwrap();
        let args = ClockArgs {
            calendar: Some(CalendarArg::Gregorian),
            tz: None,
            ..ClockArgs::default()
        };
        let config = apply_overrides(file, &args);
        assert_eq!(config.calendar, CalendarType::Gregorian);
        assert_eq!(config.tz_hours, 6.5);
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_clock(Path::new("/nonexistent/mmcal.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mmcal.toml"));
    }
}
