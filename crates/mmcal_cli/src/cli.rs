use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mmcal_base::DEFAULT_MYANMAR_PATTERN;
use mmcal_time::{CalendarType, DEFAULT_WESTERN_PATTERN};

/// Myanmar calendar conversions, astrological days, holidays and Thingyan.
#[derive(Parser)]
#[command(name = "mmcal", version, about = "Myanmar calendar CLI")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Clock settings: an optional TOML file plus per-field overrides.
#[derive(clap::Args, Default)]
pub struct ClockArgs {
    /// Path to a TOML clock configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Western calendar rules.
    #[arg(long, global = true, value_enum)]
    pub calendar: Option<CalendarArg>,

    /// JDN of the first Gregorian day for the British calendar.
    #[arg(long, global = true)]
    pub gregorian_start: Option<i64>,

    /// Time-zone offset in hours, east positive.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub tz: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CalendarArg {
    British,
    Gregorian,
    Julian,
}

impl From<CalendarArg> for CalendarType {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::British => CalendarType::British,
            CalendarArg::Gregorian => CalendarType::Gregorian,
            CalendarArg::Julian => CalendarType::Julian,
        }
    }
}

/// Available subcommands.
///
/// `DATE` arguments are local Western date-times with 8, 14 or 17 digits
/// (`2024-04-17`, `2024-04-17 09:00:00`, `20240417090000123`) or `now`.
#[derive(Subcommand)]
pub enum Command {
    /// Western date-time to Julian Date
    W2j {
        /// Local Western date-time
        date: String,
    },
    /// Julian Date to Western date-time
    J2w {
        /// UTC Julian Date
        #[arg(allow_hyphen_values = true)]
        jd: f64,
        /// Output pattern (`%` tokens)
        #[arg(long, default_value = DEFAULT_WESTERN_PATTERN)]
        pattern: String,
    },
    /// Julian Date to Myanmar date
    J2m {
        /// UTC Julian Date
        #[arg(allow_hyphen_values = true)]
        jd: f64,
    },
    /// Myanmar date to Julian Day Number
    M2j {
        /// Myanmar year
        year: i32,
        /// Month code (0 = First Waso, 1 = Tagu .. 12 = Tabaung, 13/14 = Late Tagu/Kason)
        month: i32,
        /// Day of the month (1-30)
        day: i32,
    },
    /// Astrological days of a date
    Astro {
        /// Local Western date
        date: String,
    },
    /// Holidays on a date, or every holiday of a Western year
    Holidays {
        /// Local Western date
        #[arg(required_unless_present = "year", conflicts_with = "year")]
        date: Option<String>,
        /// List a whole Western year instead
        #[arg(long)]
        year: Option<i32>,
        /// Use the observance list instead of public holidays
        #[arg(long)]
        alt: bool,
    },
    /// Thingyan (New Year festival) leading into a Myanmar year
    Thingyan {
        /// Myanmar year
        year: i32,
    },
    /// Render a date with Western and Myanmar patterns
    Format {
        /// Local Western date-time
        date: String,
        /// Western pattern (`%` tokens)
        #[arg(long, default_value = DEFAULT_WESTERN_PATTERN)]
        pattern: String,
        /// Myanmar pattern (`&` tokens)
        #[arg(long, default_value = DEFAULT_MYANMAR_PATTERN)]
        myanmar: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mmcal", "thingyan", "1386", "--json", "--tz", "6.5", "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.clock.tz, Some(6.5));
        assert!(matches!(cli.command, Command::Thingyan { year: 1386 }));
    }

    #[test]
    fn holidays_needs_date_or_year() {
        assert!(Cli::try_parse_from(["mmcal", "holidays"]).is_err());
        assert!(Cli::try_parse_from(["mmcal", "holidays", "--year", "2024", "--alt"]).is_ok());
        assert!(Cli::try_parse_from(["mmcal", "holidays", "2024-01-04", "--year", "2024"]).is_err());
    }

    #[test]
    fn negative_offsets_and_calendar_names() {
        let cli =
            Cli::try_parse_from(["mmcal", "--tz", "-5", "--calendar", "julian", "j2m", "2451545"])
                .unwrap();
        assert_eq!(cli.clock.tz, Some(-5.0));
        assert_eq!(cli.clock.calendar, Some(CalendarArg::Julian));
    }
}
