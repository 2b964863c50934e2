use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info_span};

use mmcal_base::{AstroInfo, DEFAULT_MYANMAR_PATTERN, MoonPhase, MyanmarDate, ThingyanWindow};
use mmcal_holiday::{Holiday, HolidayList, holiday_names};
use mmcal_rs::{MyanmarDateTime, holidays_in_year, thingyan};
use mmcal_time::{ClockConfig, DEFAULT_WESTERN_PATTERN, Weekday, WesternDateTime, format_julian};

use crate::cli::Command;

/// Render a command's output as text or pretty JSON.
pub fn render(command: Command, clock: ClockConfig, json: bool) -> Result<String> {
    match command {
        Command::W2j { date } => {
            let _span = info_span!("w2j").entered();
            let dt = moment(&date, clock)?;
            emit(json, &JulianReport::new(&dt), |r| {
                format!("JD {:.6}  JDN {}", r.jd, r.jdn)
            })
        }

        Command::J2w { jd, pattern } => {
            let _span = info_span!("j2w").entered();
            let dt = MyanmarDateTime::from_jd(jd, clock);
            let report = WesternReport {
                western: dt.western(),
                weekday: dt.weekday(),
                text: dt.format(&pattern),
            };
            emit(json, &report, |r| r.text.clone())
        }

        Command::J2m { jd } => {
            let _span = info_span!("j2m").entered();
            let dt = MyanmarDateTime::from_jd(jd, clock);
            emit(json, &MyanmarReport::new(&dt), MyanmarReport::text)
        }

        Command::M2j { year, month, day } => {
            let _span = info_span!("m2j").entered();
            let dt = MyanmarDateTime::try_from_myanmar(year, month, day, 12, 0, 0.0, clock)?;
            let report = DayReport {
                jdn: dt.jdn_local(),
                western: dt.western(),
                text: dt.format(DEFAULT_WESTERN_PATTERN),
            };
            emit(json, &report, |r| format!("JDN {}  {}", r.jdn, r.text))
        }

        Command::Astro { date } => {
            let _span = info_span!("astro").entered();
            let dt = moment(&date, clock)?;
            let report = AstroReport {
                myanmar: dt.format_myanmar(DEFAULT_MYANMAR_PATTERN),
                astro: dt.astro(),
            };
            emit(json, &report, AstroReport::text)
        }

        Command::Holidays { date, year, alt } => {
            let _span = info_span!("holidays").entered();
            let list = if alt {
                HolidayList::Observance
            } else {
                HolidayList::Public
            };
            match (date, year) {
                (_, Some(year)) => {
                    let days: Vec<HolidayDay> = holidays_in_year(year, list)?
                        .into_iter()
                        .map(|(western, holidays)| HolidayDay::new(&western, holidays))
                        .collect();
                    debug!(year, count = days.len(), "holiday listing");
                    emit(json, &days, |days| {
                        days.iter()
                            .map(HolidayDay::text)
                            .collect::<Vec<_>>()
                            .join("\n")
                    })
                }
                (Some(date), None) => {
                    let dt = moment(&date, clock)?;
                    let day = HolidayDay::new(&dt.western(), list.on(dt.jdn_local()));
                    emit(json, &day, HolidayDay::text)
                }
                (None, None) => bail!("either a date or --year is required"),
            }
        }

        Command::Thingyan { year } => {
            let _span = info_span!("thingyan", year).entered();
            let window = thingyan(year);
            emit(json, &window, |w| thingyan_text(w, &clock))
        }

        Command::Format {
            date,
            pattern,
            myanmar,
        } => {
            let _span = info_span!("format").entered();
            let dt = moment(&date, clock)?;
            let report = FormatReport {
                western: dt.format(&pattern),
                myanmar: dt.format_myanmar(&myanmar),
            };
            emit(json, &report, |r| format!("{}\n{}", r.western, r.myanmar))
        }
    }
}

/// `now`, or a digit-string date parsed in the configured time zone.
fn moment(date: &str, clock: ClockConfig) -> Result<MyanmarDateTime> {
    if date.eq_ignore_ascii_case("now") {
        return Ok(MyanmarDateTime::now(clock));
    }
    Ok(MyanmarDateTime::parse(date, clock)?)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

#[derive(Serialize)]
struct JulianReport {
    jd: f64,
    jdn: i64,
    jd_local: f64,
    jdn_local: i64,
}

impl JulianReport {
    fn new(dt: &MyanmarDateTime) -> Self {
        Self {
            jd: dt.jd(),
            jdn: dt.jdn(),
            jd_local: dt.jd_local(),
            jdn_local: dt.jdn_local(),
        }
    }
}

#[derive(Serialize)]
struct WesternReport {
    western: WesternDateTime,
    weekday: Weekday,
    text: String,
}

#[derive(Serialize)]
struct DayReport {
    jdn: i64,
    western: WesternDateTime,
    text: String,
}

#[derive(Serialize)]
struct MyanmarReport {
    jdn: i64,
    date: MyanmarDate,
    month_name: String,
    moon_phase: MoonPhase,
    fortnight_day: i32,
    sasana_year: i32,
    year_name: &'static str,
    text: String,
}

impl MyanmarReport {
    fn new(dt: &MyanmarDateTime) -> Self {
        let date = dt.myanmar();
        Self {
            jdn: dt.jdn_local(),
            date,
            month_name: date.month_name(),
            moon_phase: date.moon_phase(),
            fortnight_day: date.fortnight_day(),
            sasana_year: date.sasana_year(),
            year_name: dt.year_name(),
            text: dt.format_myanmar(DEFAULT_MYANMAR_PATTERN),
        }
    }

    fn text(&self) -> String {
        format!(
            "{} ({}, Sasana {}, {})",
            self.text,
            self.date.year_type.name(),
            self.sasana_year,
            self.year_name
        )
    }
}

#[derive(Serialize)]
struct AstroReport {
    myanmar: String,
    astro: AstroInfo,
}

impl AstroReport {
    fn text(&self) -> String {
        let a = &self.astro;
        let days = a.days.iter().map(|d| d.name()).collect::<Vec<_>>();
        let rows = [
            ("Date", self.myanmar.clone()),
            ("Sabbath", a.sabbath.map_or("-", |s| s.name()).to_string()),
            ("Yatyaza", (if a.yatyaza { "yes" } else { "no" }).to_string()),
            ("Pyathada", a.pyathada.map_or("-", |p| p.name()).to_string()),
            ("Nagahle", a.nagahle.name().to_string()),
            ("Mahabote", a.mahabote.name().to_string()),
            ("Nakhat", a.nakhat.name().to_string()),
            ("Days", or_dash(&days.join(", "))),
        ];
        table(&rows)
    }
}

#[derive(Serialize)]
struct HolidayDay {
    date: String,
    holidays: Vec<Holiday>,
}

impl HolidayDay {
    fn new(western: &WesternDateTime, holidays: Vec<Holiday>) -> Self {
        Self {
            date: format!("{:04}-{:02}-{:02}", western.year, western.month, western.day),
            holidays,
        }
    }

    fn text(&self) -> String {
        format!("{}  {}", self.date, or_dash(&holiday_names(&self.holidays).join(", ")))
    }
}

#[derive(Serialize)]
struct FormatReport {
    western: String,
    myanmar: String,
}

fn thingyan_text(w: &ThingyanWindow, clock: &ClockConfig) -> String {
    const MOMENT: &str = "%yyyy-%mm-%dd %HH:%nn:%ss %zz";
    // day rows are JDNs, shown at noon without a zone shift
    let day_clock = clock.tz(0.0);
    let day = |jdn: i64| format_julian(jdn as f64, "%Www %yyyy-%mm-%dd", &day_clock);

    let mut rows = vec![
        ("Thingyan", w.year.to_string()),
        ("Akya time", format_julian(w.akya_time, MOMENT, clock)),
        ("Atat time", format_julian(w.atat_time, MOMENT, clock)),
        ("Akyo", day(w.akyo_day)),
        ("Akya", day(w.akya_day)),
        ("Akyat", day(w.akyat_day)),
    ];
    if let Some(second) = w.akyat_day2 {
        rows.push(("Akyat", day(second)));
    }
    rows.push(("Atat", day(w.atat_day)));
    rows.push(("New Year", day(w.new_year_day)));
    table(&rows)
}

fn table(rows: &[(&str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{label:<10}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".to_string() } else { s.to_string() }
}
