//! Free functions over the default British clock for one-off lookups.

use mmcal_base::{
    MyanmarDate, ThingyanWindow, julian_to_myanmar, myanmar_to_julian, thingyan_window,
    validate_myanmar,
};
use mmcal_holiday::{Holiday, HolidayList, holidays_between};
use mmcal_time::{
    ClockConfig, WesternDateTime, jdn_from_jd, julian_to_western, validate_western,
    western_to_julian,
};

use crate::error::MmcalError;

/// JDN of a Western date at noon under `config`'s calendar rules.
fn western_jdn(year: i32, month: i32, day: i32, config: &ClockConfig) -> Result<i64, MmcalError> {
    validate_western(year, month, day, 12, 0, 0.0, config)?;
    let jd = western_to_julian(year, month, day, 12, 0, 0.0, config);
    Ok(jdn_from_jd(jd))
}

/// Myanmar date of a Western calendar date.
///
/// The Western date is read with the default British calendar.
///
/// ```
/// let d = mmcal_rs::myanmar_date_of(2024, 4, 17).unwrap();
/// assert_eq!((d.year, d.month, d.day), (1386, 1, 9));
/// ```
pub fn myanmar_date_of(year: i32, month: i32, day: i32) -> Result<MyanmarDate, MmcalError> {
    let jdn = western_jdn(year, month, day, &ClockConfig::default())?;
    Ok(julian_to_myanmar(jdn))
}

/// Western date (at noon) of a Myanmar date, on the default British calendar.
pub fn western_date_of(my: i32, mm: i32, md: i32) -> Result<WesternDateTime, MmcalError> {
    validate_myanmar(my, mm, md)?;
    let jdn = myanmar_to_julian(my, mm, md);
    Ok(julian_to_western(jdn as f64, &ClockConfig::default()))
}

/// Thingyan leading into Myanmar year `my`.
///
/// Shorthand for [`mmcal_base::thingyan_window`].
pub fn thingyan(my: i32) -> ThingyanWindow {
    thingyan_window(my)
}

/// Holidays from `list` on a Western date (default British calendar).
pub fn holidays_on(
    year: i32,
    month: i32,
    day: i32,
    list: HolidayList,
) -> Result<Vec<Holiday>, MmcalError> {
    let jdn = western_jdn(year, month, day, &ClockConfig::default())?;
    Ok(list.on(jdn))
}

/// Holidays from `list` for every day of a Western year that has any.
pub fn holidays_in_year(
    year: i32,
    list: HolidayList,
) -> Result<Vec<(WesternDateTime, Vec<Holiday>)>, MmcalError> {
    let config = ClockConfig::default();
    let start = western_jdn(year, 1, 1, &config)?;
    let end = western_jdn(year, 12, 31, &config)? + 1;
    Ok(holidays_between(start, end, list)
        .into_iter()
        .map(|(jdn, h)| (julian_to_western(jdn as f64, &config), h))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn myanmar_date_of_new_year() {
        let d = myanmar_date_of(2024, 4, 17).unwrap();
        assert_eq!((d.year, d.month, d.day), (1386, 1, 9));
    }

    #[test]
    fn western_date_of_round_trip() {
        let w = western_date_of(1386, 1, 9).unwrap();
        assert_eq!((w.year, w.month, w.day, w.hour), (2024, 4, 17, 12));
    }

    #[test]
    fn invalid_dates_are_errors() {
        assert!(matches!(myanmar_date_of(2023, 2, 29), Err(MmcalError::Time(_))));
        assert!(matches!(western_date_of(1386, 15, 1), Err(MmcalError::Calendar(_))));
        assert!(holidays_on(2024, 13, 1, HolidayList::Public).is_err());
    }

    #[test]
    fn dropped_british_days_are_errors() {
        assert!(matches!(myanmar_date_of(1752, 9, 5), Err(MmcalError::Time(_))));
        let last_julian = myanmar_date_of(1752, 9, 2).unwrap();
        let first_gregorian = myanmar_date_of(1752, 9, 14).unwrap();
        assert_eq!(
            myanmar_to_julian(first_gregorian.year, first_gregorian.month, first_gregorian.day)
                - myanmar_to_julian(last_julian.year, last_julian.month, last_julian.day),
            1
        );
    }

    #[test]
    fn holidays_on_new_year() {
        assert_eq!(
            holidays_on(2024, 4, 17, HolidayList::Public).unwrap(),
            vec![Holiday::MyanmarNewYearDay]
        );
    }

    #[test]
    fn holidays_in_year_starts_in_january() {
        let days = holidays_in_year(2024, HolidayList::Public).unwrap();
        let (first, names) = &days[0];
        assert_eq!((first.month, first.day), (1, 4));
        assert_eq!(names, &vec![Holiday::IndependenceDay]);
        assert_eq!(days.len(), 27);
    }
}
