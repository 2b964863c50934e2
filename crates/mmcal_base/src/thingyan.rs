//! Thingyan (Myanmar New Year water festival) moments and day window.
//!
//! The sun enters the sidereal Aries at the Atat moment; the Akya moment
//! precedes it by a fixed interval whose length changed in 1312.

use serde::{Deserialize, Serialize};
use tracing::trace;

use mmcal_time::jdn_from_jd;

use crate::era::{MYANMAR_EPOCH, SOLAR_YEAR, THIRD_ERA_START};

/// Akya-to-Atat interval (days) from 1312 onward.
pub const AKYA_INTERVAL: f64 = 2.169_918_982;

/// Akya-to-Atat interval (days) before 1312.
pub const AKYA_INTERVAL_OLD: f64 = 2.1675;

/// Julian Dates of the Atat and Akya moments of a Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThingyanMoments {
    /// Atat moment (start of the new year), UTC Julian Date.
    pub atat_time: f64,
    /// Akya moment, UTC Julian Date.
    pub akya_time: f64,
}

impl ThingyanMoments {
    /// JDN of the Atat day.
    pub fn atat_day(&self) -> i64 {
        jdn_from_jd(self.atat_time)
    }

    /// JDN of the Akya day.
    pub fn akya_day(&self) -> i64 {
        jdn_from_jd(self.akya_time)
    }
}

/// Interval between Akya and Atat for the year being entered.
pub fn akya_interval(my: i32) -> f64 {
    if my >= THIRD_ERA_START {
        AKYA_INTERVAL
    } else {
        AKYA_INTERVAL_OLD
    }
}

/// Atat and Akya moments for Myanmar year `my`.
pub fn thingyan_moments(my: i32) -> ThingyanMoments {
    let atat_time = SOLAR_YEAR * my as f64 + MYANMAR_EPOCH;
    ThingyanMoments {
        atat_time,
        akya_time: atat_time - akya_interval(my),
    }
}

/// The Thingyan festival days leading into Myanmar year `year`.
///
/// All day fields are JDNs. `akyat_day2` is only present when Akya and Atat
/// are more than two days apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThingyanWindow {
    /// Year being entered.
    pub year: i32,
    /// Atat moment, UTC Julian Date.
    pub atat_time: f64,
    /// Akya moment, UTC Julian Date.
    pub akya_time: f64,
    /// Day before Akya.
    pub akyo_day: i64,
    /// Day of the Akya moment.
    pub akya_day: i64,
    /// Day after Akya.
    pub akyat_day: i64,
    /// Second Akyat day (day before Atat) in long festivals.
    pub akyat_day2: Option<i64>,
    /// Day of the Atat moment.
    pub atat_day: i64,
    /// Myanmar New Year Day.
    pub new_year_day: i64,
}

impl ThingyanWindow {
    /// Year being left.
    pub fn previous_year(&self) -> i32 {
        self.year - 1
    }

    /// Whether `jdn` falls anywhere from Akyo day to Atat day.
    pub fn contains(&self, jdn: i64) -> bool {
        (self.akyo_day..=self.atat_day).contains(&jdn)
    }
}

/// Festival days for the Thingyan entering Myanmar year `my`.
///
/// # Examples
///
/// ```
/// use mmcal_base::thingyan_window;
///
/// let w = thingyan_window(1386);
/// assert_eq!(w.akya_day, 2_460_415);
/// assert_eq!(w.new_year_day, 2_460_418);
/// assert_eq!(w.akyat_day2, None);
/// ```
pub fn thingyan_window(my: i32) -> ThingyanWindow {
    let moments = thingyan_moments(my);
    let akya_day = moments.akya_day();
    let atat_day = moments.atat_day();
    let akyat_day2 = (atat_day - akya_day > 2).then_some(atat_day - 1);

    trace!(
        year = my,
        akya_day,
        atat_day,
        long = akyat_day2.is_some(),
        "thingyan window"
    );

    ThingyanWindow {
        year: my,
        atat_time: moments.atat_time,
        akya_time: moments.akya_time,
        akyo_day: akya_day - 1,
        akya_day,
        akyat_day: akya_day + 1,
        akyat_day2,
        atat_day,
        new_year_day: atat_day + 1,
    }
}
