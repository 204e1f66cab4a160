// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar ⇄ Julian Day arithmetic.
//!
//! The conversions follow the civil-calendar integer algorithm (Richards,
//! as tabulated on the Julian day article of most references) with
//! **truncating** integer division throughout.  The algorithm is exact for
//! every date after 4801 BC; earlier dates make the intermediate year
//! negative and truncation no longer equals flooring.
//!
//! Two entry styles exist:
//!
//! - the free functions and [`GregorianDateTime::new_unchecked`] accept any
//!   field values and compute *something* for out-of-range fields
//!   (month 13 rolls into the next year, day 40 into the next month);
//! - [`GregorianDateTime::new`] validates every field first and reports a
//!   [`CalendarError`].
//!
//! ```
//! use skyephem::{GregorianDateTime, julian_day_number};
//!
//! assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
//!
//! let dt = GregorianDateTime::new(1999, 12, 31, 0, 0, 0.0).unwrap();
//! assert_eq!(dt.to_julian_day().value(), 2_451_543.5);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::CalendarError;
use crate::julian_day::JulianDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number (the integer day starting at noon) of a calendar date.
///
/// No range checking is performed.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Inverse of [`julian_day_number`]: `(year, month, day)` of a Julian Day Number.
pub fn gregorian_date_from_julian_day_number(jdn: i64) -> (i32, u32, u32) {
    let j = jdn + 32044;
    let g = j / 146_097;
    let dg = j % 146_097;
    let c = (dg / 36_524 + 1) * 3 / 4;
    let dc = dg - c * 36_524;
    let b = dc / 1461;
    let db = dc % 1461;
    let a = (db / 365 + 1) * 3 / 4;
    let da = db - a * 365;
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / 153 - 2;
    let d = da - (m + 4) * 153 / 5 + 122;

    let year = y - 4800 + (m + 2) / 12;
    let month = (m + 2) % 12 + 1;
    let day = d + 1;
    (year as i32, month as u32, day as u32)
}

/// Julian Day of a calendar date plus a time of day given in seconds since
/// midnight.
pub fn julian_day_from_seconds_of_day(
    year: i32,
    month: u32,
    day: u32,
    seconds_since_midnight: f64,
) -> JulianDay {
    let jdn = julian_day_number(year, month, day) as f64;
    JulianDay::new(jdn + seconds_since_midnight / SECONDS_PER_DAY - 0.5)
}

/// A civil date and time on the proleptic Gregorian calendar.
///
/// `second` carries the fractional part; there is no leap-second support.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GregorianDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl GregorianDateTime {
    /// Validated constructor.
    ///
    /// Rejects months outside 1–12, days that do not exist in that month
    /// (leap years included), hours above 23, minutes above 59 and seconds
    /// outside `[0, 60)`.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, CalendarError> {
        let candidate = Self::new_unchecked(year, month, day, hour, minute, second);
        candidate.validate().inspect_err(|err| {
            log::debug!("rejected calendar fields {candidate:?}: {err}");
        })?;
        Ok(candidate)
    }

    /// Build without any range checks.
    pub const fn new_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every field against the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidMonth(self.month));
        }
        if self.day == 0 || NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(CalendarError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(CalendarError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(CalendarError::InvalidMinute(self.minute));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(CalendarError::InvalidSecond(self.second));
        }
        Ok(())
    }

    /// Julian Day Number of the date part.
    #[inline]
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Continuous Julian Day of this date-time.
    pub fn to_julian_day(&self) -> JulianDay {
        let jdn = self.julian_day_number() as f64;
        JulianDay::new(
            jdn + (self.hour as f64 - 12.0) / 24.0
                + self.minute as f64 / 1440.0
                + self.second / SECONDS_PER_DAY,
        )
    }

    /// Calendar date-time of a Julian Day.
    ///
    /// The date comes from `floor(jd + 0.5)`; the remaining fraction of the
    /// day is split into hours, minutes and (fractional) seconds.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let ijd = (jd.value() + 0.5).floor();
        let (year, month, day) = gregorian_date_from_julian_day_number(ijd as i64);

        let mut s = (jd.value() + 0.5 - ijd) * SECONDS_PER_DAY;
        let hour = (s / 3600.0).floor();
        s -= hour * 3600.0;
        let minute = (s / 60.0).floor();
        s -= minute * 60.0;

        Self::new_unchecked(year, month, day, hour as u32, minute as u32, s)
    }

    /// Seconds elapsed since local midnight.
    #[inline]
    pub fn seconds_of_day(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
    }

    /// Convert to a chrono `NaiveDateTime`, if the fields form a real instant.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        if !(0.0..60.0).contains(&self.second) {
            return None;
        }
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9) as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_nano_opt(
            self.hour,
            self.minute,
            whole as u32,
            nanos,
        )
    }
}

impl From<NaiveDateTime> for GregorianDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new_unchecked(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9,
        )
    }
}

impl From<GregorianDateTime> for JulianDay {
    fn from(dt: GregorianDateTime) -> Self {
        dt.to_julian_day()
    }
}

impl From<JulianDay> for GregorianDateTime {
    fn from(jd: JulianDay) -> Self {
        Self::from_julian_day(jd)
    }
}

impl std::fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
