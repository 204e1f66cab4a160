// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Continuous Julian Day instant.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the Julian
//! Period epoch.  Integer values fall at noon, so civil midnight sits on the
//! half-integer.  Every ephemeris routine in this crate takes a `JulianDay`
//! as its only notion of time; callers derive one from a calendar date
//! (see [`crate::calendar`]) and then advance it with plain [`Days`]
//! arithmetic.
//!
//! No time-scale distinction (UT, TT, ...) is made: the value is civil time
//! on a continuous axis, without leap seconds.

use chrono::{DateTime, Utc};
use qtty::*;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// A point on the continuous Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw Julian Day value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since `epoch` (negative when `epoch` is later).
    #[inline]
    pub fn days_since(&self, epoch: JulianDay) -> Days {
        *self - epoch
    }

    /// Julian centuries since J2000.0, the time argument of the lunar series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// The timestamp is placed on the Julian Day axis as-is; no ΔT or leap
    /// second correction is applied.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(Days::new(UNIX_EPOCH_JD) + (seconds_since_epoch + nanos).to::<Day>())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - Days::new(UNIX_EPOCH_JD))
            .to::<Second>()
            .value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_constant() {
        assert_eq!(JulianDay::J2000.value(), 2_451_545.0);
        assert_eq!(JulianDay::J2000.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn julian_centuries_since_j2000() {
        let jd = JulianDay::J2000 + Days::new(36_525.0 * 2.0);
        assert!((jd.julian_centuries() - Centuries::new(2.0)).abs() < Centuries::new(1e-12));
        assert!(JulianDay::J2000.julian_centuries().value().abs() < 1e-15);
    }

    #[test]
    fn from_utc_places_noon_on_integer() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDay::from_utc(noon);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);

        let midnight = Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap();
        assert!((JulianDay::from_utc(midnight).value() - 2_451_543.5).abs() < 1e-9);
    }

    #[test]
    fn utc_roundtrip() {
        let datetime = DateTime::from_timestamp(946_728_000, 250_000_000).unwrap();
        let back = JulianDay::from_utc(datetime).to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 100_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn to_utc_rejects_non_finite() {
        assert!(JulianDay::new(f64::NAN).to_utc().is_none());
        assert!(JulianDay::new(f64::INFINITY).to_utc().is_none());
    }

    #[test]
    fn arithmetic() {
        let mut jd = JulianDay::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert_eq!(jd - JulianDay::J2000, Days::new(0.5));
        assert_eq!(jd.days_since(JulianDay::J2000), Days::new(0.5));
        assert_eq!((jd - Days::new(0.5)).value(), 2_451_545.0);
    }

    #[test]
    fn into_days_roundtrip() {
        let jd = JulianDay::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(JulianDay::from(days), jd);
    }

    #[test]
    fn display() {
        let s = format!("{}", JulianDay::new(2_451_545.0));
        assert_eq!(s, "JD 2451545");
    }

    #[test]
    fn ordering() {
        assert!(JulianDay::new(1.0) < JulianDay::new(2.0));
    }
}
