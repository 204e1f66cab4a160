// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-frame sky snapshot and the clock that drives it.
//!
//! A renderer keeps one [`SkyClock`], advances it by the frame's elapsed
//! wall-clock time, and asks for a [`SkyState`] holding everything the sky
//! shaders consume: Sun and Moon positions, their direction vectors and the
//! lunar phase.
//!
//! ```
//! use skyephem::{GregorianDateTime, Observer, SkyClock};
//!
//! let start = GregorianDateTime::new(2024, 6, 21, 4, 0, 0.0).unwrap();
//! let mut clock = SkyClock::from_calendar(start);
//! clock.advance(1.0 / 60.0);
//! let sky = clock.state(Observer::new(-3.7, 40.4));
//! assert!((sky.sun_direction.norm() - 1.0).abs() < 1e-12);
//! ```

use qtty::Days;

use crate::calendar::GregorianDateTime;
use crate::coords::HorizontalCoordinate;
use crate::direction::Direction;
use crate::julian_day::JulianDay;
use crate::moon::moon_horizontal;
use crate::observer::Observer;
use crate::phase::moon_phase;
use crate::sun::sun_horizontal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the sky needs for one instant and one observer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyState {
    pub julian_day: JulianDay,
    pub observer: Observer,
    pub sun: HorizontalCoordinate,
    pub moon: HorizontalCoordinate,
    pub sun_direction: Direction,
    pub moon_direction: Direction,
    /// Phase scalar from [`moon_phase`].
    pub moon_phase: f64,
}

impl SkyState {
    pub fn compute(jd: JulianDay, observer: Observer) -> Self {
        let sun = sun_horizontal(jd, observer);
        let moon = moon_horizontal(jd, observer);
        let state = Self {
            julian_day: jd,
            observer,
            sun,
            moon,
            sun_direction: sun.direction(),
            moon_direction: moon.direction(),
            moon_phase: moon_phase(jd),
        };
        log::trace!(
            "sky at {jd} for ({}, {}): sun {sun}, moon {moon}, phase {:.4}",
            observer.longitude,
            observer.latitude,
            state.moon_phase
        );
        state
    }

    /// Sun above the mathematical horizon.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        self.sun.is_above_horizon()
    }
}

/// Scaled simulation clock on the Julian Day axis.
///
/// `time_scale` is the number of Julian days that pass per second of real
/// time; the default of `0.02` turns a full day in 50 seconds.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyClock {
    julian_day: JulianDay,
    time_scale: f64,
}

impl SkyClock {
    pub const DEFAULT_TIME_SCALE: f64 = 0.02;

    pub fn new(start: JulianDay) -> Self {
        Self::with_time_scale(start, Self::DEFAULT_TIME_SCALE)
    }

    pub fn with_time_scale(start: JulianDay, time_scale: f64) -> Self {
        log::debug!("sky clock starting at {start}, {time_scale} days/s");
        Self {
            julian_day: start,
            time_scale,
        }
    }

    /// Start at a calendar date-time.
    pub fn from_calendar(start: GregorianDateTime) -> Self {
        Self::new(start.to_julian_day())
    }

    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        self.julian_day
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        log::debug!("sky clock scale {} -> {time_scale} days/s", self.time_scale);
        self.time_scale = time_scale;
    }

    /// Jump to `jd` without touching the scale.
    pub fn set_julian_day(&mut self, jd: JulianDay) {
        self.julian_day = jd;
    }

    /// Move forward by `elapsed_seconds` of real time and return the new instant.
    pub fn advance(&mut self, elapsed_seconds: f64) -> JulianDay {
        self.julian_day += Days::new(self.time_scale * elapsed_seconds);
        self.julian_day
    }

    /// Snapshot at the clock's current instant.
    #[inline]
    pub fn state(&self, observer: Observer) -> SkyState {
        SkyState::compute(self.julian_day, observer)
    }
}
