// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit direction vectors for the renderer.
//!
//! The basis is `(north, east, zenith)` with the sign layout the sky shaders
//! expect: `north = −cos az·cos alt`, `east = sin az·cos alt`,
//! `zenith = −sin alt`.  Together with the `+180°` azimuth offset of
//! [`equatorial_to_horizontal`](crate::equatorial_to_horizontal) this
//! yields the vector pointing from the body towards the observer.

use crate::angle::{cos_deg, sin_deg};
use crate::coords::HorizontalCoordinate;
use crate::julian_day::JulianDay;
use crate::moon::moon_horizontal;
use crate::observer::Observer;
use crate::sun::sun_horizontal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit 3-vector in the `(north, east, zenith)` basis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub north: f64,
    pub east: f64,
    pub zenith: f64,
}

impl Direction {
    /// Build from azimuth and altitude in degrees.
    pub fn from_horizontal(azimuth: f64, altitude: f64) -> Self {
        Self {
            north: -cos_deg(azimuth) * cos_deg(altitude),
            east: sin_deg(azimuth) * cos_deg(altitude),
            zenith: -sin_deg(altitude),
        }
    }

    /// Components as `[north, east, zenith]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.north, self.east, self.zenith]
    }

    /// Euclidean length; `1` up to rounding.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.north * self.north + self.east * self.east + self.zenith * self.zenith).sqrt()
    }

    /// Components narrowed to `f32`, as uploaded to shader uniforms.
    #[inline]
    pub fn to_f32_array(&self) -> [f32; 3] {
        [self.north as f32, self.east as f32, self.zenith as f32]
    }
}

impl From<HorizontalCoordinate> for Direction {
    fn from(h: HorizontalCoordinate) -> Self {
        Self::from_horizontal(h.azimuth, h.altitude)
    }
}

impl HorizontalCoordinate {
    /// Direction vector for this azimuth/altitude pair.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from(*self)
    }
}

#[cfg(feature = "glam")]
impl From<Direction> for glam::DVec3 {
    fn from(d: Direction) -> Self {
        glam::DVec3::new(d.north, d.east, d.zenith)
    }
}

#[cfg(feature = "glam")]
impl From<Direction> for glam::Vec3 {
    fn from(d: Direction) -> Self {
        glam::Vec3::new(d.north as f32, d.east as f32, d.zenith as f32)
    }
}

/// Sun direction for `observer` at `jd`.
pub fn sun_direction(jd: JulianDay, observer: Observer) -> Direction {
    sun_horizontal(jd, observer).direction()
}

/// Moon direction for `observer` at `jd`.
pub fn moon_direction(jd: JulianDay, observer: Observer) -> Direction {
    moon_horizontal(jd, observer).direction()
}
