// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinate systems and the rotations between them.
//!
//! | Type | Frame | Units |
//! |------|-------|-------|
//! | [`EclipticCoordinate`] | ecliptic of date, mean obliquity | radians |
//! | [`EquatorialCoordinate`] | celestial equator | degrees |
//! | [`HorizontalCoordinate`] | observer's horizon | degrees |
//! | [`SphericalCoordinate`] / [`RectangularCoordinate`] | any | degrees / distance units |
//!
//! The ecliptic → equatorial rotation uses the fixed J2000 mean obliquity
//! without precession.  The equatorial → horizontal rotation takes the
//! day's fractional rotation as the only Earth-rotation term (see
//! [`equatorial_to_horizontal`]).

use crate::angle::{atan2_deg, atan2_or_zero, cos_deg, deg_to_rad, rad_to_deg, sin_deg};
use crate::julian_day::JulianDay;
use crate::observer::Observer;
use crate::sun::SUN_EPOCH;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439281;

// ═══════════════════════════════════════════════════════════════════════════
// Value types
// ═══════════════════════════════════════════════════════════════════════════

/// Ecliptic longitude and latitude, in **radians**.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// Right ascension and declination, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Azimuth and altitude, in degrees.
///
/// Azimuth comes out of [`equatorial_to_horizontal`] in `[0, 360]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Cartesian triple.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectangularCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Spherical triple with both angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalCoordinate {
    pub right_ascension: f64,
    pub declination: f64,
    pub distance: f64,
}

impl EclipticCoordinate {
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Rotate into the equatorial frame, returning degrees.
    pub fn to_equatorial(&self) -> EquatorialCoordinate {
        let (ra, dec) = ecliptic_to_equatorial(self.longitude, self.latitude);
        EquatorialCoordinate::new(rad_to_deg(ra), rad_to_deg(dec))
    }
}

impl EquatorialCoordinate {
    #[inline]
    pub const fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Shorthand for [`equatorial_to_horizontal`].
    #[inline]
    pub fn to_horizontal(&self, jd: JulianDay, observer: Observer) -> HorizontalCoordinate {
        equatorial_to_horizontal(jd, observer, *self)
    }
}

impl HorizontalCoordinate {
    #[inline]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// `true` when the body is above the mathematical horizon.
    #[inline]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

impl std::fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "az {:.4}°, alt {:.4}°", self.azimuth, self.altitude)
    }
}

impl RectangularCoordinate {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl SphericalCoordinate {
    #[inline]
    pub const fn new(right_ascension: f64, declination: f64, distance: f64) -> Self {
        Self {
            right_ascension,
            declination,
            distance,
        }
    }
}

impl From<RectangularCoordinate> for SphericalCoordinate {
    fn from(r: RectangularCoordinate) -> Self {
        rectangular_to_spherical(r.x, r.y, r.z)
    }
}

impl From<SphericalCoordinate> for RectangularCoordinate {
    fn from(s: SphericalCoordinate) -> Self {
        spherical_to_rectangular(s.right_ascension, s.declination, s.distance)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Transforms
// ═══════════════════════════════════════════════════════════════════════════

/// Ecliptic `(λ, β)` → equatorial `(α, δ)`, all in radians.
///
/// Rotates about the vernal-equinox axis by [`OBLIQUITY_J2000_DEG`].
pub fn ecliptic_to_equatorial(longitude: f64, latitude: f64) -> (f64, f64) {
    let ecl = deg_to_rad(OBLIQUITY_J2000_DEG);

    let x = longitude.cos() * latitude.cos();
    let y = ecl.cos() * longitude.sin() * latitude.cos() - ecl.sin() * latitude.sin();
    let z = ecl.sin() * longitude.sin() * latitude.cos() + ecl.cos() * latitude.sin();

    let r = (x * x + y * y).sqrt();
    (atan2_or_zero(y, x), atan2_or_zero(z, r))
}

/// Cartesian → spherical, angles in degrees.
pub fn rectangular_to_spherical(x: f64, y: f64, z: f64) -> SphericalCoordinate {
    let distance = (x * x + y * y + z * z).sqrt();
    let right_ascension = atan2_deg(y, x);
    let declination = atan2_deg(z, (x * x + y * y).sqrt());
    SphericalCoordinate::new(right_ascension, declination, distance)
}

/// Spherical (degrees) → Cartesian.
pub fn spherical_to_rectangular(
    right_ascension: f64,
    declination: f64,
    distance: f64,
) -> RectangularCoordinate {
    RectangularCoordinate::new(
        distance * cos_deg(right_ascension) * cos_deg(declination),
        distance * sin_deg(right_ascension) * cos_deg(declination),
        distance * sin_deg(declination),
    )
}

/// Equatorial → horizontal for an observer at `jd`.
///
/// The hour angle is `H = longitude + 180 + UT − α`, where `UT` is the
/// fractional part of the day count from 1999-12-31 0h expressed in
/// degrees.  No sidereal-time term enters: the sky turns once per solar day
/// and the Sun's mean longitude is not added.  The `+180` here and the
/// `+180` applied to the azimuth are paired with the sign layout of
/// [`Direction`](crate::Direction); change neither alone.
pub fn equatorial_to_horizontal(
    jd: JulianDay,
    observer: Observer,
    equatorial: EquatorialCoordinate,
) -> HorizontalCoordinate {
    let d = jd.days_since(SUN_EPOCH).value();
    let ut = d.rem_euclid(1.0) * 360.0;
    let hour_angle = observer.longitude + 180.0 + ut - equatorial.right_ascension;

    let x = cos_deg(hour_angle) * cos_deg(equatorial.declination);
    let y = sin_deg(hour_angle) * cos_deg(equatorial.declination);
    let z = sin_deg(equatorial.declination);

    let xhor = x * sin_deg(observer.latitude) - z * cos_deg(observer.latitude);
    let yhor = y;
    let zhor = x * cos_deg(observer.latitude) + z * sin_deg(observer.latitude);

    HorizontalCoordinate::new(
        atan2_deg(yhor, xhor) + 180.0,
        atan2_deg(zhor, (xhor * xhor + yhor * yhor).sqrt()),
    )
}
