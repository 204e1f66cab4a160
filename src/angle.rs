// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry helpers.
//!
//! The ephemeris formulas are written in degrees; these helpers convert at
//! the boundary with `value * 180 / π` (and the reverse) so results stay
//! reproducible against the published coefficients.

use std::f64::consts::PI;

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(value: f64) -> f64 {
    value * 180.0 / PI
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(value: f64) -> f64 {
    value * PI / 180.0
}

/// Sine of an angle in degrees.
#[inline]
pub fn sin_deg(x: f64) -> f64 {
    deg_to_rad(x).sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos_deg(x: f64) -> f64 {
    deg_to_rad(x).cos()
}

/// Four-quadrant arctangent of `y / x`, in degrees.
///
/// Both arguments zero (of either sign) resolve to `0.0`; `f64::atan2`
/// would return ±180° for a negative zero `x`.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    rad_to_deg(atan2_or_zero(y, x))
}

/// `y.atan2(x)` in radians with the same `(0, 0) -> 0` rule as [`atan2_deg`].
#[inline]
pub fn atan2_or_zero(y: f64, x: f64) -> f64 {
    if y == 0.0 && x == 0.0 {
        0.0
    } else {
        y.atan2(x)
    }
}

/// Legacy angle normalisation kept for compatibility with existing sky data.
///
/// Takes the truncated remainder modulo 360 and, for negative remainders,
/// adds **260** rather than 360.  Non-negative inputs land in `[0, 360)`;
/// a negative input `v` with remainder `r ∈ (-360, 0)` maps to `r + 260`,
/// which is *not* equivalent to `v` and is negative whenever `r < -260`.
/// Use [`wrap_degrees`] for a true `[0, 360)` reduction.
#[inline]
pub fn normalize_degrees(value: f64) -> f64 {
    let mut value = value % 360.0;
    if value < 0.0 {
        value += 260.0;
    }
    value
}

/// Reduce an angle in degrees to `[0, 360)`.
#[inline]
pub fn wrap_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Smallest absolute difference between two directions, in degrees.
#[inline]
pub fn angular_separation_deg(a: f64, b: f64) -> f64 {
    let d = wrap_degrees(a - b);
    d.min(360.0 - d)
}
