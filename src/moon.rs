// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated perturbation series for the Moon's ecliptic position.
//!
//! The five fundamental arguments are linear in Julian centuries from
//! J2000.0 and expressed directly in radians.  Longitude adds the thirteen
//! largest periodic terms to the mean longitude `L'`; latitude is the sum of
//! the seven largest terms.  The result is good to a few tenths of a
//! degree; no parallax or distance is computed.
//!
//! The amplitudes below are data, not derived quantities; keep them exactly
//! as tabulated.

use crate::coords::{EclipticCoordinate, EquatorialCoordinate, HorizontalCoordinate};
use crate::julian_day::JulianDay;
use crate::observer::Observer;

/// One periodic term: `amplitude · sin(k_D·D + k_M·M + k_M'·M' + k_F·F)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerturbationTerm {
    /// Amplitude in radians.
    pub amplitude: f64,
    /// Integer multipliers of `[D, M, M', F]`.
    pub multipliers: [i8; 4],
}

const fn term(amplitude: f64, multipliers: [i8; 4]) -> PerturbationTerm {
    PerturbationTerm {
        amplitude,
        multipliers,
    }
}

/// Longitude series, added to `L'`.
#[rustfmt::skip]
pub const LONGITUDE_TERMS: [PerturbationTerm; 13] = [
    //     amplitude    D   M   M'  F
    term( 0.1098, [ 0,  0,  1,  0]),
    term( 0.0222, [ 2,  0, -1,  0]),
    term( 0.0115, [ 2,  0,  0,  0]),
    term( 0.0037, [ 0,  0,  2,  0]),
    term(-0.0032, [ 0,  1,  0,  0]),
    term(-0.0020, [ 0,  0,  0,  2]),
    term( 0.0010, [ 2,  0, -2,  0]),
    term( 0.0010, [ 2, -1, -1,  0]),
    term( 0.0009, [ 2,  0,  1,  0]),
    term( 0.0008, [ 2, -1,  0,  0]),
    term( 0.0007, [ 0, -1,  1,  0]),
    term(-0.0006, [ 1,  0,  0,  0]),
    term(-0.0005, [ 0,  1,  1,  0]),
];

/// Latitude series.
#[rustfmt::skip]
pub const LATITUDE_TERMS: [PerturbationTerm; 7] = [
    //     amplitude    D   M   M'  F
    term( 0.0895, [ 0,  0,  0,  1]),
    term( 0.0049, [ 0,  0,  1,  1]),
    term( 0.0048, [ 0,  0,  1, -1]),
    term( 0.0030, [ 2,  0,  0, -1]),
    term( 0.0010, [ 2,  0, -1,  1]),
    term( 0.0008, [ 2,  0, -1, -1]),
    term( 0.0006, [ 2,  0,  0,  1]),
];

/// Fundamental lunar arguments at one instant, in radians (not reduced).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude `L'`.
    pub mean_longitude: f64,
    /// Moon's mean anomaly `M'`.
    pub mean_anomaly: f64,
    /// Sun's mean anomaly `M`.
    pub sun_mean_anomaly: f64,
    /// Mean elongation of the Moon from the Sun `D`.
    pub elongation: f64,
    /// Argument of latitude `F`.
    pub latitude_argument: f64,
}

impl LunarArguments {
    pub fn at(jd: JulianDay) -> Self {
        let t = jd.julian_centuries().value();
        Self {
            mean_longitude: 3.8104 + 8399.7091 * t,
            mean_anomaly: 2.3554 + 8328.6911 * t,
            sun_mean_anomaly: 6.2300 + 648.3019 * t,
            elongation: 5.1985 + 7771.3772 * t,
            latitude_argument: 1.6280 + 8433.4663 * t,
        }
    }

    #[inline]
    fn argument(&self, [k_d, k_m, k_mp, k_f]: [i8; 4]) -> f64 {
        f64::from(k_d) * self.elongation
            + f64::from(k_m) * self.sun_mean_anomaly
            + f64::from(k_mp) * self.mean_anomaly
            + f64::from(k_f) * self.latitude_argument
    }

    /// `start` plus every term of `terms`, accumulated in table order.
    pub fn evaluate(&self, start: f64, terms: &[PerturbationTerm]) -> f64 {
        terms.iter().fold(start, |acc, t| {
            acc + t.amplitude * self.argument(t.multipliers).sin()
        })
    }
}

/// Apparent ecliptic position of the Moon, in radians (longitude not reduced).
pub fn moon_ecliptic(jd: JulianDay) -> EclipticCoordinate {
    let args = LunarArguments::at(jd);
    EclipticCoordinate::new(
        args.evaluate(args.mean_longitude, &LONGITUDE_TERMS),
        args.evaluate(0.0, &LATITUDE_TERMS),
    )
}

/// Right ascension and declination of the Moon, in degrees.
pub fn moon_equatorial(jd: JulianDay) -> EquatorialCoordinate {
    moon_ecliptic(jd).to_equatorial()
}

/// Azimuth and altitude of the Moon for `observer` at `jd`.
pub fn moon_horizontal(jd: JulianDay, observer: Observer) -> HorizontalCoordinate {
    moon_equatorial(jd).to_horizontal(jd, observer)
}
