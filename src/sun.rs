// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-order Keplerian position of the Sun.
//!
//! The orbital elements of the Earth–Sun orbit are linear in the day count
//! `d` from 1999-12-31 0h (JD 2 451 543.5), after Paul Schlyter's
//! "How to compute planetary positions".  The eccentric anomaly takes a
//! **single** first-order correction from the mean anomaly; it is not
//! iterated to convergence.  Accuracy is around a hundredth of a degree
//! over a few centuries around 2000, which is plenty for lighting a sky.
//!
//! ```
//! use skyephem::{sun_horizontal, JulianDay, Observer};
//!
//! let h = sun_horizontal(JulianDay::J2000, Observer::new(0.0, 0.0));
//! assert!((h.altitude - 10.381452).abs() < 1e-6);
//! ```

use crate::angle::{atan2_deg, cos_deg, deg_to_rad, rad_to_deg, sin_deg};
use crate::coords::{EclipticCoordinate, EquatorialCoordinate, HorizontalCoordinate};
use crate::julian_day::JulianDay;
use crate::observer::Observer;

/// Day zero of the element polynomials: 1999-12-31T00:00 (JD 2 451 543.5).
pub(crate) const SUN_EPOCH: JulianDay = JulianDay::new(2_451_543.5);

/// Orbital elements of the Sun's apparent orbit at one instant, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarElements {
    /// Argument of perihelion `w`.
    pub perihelion: f64,
    /// Eccentricity `e`.
    pub eccentricity: f64,
    /// Mean anomaly `M`.
    pub mean_anomaly: f64,
}

impl SolarElements {
    /// Elements at `jd`.
    pub fn at(jd: JulianDay) -> Self {
        let d = jd.days_since(SUN_EPOCH).value();
        Self {
            perihelion: 282.9404 + 4.70935E-5 * d,
            eccentricity: 0.016709 - 1.151E-9 * d,
            mean_anomaly: 356.0470 + 0.9856002585 * d,
        }
    }

    /// Eccentric anomaly `E = M + e·sin M·(1 + e·cos M)` (one step, degrees).
    pub fn eccentric_anomaly(&self) -> f64 {
        let e = self.eccentricity;
        let m = self.mean_anomaly;
        m + rad_to_deg(e * sin_deg(m) * (1.0 + e * cos_deg(m)))
    }

    /// Mean longitude `L = w + M`, not reduced to `[0, 360)`.
    #[inline]
    pub fn mean_longitude(&self) -> f64 {
        self.perihelion + self.mean_anomaly
    }

    /// Position in the orbital plane `(xv, yv)`, in astronomical units.
    fn orbital_plane(&self) -> (f64, f64) {
        let e = self.eccentricity;
        let ea = self.eccentric_anomaly();
        (cos_deg(ea) - e, sin_deg(ea) * (1.0 - e * e).sqrt())
    }

    /// True longitude `v + w`, in degrees, not reduced to `[0, 360)`.
    pub fn true_longitude(&self) -> f64 {
        let (xv, yv) = self.orbital_plane();
        atan2_deg(yv, xv) + self.perihelion
    }

    /// Earth–Sun distance in astronomical units.
    pub fn distance(&self) -> f64 {
        let (xv, yv) = self.orbital_plane();
        (xv * xv + yv * yv).sqrt()
    }
}

/// Ecliptic position of the Sun, in radians.
///
/// The latitude is zero: the Sun's apparent orbit defines the ecliptic.
pub fn sun_ecliptic(jd: JulianDay) -> EclipticCoordinate {
    let longitude = SolarElements::at(jd).true_longitude();
    EclipticCoordinate::new(deg_to_rad(longitude), deg_to_rad(0.0))
}

/// Right ascension and declination of the Sun, in degrees.
pub fn sun_equatorial(jd: JulianDay) -> EquatorialCoordinate {
    sun_ecliptic(jd).to_equatorial()
}

/// Azimuth and altitude of the Sun for `observer` at `jd`.
pub fn sun_horizontal(jd: JulianDay, observer: Observer) -> HorizontalCoordinate {
    sun_equatorial(jd).to_horizontal(jd, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::wrap_degrees;
    use crate::coords::OBLIQUITY_J2000_DEG;
    use qtty::Days;

    #[test]
    fn elements_at_j2000() {
        let el = SolarElements::at(JulianDay::J2000);
        assert!((el.perihelion - 282.94047064025).abs() < 1e-9);
        assert!((el.eccentricity - 0.0167089982735).abs() < 1e-15);
        assert!((el.mean_anomaly - 357.52540038775).abs() < 1e-9);
        assert!((el.eccentric_anomaly() - 357.483375134644).abs() < 1e-9);
        assert!((el.mean_longitude() - 640.465871028).abs() < 1e-9);
        assert!((el.distance() - 0.983307117171).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_longitude_at_j2000() {
        let ecl = sun_ecliptic(JulianDay::J2000);
        assert!((rad_to_deg(ecl.longitude) - 280.3814522215074).abs() < 1e-9);
        assert_eq!(ecl.latitude, 0.0);
    }

    #[test]
    fn equatorial_at_j2000() {
        let eq = sun_equatorial(JulianDay::J2000);
        assert!((eq.right_ascension + 78.70788376784692).abs() < 1e-9);
        assert!((eq.declination + 23.033254722114012).abs() < 1e-9);
    }

    #[test]
    fn horizontal_at_j2000_from_null_island() {
        let h = sun_horizontal(JulianDay::J2000, Observer::new(0.0, 0.0));
        assert!((h.azimuth - 246.560719).abs() < 1e-9, "azimuth {}", h.azimuth);
        assert!((h.altitude - 10.381452221507427).abs() < 1e-9, "altitude {}", h.altitude);
    }

    #[test]
    fn horizontal_at_j2000_from_default_site() {
        let h = sun_horizontal(JulianDay::J2000, Observer::DEFAULT);
        assert!((h.azimuth - 111.11892330141768).abs() < 1e-9);
        assert!((h.altitude + 12.424419960326619).abs() < 1e-9);
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        for i in 0..366 {
            let jd = JulianDay::J2000 + Days::new(i as f64);
            let dec = sun_equatorial(jd).declination;
            assert!(dec.abs() <= OBLIQUITY_J2000_DEG + 1e-9, "declination {dec}");
        }
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = SolarElements::at(JulianDay::J2000).true_longitude();
        let b = SolarElements::at(JulianDay::J2000 + Days::new(1.0)).true_longitude();
        let step = wrap_degrees(b - a);
        assert!(step > 0.95 && step < 1.05, "step {step}");
    }

    #[test]
    fn distance_tracks_perihelion_and_aphelion() {
        // Early January is near perihelion, early July near aphelion.
        let january = SolarElements::at(JulianDay::new(2_451_548.5)).distance();
        let july = SolarElements::at(JulianDay::new(2_451_732.5)).distance();
        assert!(january < 0.984);
        assert!(july > 1.016);
    }
}
