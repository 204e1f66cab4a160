// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ground observer location.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic position of the observer, in degrees.
///
/// `longitude` enters the hour angle as `H = longitude + 180 + UT − α`
/// (see [`equatorial_to_horizontal`](crate::equatorial_to_horizontal)), so
/// it increases eastwards on that formula's axis.  `latitude` is positive
/// north.  Neither value is range-checked.
///
/// The value is passed explicitly to every horizontal query; there is no
/// process-wide observer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    pub longitude: f64,
    pub latitude: f64,
}

impl Observer {
    /// The sky's historical default site: longitude 199.44°, latitude 49.88°.
    pub const DEFAULT: Self = Self::new(199.44, 49.88);

    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site() {
        let o = Observer::default();
        assert_eq!(o.longitude, 199.44);
        assert_eq!(o.latitude, 49.88);
        assert_eq!(o, Observer::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_field_names() {
        let json = serde_json::to_string(&Observer::new(-3.7, 40.4)).unwrap();
        assert_eq!(json, r#"{"longitude":-3.7,"latitude":40.4}"#);
        let back: Observer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Observer::new(-3.7, 40.4));
    }
}
