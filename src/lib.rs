// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sky Ephemeris
//!
//! Low-precision, deterministic positions of the Sun and Moon for sky
//! rendering.  A calendar date becomes a continuous [`JulianDay`]; the two
//! ephemerides produce ecliptic coordinates that are rotated to the
//! equator and then to the observer's horizon; the horizon pair becomes a
//! unit [`Direction`] for the lighting code.  The lunar phase is a separate
//! scalar that depends only on time.
//!
//! # Core types
//!
//! - [`JulianDay`] — continuous day count, integer at noon.
//! - [`GregorianDateTime`] — proleptic Gregorian civil date-time.
//! - [`Observer`] — observer longitude/latitude, passed to every query.
//! - [`EclipticCoordinate`], [`EquatorialCoordinate`], [`HorizontalCoordinate`]
//!   — the three frames in the pipeline.
//! - [`Direction`] — `(north, east, zenith)` unit vector.
//! - [`SkyState`] / [`SkyClock`] — per-frame bundle and its time source.
//!
//! # Pipeline
//!
//! | Step | Function |
//! |------|----------|
//! | calendar → JD | [`GregorianDateTime::to_julian_day`] |
//! | Sun ecliptic | [`sun_ecliptic`] |
//! | Moon ecliptic | [`moon_ecliptic`] |
//! | ecliptic → equatorial | [`ecliptic_to_equatorial`] |
//! | equatorial → horizontal | [`equatorial_to_horizontal`] |
//! | horizontal → vector | [`Direction::from_horizontal`] |
//! | phase | [`moon_phase`] |
//!
//! Every function is pure; all values are `Copy` and safe to share across
//! threads.
//!
//! ```
//! use skyephem::{sun_horizontal, moon_phase, GregorianDateTime, Observer};
//!
//! let jd = GregorianDateTime::new(2000, 1, 1, 12, 0, 0.0)?.to_julian_day();
//! let sun = sun_horizontal(jd, Observer::new(0.0, 0.0));
//! let phase = moon_phase(jd);
//! assert!((0.0..=360.0).contains(&sun.azimuth));
//! assert!((0.0..4.0).contains(&phase));
//! # Ok::<(), skyephem::CalendarError>(())
//! ```

pub mod angle;
mod calendar;
mod coords;
mod direction;
mod error;
mod julian_day;
mod moon;
mod observer;
mod phase;
mod sky;
mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    gregorian_date_from_julian_day_number, julian_day_from_seconds_of_day, julian_day_number,
    GregorianDateTime,
};
pub use coords::{
    ecliptic_to_equatorial, equatorial_to_horizontal, rectangular_to_spherical,
    spherical_to_rectangular, EclipticCoordinate, EquatorialCoordinate, HorizontalCoordinate,
    RectangularCoordinate, SphericalCoordinate, OBLIQUITY_J2000_DEG,
};
pub use direction::{moon_direction, sun_direction, Direction};
pub use error::CalendarError;
pub use julian_day::JulianDay;
pub use moon::{
    moon_ecliptic, moon_equatorial, moon_horizontal, LunarArguments, PerturbationTerm,
    LATITUDE_TERMS, LONGITUDE_TERMS,
};
pub use observer::Observer;
pub use phase::{lunation_fraction, moon_phase, PHASE_EPOCH, SYNODIC_MONTH};
pub use sky::{SkyClock, SkyState};
pub use sun::{sun_ecliptic, sun_equatorial, sun_horizontal, SolarElements};
