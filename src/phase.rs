// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase as a triangle wave over the synodic month.

use qtty::Days;

use crate::julian_day::JulianDay;

/// Mean length of the synodic month.
pub const SYNODIC_MONTH: Days = Days::new(29.531026);

/// Phase epoch: 2008-01-22T13:35:46 (JD 2 454 488.0665), where the phase
/// scalar is zero.  That instant is the full moon of January 2008.
pub const PHASE_EPOCH: JulianDay = JulianDay::new(2_454_488.0665);

/// Position within the current lunation, folded into `[0, 1)`.
///
/// The fraction is `|((jd − epoch) / synodic month) mod 1|` with a
/// truncated remainder, so instants before [`PHASE_EPOCH`] fold onto
/// the mirrored fraction. The phase waveform is symmetric, which keeps
/// [`moon_phase`] periodic on both sides of the reference.
pub fn lunation_fraction(jd: JulianDay) -> f64 {
    let cycles = jd.days_since(PHASE_EPOCH).value() / SYNODIC_MONTH.value();
    (cycles % 1.0).abs()
}

/// Lunar phase scalar in `[0, 2]`, periodic with the synodic month.
///
/// `f(T) = 2 − |2 − 4T|` for `T =` [`lunation_fraction`]: `0` at the epoch
/// (a full moon), rising linearly to `2` half a lunation later (new moon)
/// and falling back to `0`.  The value drives phase-mask blending in the
/// renderer, which accepts anything in `[0, 4)`.
pub fn moon_phase(jd: JulianDay) -> f64 {
    let t = lunation_fraction(jd);
    -(-4.0 * t + 2.0).abs() + 2.0
}
