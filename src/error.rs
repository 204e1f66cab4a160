// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Rejected calendar fields from [`GregorianDateTime::new`](crate::GregorianDateTime::new).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalendarError {
    #[error("month {0} out of range 1..=12")]
    InvalidMonth(u32),

    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("hour {0} out of range 0..=23")]
    InvalidHour(u32),

    #[error("minute {0} out of range 0..=59")]
    InvalidMinute(u32),

    #[error("second {0} out of range [0, 60)")]
    InvalidSecond(f64),
}
