// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed nanosecond duration with human-readable formatting.
//!
//! `Display` renders multi-unit text (`{:.N}` widens it to `N + 1` tiers),
//! `LowerExp`/`UpperExp` render the seconds value, and [`Duration::format`]
//! dispatches on a style verb for callers that pick the style at runtime.

use crate::float_fmt::{format_float, FloatStyle};
use crate::render::{budget_for_precision, render};
use crate::style::Style;
use crate::unit::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND, NANOS_PER_MILLISECOND,
    NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_WEEK,
};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors converting into a [`Duration`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("{0:?} does not fit in a signed 64-bit nanosecond count")]
    OutOfRange(std::time::Duration),
}

/// Elapsed time as a signed count of nanoseconds.
///
/// Arithmetic saturates at the `i64` bounds.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);
    pub const NANOSECOND: Duration = Duration(1);
    pub const MICROSECOND: Duration = Duration(NANOS_PER_MICROSECOND as i64);
    pub const MILLISECOND: Duration = Duration(NANOS_PER_MILLISECOND as i64);
    pub const SECOND: Duration = Duration(NANOS_PER_SECOND as i64);
    pub const MINUTE: Duration = Duration(NANOS_PER_MINUTE as i64);
    pub const HOUR: Duration = Duration(NANOS_PER_HOUR as i64);
    pub const DAY: Duration = Duration(NANOS_PER_DAY as i64);
    pub const WEEK: Duration = Duration(NANOS_PER_WEEK as i64);
    pub const MIN: Duration = Duration(i64::MIN);
    pub const MAX: Duration = Duration(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Magnitude as a standard library duration. Never overflows, including
    /// for [`Duration::MIN`].
    pub const fn unsigned_abs(self) -> std::time::Duration {
        std::time::Duration::from_nanos(self.0.unsigned_abs())
    }

    /// Seconds as a float, e.g. `0.006` for six milliseconds.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SECOND as f64
    }

    /// Multi-unit text visiting at most `budget` tiers. See [`render`].
    pub fn render(self, budget: usize) -> String {
        render(self.0, budget)
    }

    /// Seconds in general notation with the shortest round-trip digits:
    /// `"0.006"`, `"604800"`, `"8e-09"`.
    pub fn seconds_string(self) -> String {
        format_float(
            self.as_secs_f64(),
            FloatStyle::General { upper: false },
            None,
        )
    }

    /// Render in a known style.
    ///
    /// For the text styles `precision` adds tiers beyond the first (default
    /// two tiers in total); for the numeric styles it is passed to the float
    /// formatter as-is.
    pub fn format_style(self, style: Style, precision: Option<usize>) -> String {
        match style.float_style() {
            Some(float_style) => format_float(self.as_secs_f64(), float_style, precision),
            None => render(self.0, budget_for_precision(precision)),
        }
    }

    /// Render by style verb. Never fails: an unknown verb produces a
    /// `%!<verb>(Duration=<text>)` placeholder instead.
    pub fn format(self, verb: char, precision: Option<usize>) -> String {
        match Style::try_from(verb) {
            Ok(style) => self.format_style(style, precision),
            Err(err) => {
                tracing::debug!(%verb, error = %err, "unsupported duration style");
                format!("%!{}(Duration={})", verb, self)
            }
        }
    }
}

impl From<i64> for Duration {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<Duration> for i64 {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(duration: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(duration.as_nanos())
            .map(Self)
            .map_err(|_| DurationError::OutOfRange(duration))
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(self.0.saturating_neg())
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration(self.0.saturating_mul(rhs))
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0, budget_for_precision(f.precision())))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Duration")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl fmt::LowerExp for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = FloatStyle::Exponent { upper: false };
        f.write_str(&format_float(self.as_secs_f64(), style, f.precision()))
    }
}

impl fmt::UpperExp for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = FloatStyle::Exponent { upper: true };
        f.write_str(&format_float(self.as_secs_f64(), style, f.precision()))
    }
}

/// Serialized as a number of seconds. Whole seconds are written as integers
/// so one week becomes `604800` rather than `604800.0`.
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let per_second = NANOS_PER_SECOND as i64;
        if self.0 % per_second == 0 {
            serializer.serialize_i64(self.0 / per_second)
        } else {
            serializer.serialize_f64(self.as_secs_f64())
        }
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
