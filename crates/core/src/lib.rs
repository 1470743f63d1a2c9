// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pdur-core: compact human-readable rendering of signed nanosecond durations

pub mod duration;
pub mod float_fmt;
pub mod render;
pub mod style;
pub mod unit;

pub use duration::{Duration, DurationError};
pub use float_fmt::{format_float, FloatStyle};
pub use render::{render, DEFAULT_BUDGET};
pub use style::{Style, StyleError};
pub use unit::{Unit, UNITS};
