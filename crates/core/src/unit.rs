// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Magnitude tiers used by the multi-unit renderer.

pub const NANOS_PER_MICROSECOND: u64 = 1_000;
pub const NANOS_PER_MILLISECOND: u64 = 1_000_000;
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;
pub const NANOS_PER_WEEK: u64 = 7 * NANOS_PER_DAY;

/// A single magnitude tier: the label printed after the amount, and the
/// length of one unit in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub label: &'static str,
    pub nanos: u64,
}

impl Unit {
    const fn new(label: &'static str, nanos: u64) -> Self {
        Self { label, nanos }
    }
}

/// All tiers, largest first. Magnitudes strictly decrease.
pub const UNITS: [Unit; 8] = [
    Unit::new("w", NANOS_PER_WEEK),
    Unit::new("d", NANOS_PER_DAY),
    Unit::new("h", NANOS_PER_HOUR),
    Unit::new("m", NANOS_PER_MINUTE),
    Unit::new("s", NANOS_PER_SECOND),
    Unit::new("ms", NANOS_PER_MILLISECOND),
    Unit::new("us", NANOS_PER_MICROSECOND),
    Unit::new("ns", 1),
];

/// Index into [`UNITS`] of the largest tier that fits into `magnitude`.
///
/// Falls back to the nanosecond tier when nothing fits.
pub fn largest_unit_index(magnitude: u64) -> usize {
    UNITS
        .iter()
        .position(|unit| magnitude >= unit.nanos)
        .unwrap_or(UNITS.len() - 1)
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
