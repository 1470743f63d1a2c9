// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-unit duration rendering: `"1w 2d"`, `"5s 7us"`, `"-3h 4m"`.

use crate::unit::{largest_unit_index, UNITS};

/// Budget used when the caller does not ask for a specific number of units.
pub const DEFAULT_BUDGET: usize = 2;

/// Render a signed nanosecond count as space-separated unit segments.
///
/// Starting at the largest tier that fits, at most `budget` tiers are
/// visited. A tier whose amount is zero prints nothing but still uses up one
/// unit of budget, so `6ms 8ns` with a budget of 2 renders as `"6ms"`.
///
/// Zero always renders as `"0s"`, whatever the budget.
pub fn render(nanos: i64, budget: usize) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let mut remaining = nanos.unsigned_abs();
    let start = largest_unit_index(remaining);

    let segments: Vec<String> = UNITS[start..]
        .iter()
        .take(budget)
        .filter_map(|unit| {
            let amount = remaining / unit.nanos;
            remaining %= unit.nanos;
            (amount > 0).then(|| format!("{}{}", amount, unit.label))
        })
        .collect();

    let joined = segments.join(" ");
    if nanos < 0 {
        format!("-{}", joined)
    } else {
        joined
    }
}

/// Budget for a requested precision: one tier plus one per precision step.
pub fn budget_for_precision(precision: Option<usize>) -> usize {
    precision.map_or(DEFAULT_BUDGET, |p| p.saturating_add(1))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
