//! Multi-unit rendering specs
//!
//! Verify the default `s` style and how precision widens the unit budget.

use crate::prelude::*;

#[test]
fn zero_renders_as_zero_seconds() {
    cli().args(&["0"]).passes().stdout_eq("0s\n");
}

#[test]
fn default_budget_is_two_tiers() {
    cli()
        .args(&["7008", "6007008", "777600000000000"])
        .passes()
        .stdout_eq("7us 8ns\n6ms 7us\n1w 2d\n")
        .stderr_empty();
}

#[test]
fn zero_tiers_consume_budget() {
    // 6ms + 8ns: the empty microsecond tier uses up the second position.
    cli().args(&["6000008"]).passes().stdout_eq("6ms\n");
    cli()
        .args(&["-p", "2", "6000008"])
        .passes()
        .stdout_eq("6ms 8ns\n");
}

#[test]
fn precision_zero_keeps_one_tier() {
    cli()
        .args(&["--precision", "0", "777600000000000", "-240000000000"])
        .passes()
        .stdout_eq("1w\n-4m\n");
}

#[test]
fn negative_values_are_prefixed() {
    cli()
        .args(&["-8", "-7008", "-604800000000000"])
        .passes()
        .stdout_eq("-8ns\n-7us 8ns\n-1w\n");
}

#[test]
fn minimum_value_does_not_overflow() {
    cli()
        .args(&["-p", "7", "-9223372036854775808"])
        .passes()
        .stdout_eq("-15250w 1d 23h 47m 16s 854ms 775us 808ns\n");
}

#[test]
fn verbose_style_matches_units() {
    cli()
        .args(&["-s", "v", "777600000000000"])
        .passes()
        .stdout_eq("1w 2d\n");
}

#[test]
fn precision_from_environment() {
    cli()
        .env("PDUR_PRECISION", "2")
        .args(&["6007008"])
        .passes()
        .stdout_eq("6ms 7us 8ns\n");
}

#[test]
fn flag_overrides_environment() {
    cli()
        .env("PDUR_PRECISION", "2")
        .args(&["-p", "0", "6007008"])
        .passes()
        .stdout_eq("6ms\n");
}
