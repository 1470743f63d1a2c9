//! CLI error handling specs
//!
//! Verify error messages for invalid arguments and configuration.

use crate::prelude::*;

#[test]
fn non_numeric_duration_is_rejected() {
    let run = cli().args(&["5s"]).fails().stderr_has("invalid value '5s'");
    assert_eq!(run.code(), Some(2));
}

#[test]
fn out_of_range_duration_is_rejected() {
    cli()
        .args(&["9223372036854775808"])
        .fails()
        .stderr_has("invalid value");
}

#[test]
fn multi_char_style_flag_is_rejected() {
    cli()
        .args(&["--style", "gs", "1"])
        .fails()
        .stderr_has("invalid value 'gs'");
}

#[test]
fn invalid_style_env_reports_variable() {
    let run = cli()
        .env("PDUR_STYLE", "units")
        .args(&["1"])
        .fails()
        .stderr_has("Error: PDUR_STYLE must be a single character");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn invalid_precision_env_reports_variable() {
    cli()
        .env("PDUR_PRECISION", "two")
        .args(&["1"])
        .fails()
        .stderr_has("Error: PDUR_PRECISION must be a non-negative integer");
}
