//! Numeric style specs
//!
//! Verify the float styles and the placeholder for unknown verbs.

use crate::prelude::*;

#[test]
fn general_style_prints_seconds() {
    cli()
        .args(&["-s", "g", "6000000", "604800000000000", "8"])
        .passes()
        .stdout_eq("0.006\n604800\n8e-09\n");
}

#[test]
fn exponent_styles() {
    cli()
        .args(&["-s", "e", "604800000000000"])
        .passes()
        .stdout_eq("6.048e+05\n");
    cli()
        .args(&["-s", "E", "-p", "2", "-604800000000000"])
        .passes()
        .stdout_eq("-6.05E+05\n");
}

#[test]
fn fixed_style_with_precision() {
    cli()
        .args(&["-s", "f", "-p", "2", "6000000", "-8"])
        .passes()
        .stdout_eq("0.01\n-0.00\n");
}

#[test]
fn binary_style_ignores_precision() {
    cli()
        .args(&["-s", "b", "-p", "2", "5000000000"])
        .passes()
        .stdout_eq("5629499534213120p-50\n");
}

#[test]
fn style_from_environment() {
    cli()
        .env("PDUR_STYLE", "g")
        .args(&["240000000000"])
        .passes()
        .stdout_eq("240\n");
}

#[test]
fn unknown_style_prints_placeholder_and_warns() {
    cli()
        .args(&["-s", "d", "8", "777600000000000"])
        .passes()
        .stdout_eq("%!d(Duration=8ns)\n%!d(Duration=1w 2d)\n")
        .stderr_has("unsupported style 'd'");
}

#[test]
fn unknown_style_warning_can_be_silenced() {
    cli()
        .env("PDUR_LOG", "error")
        .args(&["-s", "d", "8"])
        .passes()
        .stdout_eq("%!d(Duration=8ns)\n")
        .stderr_empty();
}
