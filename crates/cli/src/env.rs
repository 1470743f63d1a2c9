// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.
//!
//! Command-line flags take precedence over everything read here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("PDUR_STYLE must be a single character, got {0:?}")]
    InvalidStyle(String),
    #[error("PDUR_PRECISION must be a non-negative integer, got {0:?}")]
    InvalidPrecision(String),
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

// --- Logging ---

/// Tracing filter directives, e.g. `debug` or `pdur_core=debug`.
pub fn log_filter() -> Option<String> {
    var("PDUR_LOG")
}

// --- Rendering defaults ---

/// Style verb used when `--style` is not given. Defaults to `s`.
pub fn default_style() -> Result<char, EnvError> {
    var("PDUR_STYLE").map_or(Ok('s'), |v| parse_style(&v))
}

/// Precision used when `--precision` is not given.
pub fn default_precision() -> Result<Option<usize>, EnvError> {
    var("PDUR_PRECISION").map(|v| parse_precision(&v)).transpose()
}

fn parse_style(value: &str) -> Result<char, EnvError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(verb), None) => Ok(verb),
        _ => Err(EnvError::InvalidStyle(value.to_string())),
    }
}

fn parse_precision(value: &str) -> Result<usize, EnvError> {
    value
        .trim()
        .parse()
        .map_err(|_| EnvError::InvalidPrecision(value.to_string()))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
