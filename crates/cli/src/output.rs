// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use pdur_core::Duration;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One input value and its rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    pub nanos: i64,
    pub text: String,
    /// Serialized as seconds.
    pub seconds: Duration,
}

impl Rendered {
    pub fn new(duration: Duration, verb: char, precision: Option<usize>) -> Self {
        Self {
            nanos: duration.as_nanos(),
            text: duration.format(verb, precision),
            seconds: duration,
        }
    }
}

/// Build the full stdout payload: one line per value for text, a
/// pretty-printed array for JSON.
pub fn format_rendered(entries: &[Rendered], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                out.push_str(&entry.text);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(entries)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn print_rendered(entries: &[Rendered], format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", format_rendered(entries, format)?);
    Ok(())
}
