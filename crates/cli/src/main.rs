// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pdur - render nanosecond durations as compact text

mod env;
mod output;

use anyhow::Result;
use clap::Parser;
use output::{OutputFormat, Rendered};
use pdur_core::{Duration, Style};

#[derive(Parser)]
#[command(
    name = "pdur",
    version,
    about = "Render nanosecond durations as compact text"
)]
struct Cli {
    /// Durations in nanoseconds (negative values allowed)
    #[arg(allow_negative_numbers = true)]
    nanos: Vec<i64>,

    /// Style verb: s or v (units), b, e, E, f, g, G [env: PDUR_STYLE]
    #[arg(short, long)]
    style: Option<char>,

    /// Extra unit tiers for s/v, digits for the numeric styles [env: PDUR_PRECISION]
    #[arg(short, long)]
    precision: Option<usize>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.nanos.is_empty() {
        // Nothing to render — print help and exit 0
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let verb = match cli.style {
        Some(verb) => verb,
        None => env::default_style()?,
    };
    let precision = match cli.precision {
        Some(precision) => Some(precision),
        None => env::default_precision()?,
    };

    if let Err(err) = Style::try_from(verb) {
        tracing::warn!(%err, "printing placeholders");
    }
    tracing::debug!(%verb, ?precision, count = cli.nanos.len(), "rendering");

    let rendered: Vec<Rendered> = cli
        .nanos
        .iter()
        .map(|&nanos| Rendered::new(Duration::from_nanos(nanos), verb, precision))
        .collect();

    output::print_rendered(&rendered, cli.output)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
