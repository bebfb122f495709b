//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report written by `radix-sorting
//! --report` to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;

use radix_sorting::lino_report::parse_lino_report;

/// Convert a Links Notation benchmark report to Markdown.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Optional output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("error reading {}", args.input.display()))?;

    let report = parse_lino_report(&content).ok_or_else(|| {
        anyhow!(
            "could not parse the Links Notation report in {}; make sure it contains benchmark results",
            args.input.display()
        )
    })?;
    log::debug!("parsed {} results", report.results.len());

    let markdown = report.to_markdown_table();
    match args.output {
        Some(path) => {
            fs::write(&path, &markdown)
                .with_context(|| format!("error writing {}", path.display()))?;
            println!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(())
}
