//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::data_gen::DEFAULT_ARRAY_SIZE;
use crate::digit::DEFAULT_RADIX_BITS;
use crate::harness::RunOptions;

/// Benchmark LSD radix sort against comparison sorting on random u32 data.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Number of elements to sort
    #[arg(default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Bits consumed per radix pass (must divide 32)
    #[arg(short = 'r', long, default_value_t = DEFAULT_RADIX_BITS)]
    pub radix_bits: u32,

    /// Seed for reproducible input data
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Also time rayon's parallel comparison sort
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Run a sweep over sizes 1K..16M after the main comparison
    #[arg(long, default_value_t = false)]
    pub benchmark: bool,

    /// Write a Links Notation report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write a Markdown report to this path
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            radix_bits: self.radix_bits,
            parallel: self.parallel,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
