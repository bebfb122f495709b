//! Radix Sort Benchmark
//!
//! Sorts one random dataset with the standard library's pdqsort and with the
//! bucket-based LSD radix sort, prints both times and reports every position
//! where the outputs disagree. `--benchmark` adds a sweep over array sizes.

use anyhow::{bail, Context};
use clap::Parser;

use radix_sorting::config::Args;
use radix_sorting::data_gen::random_values;
use radix_sorting::harness::{self, millis, Comparison, Mismatch, RunOptions, SWEEP_SIZES};
use radix_sorting::lino_report::BenchmarkReport;
use radix_sorting::RadixSorter;

/// Mismatches printed before the rest are summarised.
const MAX_REPORTED_MISMATCHES: usize = 20;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let options = args.run_options();
    let sorter = RadixSorter::<u32>::with_radix_bits(options.radix_bits)?;

    println!("Radix Sort Benchmark");
    println!("====================\n");
    println!(
        "Array size: {} elements ({} MB)",
        args.size,
        args.size * 4 / 1_000_000
    );
    println!(
        "Radix: {} bits per pass, {} buckets, {} passes",
        sorter.radix_bits(),
        sorter.bucket_count(),
        sorter.pass_count()
    );

    println!("\nGenerating random data...");
    let data: Vec<u32> = random_values(args.size, args.seed);

    let cmp = harness::compare(&data, &options).context("radix sort failed")?;
    print_comparison(&cmp);

    let mut report = BenchmarkReport::new(&format!(
        "LSD radix sort ({} bits per pass) vs pdqsort",
        options.radix_bits
    ));
    report.extend(cmp.to_results());

    if args.benchmark {
        run_benchmark(&options, args.seed, &mut report)?;
    }

    if let Some(path) = &args.report {
        report
            .save_lino(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nLinks Notation report written to: {}", path.display());
    }
    if let Some(path) = &args.markdown {
        report
            .save_markdown(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Markdown report written to: {}", path.display());
    }

    if !report.all_verified() {
        bail!("sorted outputs did not match");
    }
    Ok(())
}

fn print_comparison(cmp: &Comparison) {
    println!("\n--- CPU Sorting (std::sort unstable / pdqsort) ---");
    println!("pdqsort time: {:.3} ms", millis(cmp.reference));

    println!("\n--- CPU Sorting (LSD Radix Sort) ---");
    println!("Radix sort time: {:.3} ms", millis(cmp.radix));

    if let Some(parallel) = cmp.parallel {
        println!("\n--- CPU Sorting (rayon parallel pdqsort) ---");
        println!("Parallel pdqsort time: {:.3} ms", millis(parallel));
        if cmp.parallel_mismatch {
            eprintln!("ERROR: parallel sort differs from pdqsort!");
        }
    }

    report_mismatches(&cmp.mismatches);

    println!("\n--- Performance Comparison ---");
    let speedup = cmp.speedup();
    if speedup > 1.0 {
        println!("Radix vs pdqsort: Radix is {:.2}x faster", speedup);
    } else {
        println!("Radix vs pdqsort: pdqsort is {:.2}x faster", 1.0 / speedup);
    }
    if let Some(parallel) = cmp.parallel {
        let speedup = parallel.as_secs_f64() / cmp.radix.as_secs_f64();
        if speedup > 1.0 {
            println!("Radix vs parallel pdqsort: Radix is {:.2}x faster", speedup);
        } else {
            println!(
                "Radix vs parallel pdqsort: parallel pdqsort is {:.2}x faster",
                1.0 / speedup
            );
        }
    }
}

fn report_mismatches(mismatches: &[Mismatch]) {
    if mismatches.is_empty() {
        println!("Radix sort verified against pdqsort: OK");
        return;
    }

    let show = |v: Option<u32>| v.map_or_else(|| "<none>".to_string(), |v| v.to_string());
    for m in mismatches.iter().take(MAX_REPORTED_MISMATCHES) {
        eprintln!(
            "mismatch at pos {}: {} != {}",
            m.position,
            show(m.expected),
            show(m.actual)
        );
    }
    if mismatches.len() > MAX_REPORTED_MISMATCHES {
        eprintln!(
            "... and {} more mismatches",
            mismatches.len() - MAX_REPORTED_MISMATCHES
        );
    }
}

/// Run comparisons across multiple array sizes
fn run_benchmark(
    options: &RunOptions,
    seed: Option<u64>,
    report: &mut BenchmarkReport,
) -> anyhow::Result<()> {
    println!("\n\n====================================");
    println!("Running comprehensive benchmark...");
    println!("====================================\n");

    println!(
        "{:>12} | {:>12} | {:>14} | {:>12} | {:>8}",
        "Size", "pdqsort (ms)", "Radix (ms)", "Radix/pdq", "Verified"
    );
    println!("{:-<12}-+-{:-<12}-+-{:-<14}-+-{:-<12}-+-{:-<8}", "", "", "", "", "");

    for (i, &size) in SWEEP_SIZES.iter().enumerate() {
        let data: Vec<u32> = random_values(size, seed.map(|s| s.wrapping_add(i as u64 + 1)));
        let cmp = harness::compare(&data, options)
            .with_context(|| format!("radix sort failed at size {}", size))?;

        println!(
            "{:>12} | {:>12.3} | {:>14.3} | {:>11.2}x | {:>8}",
            size,
            millis(cmp.reference),
            millis(cmp.radix),
            cmp.speedup(),
            if cmp.is_verified() { "OK" } else { "FAILED" }
        );
        summarize_mismatches(&cmp);
        report.extend(cmp.to_results());
    }

    println!("\nNote: Radix/pdq > 1.0x means radix sort is faster than pdqsort");
    Ok(())
}

fn summarize_mismatches(cmp: &Comparison) {
    if let Some(first) = cmp.mismatches.first() {
        eprintln!(
            "size {}: {} mismatches, first at pos {}",
            cmp.size,
            cmp.mismatches.len(),
            first.position
        );
    }
}
