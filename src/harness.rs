//! Benchmark harness: time the radix sort against comparison sorts on
//! independent copies of one dataset and cross-check the outputs.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::cpu_parallel_sort;
use crate::cpu_radix_sort::RadixSorter;
use crate::cpu_sort;
use crate::error::Result;
use crate::lino_report::{BenchmarkResult, CPU_PARALLEL_PDQSORT, CPU_PDQSORT, CPU_RADIX};

/// Sizes used by `--benchmark` sweeps.
pub const SWEEP_SIZES: [usize; 8] = [
    1 << 10, // 1K
    1 << 12, // 4K
    1 << 14, // 16K
    1 << 16, // 64K
    1 << 18, // 256K
    1 << 20, // 1M
    1 << 22, // 4M
    1 << 24, // 16M
];

/// What to run for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub radix_bits: u32,
    /// Also time rayon's parallel comparison sort.
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            radix_bits: crate::digit::DEFAULT_RADIX_BITS,
            parallel: false,
        }
    }
}

/// A position where the radix output disagrees with the reference output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub position: usize,
    /// Reference value, `None` past the end of the reference output.
    pub expected: Option<u32>,
    /// Radix value, `None` past the end of the radix output.
    pub actual: Option<u32>,
}

/// Timings and verification for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub size: usize,
    pub radix_bits: u32,
    pub reference: Duration,
    pub radix: Duration,
    pub parallel: Option<Duration>,
    pub mismatches: Vec<Mismatch>,
    /// The parallel sort disagreed with the reference.
    pub parallel_mismatch: bool,
}

impl Comparison {
    pub fn is_verified(&self) -> bool {
        self.mismatches.is_empty() && !self.parallel_mismatch
    }

    /// Reference time divided by radix time; above 1.0 means radix won.
    pub fn speedup(&self) -> f64 {
        self.reference.as_secs_f64() / self.radix.as_secs_f64()
    }

    /// Rows for a [`BenchmarkReport`](crate::lino_report::BenchmarkReport).
    pub fn to_results(&self) -> Vec<BenchmarkResult> {
        let mut results = vec![
            BenchmarkResult {
                algorithm: CPU_PDQSORT.to_string(),
                array_size: self.size,
                time_ms: millis(self.reference),
                verified: true,
                radix_bits: None,
            },
            BenchmarkResult {
                algorithm: CPU_RADIX.to_string(),
                array_size: self.size,
                time_ms: millis(self.radix),
                verified: self.mismatches.is_empty(),
                radix_bits: Some(self.radix_bits),
            },
        ];
        if let Some(parallel) = self.parallel {
            results.push(BenchmarkResult {
                algorithm: CPU_PARALLEL_PDQSORT.to_string(),
                array_size: self.size,
                time_ms: millis(parallel),
                verified: !self.parallel_mismatch,
                radix_bits: None,
            });
        }
        results
    }
}

pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Run `f` once and return its result with the elapsed monotonic time.
pub fn timed<R, F: FnOnce() -> R>(f: F) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Every position where `actual` differs from `expected`.
pub fn find_mismatches(expected: &[u32], actual: &[u32]) -> Vec<Mismatch> {
    let len = expected.len().max(actual.len());
    (0..len)
        .filter_map(|position| {
            let e = expected.get(position).copied();
            let a = actual.get(position).copied();
            (e != a).then_some(Mismatch {
                position,
                expected: e,
                actual: a,
            })
        })
        .collect()
}

/// Sort copies of `data` with each algorithm and compare the outputs.
///
/// Fails only if the radix width is invalid or the radix sort runs out of memory.
pub fn compare(data: &[u32], options: &RunOptions) -> Result<Comparison> {
    let sorter = RadixSorter::<u32>::with_radix_bits(options.radix_bits)?;

    let mut reference = data.to_vec();
    let ((), reference_time) = timed(|| cpu_sort::sort_unstable(&mut reference));

    let mut radix = data.to_vec();
    let (sorted, radix_time) = timed(|| sorter.sort(&mut radix));
    sorted?;

    let (parallel, parallel_mismatch) = if options.parallel {
        let mut parallel = data.to_vec();
        let ((), elapsed) = timed(|| cpu_parallel_sort::parallel_sort(&mut parallel));
        (Some(elapsed), parallel != reference)
    } else {
        (None, false)
    };

    let mismatches = find_mismatches(&reference, &radix);
    if !mismatches.is_empty() {
        warn!(
            "radix sort disagreed with the reference at {} of {} positions",
            mismatches.len(),
            data.len()
        );
    }
    info!(
        "size {}: pdqsort {:.3} ms, radix({} bits) {:.3} ms",
        data.len(),
        millis(reference_time),
        options.radix_bits,
        millis(radix_time)
    );

    Ok(Comparison {
        size: data.len(),
        radix_bits: options.radix_bits,
        reference: reference_time,
        radix: radix_time,
        parallel,
        mismatches,
        parallel_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_gen::random_values;

    #[test]
    fn test_find_mismatches() {
        assert!(find_mismatches(&[1, 2, 3], &[1, 2, 3]).is_empty());

        let m = find_mismatches(&[1, 2, 3], &[1, 3, 2]);
        assert_eq!(m.len(), 2);
        assert_eq!(
            m[0],
            Mismatch {
                position: 1,
                expected: Some(2),
                actual: Some(3)
            }
        );

        let m = find_mismatches(&[1, 2], &[1]);
        assert_eq!(
            m,
            vec![Mismatch {
                position: 1,
                expected: Some(2),
                actual: None
            }]
        );
    }

    #[test]
    fn test_compare_verifies() {
        let data: Vec<u32> = random_values(20_000, Some(11));
        let options = RunOptions {
            radix_bits: 8,
            parallel: true,
        };
        let cmp = compare(&data, &options).unwrap();
        assert_eq!(cmp.size, 20_000);
        assert!(cmp.is_verified());
        assert!(cmp.parallel.is_some());

        let results = cmp.to_results();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.verified));
        assert_eq!(results[1].algorithm, CPU_RADIX);
        assert_eq!(results[1].radix_bits, Some(8));
    }

    #[test]
    fn test_compare_empty() {
        let cmp = compare(&[], &RunOptions::default()).unwrap();
        assert!(cmp.is_verified());
        assert_eq!(cmp.to_results().len(), 2);
    }

    #[test]
    fn test_compare_rejects_bad_width() {
        let options = RunOptions {
            radix_bits: 7,
            parallel: false,
        };
        assert!(compare(&[3, 1, 2], &options).is_err());
    }
}
