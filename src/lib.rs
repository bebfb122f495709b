//! LSD radix sort for fixed-width unsigned integers.
//!
//! The engine ([`RadixSorter`]) partitions the input into `2^R` buckets once
//! per R-bit digit, least significant digit first, and concatenates the
//! buckets back in ascending order. The rest of the crate benchmarks it
//! against the standard library's comparison sort:
//!
//! - [`digit`]: digit extraction and radix width validation
//! - [`cpu_radix_sort`]: the bucket-based radix sort engine
//! - [`cpu_sort`] / [`cpu_parallel_sort`]: comparison sort baselines
//! - [`data_gen`], [`harness`], [`lino_report`], [`config`]: benchmark tooling
//!
//! ```
//! use radix_sorting::RadixSorter;
//!
//! let mut data = vec![5u32, 3, 3, 1, 0, u32::MAX];
//! RadixSorter::<u32>::new().sort(&mut data).unwrap();
//! assert_eq!(data, vec![0, 1, 3, 3, 5, u32::MAX]);
//! ```

pub mod config;
pub mod cpu_parallel_sort;
pub mod cpu_radix_sort;
pub mod cpu_sort;
pub mod data_gen;
pub mod digit;
pub mod error;
pub mod harness;
pub mod lino_report;

pub use cpu_radix_sort::{PassStats, RadixSorter, SortStats};
pub use digit::{extract_digit, RadixKey, RadixWidth};
pub use error::{Result, SortError};
