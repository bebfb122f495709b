//! CPU Radix Sort Implementation
//!
//! LSD (Least Significant Digit) radix sort built on stable bucket
//! distribution. Every pass scans the working slice left to right, appends each
//! value to the bucket selected by its current digit, then writes the buckets
//! back in ascending bucket order. Appending in scan order keeps each pass
//! stable, which is what lets later passes preserve the order established by
//! earlier (less significant) digits.
//!
//! Complexity: O(n * k) where k = key bits / radix bits (8 passes for 32-bit
//! keys with the default 4-bit digits).
//!
//! The buckets are allocated once per sort, pre-sized to `2 * n / buckets`
//! elements each, cleared between passes and grown on demand. Growth goes
//! through `Vec::try_reserve`, so running out of memory surfaces as
//! [`SortError::ResourceExhaustion`] instead of aborting the process.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::digit::{extract_digit, RadixKey, RadixWidth};
use crate::error::{Result, SortError};

/// Bucket occupancy observed during one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// Pass index, 0 for the least significant digit.
    pub pass: u32,
    /// Number of values in the fullest bucket.
    pub largest_bucket: usize,
    /// Number of buckets that received at least one value.
    pub occupied_buckets: usize,
}

/// Diagnostics collected by [`RadixSorter::sort_with_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of sorted elements.
    pub len: usize,
    /// One entry per executed pass. Empty for inputs of length 0 or 1.
    pub passes: Vec<PassStats>,
}

/// The per-sort bucket table. Owned by a single sort call.
struct Buckets<K> {
    slots: Vec<Vec<K>>,
}

impl<K: RadixKey> Buckets<K> {
    /// Allocate `count` buckets, each pre-sized for `2 * n / count` values.
    ///
    /// The size is only a hint; buckets grow past it when digits are skewed.
    fn with_hint(count: usize, n: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|e| SortError::exhausted("buckets", count, e))?;

        let hint = n.saturating_mul(2) / count;
        for _ in 0..count {
            let mut bucket = Vec::new();
            bucket
                .try_reserve_exact(hint)
                .map_err(|e| SortError::exhausted("bucket slots", hint, e))?;
            slots.push(bucket);
        }

        Ok(Buckets { slots })
    }

    /// Empty every bucket, keeping its capacity.
    fn clear(&mut self) {
        for bucket in &mut self.slots {
            bucket.clear();
        }
    }

    #[inline(always)]
    fn push(&mut self, digit: usize, value: K) -> Result<()> {
        let bucket = &mut self.slots[digit];
        if bucket.len() == bucket.capacity() {
            bucket
                .try_reserve(1)
                .map_err(|e| SortError::exhausted("bucket slots", 1, e))?;
        }
        bucket.push(value);
        Ok(())
    }

    /// Concatenate buckets 0..count into `out`.
    fn write_back(&self, out: &mut [K]) {
        let mut idx = 0;
        for bucket in &self.slots {
            let end = idx + bucket.len();
            out[idx..end].copy_from_slice(bucket);
            idx = end;
        }
        debug_assert_eq!(idx, out.len(), "pass dropped or duplicated values");
    }

    fn stats(&self, pass: u32) -> PassStats {
        let mut largest_bucket = 0;
        let mut occupied_buckets = 0;
        for bucket in &self.slots {
            largest_bucket = largest_bucket.max(bucket.len());
            if !bucket.is_empty() {
                occupied_buckets += 1;
            }
        }
        PassStats {
            pass,
            largest_bucket,
            occupied_buckets,
        }
    }
}

/// One stable partition-and-concatenate pass over `data` for digit `pass`.
///
/// `data` is only rewritten once the whole slice has been distributed, so a
/// failed allocation leaves it untouched.
fn run_pass<K: RadixKey>(
    buckets: &mut Buckets<K>,
    data: &mut [K],
    pass: u32,
    width: RadixWidth,
) -> Result<()> {
    buckets.clear();

    for &value in data.iter() {
        buckets.push(extract_digit(value, pass, width), value)?;
    }

    buckets.write_back(data);
    Ok(())
}

/// LSD radix sorter for one key type and radix width.
///
/// The sorter only holds configuration. Each call to [`sort`](Self::sort)
/// allocates its own buckets, so one sorter can be shared across threads
/// sorting independent slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixSorter<K: RadixKey> {
    width: RadixWidth,
    _key: PhantomData<fn() -> K>,
}

impl<K: RadixKey> RadixSorter<K> {
    /// Sorter with the default 4-bit digits.
    pub fn new() -> Self {
        RadixSorter {
            width: RadixWidth::DEFAULT,
            _key: PhantomData,
        }
    }

    /// Sorter consuming `bits` bits per pass.
    ///
    /// Fails with [`SortError::InvalidRadixWidth`] unless `bits` is in
    /// `1..=16` and divides the key width.
    pub fn with_radix_bits(bits: u32) -> Result<Self> {
        Ok(RadixSorter {
            width: RadixWidth::for_key::<K>(bits)?,
            _key: PhantomData,
        })
    }

    pub fn width(&self) -> RadixWidth {
        self.width
    }

    pub fn radix_bits(&self) -> u32 {
        self.width.bits()
    }

    pub fn bucket_count(&self) -> usize {
        self.width.bucket_count()
    }

    pub fn pass_count(&self) -> u32 {
        self.width.pass_count::<K>()
    }

    /// Sort `data` ascending.
    ///
    /// Uses bucket storage proportional to `data.len()`. The only error is
    /// [`SortError::ResourceExhaustion`]; on error `data` is still a
    /// permutation of its original contents.
    pub fn sort(&self, data: &mut [K]) -> Result<()> {
        self.sort_passes(data, |_| {})
    }

    /// Like [`sort`](Self::sort), also returning per-pass bucket occupancy.
    pub fn sort_with_stats(&self, data: &mut [K]) -> Result<SortStats> {
        let mut stats = SortStats {
            len: data.len(),
            passes: Vec::with_capacity(self.pass_count() as usize),
        };
        self.sort_passes(data, |pass| stats.passes.push(pass))?;
        Ok(stats)
    }

    fn sort_passes<F>(&self, data: &mut [K], mut on_pass: F) -> Result<()>
    where
        F: FnMut(PassStats),
    {
        if data.len() <= 1 {
            return Ok(());
        }

        let n = data.len();
        let passes = self.pass_count();
        debug!(
            "radix sort: {} elements, {} bits per pass, {} buckets, {} passes",
            n,
            self.radix_bits(),
            self.bucket_count(),
            passes
        );

        let mut buckets = Buckets::with_hint(self.bucket_count(), n)?;

        // Pass p + 1 depends on the fully rebuilt slice from pass p.
        for pass in 0..passes {
            run_pass(&mut buckets, data, pass, self.width)?;

            let stats = buckets.stats(pass);
            trace!(
                "pass {}: {} buckets occupied, largest holds {}",
                stats.pass,
                stats.occupied_buckets,
                stats.largest_bucket
            );
            on_pass(stats);
        }

        debug_assert!(crate::cpu_sort::is_sorted(data));
        Ok(())
    }
}

impl<K: RadixKey> Default for RadixSorter<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a `u32` slice in place with 4-bit digits (8 passes, 16 buckets).
pub fn sort(data: &mut [u32]) -> Result<()> {
    RadixSorter::<u32>::new().sort(data)
}
