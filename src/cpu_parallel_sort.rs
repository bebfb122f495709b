//! Parallel CPU Sorting using Rayon
//!
//! The radix engine itself is single-threaded. This module supplies the
//! multi-threaded side of the benchmark:
//!
//! - `parallel_sort`: rayon's parallel pdqsort, the strongest comparison
//!   baseline on a many-core machine.
//! - `radix_sort_independent`: many unrelated slices radix-sorted at once,
//!   one engine call per rayon task. Each call owns its own buckets, so no
//!   coordination is needed between tasks.

use rayon::prelude::*;

use crate::cpu_radix_sort::RadixSorter;
use crate::digit::RadixKey;
use crate::error::Result;

/// Parallel unstable sort using rayon's parallel pdqsort.
///
/// # Example
///
/// ```
/// use radix_sorting::cpu_parallel_sort;
///
/// let mut data = vec![4u32, 2, 3, 1];
/// cpu_parallel_sort::parallel_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4]);
/// ```
pub fn parallel_sort<T: Ord + Send>(data: &mut [T]) {
    data.par_sort_unstable();
}

/// Radix sort every slice in `batches`, spreading the slices over rayon's pool.
///
/// A single slice is never split across threads. The first error reported by
/// any task is returned; slices already sorted by other tasks stay sorted.
pub fn radix_sort_independent<K, S>(sorter: &RadixSorter<K>, batches: &mut [S]) -> Result<()>
where
    K: RadixKey,
    S: AsMut<[K]> + Send,
{
    batches
        .par_iter_mut()
        .try_for_each(|batch| sorter.sort(batch.as_mut()))
}
