//! CPU Comparison Sorting
//!
//! The trusted reference the radix sort is checked and timed against.
//! We use the unstable sort as it's typically faster and the final order of
//! integer keys does not depend on stability.

/// Sort a slice in-place using unstable sort (typically faster than stable sort).
///
/// Uses Rust's built-in sorting algorithm which is a pattern-defeating quicksort
/// that falls back to heap sort to guarantee O(n log n) worst case.
#[inline]
pub fn sort_unstable<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}

/// Sort a slice in-place using stable sort.
#[inline]
pub fn sort_stable<T: Ord>(data: &mut [T]) {
    data.sort();
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
