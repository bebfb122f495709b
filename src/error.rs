//! Error types for the radix sort engine.
//!
//! A sort over well-formed fixed-width keys has exactly one runtime failure:
//! running out of memory while sizing or growing a bucket. Radix widths are
//! validated once, when a sorter is built.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced while configuring or running a radix sort.
#[derive(Debug, Error)]
pub enum SortError {
    /// Bucket storage could not be allocated.
    #[error("failed to allocate room for {requested} more {what}")]
    ResourceExhaustion {
        /// Which buffer was being grown.
        what: &'static str,
        /// Number of additional elements requested.
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The radix width is zero, too wide, or does not divide the key width.
    #[error(
        "radix width of {radix_bits} bits is invalid for {key_bits}-bit keys \
         (expected 1..={max} bits dividing the key width)",
        max = crate::digit::MAX_RADIX_BITS
    )]
    InvalidRadixWidth {
        /// Requested bits per pass.
        radix_bits: u32,
        /// Bit width of the key type.
        key_bits: u32,
    },
}

impl SortError {
    pub(crate) fn exhausted(what: &'static str, requested: usize, source: TryReserveError) -> Self {
        SortError::ResourceExhaustion {
            what,
            requested,
            source,
        }
    }

    /// True when the error came from a failed allocation.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, SortError::ResourceExhaustion { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radix_message() {
        let err = SortError::InvalidRadixWidth {
            radix_bits: 5,
            key_bits: 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 bits"));
        assert!(msg.contains("32-bit"));
        assert!(!err.is_resource_exhaustion());
    }

    #[test]
    fn test_exhaustion_wraps_source() {
        let source = Vec::<u32>::new().try_reserve(usize::MAX).unwrap_err();
        let err = SortError::exhausted("bucket slots", usize::MAX, source);
        assert!(err.is_resource_exhaustion());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("bucket slots"));
    }
}
