//! Digit extraction for LSD radix sort.
//!
//! A digit is an R-bit slice of a key. Pass `p` looks at bits
//! `p*R .. (p+1)*R`, so pass 0 reads the least significant digit and the last
//! pass reads the most significant one.

use std::fmt::Debug;

use crate::error::{Result, SortError};

/// Upper bound on bits per pass (65536 buckets).
pub const MAX_RADIX_BITS: u32 = 16;

/// Bits per pass used when nothing else is configured.
pub const DEFAULT_RADIX_BITS: u32 = 4;

/// Fixed-width unsigned integer that can be sorted digit by digit.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and `usize`.
pub trait RadixKey: Copy + Ord + Debug + Send + Sync + private::Sealed {
    /// Width of the key in bits.
    const BITS: u32;

    /// Returns `(self >> shift) & mask` as a bucket index.
    ///
    /// `shift` is always below `Self::BITS`.
    fn digit(self, shift: u32, mask: usize) -> usize;
}

macro_rules! impl_radix_key {
    ($($t:ty)*) => ($(
        impl RadixKey for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn digit(self, shift: u32, mask: usize) -> usize {
                (self >> shift) as usize & mask
            }
        }
    )*)
}

impl_radix_key! { u8 u16 u32 u64 usize }

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Number of bits consumed per pass, validated against a key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadixWidth {
    bits: u32,
}

impl RadixWidth {
    /// 4 bits per pass: 16 buckets, and it divides every supported key width.
    pub const DEFAULT: RadixWidth = RadixWidth {
        bits: DEFAULT_RADIX_BITS,
    };

    /// Validate `bits` for keys of type `K`.
    ///
    /// `bits` must be in `1..=MAX_RADIX_BITS` and divide `K::BITS` exactly, so
    /// that `pass_count * bits == K::BITS` and no shift ever reaches the key width.
    pub fn for_key<K: RadixKey>(bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_RADIX_BITS || K::BITS % bits != 0 {
            return Err(SortError::InvalidRadixWidth {
                radix_bits: bits,
                key_bits: K::BITS,
            });
        }
        Ok(RadixWidth { bits })
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// `2^bits`
    #[inline]
    pub const fn bucket_count(self) -> usize {
        1 << self.bits
    }

    #[inline]
    pub const fn mask(self) -> usize {
        self.bucket_count() - 1
    }

    /// Passes needed to cover every bit of `K`.
    #[inline]
    pub fn pass_count<K: RadixKey>(self) -> u32 {
        K::BITS / self.bits
    }
}

impl Default for RadixWidth {
    fn default() -> Self {
        RadixWidth::DEFAULT
    }
}

/// Bucket index of `value` for pass `pass`: `(value >> pass*R) & (2^R - 1)`.
#[inline(always)]
pub fn extract_digit<K: RadixKey>(value: K, pass: u32, width: RadixWidth) -> usize {
    debug_assert!(pass < width.pass_count::<K>());
    value.digit(pass * width.bits(), width.mask())
}
