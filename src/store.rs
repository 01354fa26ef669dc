//! Owned digit storage.
//!
//! Digits are kept in little-endian order, so for a `vec![0, 1, 2, 3]`, `3`
//! is the most significant digit and `0` the least significant. Growth is
//! `Vec`'s amortized doubling; nothing here holds a pointer across a
//! reallocation.

use crate::digit::Digit;
use alloc::vec::Vec;

/// Capacity reserved for a fresh buffer, to avoid repeated reallocations
/// while a value is small.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

pub(crate) type DigitVec = Vec<Digit>;

/// Create an empty buffer with the default capacity.
#[inline]
pub(crate) fn with_default_capacity() -> DigitVec {
    Vec::with_capacity(DEFAULT_CAPACITY)
}

/// Mutating operations on an owned digit buffer.
pub(crate) trait DigitStore {
    /// Store `digit` at `index`, zero-filling any gap if the buffer is
    /// shorter than `index + 1`.
    fn set_digit(&mut self, index: usize, digit: Digit);

    /// Pop most-significant zero digits. Zero becomes the empty buffer.
    fn normalize(&mut self);
}

impl DigitStore for DigitVec {
    #[inline]
    fn set_digit(&mut self, index: usize, digit: Digit) {
        if index >= self.len() {
            self.resize(index + 1, 0);
        }
        self[index] = digit;
    }

    #[inline]
    fn normalize(&mut self) {
        while let Some(&0) = self.last() {
            self.pop();
        }
    }
}

/// Read-only views over a little-endian digit sequence.
pub(crate) trait DigitSlice {
    /// Get the digit `index` places from the most significant end.
    fn rindex(&self, index: usize) -> Digit;

    /// Number of digits once most-significant zero digits are ignored.
    fn significant_len(&self) -> usize;

    /// The digits once most-significant zero digits are ignored.
    fn significant(&self) -> &[Digit];
}

impl DigitSlice for [Digit] {
    #[inline]
    fn rindex(&self, index: usize) -> Digit {
        self[self.len() - index - 1]
    }

    #[inline]
    fn significant_len(&self) -> usize {
        self.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
    }

    #[inline]
    fn significant(&self) -> &[Digit] {
        &self[..self.significant_len()]
    }
}

// TESTS
// -----
