//! Serialize a `BigInt` as its decimal string.

use crate::bigint::BigInt;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Serializes as a decimal string, since most formats cannot carry an
    /// integer of unbounded width.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
