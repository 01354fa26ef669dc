//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a [`Sign`] plus a little-endian sequence of machine-word
//! [`Digit`]s. It parses from and renders to text in any radix from 2 to 36,
//! and supports comparison, addition, subtraction, multiplication, and
//! truncating division with remainder.
//!
//! ```
//! use bignum::BigInt;
//!
//! # fn main() -> Result<(), bignum::Error> {
//! let a: BigInt = "-200000000000000000000".parse()?;
//! let b: BigInt = "100000000000000000000".parse()?;
//!
//! let (q, r) = a.div_rem(&b);
//! assert_eq!(q, BigInt::from(-2));
//! assert!(r.is_zero());
//!
//! assert_eq!(format!("{:x}", BigInt::from(255)), "ff");
//! # Ok(())
//! # }
//! ```
//!
//! # Failure
//!
//! Parsing reports bad input as an [`Error`]. Arithmetic never fails on valid
//! operands. Dividing by zero, or shifting by a whole digit or more, is a
//! programming error and panics.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! bignum = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```
//!
//! With the "serde" feature, [`BigInt`] serializes as its decimal string and
//! deserializes from a decimal string or any native integer.

#![doc(html_root_url = "https://docs.rs/bignum/0.1.0")]
// Ignored clippy lints
#![allow(clippy::len_without_is_empty, clippy::should_implement_trait)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

mod features_check;

mod bigint;
pub mod digit;
pub mod error;
mod format;
mod math;
mod parse;
mod store;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::digit::Digit;
#[doc(inline)]
pub use crate::error::{Error, Result};
