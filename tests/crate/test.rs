#![no_std]

pub use bignum::*;
