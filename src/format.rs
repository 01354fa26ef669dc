//! Big integer to text conversion.
//!
//! The magnitude is converted a chunk at a time: each short division by the
//! largest power of the radix that fits in one digit peels off a fixed number
//! of output characters, so a value of `n` digits needs `O(n)` short
//! divisions rather than one per output character.

use crate::bigint::BigInt;
use crate::digit::{self, Digit, BITS};
use crate::math::small;
use crate::store::{DigitSlice, DigitVec};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

static CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Upper bound of `32 * log2(radix)`, indexed by radix.
///
/// Radix `r` takes at most `MAX_BITS_PER_CHAR[r] / 32` bits per character,
/// which sizes both chunks and output buffers.
pub(crate) static MAX_BITS_PER_CHAR: [u32; 37] = [
    0, 0, 32, 51, 64, 75, 83, 90, 96, 102, 107, 111, 115, 119, 122, 126, 128, 131, 134, 136, 139,
    141, 143, 145, 147, 149, 151, 153, 154, 156, 158, 159, 160, 162, 163, 165, 166,
];

/// Number of characters of `radix` carried by one digit-sized chunk, and
/// `radix` raised to that count.
///
/// The count is chosen so that the power stays strictly below the digit base.
#[inline]
pub(crate) fn chunk(radix: u32) -> (usize, Digit) {
    let chars = (BITS * 32 - 1) / MAX_BITS_PER_CHAR[radix as usize];
    (chars as usize, digit::pow(radix as Digit, chars))
}

#[inline]
fn check_radix(radix: u32) {
    assert!(
        (2..=36).contains(&radix),
        "radix {} is not in the range 2..=36",
        radix
    );
}

/// Render a magnitude in `radix`, without sign and without leading zeros.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
pub(crate) fn magnitude_to_string(digits: &[Digit], radix: u32) -> String {
    check_radix(radix);
    let digits = digits.significant();
    if digits.is_empty() {
        return String::from("0");
    }

    // Peel off chunks, least significant first.
    let (chunk_chars, divisor) = chunk(radix);
    let mut rest: DigitVec = digits.to_vec();
    let mut chunks: Vec<Digit> = Vec::with_capacity(digits.len() * 2);
    while !rest.is_empty() {
        chunks.push(small::idiv(&mut rest, divisor));
    }

    // The most significant chunk is unpadded. Every other chunk holds
    // exactly `chunk_chars` characters, zero-padded.
    let mut out = String::with_capacity(chunks.len() * chunk_chars);
    let mut chunks = chunks.iter().rev();
    if let Some(&top) = chunks.next() {
        write_chunk(&mut out, top, radix, 0);
    }
    for &value in chunks {
        write_chunk(&mut out, value, radix, chunk_chars);
    }
    out
}

/// Append `value` in `radix`, left-padded with zeros to `width` characters.
fn write_chunk(out: &mut String, mut value: Digit, radix: u32, width: usize) {
    if radix == 10 {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(value);
        out.extend(core::iter::repeat('0').take(width.saturating_sub(s.len())));
        out.push_str(s);
        return;
    }

    let mut buf = [b'0'; BITS as usize];
    let mut pos = buf.len();
    let radix = radix as Digit;
    while value != 0 {
        pos -= 1;
        buf[pos] = CHARS[(value % radix) as usize];
        value /= radix;
    }
    let start = pos.min(buf.len() - width);
    out.extend(buf[start..].iter().map(|&b| b as char));
}

/// Shared body of the `Display`, `Binary`, `Octal` and hex impls.
pub(crate) fn fmt_radix(
    value: &BigInt,
    radix: u32,
    prefix: &str,
    upper: bool,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let mut s = magnitude_to_string(value.digits(), radix);
    if upper {
        s.make_ascii_uppercase();
    }
    f.pad_integral(!value.is_negative(), prefix, &s)
}
