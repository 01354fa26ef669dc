//! Text to big integer conversion.
//!
//! Characters are packed into digit-sized parts, each holding as many
//! characters as [`format::chunk`] allows. The value is then built most
//! significant part first with one short multiply-add per part, scaling by the
//! part's own power of the radix.

use crate::bigint::{BigInt, Sign};
use crate::digit::{self, Digit, BITS};
use crate::error::{Error, ErrorCode, Result};
use crate::format::{self, MAX_BITS_PER_CHAR};
use crate::math::small;
use crate::store::DigitVec;

/// Marks a byte that is not a digit in any radix.
const INVALID: u8 = 255;

const fn decode_char_slow(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'A'..=b'Z' => ch - b'A' + 10,
        b'a'..=b'z' => ch - b'a' + 10,
        _ => INVALID,
    }
}

const fn build_char_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut ch = 0;
    while ch < 128 {
        table[ch] = decode_char_slow(ch as u8);
        ch += 1;
    }
    table
}

static CHAR_VALUE: [u8; 128] = build_char_table();

/// Value of `ch` as a digit of `radix`, if it is one.
#[inline]
fn decode_char(ch: u8, radix: u32) -> Option<Digit> {
    match CHAR_VALUE.get(ch as usize) {
        Some(&value) if u32::from(value) < radix => Some(Digit::from(value)),
        _ => None,
    }
}

#[cold]
fn invalid_digit(text: &str, index: usize) -> Error {
    // Every byte before `index` was an ASCII digit, so `index` is a char
    // boundary.
    let ch = text[index..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Error::syntax(ErrorCode::InvalidDigit(ch), index)
}

/// Parse `[+-]digit+` in `radix`.
pub(crate) fn parse_radix(text: &str, radix: u32) -> Result<BigInt> {
    if !(2..=36).contains(&radix) {
        return Err(Error::syntax(ErrorCode::InvalidRadix(radix), 0));
    }

    let bytes = text.as_bytes();
    let (sign, start) = match bytes.first() {
        Some(b'-') => (Sign::Minus, 1),
        Some(b'+') => (Sign::Plus, 1),
        _ => (Sign::Plus, 0),
    };
    let body = &bytes[start..];
    if body.is_empty() {
        return Err(Error::syntax(ErrorCode::EmptyInput, start));
    }

    let bits = body.len() * MAX_BITS_PER_CHAR[radix as usize] as usize / 32;
    let mut data = DigitVec::with_capacity(bits / BITS as usize + 1);

    let (part_chars, part_multiplier) = format::chunk(radix);
    for (i, chars) in body.chunks(part_chars).enumerate() {
        let mut part: Digit = 0;
        for (j, &ch) in chars.iter().enumerate() {
            match decode_char(ch, radix) {
                Some(value) => part = part * radix as Digit + value,
                None => return Err(invalid_digit(text, start + i * part_chars + j)),
            }
        }

        // Only the last part can be short.
        let multiplier = if chars.len() == part_chars {
            part_multiplier
        } else {
            digit::pow(radix as Digit, chars.len() as u32)
        };
        small::imul(&mut data, multiplier);
        small::iadd(&mut data, part);
    }

    Ok(BigInt::from_digits(sign, data))
}
