//! Building-blocks operating on single digits.
//!
//! A digit is one machine word of a big integer's magnitude, so the digit
//! base is `2^BITS`. The width is decided by the build script: 64-bit
//! digits on targets with a fast 64x64->128 multiply, 32-bit digits
//! elsewhere.
//!
//! Every operation producing a double-width intermediate goes through a
//! [`DoubleWord`] strategy. [`Native`] leans on Rust's double-width integer
//! type; [`Portable`] decomposes each digit into half-words and needs nothing
//! wider than a digit.

// 32-BIT DIGIT
#[cfg(limb_width_32)]
/// Type of a single digit of a big integer.
pub type Digit = u32;

#[cfg(limb_width_32)]
type Wide = u64;

// 64-BIT DIGIT
#[cfg(limb_width_64)]
/// Type of a single digit of a big integer.
pub type Digit = u64;

#[cfg(limb_width_64)]
type Wide = u128;

/// Number of bits in a [`Digit`].
pub const BITS: u32 = Digit::BITS;

/// Largest value a [`Digit`] can hold, `base - 1`.
pub const MAX: Digit = Digit::MAX;

const HALF_BITS: u32 = BITS / 2;
const HALF_BASE: Digit = 1 << HALF_BITS;
const HALF_MASK: Digit = HALF_BASE - 1;

/// The strategy used by the arithmetic engine.
pub type DefaultStrategy = Native;

// ADDITION

/// `a + b`, returning the sum and a carry of 0 or 1.
#[inline]
pub fn add2(a: Digit, b: Digit) -> (Digit, Digit) {
    let sum = a.wrapping_add(b);
    (sum, Digit::from(sum < a))
}

/// `a + b + c`, returning the sum and a carry of 0, 1 or 2.
#[inline]
pub fn add3(a: Digit, b: Digit, c: Digit) -> (Digit, Digit) {
    let (sum, c0) = add2(a, b);
    let (sum, c1) = add2(sum, c);
    (sum, c0 + c1)
}

// SUBTRACTION

/// `a - b`, returning the difference and a borrow of 0 or 1.
#[inline]
pub fn sub(a: Digit, b: Digit) -> (Digit, Digit) {
    let diff = a.wrapping_sub(b);
    (diff, Digit::from(diff > a))
}

/// `a - b - borrow_in`, returning the difference and a borrow of 0 or 1.
///
/// `borrow_in` must itself be 0 or 1.
#[inline]
pub fn sub_borrow(a: Digit, b: Digit, borrow_in: Digit) -> (Digit, Digit) {
    debug_assert!(borrow_in <= 1);
    let (diff, b0) = sub(a, b);
    let (diff, b1) = sub(diff, borrow_in);
    (diff, b0 + b1)
}

// DOUBLE-WORD

/// Double-width multiplication and division of digits.
pub trait DoubleWord {
    /// Full product of `a * b` as `(low, high)`.
    fn mul_wide(a: Digit, b: Digit) -> (Digit, Digit);

    /// Divides `(high << BITS) + low` by `divisor`, returning
    /// `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics unless `high < divisor`, which is what keeps the quotient
    /// within one digit. This also rules out a zero divisor.
    fn div_wide(high: Digit, low: Digit, divisor: Digit) -> (Digit, Digit);
}

/// Double-word arithmetic through the native double-width integer type.
#[derive(Debug)]
pub enum Native {}

/// Double-word arithmetic from half-word pieces.
///
/// Multiplication combines four half-word partial products. Division
/// normalizes the divisor and produces the quotient one half-word at a time,
/// estimating each half from the divisor's top half and correcting the
/// estimate at most twice.
#[derive(Debug)]
pub enum Portable {}

impl DoubleWord for Native {
    #[inline]
    fn mul_wide(a: Digit, b: Digit) -> (Digit, Digit) {
        let z = Wide::from(a) * Wide::from(b);
        (z as Digit, (z >> BITS) as Digit)
    }

    #[inline]
    fn div_wide(high: Digit, low: Digit, divisor: Digit) -> (Digit, Digit) {
        assert!(high < divisor, "double-word division overflow");
        let dividend = (Wide::from(high) << BITS) | Wide::from(low);
        let divisor = Wide::from(divisor);
        ((dividend / divisor) as Digit, (dividend % divisor) as Digit)
    }
}

impl DoubleWord for Portable {
    fn mul_wide(a: Digit, b: Digit) -> (Digit, Digit) {
        let (a_lo, a_hi) = (a & HALF_MASK, a >> HALF_BITS);
        let (b_lo, b_hi) = (b & HALF_MASK, b >> HALF_BITS);

        let lo_lo = a_lo * b_lo;
        let lo_hi = a_lo * b_hi;
        let hi_lo = a_hi * b_lo;
        let hi_hi = a_hi * b_hi;

        let (low, carry) = add3(lo_lo, lo_hi << HALF_BITS, hi_lo << HALF_BITS);
        let high = (lo_hi >> HALF_BITS) + (hi_lo >> HALF_BITS) + hi_hi + carry;
        (low, high)
    }

    fn div_wide(high: Digit, low: Digit, divisor: Digit) -> (Digit, Digit) {
        assert!(high < divisor, "double-word division overflow");

        // Normalize so the divisor's top bit is set.
        let shift = divisor.leading_zeros();
        let v = divisor << shift;
        let (un32, u10) = if shift == 0 {
            (high, low)
        } else {
            ((high << shift) | (low >> (BITS - shift)), low << shift)
        };

        let vn1 = v >> HALF_BITS;
        let vn0 = v & HALF_MASK;
        let un1 = u10 >> HALF_BITS;
        let un0 = u10 & HALF_MASK;

        let q1 = div_half(un32, un1, vn1, vn0);
        let u21 = (un32 << HALF_BITS)
            .wrapping_add(un1)
            .wrapping_sub(q1.wrapping_mul(v));

        let q0 = div_half(u21, un0, vn1, vn0);
        let rem = (u21 << HALF_BITS)
            .wrapping_add(un0)
            .wrapping_sub(q0.wrapping_mul(v));

        ((q1 << HALF_BITS) | q0, rem >> shift)
    }
}

/// One half-word quotient step of [`Portable::div_wide`].
///
/// Estimates `((u << HALF_BITS) + next) / (vn1:vn0)` from the divisor's top
/// half and corrects the estimate against its bottom half.
#[inline]
fn div_half(u: Digit, next: Digit, vn1: Digit, vn0: Digit) -> Digit {
    let mut qhat = u / vn1;
    let mut rhat = u - qhat * vn1;
    while qhat >= HALF_BASE || qhat * vn0 > (rhat << HALF_BITS) + next {
        qhat -= 1;
        rhat += vn1;
        if rhat >= HALF_BASE {
            break;
        }
    }
    qhat
}

/// Full product of `a * b` as `(low, high)`.
#[inline]
pub fn mul(a: Digit, b: Digit) -> (Digit, Digit) {
    DefaultStrategy::mul_wide(a, b)
}

/// Divides `(high << BITS) + low` by `divisor`, as `(quotient, remainder)`.
///
/// # Panics
///
/// Panics unless `high < divisor`.
#[inline]
pub fn div(high: Digit, low: Digit, divisor: Digit) -> (Digit, Digit) {
    DefaultStrategy::div_wide(high, low, divisor)
}

// BITS

/// Number of leading zero bits, `BITS` for zero.
#[inline]
pub fn leading_zeros(value: Digit) -> u32 {
    value.leading_zeros()
}

/// `base` raised to `exponent`, modulo the digit base.
pub fn pow(mut base: Digit, mut exponent: u32) -> Digit {
    let mut result: Digit = 1;
    while exponent > 0 {
        if exponent & 1 != 0 {
            result = result.wrapping_mul(base);
        }
        exponent >>= 1;
        base = base.wrapping_mul(base);
    }
    result
}

// TESTS
// -----
