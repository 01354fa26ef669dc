//! The signed big integer type.

use crate::digit::{Digit, BITS};
use crate::error::{Error, Result};
use crate::format;
use crate::math::{large, small};
use crate::parse;
use crate::store::{self, DigitStore, DigitVec};
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use core::str::FromStr;

/// Sign of a [`BigInt`].
///
/// Zero is always [`Sign::Plus`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// The magnitude is a little-endian sequence of [`Digit`]s with no
/// most-significant zero digits, and zero is the empty sequence with a
/// positive sign. Every operation returns a value in that form, so derived
/// equality and hashing agree with numeric equality.
///
/// ```
/// use bignum::BigInt;
///
/// let a: BigInt = "100000000000000000000".parse().unwrap();
/// let b = &a * &a;
/// assert_eq!(b.to_string(), "10000000000000000000000000000000000000000");
/// ```
///
/// # In-place operations
///
/// The `*Assign` operators and the `*_digit_assign` methods update the
/// left-hand value. Addition, subtraction and the single-digit forms work in
/// the left-hand value's own buffer. Multiplication and division by a
/// multi-digit value compute into a scratch buffer that then replaces it.
/// The borrow checker rules out a value aliasing its own operand, so
/// `x += &x.clone()` is how to add a value to itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    data: DigitVec,
}

impl BigInt {
    /// The value zero.
    #[inline]
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::Plus,
            data: DigitVec::new(),
        }
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        BigInt::from_digits(Sign::Plus, alloc::vec![1])
    }

    /// Create a value from a sign and little-endian digits.
    ///
    /// Most-significant zero digits are dropped, and a zero magnitude is
    /// positive whatever `sign` says.
    pub fn from_digits(sign: Sign, mut digits: Vec<Digit>) -> Self {
        digits.normalize();
        let sign = if digits.is_empty() { Sign::Plus } else { sign };
        BigInt { sign, data: digits }
    }

    /// Create a value from a sign and a slice of little-endian digits.
    #[inline]
    pub fn from_slice(sign: Sign, digits: &[Digit]) -> Self {
        BigInt::from_digits(sign, digits.to_vec())
    }

    /// Parse a value from text in the given radix.
    ///
    /// The text is an optional `+` or `-` followed by at least one digit of
    /// the radix, using `0-9` and then `a-z` or `A-Z` for values 10 to 35.
    /// Anything else is rejected: there is no whitespace, separator or radix
    /// prefix handling.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let x = BigInt::parse_radix("-ff", 16).unwrap();
    /// assert_eq!(x, BigInt::from(-255));
    /// assert!(BigInt::parse_radix("12z", 16).unwrap_err().is_syntax());
    /// ```
    pub fn parse_radix(text: &str, radix: u32) -> Result<Self> {
        parse::parse_radix(text, radix)
    }

    /// Render the value in the given radix, lowercase, with a leading `-` if
    /// negative.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&format::magnitude_to_string(&self.data, radix));
        s
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Digits of the magnitude, least significant first. Empty for zero.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.data
    }

    /// Number of digits in the magnitude.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Returns true if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// Number of bits needed to represent the magnitude. Zero for zero.
    #[inline]
    pub fn bits(&self) -> usize {
        small::bit_length(&self.data)
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Plus,
            data: self.data.clone(),
        }
    }

    /// Compare the magnitudes of two values, ignoring their signs.
    #[inline]
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        large::compare(&self.data, &other.data)
    }

    // SINGLE DIGIT

    /// Add a digit in place.
    pub fn add_digit_assign(&mut self, digit: Digit) {
        if self.sign == Sign::Plus {
            small::iadd(&mut self.data, digit);
        } else {
            self.add_parts(Sign::Plus, &[digit]);
        }
    }

    /// Subtract a digit in place.
    pub fn sub_digit_assign(&mut self, digit: Digit) {
        if self.sign == Sign::Plus && self.data.first().map_or(false, |&d| d >= digit) {
            small::isub(&mut self.data, digit);
            self.fix_sign();
        } else {
            self.add_parts(Sign::Minus, &[digit]);
        }
    }

    /// Multiply by a digit in place.
    pub fn mul_digit_assign(&mut self, digit: Digit) {
        small::imul(&mut self.data, digit);
        self.fix_sign();
    }

    pub fn add_digit(&self, digit: Digit) -> BigInt {
        let mut result = self.clone();
        result.add_digit_assign(digit);
        result
    }

    pub fn sub_digit(&self, digit: Digit) -> BigInt {
        let mut result = self.clone();
        result.sub_digit_assign(digit);
        result
    }

    pub fn mul_digit(&self, digit: Digit) -> BigInt {
        let mut result = self.clone();
        result.mul_digit_assign(digit);
        result
    }

    /// Divide by a digit, returning the quotient and the magnitude of the
    /// remainder.
    ///
    /// The quotient truncates toward zero. The remainder, when non-zero, has
    /// the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is zero.
    pub fn div_rem_digit(&self, digit: Digit) -> (BigInt, Digit) {
        let mut quotient = self.data.clone();
        let remainder = small::idiv(&mut quotient, digit);
        (BigInt::from_digits(self.sign, quotient), remainder)
    }

    /// Magnitude of the remainder of dividing by a digit, without building
    /// the quotient.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is zero.
    #[inline]
    pub fn rem_digit(&self, digit: Digit) -> Digit {
        small::rem(&self.data, digit)
    }

    // FULL WIDTH

    /// Divide, returning the quotient and the remainder.
    ///
    /// The quotient truncates toward zero, and a non-zero remainder has the
    /// sign of `self`, so `self == q * other + r` and `|r| < |other|`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (quotient, remainder) = large::div_rem(&self.data, &other.data);
        (
            BigInt::from_digits(self.sign * other.sign, quotient),
            BigInt::from_digits(self.sign, remainder),
        )
    }

    /// Like [`div_rem`](BigInt::div_rem), but returns `None` for a zero
    /// divisor.
    pub fn checked_div_rem(&self, other: &BigInt) -> Option<(BigInt, BigInt)> {
        if other.is_zero() {
            None
        } else {
            Some(self.div_rem(other))
        }
    }

    // SHIFTS

    /// Shift the magnitude left by `n` bits, keeping the sign.
    ///
    /// # Panics
    ///
    /// Panics unless `n < Digit::BITS`.
    pub fn shl_bits(&self, n: u32) -> BigInt {
        BigInt::from_digits(self.sign, small::shl_bits(&self.data, n))
    }

    /// Shift the magnitude right by `n` bits, keeping the sign. This
    /// truncates toward zero.
    ///
    /// # Panics
    ///
    /// Panics unless `n < Digit::BITS`.
    pub fn shr_bits(&self, n: u32) -> BigInt {
        BigInt::from_digits(self.sign, small::shr_bits(&self.data, n))
    }

    // INTERNAL

    /// Add `sign * digits` to self. Every sign combination reduces to a
    /// magnitude add, or a subtraction of the smaller magnitude from the
    /// larger.
    fn add_parts(&mut self, sign: Sign, digits: &[Digit]) {
        if self.sign == sign {
            large::iadd(&mut self.data, digits);
        } else {
            match large::compare(&self.data, digits) {
                Ordering::Greater => large::isub(&mut self.data, digits),
                Ordering::Less => {
                    large::isub_rev(&mut self.data, digits);
                    self.sign = sign;
                }
                Ordering::Equal => self.data.clear(),
            }
        }
        self.fix_sign();
    }

    #[inline]
    fn fix_sign(&mut self) {
        if self.data.is_empty() {
            self.sign = Sign::Plus;
        }
    }

    fn from_u128(sign: Sign, mut n: u128) -> BigInt {
        let mut data = store::with_default_capacity();
        while n != 0 {
            data.push(n as Digit);
            n >>= BITS;
        }
        BigInt::from_digits(sign, data)
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

// CONVERSIONS

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_u128(Sign::Plus, n as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
                    BigInt::from_u128(sign, (n as i128).unsigned_abs())
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

from_signed! {
    i8 i16 i32 i64 i128 isize
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse a decimal value. See [`BigInt::parse_radix`].
    fn from_str(s: &str) -> Result<Self> {
        parse::parse_radix(s, 10)
    }
}

// ORDERING

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.cmp_abs(other),
            (Sign::Minus, Sign::Minus) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// FORMATTING

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.sign)
            .field("digits", &self.data)
            .finish()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::fmt_radix(self, 10, "", false, f)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::fmt_radix(self, 2, "0b", false, f)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::fmt_radix(self, 8, "0o", false, f)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::fmt_radix(self, 16, "0x", false, f)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::fmt_radix(self, 16, "0x", true, f)
    }
}

// OPERATORS

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        self.add_parts(other.sign, &other.data);
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        // Zero is positive, so negating it must not flip its sign.
        let sign = if other.is_zero() { other.sign } else { -other.sign };
        self.add_parts(sign, &other.data);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        large::imul(&mut self.data, &other.data);
        self.sign = self.sign * other.sign;
        self.fix_sign();
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, other: &BigInt) {
        let (quotient, _) = large::div_rem(&self.data, &other.data);
        self.data = quotient;
        self.sign = self.sign * other.sign;
        self.fix_sign();
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, other: &BigInt) {
        let (_, remainder) = large::div_rem(&self.data, &other.data);
        self.data = remainder;
        self.fix_sign();
    }
}

/// Derive the by-value and by-reference forms of a binary operator from its
/// `*Assign<&BigInt>` implementation.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                let mut result = self.clone();
                $imp_assign::$method_assign(&mut result, other);
                result
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: &BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, other);
                self
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(self, &other)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, other: BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, &other);
                self
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: BigInt) {
                $imp_assign::$method_assign(self, &other);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign);
forward_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_binop!(impl Div, div, DivAssign, div_assign);
forward_binop!(impl Rem, rem, RemAssign, rem_assign);
