//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms work on unsigned magnitudes and assume little-endian
//! order for the digit buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most
//! significant digit, and `0` is the least significant digit. Signs are
//! handled one level up, in `BigInt`.
//!
//! Results are always normalized: no most-significant zero digits, and zero
//! is the empty buffer. Inputs may carry most-significant zeros.

use crate::digit::{self, Digit, BITS};
use crate::store::{DigitSlice, DigitStore, DigitVec};
use alloc::vec;
use core::cmp;

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    /// Multiply two digits and add a carry, returning the (low, high)
    /// components.
    #[inline]
    pub fn mul(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
        // Cannot overflow: (b-1)*(b-1) + (b-1) < b*b.
        let (lo, hi) = digit::mul(x, y);
        let (lo, c) = digit::add2(lo, carry);
        (lo, hi + c)
    }

    /// Compute `x * y + z + carry`, returning the (low, high) components.
    #[inline]
    pub fn mul_add(x: Digit, y: Digit, z: Digit, carry: Digit) -> (Digit, Digit) {
        // Cannot overflow: (b-1)*(b-1) + 2*(b-1) = b*b - 1.
        let (lo, hi) = digit::mul(x, y);
        let (lo, c) = digit::add3(lo, z, carry);
        (lo, hi + c)
    }

    /// Returns whether `x * y > (high << BITS) + low`.
    #[inline]
    pub fn product_greater_than(x: Digit, y: Digit, high: Digit, low: Digit) -> bool {
        let (lo, hi) = digit::mul(x, y);
        hi > high || (hi == high && lo > low)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer by a single digit.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a digit to a bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    pub fn iadd_impl(x: &mut DigitVec, y: Digit, xstart: usize) {
        if x.len() <= xstart {
            x.set_digit(xstart, y);
        } else {
            let (sum, mut carry) = digit::add2(x[xstart], y);
            x[xstart] = sum;

            // Increment until overflow stops occurring.
            let mut index = xstart + 1;
            while carry != 0 && index < x.len() {
                let (sum, c) = digit::add2(x[index], carry);
                x[index] = sum;
                carry = c;
                index += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry != 0 {
                x.push(carry);
            }
        }
        x.normalize();
    }

    /// AddAssign digit to bigint.
    #[inline]
    pub fn iadd(x: &mut DigitVec, y: Digit) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign digit from bigint.
    ///
    /// # Panics
    ///
    /// Panics if `y` is larger than `x`.
    pub fn isub(x: &mut DigitVec, y: Digit) {
        let mut borrow = y;
        for xi in x.iter_mut() {
            if borrow == 0 {
                break;
            }
            let (diff, b) = digit::sub(*xi, borrow);
            *xi = diff;
            borrow = b;
        }
        assert!(borrow == 0, "magnitude subtraction underflow");
        x.normalize();
    }

    // MULTIPLICATION

    /// MulAssign digit to bigint.
    pub fn imul(x: &mut DigitVec, y: Digit) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Digit = 0;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul(*xi, y, carry);
            *xi = lo;
            carry = hi;
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
        x.normalize();
    }

    /// Mul digit to bigint.
    #[inline]
    pub fn mul(x: &[Digit], y: Digit) -> DigitVec {
        let mut z = DigitVec::with_capacity(x.len() + 1);
        z.extend_from_slice(x);
        imul(&mut z, y);
        z
    }

    // DIVISION

    /// DivAssign bigint by a digit, returning the remainder.
    ///
    /// Quotient digits are produced most-significant first, each division
    /// seeded by the remainder of the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `y` is zero.
    pub fn idiv(x: &mut DigitVec, y: Digit) -> Digit {
        assert!(y != 0, "attempt to divide by zero");
        let mut rem: Digit = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = digit::div(rem, *xi, y);
            *xi = q;
            rem = r;
        }
        x.normalize();
        rem
    }

    /// Remainder of bigint divided by a digit, discarding the quotient.
    ///
    /// # Panics
    ///
    /// Panics if `y` is zero.
    pub fn rem(x: &[Digit], y: Digit) -> Digit {
        assert!(y != 0, "attempt to divide by zero");
        x.iter()
            .rev()
            .fold(0, |rem, &xi| digit::div(rem, xi, y).1)
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the most significant digit.
    #[inline]
    pub fn leading_zeros(x: &[Digit]) -> usize {
        if x.is_empty() {
            0
        } else {
            x.rindex(0).leading_zeros() as usize
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Digit]) -> usize {
        let x = x.significant();
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        (BITS as usize)
            .checked_mul(x.len())
            .map_or(usize::MAX, |v| v - nlz)
    }

    // SHIFTS

    /// Shift-left bits inside a buffer.
    ///
    /// # Panics
    ///
    /// Panics unless `n < BITS`, IE, internally shifting bits.
    pub fn ishl_bits(x: &mut DigitVec, n: u32) {
        assert!(n < BITS, "shift amount must be less than the digit width");
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted digit-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = BITS - n;
        let mut carry: Digit = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi = (tmp << n) | carry;
            carry = tmp >> rshift;
        }

        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-right bits inside a buffer.
    ///
    /// # Panics
    ///
    /// Panics unless `n < BITS`.
    pub fn ishr_bits(x: &mut DigitVec, n: u32) {
        assert!(n < BITS, "shift amount must be less than the digit width");
        if n != 0 {
            // Walk from the most significant digit down, carrying the bits
            // shifted out of each digit into the one below it.
            let lshift = BITS - n;
            let mut carry: Digit = 0;
            for xi in x.iter_mut().rev() {
                let tmp = *xi;
                *xi = (tmp >> n) | carry;
                carry = tmp << lshift;
            }
        }
        x.normalize();
    }

    /// Shift-left, producing a new buffer.
    #[inline]
    pub fn shl_bits(x: &[Digit], n: u32) -> DigitVec {
        let mut z = DigitVec::with_capacity(x.len() + 1);
        z.extend_from_slice(x);
        ishl_bits(&mut z, n);
        z
    }

    /// Shift-right, producing a new buffer.
    #[inline]
    pub fn shr_bits(x: &[Digit], n: u32) -> DigitVec {
        let mut z = x.to_vec();
        ishr_bits(&mut z, n);
        z
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer by another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Most-significant zero digits are ignored, so an empty buffer compares
    /// equal to `[0]`, and less than any non-zero value.
    pub fn compare(x: &[Digit], y: &[Digit]) -> cmp::Ordering {
        let x = x.significant();
        let y = y.significant();
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed.
    pub fn iadd_impl(x: &mut DigitVec, y: &[Digit], xstart: usize) {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if y.len() + xstart > x.len() {
            x.resize(y.len() + xstart, 0);
        }

        let carry = add_into(&mut x[xstart..], y);
        if carry != 0 {
            x.push(carry);
        }
        x.normalize();
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut DigitVec, y: &[Digit]) {
        iadd_impl(x, y, 0);
    }

    /// Add `y` into the window `x`, propagating the carry through the rest
    /// of the window. Returns the carry out of the top of the window.
    ///
    /// `x` must be at least as long as `y`.
    pub fn add_into(x: &mut [Digit], y: &[Digit]) -> Digit {
        debug_assert!(x.len() >= y.len());
        let (xlo, xhi) = x.split_at_mut(y.len());

        let mut carry: Digit = 0;
        for (xi, &yi) in xlo.iter_mut().zip(y) {
            let (sum, c) = digit::add3(*xi, yi, carry);
            *xi = sum;
            carry = c;
        }
        for xi in xhi {
            if carry == 0 {
                break;
            }
            let (sum, c) = digit::add2(*xi, carry);
            *xi = sum;
            carry = c;
        }
        carry
    }

    // SUBTRACTION

    /// Subtract `y` from the window `x`, propagating the borrow through the
    /// rest of the window. Returns the borrow out of the top of the window.
    ///
    /// Only the significant digits of `y` are subtracted, so `y` may be
    /// longer than `x` as long as the excess is zero.
    pub fn sub_into(x: &mut [Digit], y: &[Digit]) -> Digit {
        let y = y.significant();
        debug_assert!(x.len() >= y.len());
        let (xlo, xhi) = x.split_at_mut(y.len());

        let mut borrow: Digit = 0;
        for (xi, &yi) in xlo.iter_mut().zip(y) {
            let (diff, b) = digit::sub_borrow(*xi, yi, borrow);
            *xi = diff;
            borrow = b;
        }
        for xi in xhi {
            if borrow == 0 {
                break;
            }
            let (diff, b) = digit::sub(*xi, borrow);
            *xi = diff;
            borrow = b;
        }
        borrow
    }

    /// SubAssign bigint to bigint, computing `x - y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is larger than `x`.
    pub fn isub(x: &mut DigitVec, y: &[Digit]) {
        let y = y.significant();
        assert!(x.len() >= y.len(), "magnitude subtraction underflow");
        let borrow = sub_into(x, y);
        assert!(borrow == 0, "magnitude subtraction underflow");
        x.normalize();
    }

    /// Reverse SubAssign, computing `y - x` into `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is larger than `y`.
    pub fn isub_rev(x: &mut DigitVec, y: &[Digit]) {
        let y = y.significant();
        x.normalize();
        assert!(x.len() <= y.len(), "magnitude subtraction underflow");
        x.resize(y.len(), 0);

        let mut borrow: Digit = 0;
        for (xi, &yi) in x.iter_mut().zip(y) {
            let (diff, b) = digit::sub_borrow(yi, *xi, borrow);
            *xi = diff;
            borrow = b;
        }
        assert!(borrow == 0, "magnitude subtraction underflow");
        x.normalize();
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Every digit pair `(i, j)` is accumulated into positions `i + j` and
    /// `i + j + 1` of a scratch buffer sized to the sum of operand lengths.
    /// The carry out of each row lands in the row's top position, which no
    /// earlier row has touched yet, so the accumulator never exceeds a
    /// digit. O(n*m).
    pub fn long_mul(x: &[Digit], y: &[Digit]) -> DigitVec {
        let x = x.significant();
        let y = y.significant();
        if x.is_empty() || y.is_empty() {
            return DigitVec::new();
        }

        let mut z: DigitVec = vec![0; x.len() + y.len()];
        for (i, &xi) in x.iter().enumerate() {
            if xi == 0 {
                continue;
            }
            let mut carry: Digit = 0;
            for (zij, &yj) in z[i..].iter_mut().zip(y) {
                let (lo, hi) = scalar::mul_add(xi, yj, *zij, carry);
                *zij = lo;
                carry = hi;
            }
            z[i + y.len()] = carry;
        }

        z.normalize();
        z
    }

    /// Mul bigint to bigint.
    #[inline]
    pub fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
        let x = x.significant();
        let y = y.significant();
        match (x.len(), y.len()) {
            (_, 1) => small::mul(x, y[0]),
            (1, _) => small::mul(y, x[0]),
            _ => long_mul(x, y),
        }
    }

    /// MulAssign bigint to bigint.
    ///
    /// The single-digit case updates `x` in place. The general case reads
    /// every digit of `x` after earlier result positions have been written,
    /// so it fills a scratch buffer and then moves it into `x`.
    pub fn imul(x: &mut DigitVec, y: &[Digit]) {
        let y = y.significant();
        if y.len() == 1 {
            small::imul(x, y[0]);
        } else {
            *x = mul(x, y);
        }
    }

    // DIVISION

    /// Divide `x` by `y`, returning `(quotient, remainder)`.
    ///
    /// This is Knuth, TAOCP vol 2 section 4.3.1, algorithm D. A divisor of a
    /// single digit takes the short-division path instead.
    ///
    /// # Panics
    ///
    /// Panics if `y` is zero.
    pub fn div_rem(x: &[Digit], y: &[Digit]) -> (DigitVec, DigitVec) {
        let x = x.significant();
        let y = y.significant();
        assert!(!y.is_empty(), "attempt to divide by zero");

        if x.len() < y.len() {
            return (DigitVec::new(), x.to_vec());
        }

        if y.len() == 1 {
            let mut q = x.to_vec();
            let r = small::idiv(&mut q, y[0]);
            let mut r = vec![r];
            r.normalize();
            return (q, r);
        }

        // D1.
        // Left-shift inputs so that the divisor's MSB is set. This is
        // necessary to prevent the digit-wise divisions below from
        // overflowing, and keeps each quotient estimate at most one too
        // large once corrected. The dividend gains one extra digit, so every
        // window u[j..=j+n] exists.
        let shift = y.rindex(0).leading_zeros();
        let v = small::shl_bits(y, shift);
        let mut u = small::shl_bits(x, shift);
        u.resize(x.len() + 1, 0);

        let n = v.len();
        let m = x.len() - n;
        let vn1 = v[n - 1];
        let vn2 = v[n - 2];

        let mut q: DigitVec = vec![0; m + 1];
        // In each iteration, `qhatv` holds `v * qhat`.
        let mut qhatv = DigitVec::with_capacity(n + 1);

        // D2.
        // Iterate over the dividend's digits, like the grade-school algorithm.
        for j in (0..=m).rev() {
            // D3.
            // Estimate the quotient digit from the top two digits of the
            // current window and the divisor's top digit. The estimate is
            // never too small. When the window's top digit equals the
            // divisor's, the division would overflow, so start from the
            // largest digit instead.
            let ujn = u[j + n];
            debug_assert!(ujn <= vn1);
            let (mut qhat, mut rhat, mut rhat_overflow) = if ujn == vn1 {
                let (rhat, overflow) = u[j + n - 1].overflowing_add(vn1);
                (digit::MAX, rhat, overflow)
            } else {
                let (qhat, rhat) = digit::div(ujn, u[j + n - 1], vn1);
                (qhat, rhat, false)
            };

            // Decrement the estimate while qhat * v[n-2] exceeds
            // (rhat << BITS) + u[j+n-2]. Once rhat no longer fits a digit,
            // the test can't succeed any more.
            while !rhat_overflow && scalar::product_greater_than(qhat, vn2, rhat, u[j + n - 2]) {
                qhat -= 1;
                let (sum, overflow) = rhat.overflowing_add(vn1);
                rhat = sum;
                rhat_overflow = overflow;
            }

            // D4.
            // Multiply the divisor by the quotient digit and subtract it from
            // the window. A borrow means the estimate was one too large: undo
            // one subtraction of the divisor, ignoring the carry out of the
            // window, which cancels the borrow.
            qhatv.clear();
            if qhat != 0 {
                qhatv.extend_from_slice(&v);
                small::imul(&mut qhatv, qhat);
            }
            let window = &mut u[j..=j + n];
            if sub_into(window, &qhatv) != 0 {
                qhat -= 1;
                add_into(window, &v);
            }

            // D5.
            q[j] = qhat;
        }

        // D8.
        // The remainder is what is left of the dividend, shifted back.
        q.normalize();
        u.truncate(n);
        small::ishr_bits(&mut u, shift);
        (q, u)
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::large::compare;
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    #[cfg(limb_width_32)]
    pub(crate) fn from_u32(x: &[u32]) -> DigitVec {
        x.iter().cloned().collect()
    }

    #[cfg(limb_width_64)]
    pub(crate) fn from_u32(x: &[u32]) -> DigitVec {
        let mut v = DigitVec::default();
        for xi in x.chunks(2) {
            match xi.len() {
                1 => v.push(xi[0] as u64),
                2 => v.push(((xi[1] as u64) << 32) | (xi[0] as u64)),
                _ => unreachable!(),
            }
        }

        v
    }

    #[cfg(limb_width_32)]
    fn from_u64(x: u64) -> DigitVec {
        let mut v = vec![x as u32, (x >> 32) as u32];
        v.normalize();
        v
    }

    #[cfg(limb_width_64)]
    fn from_u64(x: u64) -> DigitVec {
        let mut v = vec![x];
        v.normalize();
        v
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = from_u32(&[1]);
        let y = from_u32(&[2]);
        assert_eq!(compare(&x, &y), Ordering::Less);
        assert_eq!(compare(&x, &x), Ordering::Equal);
        assert_eq!(compare(&y, &x), Ordering::Greater);

        // Check asymmetric
        let x = from_u32(&[5, 1]);
        let y = from_u32(&[2]);
        assert_eq!(compare(&x, &y), Ordering::Greater);
        assert_eq!(compare(&x, &x), Ordering::Equal);
        assert_eq!(compare(&y, &x), Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = from_u32(&[5, 1, 9]);
        let y = from_u32(&[6, 2, 8]);
        assert_eq!(compare(&x, &y), Ordering::Greater);
        assert_eq!(compare(&x, &x), Ordering::Equal);
        assert_eq!(compare(&y, &x), Ordering::Less);

        // Complex scenario, check it properly uses reverse ordering.
        let x = from_u32(&[0, 1, 9]);
        let y = from_u32(&[4294967295, 0, 9]);
        assert_eq!(compare(&x, &y), Ordering::Greater);
        assert_eq!(compare(&x, &x), Ordering::Equal);
        assert_eq!(compare(&y, &x), Ordering::Less);

        // Zero padding and the empty buffer.
        assert_eq!(compare(&[3, 0, 0], &[3]), Ordering::Equal);
        assert_eq!(compare(&[], &[0]), Ordering::Equal);
        assert_eq!(compare(&[], &[1]), Ordering::Less);
        assert_eq!(compare(&[1], &[]), Ordering::Greater);
    }

    #[test]
    fn bit_length_test() {
        let x = from_u32(&[0, 0, 0, 1]);
        assert_eq!(small::bit_length(&x), 97);

        let x = from_u32(&[0, 0, 0, 3]);
        assert_eq!(small::bit_length(&x), 98);

        let x = from_u32(&[1 << 31]);
        assert_eq!(small::bit_length(&x), 32);

        assert_eq!(small::bit_length(&[]), 0);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u64(0x80000000FFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = from_u64(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));

        // Adding to zero.
        let mut x = DigitVec::new();
        small::iadd(&mut x, 7);
        assert_eq!(x, vec![7]);
        small::iadd(&mut x, 0);
        assert_eq!(x, vec![7]);
    }

    #[test]
    fn isub_small_test() {
        let mut x = from_u32(&[0, 1]);
        small::isub(&mut x, 1);
        assert_eq!(x, from_u32(&[0xFFFFFFFF]));

        let mut x = from_u32(&[7]);
        small::isub(&mut x, 7);
        assert!(x.is_empty());
    }

    #[test]
    #[should_panic(expected = "magnitude subtraction underflow")]
    fn isub_small_underflow_test() {
        let mut x = from_u32(&[3]);
        small::isub(&mut x, 4);
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // No overflow check, 2-ints.
        let mut x = from_u64(0x4000000040000);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[0x00140000, 0x140000]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 1 carry, internal.
        let mut x = from_u64(0x133333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 6]));

        // Overflow, 2 carries.
        let mut x = from_u64(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));

        // Multiplying by zero normalizes to the empty buffer.
        let mut x = from_u64(0x3333333333333334);
        small::imul(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn idiv_small_test() {
        let mut x = from_u32(&[2000]);
        assert_eq!(small::idiv(&mut x, 1000), 0);
        assert_eq!(x, from_u32(&[2]));

        // 2^64 + 1 = 3 * 6148914691236517205 + 2
        let mut x = from_u32(&[1, 0, 1]);
        assert_eq!(small::idiv(&mut x, 3), 2);
        assert_eq!(x, from_u64(6148914691236517205));

        let x = from_u32(&[1, 0, 1]);
        assert_eq!(small::rem(&x, 3), 2);
        assert_eq!(small::rem(&[], 3), 0);
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = from_u32(&[0xD2210408]);
        small::ishl_bits(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));

        // 96-bits of previous pattern
        let mut big = from_u32(&[0x20020010, 0x8040100, 0xD2210408]);
        small::ishl_bits(&mut big, 5);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));

        // A zero shift is a copy.
        assert_eq!(small::shl_bits(&big, 0), big);
    }

    #[test]
    fn shr_test() {
        let big = from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]);
        assert_eq!(
            small::shr_bits(&big, 5),
            from_u32(&[0x20020010, 0x8040100, 0xD2210408]),
        );

        let big = from_u32(&[0x44208100, 0x1A]);
        assert_eq!(small::shr_bits(&big, 5), from_u32(&[0xD2210408]));

        // Shifting everything out leaves zero.
        assert!(small::shr_bits(&[1], 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "shift amount must be less than the digit width")]
    fn shl_out_of_range_test() {
        small::shl_bits(&[1], BITS);
    }

    #[test]
    fn iadd_large_test() {
        // Overflow, both single values
        let mut x = from_u32(&[4294967295]);
        let y = from_u32(&[5]);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        let y = from_u32(&[7]);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u64(0x80000000FFFFFFFF);
        let y = from_u32(&[7]);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // 1st overflows, 2nd doesn't.
        let mut x = from_u64(0x7FFFFFFFFFFFFFFF);
        let y = from_u64(0x7FFFFFFFFFFFFFFF);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[0xFFFFFFFE, 0xFFFFFFFF]));

        // Both overflow.
        let mut x = from_u64(0x8FFFFFFFFFFFFFFF);
        let y = from_u64(0x7FFFFFFFFFFFFFFF);
        large::iadd(&mut x, &y);
        assert_eq!(x, from_u32(&[0xFFFFFFFE, 0x0FFFFFFF, 1]));

        // Offset start.
        let mut x: DigitVec = vec![1];
        large::iadd_impl(&mut x, &[1, 1], 1);
        assert_eq!(x, vec![1, 1, 1]);
    }

    #[test]
    fn isub_large_test() {
        // Overflows
        let mut x = from_u32(&[4294967295]);
        let y = from_u32(&[5]);
        large::isub(&mut x, &y);
        assert_eq!(x, from_u32(&[4294967290]));

        // Borrow through several digits, dropping the top one.
        let mut x = from_u32(&[0, 0, 1]);
        let y = from_u32(&[1]);
        large::isub(&mut x, &y);
        assert_eq!(x, from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]));

        // Equal values cancel out.
        let mut x = from_u32(&[7, 9]);
        large::isub(&mut x, &from_u32(&[7, 9]));
        assert!(x.is_empty());
    }

    #[test]
    fn isub_rev_large_test() {
        let mut x = from_u32(&[5]);
        large::isub_rev(&mut x, &from_u32(&[0, 1]));
        assert_eq!(x, from_u32(&[0xFFFFFFFB]));

        let mut x = DigitVec::new();
        large::isub_rev(&mut x, &from_u32(&[3, 4]));
        assert_eq!(x, from_u32(&[3, 4]));
    }

    #[test]
    #[should_panic(expected = "magnitude subtraction underflow")]
    fn isub_large_underflow_test() {
        let mut x = from_u32(&[1]);
        large::isub(&mut x, &from_u32(&[0, 1]));
    }

    #[test]
    fn long_mul_test() {
        // Simple case, no overflow.
        let x = from_u32(&[1, 2, 3]);
        let y = from_u32(&[4, 5]);
        assert_eq!(large::long_mul(&x, &y), from_u32(&[4, 13, 22, 15]));

        // Every column carries.
        let x = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]);
        let y = from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]);
        assert_eq!(
            large::long_mul(&x, &y),
            from_u32(&[1, 0, 0xFFFFFFFE, 0xFFFFFFFF]),
        );

        // Zero operand.
        assert!(large::long_mul(&x, &[0, 0]).is_empty());
    }

    #[test]
    fn mul_max_digits_test() {
        // (b^2 - 1)^2 = b^4 - 2b^2 + 1
        let x: DigitVec = vec![digit::MAX, digit::MAX];
        assert_eq!(
            large::long_mul(&x, &x),
            vec![1, 0, digit::MAX - 1, digit::MAX],
        );

        let mut y = x.clone();
        large::imul(&mut y, &[digit::MAX]);
        assert_eq!(y, vec![1, digit::MAX, digit::MAX - 1]);
    }

    #[test]
    fn imul_large_test() {
        let mut x = from_u32(&[1, 2, 3]);
        large::imul(&mut x, &from_u32(&[4, 5]));
        assert_eq!(x, from_u32(&[4, 13, 22, 15]));

        // Operand with padding takes the single-digit path.
        let mut x = from_u32(&[5]);
        large::imul(&mut x, &[7, 0, 0]);
        assert_eq!(x, from_u32(&[35]));
    }

    #[test]
    fn div_rem_single_digit_test() {
        let (q, r) = large::div_rem(&from_u32(&[2000]), &from_u32(&[1000]));
        assert_eq!(q, from_u32(&[2]));
        assert!(r.is_empty());

        let (q, r) = large::div_rem(&from_u32(&[2001]), &[1000, 0]);
        assert_eq!(q, from_u32(&[2]));
        assert_eq!(r, from_u32(&[1]));
    }

    #[test]
    fn div_rem_short_dividend_test() {
        let x: DigitVec = vec![5];
        let y: DigitVec = vec![0, 1];
        let (q, r) = large::div_rem(&x, &y);
        assert!(q.is_empty());
        assert_eq!(r, x);
    }

    #[test]
    fn div_rem_multi_digit_test() {
        // (b + 1) * (b + 2) + 5, divided by (b + 1).
        let x: DigitVec = vec![7, 3, 1];
        let y: DigitVec = vec![1, 1];
        let (q, r) = large::div_rem(&x, &y);
        assert_eq!(q, vec![2, 1]);
        assert_eq!(r, vec![5]);

        // Divisor already normalized.
        let x: DigitVec = vec![0, 0, digit::MAX];
        let y: DigitVec = vec![0, digit::MAX];
        let (q, r) = large::div_rem(&x, &y);
        assert_eq!(q, vec![0, 1]);
        assert!(r.is_empty());
    }

    #[test]
    fn div_rem_identity_test() {
        let samples: Vec<DigitVec> = vec![
            vec![1, 1],
            vec![digit::MAX, digit::MAX],
            vec![0, 0, 1],
            vec![3, digit::MAX, 7],
            vec![digit::MAX, 0, digit::MAX, 1],
            vec![12345, 0, 0, 0, 0, 1],
        ];
        for x in &samples {
            for y in &samples {
                let (q, r) = large::div_rem(x, y);
                assert_eq!(compare(&r, y), Ordering::Less);
                let mut back = large::mul(&q, y);
                large::iadd(&mut back, &r);
                assert_eq!(compare(&back, x), Ordering::Equal, "{:?} / {:?}", x, y);
            }
        }
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_rem_by_zero_test() {
        large::div_rem(&[1, 2], &[0, 0]);
    }
}
