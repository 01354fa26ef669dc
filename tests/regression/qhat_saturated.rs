use bignum::digit::Digit;
use bignum::{BigInt, Sign};

// When the top digit of the running remainder equals the top digit of the
// divisor, the quotient estimate starts at the largest digit. That estimate
// still has to go through the correction step.
#[test]
fn test() {
    let max = Digit::MAX;
    let divisors = [
        BigInt::from_slice(Sign::Plus, &[max, max]),
        BigInt::from_slice(Sign::Plus, &[0, max]),
        BigInt::from_slice(Sign::Plus, &[max, 0, 1 << (Digit::BITS - 1)]),
    ];
    let dividends = [
        BigInt::from_slice(Sign::Plus, &[0, max - 1, max]),
        BigInt::from_slice(Sign::Plus, &[max, max, max, max]),
        BigInt::from_slice(Sign::Minus, &[0, 0, max - 1, max, max]),
        BigInt::from_slice(Sign::Plus, &[1, 0, 0, 1 << (Digit::BITS - 1)]),
    ];

    for x in &dividends {
        for y in &divisors {
            let (q, r) = x.div_rem(y);
            assert_eq!(&(&q * y) + &r, *x, "{} / {}", x, y);
            assert!(r.cmp_abs(y).is_lt(), "{} % {}", x, y);
        }
    }
}
