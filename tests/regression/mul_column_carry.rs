use bignum::digit::Digit;
use bignum::{BigInt, Sign};

// Every partial product of all-ones operands carries into the next column.
// Dropping one of those carries leaves the low digits right and the high
// digits wrong.
#[test]
fn test() {
    let max = Digit::MAX;
    for len in 2..6 {
        let ones = BigInt::from_digits(Sign::Plus, vec![max; len]);
        let square = &ones * &ones;

        // (b^n - 1)^2 = b^2n - 2b^n + 1
        let mut expected = vec![0; 2 * len];
        expected[0] = 1;
        expected[len] = max - 1;
        for digit in &mut expected[len + 1..] {
            *digit = max;
        }
        assert_eq!(square.digits(), &expected[..], "{} digits", len);
    }
}
