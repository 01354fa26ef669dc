use bignum::digit::{self, Digit};
use bignum::BigInt;

// Chunked formatting in a power-of-two radix once picked a chunk width whose
// radix power did not fit in one digit, which wrapped to zero.
#[test]
fn test() {
    let x = BigInt::from_slice(bignum::Sign::Plus, &[Digit::MAX, Digit::MAX, 1]);
    let hex = x.to_str_radix(16);
    let mut expected = String::from("1");
    expected.push_str(&"f".repeat(2 * digit::BITS as usize / 4));
    assert_eq!(hex, expected);
    assert_eq!(BigInt::parse_radix(&hex, 16).unwrap(), x);

    let binary = x.to_str_radix(2);
    assert_eq!(binary.len(), 2 * digit::BITS as usize + 1);
    assert_eq!(BigInt::parse_radix(&binary, 2).unwrap(), x);
}
