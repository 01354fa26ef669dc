#![no_main]
use bignum::digit::Digit;
use bignum::{BigInt, Sign};
use libfuzzer_sys::fuzz_target;

fn from_bytes(bytes: &[u8]) -> BigInt {
    let (sign, bytes) = match bytes.split_first() {
        Some((&first, rest)) if first & 1 == 1 => (Sign::Minus, rest),
        Some((_, rest)) => (Sign::Plus, rest),
        None => (Sign::Plus, bytes),
    };
    let width = std::mem::size_of::<Digit>();
    let digits = bytes
        .chunks(width)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0 as Digit, |acc, &b| (acc << 8) | Digit::from(b))
        })
        .collect();
    BigInt::from_digits(sign, digits)
}

fuzz_target!(|data: &[u8]| {
    let (head, tail) = data.split_at(data.len() / 2);
    let x = from_bytes(head);
    let y = from_bytes(tail);
    if let Some((q, r)) = x.checked_div_rem(&y) {
        assert_eq!(&(&q * &y) + &r, x);
        assert!(r.cmp_abs(&y).is_lt());
    }
});
