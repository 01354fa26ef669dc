use bignum::BigInt;

// A dividend with fewer digits than the divisor is its own remainder.
#[test]
fn test() {
    let x: BigInt = "-18446744073709551615".parse().unwrap();
    let y: BigInt = "1000000000000000000000000000000000000000".parse().unwrap();
    let (q, r) = x.div_rem(&y);
    assert!(q.is_zero());
    assert_eq!(r, x);
    assert_eq!(&x % &y, x);
}
