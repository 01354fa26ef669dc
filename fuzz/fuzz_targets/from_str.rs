#![no_main]
use bignum::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(x) = s.parse::<BigInt>() {
            assert_eq!(x.to_string().parse::<BigInt>().unwrap(), x);
        }
    }
});
