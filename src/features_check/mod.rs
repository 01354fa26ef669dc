//! Fails the build with a readable message when neither `std` nor `alloc` is
//! enabled, since every digit buffer needs an allocator.

#[allow(unused_macros)]
macro_rules! skip_rustfmt {
    ($item:item) => {
        $item
    };
}

#[cfg(not(any(feature = "std", feature = "alloc")))]
skip_rustfmt! {
    mod error;
}
