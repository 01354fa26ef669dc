//! When parsing a big integer from text goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when parsing a
/// [`BigInt`](crate::BigInt) from text.
///
/// Arithmetic never produces an `Error`. Misuse of the arithmetic API, such
/// as dividing by zero, is a programming error and panics instead.
pub struct Error {
    /// Boxed to keep `Error` a single pointer wide.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the input at which the error was detected.
    ///
    /// For [`ErrorCode::InvalidDigit`] this is the offset of the offending
    /// character. For [`ErrorCode::EmptyInput`] it is the offset just past the
    /// optional sign, which is where a digit was expected.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - a character that is not a digit of the radix
    /// - `Category::Data` - a radix outside of `2..=36`
    /// - `Category::Eof` - the input ended before any digit was seen
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidDigit(_) => Category::Syntax,
            ErrorCode::InvalidRadix(_) => Category::Data,
            ErrorCode::EmptyInput => Category::Eof,
        }
    }

    /// Returns true if this error was caused by a character that is not a
    /// digit in the requested radix.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an unsupported radix.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by input that holds no digits,
    /// either because it is empty or because it consists of a lone sign.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    #[cold]
    pub(crate) fn syntax(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }
}

/// Categorizes the cause of a `bignum::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a character that is not a digit of the radix.
    Syntax,

    /// The error was caused by a parse request that cannot be honored, such as
    /// a radix outside of `2..=36`.
    Data,

    /// The error was caused by reaching the end of the input before any digit.
    Eof,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible errors that can occur when parsing a big
/// integer.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input, after an optional sign, contained no characters.
    EmptyInput,

    /// The character is not a digit in the requested radix.
    InvalidDigit(char),

    /// The requested radix is outside of `2..=36`.
    InvalidRadix(u32),
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(ch) => {
                f.write_fmt(format_args!("invalid digit {:?} for the given radix", ch))
            }
            ErrorCode::InvalidRadix(radix) => {
                f.write_fmt(format_args!("radix {} is not in the range 2..=36", radix))
            }
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("EmptyInput"),
            ErrorCode::InvalidDigit(ch) => f.debug_tuple("InvalidDigit").field(ch).finish(),
            ErrorCode::InvalidRadix(radix) => f.debug_tuple("InvalidRadix").field(radix).finish(),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at index {}", self.code, self.index)
    }
}

// Debug is what unwrap() prints, so show the message rather than the nested
// code and box.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, index: {})",
            self.err.code.to_string(),
            self.err.index
        )
    }
}
