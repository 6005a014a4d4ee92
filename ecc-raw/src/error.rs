//! Error types.

use core::fmt;

/// Raw key import errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Input length and leading byte match none of the accepted encodings.
    InvalidEncoding,

    /// Zero private scalar, point not on the curve, or compressed `x`
    /// without a matching `y`.
    InvalidKey,

    /// Arithmetic engine could not acquire working storage.
    AllocationFailure,

    /// Arithmetic engine reported a failure, e.g. malformed curve parameters.
    InternalMathError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidEncoding => "invalid raw key encoding",
            Error::InvalidKey => "invalid elliptic curve key",
            Error::AllocationFailure => "allocation failure",
            Error::InternalMathError => "arithmetic error",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
