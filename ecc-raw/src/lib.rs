#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
#![cfg_attr(all(feature = "biguint", feature = "test-vectors"), doc = "```")]
#![cfg_attr(
    not(all(feature = "biguint", feature = "test-vectors")),
    doc = "```ignore"
)]
//! use ecc_raw::{Key, KeyType, test_vectors::p256};
//!
//! let key = Key::from_raw_bytes(p256::COMPRESSED_BASEPOINT, &p256::CURVE)?;
//! assert_eq!(key.key_type(), KeyType::Public);
//! # Ok::<(), ecc_raw::Error>(())
//! ```

mod arithmetic;
mod curve;
mod encoding;
mod error;
mod import;
mod key;
mod point;

#[cfg(feature = "dev")]
pub mod dev;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{FieldArithmetic, PointMul},
    curve::{CurveParams, LoadedCurve},
    encoding::{COMPRESSED_EVEN_TAG, COMPRESSED_ODD_TAG, Encoding, UNCOMPRESSED_TAG},
    error::{Error, Result},
    import::import_raw,
    key::{Key, KeyType},
    point::ProjectivePoint,
};
pub use subtle;
pub use zeroize;

#[cfg(feature = "biguint")]
pub use {crate::arithmetic::BigUintEngine, num_bigint::BigUint};

#[cfg(feature = "biguint")]
impl<'c> Key<'c, BigUint> {
    /// Import a raw key with the [`BigUintEngine`].
    ///
    /// See [`import_raw`] for the accepted encodings.
    pub fn from_raw_bytes(bytes: &[u8], curve: &'c CurveParams<'c>) -> Result<Self> {
        import_raw(&BigUintEngine, bytes, curve)
    }
}
