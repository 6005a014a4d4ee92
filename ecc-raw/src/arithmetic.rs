//! Capabilities the importer needs from a multi-precision arithmetic engine.
//!
//! Key import never touches integer limbs itself: parsing, modular
//! arithmetic, square roots and scalar multiplication are all delegated to an
//! engine implementing [`FieldArithmetic`] and [`PointMul`]. This keeps the
//! decoding logic independent of the integer representation, and allows it to
//! be tested against a mock engine.

#[cfg(feature = "biguint")]
mod biguint;
#[cfg(feature = "biguint")]
mod mul;
#[cfg(feature = "biguint")]
mod sqrt;

#[cfg(feature = "biguint")]
pub use self::biguint::BigUintEngine;

use crate::{ProjectivePoint, Result};
use core::fmt::Debug;
use subtle::{Choice, CtOption};
use zeroize::Zeroize;

/// Integer parsing and arithmetic modulo a caller-supplied prime.
///
/// Operations returning [`Result`] report storage exhaustion as
/// [`Error::AllocationFailure`](crate::Error::AllocationFailure) and every
/// other failure (malformed input strings, unusable modulus) as
/// [`Error::InternalMathError`](crate::Error::InternalMathError).
pub trait FieldArithmetic {
    /// Multi-precision unsigned integer.
    type Uint: Clone + Debug + Ord + Zeroize;

    /// Construct an integer holding a small constant.
    fn from_u32(&self, n: u32) -> Result<Self::Uint>;

    /// Parse a big-endian unsigned integer.
    fn from_be_bytes(&self, bytes: &[u8]) -> Result<Self::Uint>;

    /// Parse a radix-16 string.
    fn from_hex(&self, hex: &str) -> Result<Self::Uint>;

    /// Is `n` zero?
    fn is_zero(&self, n: &Self::Uint) -> Choice;

    /// Is `n` odd?
    fn is_odd(&self, n: &Self::Uint) -> Choice;

    /// Are `a` and `b` equal?
    fn ct_eq(&self, a: &Self::Uint, b: &Self::Uint) -> Choice;

    /// Compute `a mod p`.
    fn reduce(&self, a: &Self::Uint, p: &Self::Uint) -> Result<Self::Uint>;

    /// Compute `a + b mod p`.
    fn add_mod(&self, a: &Self::Uint, b: &Self::Uint, p: &Self::Uint) -> Result<Self::Uint>;

    /// Compute `a - b mod p`.
    fn sub_mod(&self, a: &Self::Uint, b: &Self::Uint, p: &Self::Uint) -> Result<Self::Uint>;

    /// Compute `a * b mod p`.
    fn mul_mod(&self, a: &Self::Uint, b: &Self::Uint, p: &Self::Uint) -> Result<Self::Uint>;

    /// Compute `a² mod p`.
    fn sqr_mod(&self, a: &Self::Uint, p: &Self::Uint) -> Result<Self::Uint> {
        self.mul_mod(a, a, p)
    }

    /// Compute a square root of `a` modulo the prime `p`.
    ///
    /// The inner value is none when `a` is a quadratic non-residue.
    fn sqrt_mod(&self, a: &Self::Uint, p: &Self::Uint) -> Result<CtOption<Self::Uint>>;
}

/// Scalar multiplication of curve points.
pub trait PointMul: FieldArithmetic {
    /// Compute `k * base` on the curve with coefficient `a` over `GF(p)`.
    ///
    /// When `map_affine` is set the result is normalized to `z = 1`, unless it
    /// is the point at infinity which is returned with `z = 0`.
    fn mul_point(
        &self,
        k: &Self::Uint,
        base: &ProjectivePoint<Self::Uint>,
        a: &Self::Uint,
        p: &Self::Uint,
        map_affine: bool,
    ) -> Result<ProjectivePoint<Self::Uint>>;
}
