//! Parameters and test vectors for well-known curves.
//!
//! Each module provides the curve's [`CurveParams`](crate::CurveParams) as
//! `CURVE`, its base point in both public encodings, and `MUL_TEST_VECTORS`
//! as `(k, x, y)` triples with `(x, y) = k·G`.

pub mod p224;
pub mod p256;
pub mod p384;
pub mod secp256k1;
