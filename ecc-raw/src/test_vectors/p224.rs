//! NIST P-224 (secp224r1) test vectors.
//!
//! `p ≡ 1 (mod 8)`, so compressed points exercise Tonelli-Shanks.

use crate::CurveParams;
use hex_literal::hex;

/// NIST P-224 domain parameters.
pub const CURVE: CurveParams<'static> = CurveParams::new(
    "P-224",
    28,
    "ffffffffffffffffffffffffffffffff000000000000000000000001",
    "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
);

/// Uncompressed base point.
pub const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
    "04 b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21
        bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"
);

/// Compressed base point.
pub const COMPRESSED_BASEPOINT: &[u8] =
    &hex!("02 b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21");

/// Key pairs `(d, Qx, Qy)`.
///
/// Adapted from the FIPS 186-4 ECDSA test vectors
/// (P-224, SHA-224, from `SigGen.txt` in `186-4ecdsatestvectors.zip`)
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
pub const MUL_TEST_VECTORS: &[([u8; 28], [u8; 28], [u8; 28])] = &[
    (
        hex!("16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615"),
        hex!("605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab"),
        hex!("f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669"),
    ),
    (
        hex!("cf020a1ff36c28511191482ed1e5259c60d383606c581948c3fbe2c5"),
        hex!("fa21f85b99d3dc18c6d53351fbcb1e2d029c00fa7d1663a3dd94695e"),
        hex!("e9e79578f8988b168edff1a8b34a5ed9598cc20acd1f0aed36715d88"),
    ),
    (
        hex!("dde6f173fa9f307d206ce46b4f02851ebce9638a989330249fd30b73"),
        hex!("fc21a99b060afb0d9dbf3250ea3c4da10be94ce627a65874d8e4a630"),
        hex!("e8373ab7190890326aac4aacca3eba89e15d1086a05434dd033fd3f3"),
    ),
];
