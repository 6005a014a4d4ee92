//! Raw key import tests.

#![cfg(all(feature = "biguint", feature = "test-vectors"))]

use ecc_raw::{
    BigUint, BigUintEngine, CurveParams, Error, FieldArithmetic, Key, KeyType, LoadedCurve,
    test_vectors::{p224, p256, p384, secp256k1},
};
use hex_literal::hex;
use proptest::{prelude::*, test_runner::Config};

mod nist_p224 {
    use super::p224;

    ecc_raw::test_raw_import!(
        p224::CURVE,
        p224::UNCOMPRESSED_BASEPOINT,
        p224::COMPRESSED_BASEPOINT,
        p224::MUL_TEST_VECTORS
    );
}

mod nist_p256 {
    use super::p256;

    ecc_raw::test_raw_import!(
        p256::CURVE,
        p256::UNCOMPRESSED_BASEPOINT,
        p256::COMPRESSED_BASEPOINT,
        p256::MUL_TEST_VECTORS
    );
}

mod nist_p384 {
    use super::p384;

    ecc_raw::test_raw_import!(
        p384::CURVE,
        p384::UNCOMPRESSED_BASEPOINT,
        p384::COMPRESSED_BASEPOINT,
        p384::MUL_TEST_VECTORS
    );
}

mod k256 {
    use super::secp256k1;

    ecc_raw::test_raw_import!(
        secp256k1::CURVE,
        secp256k1::UNCOMPRESSED_BASEPOINT,
        secp256k1::COMPRESSED_BASEPOINT,
        secp256k1::MUL_TEST_VECTORS
    );
}

/// `y² = x³ + 2x + 3` over `GF(97)`, with base point `(3, 6)`.
const TOY: CurveParams<'static> = CurveParams::new("toy", 1, "61", "2", "3", "3", "6");

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn encode_uncompressed(x: &BigUint, y: &BigUint, size: usize) -> Vec<u8> {
    let mut bytes = vec![0x04];
    bytes.extend(pad(x, size));
    bytes.extend(pad(y, size));
    bytes
}

fn encode_compressed(x: &BigUint, y: &BigUint, size: usize) -> Vec<u8> {
    let tag = if y.to_bytes_be().last().is_some_and(|b| b & 1 == 1) {
        0x03
    } else {
        0x02
    };

    let mut bytes = vec![tag];
    bytes.extend(pad(x, size));
    bytes
}

fn pad(n: &BigUint, size: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    let mut padded = vec![0; size - bytes.len()];
    padded.extend(bytes);
    padded
}

#[test]
fn uncompressed_basepoint_scenario() {
    let key = Key::from_raw_bytes(p256::UNCOMPRESSED_BASEPOINT, &p256::CURVE).unwrap();
    let point = key.public_point();

    assert_eq!(key.key_type(), KeyType::Public);
    assert_eq!(
        point.x,
        uint(&hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"))
    );
    assert_eq!(
        point.y,
        uint(&hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"))
    );
    assert_eq!(point.z, BigUint::from(1u32));
}

#[test]
fn all_ones_scalar_is_accepted() {
    // 2^256 - 1 exceeds the group order
    let key = Key::from_raw_bytes(&[0xFF; 32], &p256::CURVE).unwrap();
    let field = LoadedCurve::load(&BigUintEngine, &p256::CURVE).unwrap();

    assert!(key.is_private());
    assert!(field.check_point(&BigUintEngine, key.public_point()).is_ok());
}

#[test]
fn scalar_equal_to_order_is_identity() {
    assert_eq!(
        Key::from_raw_bytes(&p256::ORDER, &p256::CURVE).unwrap_err(),
        Error::InvalidKey
    );
}

#[test]
fn scalar_above_order_wraps() {
    let k = uint(&p256::ORDER) + BigUint::from(2u32);
    let key = Key::from_raw_bytes(&pad(&k, 32), &p256::CURVE).unwrap();

    let (_, x, y) = &p256::MUL_TEST_VECTORS[1];
    assert_eq!(key.public_point().x, uint(x));
    assert_eq!(key.public_point().y, uint(y));
}

#[test]
fn compressed_non_residue() {
    let engine = BigUintEngine;
    let field = LoadedCurve::load(&engine, &p256::CURVE).unwrap();

    let x = (0u32..)
        .map(BigUint::from)
        .find(|x| {
            let rhs = field.rhs(&engine, x).unwrap();
            bool::from(engine.sqrt_mod(&rhs, &field.p).unwrap().is_none())
        })
        .unwrap();

    for tag in [0x02, 0x03] {
        let mut bytes = vec![tag];
        bytes.extend(pad(&x, 32));
        assert_eq!(
            Key::from_raw_bytes(&bytes, &p256::CURVE).unwrap_err(),
            Error::InvalidKey
        );
    }
}

#[test]
fn uncompressed_origin_is_rejected() {
    let mut bytes = vec![0x04];
    bytes.extend([0; 64]);

    assert_eq!(
        Key::from_raw_bytes(&bytes, &p256::CURVE).unwrap_err(),
        Error::InvalidKey
    );
}

#[test]
fn toy_curve() {
    let key = Key::from_raw_bytes(&[0x04, 3, 6], &TOY).unwrap();
    assert_eq!(key.public_point().x, BigUint::from(3u32));

    let key = Key::from_raw_bytes(&[0x02, 3], &TOY).unwrap();
    assert_eq!(key.public_point().y, BigUint::from(6u32));

    let key = Key::from_raw_bytes(&[0x03, 3], &TOY).unwrap();
    assert_eq!(key.public_point().y, BigUint::from(91u32));

    let key = Key::from_raw_bytes(&[2], &TOY).unwrap();
    assert_eq!(
        key.public_point().affine_coordinates(),
        (&BigUint::from(80u32), &BigUint::from(10u32))
    );
}

#[test]
fn compressed_two_torsion_point() {
    // x³ + 2x + 3 ≡ 0 (mod 97) at x = 30, so y = 0 under either tag
    for tag in [0x02, 0x03] {
        let key = Key::from_raw_bytes(&[tag, 30], &TOY).unwrap();
        assert_eq!(
            key.public_point().affine_coordinates(),
            (&BigUint::from(30u32), &BigUint::from(0u32))
        );
    }
}

#[test]
fn coordinates_out_of_range() {
    // (3, 6 + p) and (3 + p, 6) satisfy the curve equation modulo p
    for bytes in [[0x04, 3, 103], [0x04, 100, 6]] {
        assert_eq!(
            Key::from_raw_bytes(&bytes, &TOY).unwrap_err(),
            Error::InvalidKey
        );
    }

    assert_eq!(
        Key::from_raw_bytes(&[0x02, 100], &TOY).unwrap_err(),
        Error::InvalidKey
    );
}

#[test]
fn malformed_curve_parameters() {
    let bad_prime = CurveParams { prime: "not hex", ..TOY };
    let bad_generator = CurveParams { gy: "6g", ..TOY };

    for bytes in [&[0x04, 3, 6][..], &[0x02, 3][..], &[2][..]] {
        assert_eq!(
            Key::from_raw_bytes(bytes, &bad_prime).unwrap_err(),
            Error::InternalMathError
        );
    }

    assert_eq!(
        Key::from_raw_bytes(&[2], &bad_generator).unwrap_err(),
        Error::InternalMathError
    );
}

#[test]
fn unusable_modulus() {
    let zero = CurveParams { prime: "0", ..TOY };
    let even = CurveParams { prime: "60", ..TOY };

    assert_eq!(
        Key::from_raw_bytes(&[0x02, 3], &zero).unwrap_err(),
        Error::InternalMathError
    );
    assert_eq!(
        Key::from_raw_bytes(&[2], &zero).unwrap_err(),
        Error::InternalMathError
    );
    assert_eq!(
        Key::from_raw_bytes(&[0x02, 3], &even).unwrap_err(),
        Error::InternalMathError
    );
    assert_eq!(
        Key::from_raw_bytes(&[2], &even).unwrap_err(),
        Error::InternalMathError
    );
}

#[test]
fn same_bytes_different_curves() {
    let bytes = &p256::COMPRESSED_BASEPOINT[..];

    // 33 bytes: a compressed point for P-256, invalid length for P-224
    assert!(!Key::from_raw_bytes(bytes, &p256::CURVE).unwrap().is_private());
    assert_eq!(
        Key::from_raw_bytes(bytes, &p224::CURVE).unwrap_err(),
        Error::InvalidEncoding
    );
}

#[test]
fn debug_omits_scalar() {
    let (k, _, _) = &p256::MUL_TEST_VECTORS[3];
    let key = Key::from_raw_bytes(k, &p256::CURVE).unwrap();
    let debug = format!("{key:?}");

    assert!(debug.contains("Private"));
    assert!(!debug.contains("112233445566778899"));
}

#[test]
fn into_public_and_index() {
    let (k, _, _) = &secp256k1::MUL_TEST_VECTORS[0];
    let mut key = Key::from_raw_bytes(k, &secp256k1::CURVE).unwrap();
    assert_eq!(key.index(), None);

    key.set_index(Some(7));
    let public = key.clone().into_public();

    assert_eq!(public.key_type(), KeyType::Public);
    assert_eq!(public.secret_scalar(), None);
    assert_eq!(public.public_point(), key.public_point());
    assert_eq!(public.index(), Some(7));
    assert_eq!(public.curve().name, "secp256k1");
}

prop_compose! {
    fn nonzero_scalar()(bytes in any::<[u8; 32]>()) -> [u8; 32] {
        let mut bytes = bytes;
        bytes[31] |= 1;
        bytes
    }
}

proptest! {
    #![proptest_config(Config::with_cases(32))]

    #[test]
    fn private_keys_are_valid(k in nonzero_scalar()) {
        let key = Key::from_raw_bytes(&k, &p256::CURVE).unwrap();
        let field = LoadedCurve::load(&BigUintEngine, &p256::CURVE).unwrap();

        prop_assert!(key.is_private());
        prop_assert!(field.check_point(&BigUintEngine, key.public_point()).is_ok());
    }

    #[test]
    fn public_encodings_round_trip(k in nonzero_scalar()) {
        let key = Key::from_raw_bytes(&k, &secp256k1::CURVE).unwrap();
        let point = key.public_point();

        let uncompressed = encode_uncompressed(&point.x, &point.y, 32);
        let decoded = Key::from_raw_bytes(&uncompressed, &secp256k1::CURVE).unwrap();
        prop_assert_eq!(decoded.public_point(), point);

        let compressed = encode_compressed(&point.x, &point.y, 32);
        let decoded = Key::from_raw_bytes(&compressed, &secp256k1::CURVE).unwrap();
        prop_assert_eq!(decoded.public_point(), point);
    }

    #[test]
    fn tonelli_shanks_round_trip(k in nonzero_scalar()) {
        let k = &k[4..];
        let key = Key::from_raw_bytes(k, &p224::CURVE).unwrap();
        let point = key.public_point();

        let compressed = encode_compressed(&point.x, &point.y, 28);
        let decoded = Key::from_raw_bytes(&compressed, &p224::CURVE).unwrap();
        prop_assert_eq!(decoded.public_point(), point);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..70)) {
        if let Ok(key) = Key::from_raw_bytes(&bytes, &p256::CURVE) {
            let field = LoadedCurve::load(&BigUintEngine, &p256::CURVE).unwrap();
            prop_assert!(field.check_point(&BigUintEngine, key.public_point()).is_ok());
        }
    }
}
