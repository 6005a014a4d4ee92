#![no_main]
// Targets: p224, p256, p384, secp256k1
use ecc_raw::{
    BigUintEngine, CurveParams, Key, LoadedCurve,
    test_vectors::{p224, p256, p384, secp256k1},
};
use libfuzzer_sys::fuzz_target;

fn test_curve(data: &[u8], curve: &CurveParams<'_>) {
    let Ok(key) = Key::from_raw_bytes(data, curve) else {
        return;
    };

    // Every accepted key carries an affine point on the curve
    let field = LoadedCurve::load(&BigUintEngine, curve).unwrap();
    assert!(field.check_point(&BigUintEngine, key.public_point()).is_ok());
    assert_eq!(key.is_private(), data.len() == curve.size);

    // Re-encoding the point compressed must decode to the same point
    let point = key.public_point();
    let x = point.x.to_bytes_be();
    let mut compressed = vec![0u8; curve.size + 1 - x.len()];
    compressed[0] = 0x02 | (point.y.to_bytes_be().last().copied().unwrap_or(0) & 1);
    compressed.extend_from_slice(&x);

    let decoded = Key::from_raw_bytes(&compressed, curve).unwrap();
    assert_eq!(decoded.public_point(), point);
}

fuzz_target!(|data: &[u8]| {
    test_curve(data, &p224::CURVE);
    test_curve(data, &p256::CURVE);
    test_curve(data, &p384::CURVE);
    test_curve(data, &secp256k1::CURVE);
});
