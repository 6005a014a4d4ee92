//! Development-related functionality.

/// Implement raw import tests for a curve with the [`BigUintEngine`].
///
/// Takes the curve's parameters, its uncompressed and compressed base point,
/// and `(k, x, y)` scalar multiplication vectors.
///
/// [`BigUintEngine`]: crate::BigUintEngine
#[macro_export]
macro_rules! test_raw_import {
    (
        $curve:expr,
        $uncompressed:expr,
        $compressed:expr,
        $mul_vectors:expr
    ) => {
        fn uint(bytes: &[u8]) -> $crate::BigUint {
            $crate::BigUint::from_bytes_be(bytes)
        }

        fn generator() -> $crate::ProjectivePoint<$crate::BigUint> {
            $curve.generator(&$crate::BigUintEngine).unwrap()
        }

        #[test]
        fn import_uncompressed_basepoint() {
            let key = $crate::Key::from_raw_bytes($uncompressed, &$curve).unwrap();
            assert_eq!(key.key_type(), $crate::KeyType::Public);
            assert_eq!(key.public_point(), &generator());
            assert!(key.secret_scalar().is_none());
        }

        #[test]
        fn import_compressed_basepoint() {
            let key = $crate::Key::from_raw_bytes($compressed, &$curve).unwrap();
            assert_eq!(key.key_type(), $crate::KeyType::Public);
            assert_eq!(key.public_point(), &generator());
        }

        #[test]
        fn compressed_tag_selects_root() {
            let mut bytes = $compressed.to_vec();
            bytes[0] ^= 1;

            let key = $crate::Key::from_raw_bytes(&bytes, &$curve).unwrap();
            let generator = generator();
            let p = $crate::LoadedCurve::load(&$crate::BigUintEngine, &$curve)
                .unwrap()
                .p;

            assert_eq!(key.public_point().x, generator.x);
            assert_eq!(&key.public_point().y + &generator.y, p);
        }

        #[test]
        fn import_private_vectors() {
            for (k, x, y) in $mul_vectors.iter() {
                let key = $crate::Key::from_raw_bytes(k, &$curve).unwrap();
                assert_eq!(key.key_type(), $crate::KeyType::Private);
                assert_eq!(key.secret_scalar(), Some(&uint(k)));
                assert_eq!(key.public_point().x, uint(x));
                assert_eq!(key.public_point().y, uint(y));
                assert_eq!(key.public_point().z, uint(&[1]));
            }
        }

        #[test]
        fn import_public_vectors() {
            for (_, x, y) in $mul_vectors.iter() {
                let mut bytes = vec![$crate::UNCOMPRESSED_TAG];
                bytes.extend_from_slice(x);
                bytes.extend_from_slice(y);

                let key = $crate::Key::from_raw_bytes(&bytes, &$curve).unwrap();
                assert_eq!(key.key_type(), $crate::KeyType::Public);
                assert_eq!(key.public_point().y, uint(y));
            }
        }

        #[test]
        fn reject_zero_scalar() {
            let bytes = vec![0u8; $curve.size];
            assert_eq!(
                $crate::Key::from_raw_bytes(&bytes, &$curve).unwrap_err(),
                $crate::Error::InvalidKey
            );
        }

        #[test]
        fn reject_off_curve_point() {
            let mut bytes = $uncompressed.to_vec();
            *bytes.last_mut().unwrap() ^= 1;
            assert_eq!(
                $crate::Key::from_raw_bytes(&bytes, &$curve).unwrap_err(),
                $crate::Error::InvalidKey
            );
        }

        #[test]
        fn reject_bad_lengths() {
            for len in [0, 1, $curve.size - 1, $curve.size + 2, 2 * $curve.size] {
                let bytes = vec![$crate::UNCOMPRESSED_TAG; len];
                assert_eq!(
                    $crate::Key::from_raw_bytes(&bytes, &$curve).unwrap_err(),
                    $crate::Error::InvalidEncoding
                );
            }
        }
    };
}
