//! Raw key import.

use crate::{
    CurveParams, Encoding, Error, FieldArithmetic, Key, LoadedCurve, PointMul, ProjectivePoint,
    Result,
};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Import a raw elliptic curve key.
///
/// `bytes` is classified by [`Encoding::classify`] as one of:
///
/// - a big-endian private scalar of `curve.size` bytes, whose public point is
///   derived by scalar multiplication of the base point,
/// - an uncompressed public point `04 ‖ x ‖ y`,
/// - a compressed public point `02 ‖ x` or `03 ‖ x`, whose y-coordinate is
///   recovered from the curve equation.
///
/// Whatever the encoding, the resulting public point must lie on the curve
/// or the key is rejected with [`Error::InvalidKey`]. Coordinates must also
/// be reduced: `x ≥ p` or `y ≥ p` is rejected even when the curve equation
/// holds modulo `p`, including a compressed `x ≥ p`.
///
/// Private scalars are only checked to be nonzero: scalars at or above the
/// group order are accepted and implicitly reduced by the multiplication.
pub fn import_raw<'c, E>(
    engine: &E,
    bytes: &[u8],
    curve: &'c CurveParams<'c>,
) -> Result<Key<'c, E::Uint>>
where
    E: PointMul,
{
    let result = decode(engine, bytes, curve);

    match &result {
        Ok(key) => tracing::trace!(
            curve = curve.name,
            key_type = ?key.key_type(),
            "imported raw key"
        ),
        Err(error) => tracing::debug!(
            curve = curve.name,
            len = bytes.len(),
            %error,
            "rejected raw key"
        ),
    }

    result
}

fn decode<'c, E>(engine: &E, bytes: &[u8], curve: &'c CurveParams<'c>) -> Result<Key<'c, E::Uint>>
where
    E: PointMul,
{
    let (field, public, secret) = match Encoding::classify(bytes, curve.size)? {
        Encoding::Private { scalar } => {
            let k = Zeroizing::new(engine.from_be_bytes(scalar)?);
            let (field, public) = derive_public(engine, &k, curve)?;
            (field, public, Some(k))
        }
        Encoding::UncompressedPublic { x, y } => {
            let point = ProjectivePoint {
                x: engine.from_be_bytes(x)?,
                y: engine.from_be_bytes(y)?,
                z: engine.from_u32(1)?,
            };
            (LoadedCurve::load(engine, curve)?, point, None)
        }
        Encoding::CompressedPublic { x, y_is_odd } => {
            let x = engine.from_be_bytes(x)?;
            let field = LoadedCurve::load(engine, curve)?;
            let point = decompress(engine, &field, x, y_is_odd)?;
            (field, point, None)
        }
    };

    field.check_point(engine, &public)?;
    Ok(Key::new(curve, public, secret))
}

/// Compute `k·G`, rejecting `k = 0`.
fn derive_public<E>(
    engine: &E,
    k: &E::Uint,
    curve: &CurveParams<'_>,
) -> Result<(LoadedCurve<E::Uint>, ProjectivePoint<E::Uint>)>
where
    E: PointMul,
{
    if bool::from(engine.is_zero(k)) {
        return Err(Error::InvalidKey);
    }

    let field = LoadedCurve::load(engine, curve)?;
    let generator = curve.generator(engine)?;
    let public = engine.mul_point(k, &generator, &field.a, &field.p, true)?;
    Ok((field, public))
}

/// Recover the y-coordinate for `x` whose parity matches `y_is_odd`.
fn decompress<E>(
    engine: &E,
    field: &LoadedCurve<E::Uint>,
    x: E::Uint,
    y_is_odd: bool,
) -> Result<ProjectivePoint<E::Uint>>
where
    E: FieldArithmetic,
{
    let alpha = field.rhs(engine, &x)?;
    let beta = Option::<E::Uint>::from(engine.sqrt_mod(&alpha, &field.p)?)
        .ok_or(Error::InvalidKey)?;

    let parity_matches = engine.is_odd(&beta).ct_eq(&Choice::from(u8::from(y_is_odd)));

    let y = if bool::from(parity_matches) {
        engine.reduce(&beta, &field.p)?
    } else {
        engine.sub_mod(&field.p, &beta, &field.p)?
    };

    Ok(ProjectivePoint {
        x,
        y,
        z: engine.from_u32(1)?,
    })
}
