//! Curve parameters in short Weierstrass form: `y² = x³ + ax + b (mod p)`.

use crate::{Error, FieldArithmetic, ProjectivePoint, Result};

/// Domain parameters of a short Weierstrass curve as supplied by the caller.
///
/// All integers are radix-16 strings. They are parsed by the arithmetic
/// engine on every import, so a record may be kept in a `static` and shared
/// between threads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveParams<'a> {
    /// Human readable name, only used in diagnostics.
    pub name: &'a str,

    /// Size of a serialized field element in bytes.
    pub size: usize,

    /// Field modulus `p`.
    pub prime: &'a str,

    /// Coefficient `a` in the curve equation.
    pub a: &'a str,

    /// Coefficient `b` in the curve equation.
    pub b: &'a str,

    /// Base point x-coordinate.
    pub gx: &'a str,

    /// Base point y-coordinate.
    pub gy: &'a str,
}

impl<'a> CurveParams<'a> {
    /// Create a new parameter record.
    pub const fn new(
        name: &'a str,
        size: usize,
        prime: &'a str,
        a: &'a str,
        b: &'a str,
        gx: &'a str,
        gy: &'a str,
    ) -> Self {
        Self {
            name,
            size,
            prime,
            a,
            b,
            gx,
            gy,
        }
    }

    /// Parse the base point `(Gx, Gy, 1)`.
    pub fn generator<E: FieldArithmetic>(&self, engine: &E) -> Result<ProjectivePoint<E::Uint>> {
        Ok(ProjectivePoint {
            x: engine.from_hex(self.gx)?,
            y: engine.from_hex(self.gy)?,
            z: engine.from_u32(1)?,
        })
    }
}

/// Field modulus and equation coefficients of a [`CurveParams`], parsed for
/// the duration of a single operation.
#[derive(Clone, Debug)]
pub struct LoadedCurve<U> {
    /// Field modulus `p`.
    pub p: U,

    /// Coefficient `a`.
    pub a: U,

    /// Coefficient `b`.
    pub b: U,
}

impl<U> LoadedCurve<U> {
    /// Parse `p`, `a` and `b` with the given engine.
    pub fn load<E>(engine: &E, params: &CurveParams<'_>) -> Result<Self>
    where
        E: FieldArithmetic<Uint = U>,
    {
        Ok(Self {
            p: engine.from_hex(params.prime)?,
            a: engine.from_hex(params.a)?,
            b: engine.from_hex(params.b)?,
        })
    }

    /// Compute `x³ + ax + b (mod p)`.
    pub fn rhs<E>(&self, engine: &E, x: &U) -> Result<U>
    where
        E: FieldArithmetic<Uint = U>,
    {
        let x3 = engine.mul_mod(&engine.sqr_mod(x, &self.p)?, x, &self.p)?;
        let ax = engine.mul_mod(&self.a, x, &self.p)?;
        let x3_ax = engine.add_mod(&x3, &ax, &self.p)?;
        engine.add_mod(&x3_ax, &self.b, &self.p)
    }

    /// Check that `point` is an affine point on this curve.
    ///
    /// Requires `z = 1`, both coordinates in `[0, p)` and
    /// `y² = x³ + ax + b (mod p)`. Any mismatch is [`Error::InvalidKey`].
    pub fn check_point<E>(&self, engine: &E, point: &ProjectivePoint<U>) -> Result<()>
    where
        E: FieldArithmetic<Uint = U>,
        U: Ord,
    {
        let one = engine.from_u32(1)?;

        if point.z != one || point.x >= self.p || point.y >= self.p {
            return Err(Error::InvalidKey);
        }

        let lhs = engine.sqr_mod(&point.y, &self.p)?;
        let rhs = self.rhs(engine, &point.x)?;

        if bool::from(engine.ct_eq(&lhs, &rhs)) {
            Ok(())
        } else {
            Err(Error::InvalidKey)
        }
    }
}
