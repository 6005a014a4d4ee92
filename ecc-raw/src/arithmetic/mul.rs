//! Variable-time point arithmetic in Jacobian coordinates.
//!
//! A point `(X, Y, Z)` represents the affine point `(X / Z², Y / Z³)`, with
//! `Z = 0` for the point at infinity. Formulas are from the Explicit-Formulas
//! Database for short Weierstrass curves with arbitrary `a`.

use crate::ProjectivePoint;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::{Zeroize, Zeroizing};

/// Curve `y² = x³ + ax + b` over `GF(p)`; `b` is not needed by the formulas.
pub(super) struct Jacobian<'a> {
    a: &'a BigUint,
    p: &'a BigUint,
}

impl<'a> Jacobian<'a> {
    /// `p` must be an odd prime.
    pub(super) fn new(a: &'a BigUint, p: &'a BigUint) -> Self {
        Self { a, p }
    }

    fn identity() -> ProjectivePoint<BigUint> {
        ProjectivePoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn add_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.p
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((a % self.p) + self.p - (b % self.p)) % self.p
    }

    fn mul_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.p
    }

    fn double_mod(&self, a: &BigUint) -> BigUint {
        self.add_mod(a, a)
    }

    /// Compute `k * base` with a Montgomery ladder over the bits of `k`.
    pub(super) fn mul(
        &self,
        k: &BigUint,
        base: &ProjectivePoint<BigUint>,
    ) -> ProjectivePoint<BigUint> {
        let bytes = Zeroizing::new(k.to_bytes_be());

        let mut r0 = Self::identity();
        let mut r1 = ProjectivePoint {
            x: &base.x % self.p,
            y: &base.y % self.p,
            z: &base.z % self.p,
        };

        for byte in bytes.iter() {
            for i in (0..8).rev() {
                if (byte >> i) & 1 == 1 {
                    r0 = self.add(&r0, &r1);
                    r1 = self.double(&r1);
                } else {
                    r1 = self.add(&r0, &r1);
                    r0 = self.double(&r0);
                }
            }
        }

        r1.zeroize();
        r0
    }

    /// dbl-1998-cmo-2
    pub(super) fn double(&self, point: &ProjectivePoint<BigUint>) -> ProjectivePoint<BigUint> {
        if point.z.is_zero() || point.y.is_zero() {
            return Self::identity();
        }

        let ProjectivePoint { x, y, z } = point;

        let xx = self.mul_mod(x, x);
        let yy = self.mul_mod(y, y);
        let yyyy = self.mul_mod(&yy, &yy);
        let zz = self.mul_mod(z, z);

        // S = 4·X·YY
        let s = self.mul_mod(&BigUint::from(4u32), &self.mul_mod(x, &yy));

        // M = 3·XX + a·ZZ²
        let m = self.add_mod(
            &self.mul_mod(&BigUint::from(3u32), &xx),
            &self.mul_mod(self.a, &self.mul_mod(&zz, &zz)),
        );

        let x3 = self.sub_mod(&self.mul_mod(&m, &m), &self.double_mod(&s));
        let y3 = self.sub_mod(
            &self.mul_mod(&m, &self.sub_mod(&s, &x3)),
            &self.mul_mod(&BigUint::from(8u32), &yyyy),
        );
        let z3 = self.double_mod(&self.mul_mod(y, z));

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// add-1998-cmo-2
    pub(super) fn add(
        &self,
        lhs: &ProjectivePoint<BigUint>,
        rhs: &ProjectivePoint<BigUint>,
    ) -> ProjectivePoint<BigUint> {
        if lhs.z.is_zero() {
            return rhs.clone();
        }

        if rhs.z.is_zero() {
            return lhs.clone();
        }

        let z1z1 = self.mul_mod(&lhs.z, &lhs.z);
        let z2z2 = self.mul_mod(&rhs.z, &rhs.z);
        let u1 = self.mul_mod(&lhs.x, &z2z2);
        let u2 = self.mul_mod(&rhs.x, &z1z1);
        let s1 = self.mul_mod(&lhs.y, &self.mul_mod(&rhs.z, &z2z2));
        let s2 = self.mul_mod(&rhs.y, &self.mul_mod(&lhs.z, &z1z1));

        let h = self.sub_mod(&u2, &u1);
        let r = self.sub_mod(&s2, &s1);

        if h.is_zero() {
            return if r.is_zero() {
                self.double(lhs)
            } else {
                Self::identity()
            };
        }

        let hh = self.mul_mod(&h, &h);
        let hhh = self.mul_mod(&h, &hh);
        let v = self.mul_mod(&u1, &hh);

        let x3 = self.sub_mod(
            &self.sub_mod(&self.mul_mod(&r, &r), &hhh),
            &self.double_mod(&v),
        );
        let y3 = self.sub_mod(
            &self.mul_mod(&r, &self.sub_mod(&v, &x3)),
            &self.mul_mod(&s1, &hhh),
        );
        let z3 = self.mul_mod(&self.mul_mod(&lhs.z, &rhs.z), &h);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Normalize to `z = 1`; the point at infinity maps to `(0, 1, 0)`.
    pub(super) fn to_affine(&self, point: ProjectivePoint<BigUint>) -> ProjectivePoint<BigUint> {
        if point.z.is_zero() {
            return ProjectivePoint {
                x: BigUint::zero(),
                y: BigUint::one(),
                z: BigUint::zero(),
            };
        }

        // Fermat: z⁻¹ = z^(p - 2)
        let z_inv = point.z.modpow(&(self.p - BigUint::from(2u32)), self.p);
        let z_inv2 = self.mul_mod(&z_inv, &z_inv);
        let z_inv3 = self.mul_mod(&z_inv2, &z_inv);

        ProjectivePoint {
            x: self.mul_mod(&point.x, &z_inv2),
            y: self.mul_mod(&point.y, &z_inv3),
            z: BigUint::one(),
        }
    }
}
