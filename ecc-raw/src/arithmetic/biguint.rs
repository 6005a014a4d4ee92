//! Reference engine backed by `num-bigint-dig`.

use super::{FieldArithmetic, PointMul, mul, sqrt};
use crate::{Error, ProjectivePoint, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{Num, Zero};
use subtle::{Choice, CtOption};

/// Arithmetic engine over heap allocated [`BigUint`]s.
///
/// # ⚠️ Warning: variable time!
///
/// None of the operations of this engine run in constant time. It is meant as
/// a reference implementation and for handling public keys; private scalars
/// processed with it may leak through timing side channels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BigUintEngine;

/// Reject a zero modulus, which would make every reduction panic.
fn nonzero(p: &BigUint) -> Result<&BigUint> {
    if p.is_zero() {
        Err(Error::InternalMathError)
    } else {
        Ok(p)
    }
}

/// Reject moduli which cannot be odd primes.
fn odd_prime(p: &BigUint) -> Result<&BigUint> {
    if p.is_odd() && *p > BigUint::from(2u32) {
        Ok(p)
    } else {
        Err(Error::InternalMathError)
    }
}

impl FieldArithmetic for BigUintEngine {
    type Uint = BigUint;

    fn from_u32(&self, n: u32) -> Result<BigUint> {
        Ok(BigUint::from(n))
    }

    fn from_be_bytes(&self, bytes: &[u8]) -> Result<BigUint> {
        Ok(BigUint::from_bytes_be(bytes))
    }

    fn from_hex(&self, hex: &str) -> Result<BigUint> {
        BigUint::from_str_radix(hex, 16).map_err(|_| Error::InternalMathError)
    }

    fn is_zero(&self, n: &BigUint) -> Choice {
        Choice::from(u8::from(n.is_zero()))
    }

    fn is_odd(&self, n: &BigUint) -> Choice {
        Choice::from(u8::from(n.is_odd()))
    }

    fn ct_eq(&self, a: &BigUint, b: &BigUint) -> Choice {
        Choice::from(u8::from(a == b))
    }

    fn reduce(&self, a: &BigUint, p: &BigUint) -> Result<BigUint> {
        Ok(a % nonzero(p)?)
    }

    fn add_mod(&self, a: &BigUint, b: &BigUint, p: &BigUint) -> Result<BigUint> {
        let p = nonzero(p)?;
        Ok((a + b) % p)
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint, p: &BigUint) -> Result<BigUint> {
        let p = nonzero(p)?;
        Ok(((a % p) + p - (b % p)) % p)
    }

    fn mul_mod(&self, a: &BigUint, b: &BigUint, p: &BigUint) -> Result<BigUint> {
        let p = nonzero(p)?;
        Ok((a * b) % p)
    }

    fn sqrt_mod(&self, a: &BigUint, p: &BigUint) -> Result<CtOption<BigUint>> {
        let root = sqrt::sqrt(a, odd_prime(p)?)?;
        let is_some = Choice::from(u8::from(root.is_some()));
        Ok(CtOption::new(root.unwrap_or_default(), is_some))
    }
}

impl PointMul for BigUintEngine {
    fn mul_point(
        &self,
        k: &BigUint,
        base: &ProjectivePoint<BigUint>,
        a: &BigUint,
        p: &BigUint,
        map_affine: bool,
    ) -> Result<ProjectivePoint<BigUint>> {
        let curve = mul::Jacobian::new(a, odd_prime(p)?);
        let point = curve.mul(k, base);

        if map_affine {
            Ok(curve.to_affine(point))
        } else {
            Ok(point)
        }
    }
}
