//! Modular square roots, with the algorithm selection of
//! <https://eprint.iacr.org/2012/685.pdf>.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Candidates tried when searching for a quadratic non-residue.
const NON_RESIDUE_SEARCH_LIMIT: u32 = 1024;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus(p: &BigUint) -> Self {
        match (p % BigUint::from(8u32)).to_u32() {
            Some(3) | Some(7) => Self::Shanks,
            Some(5) => Self::Atkin,
            _ => Self::TonelliShanks,
        }
    }
}

/// Compute a square root of `a` modulo the odd prime `p`.
///
/// Returns `None` when `a` is a quadratic non-residue.
pub(super) fn sqrt(a: &BigUint, p: &BigUint) -> Result<Option<BigUint>> {
    let a = a % p;

    if a.is_zero() {
        return Ok(Some(a));
    }

    // Euler's criterion
    let p_minus_1 = p - BigUint::one();
    if !a.modpow(&(&p_minus_1 >> 1usize), p).is_one() {
        return Ok(None);
    }

    let root = match Algorithm::for_modulus(p) {
        Algorithm::Shanks => shanks(&a, p),
        Algorithm::Atkin => atkin(&a, p),
        Algorithm::TonelliShanks => match tonelli_shanks(&a, p)? {
            Some(root) => root,
            None => return Ok(None),
        },
    };

    if (&root * &root) % p == a {
        Ok(Some(root))
    } else {
        Ok(None)
    }
}

/// `a^((p + 1) / 4)`
fn shanks(a: &BigUint, p: &BigUint) -> BigUint {
    let exp = (p + BigUint::one()) >> 2usize;
    a.modpow(&exp, p)
}

/// With `b = (2a)^((p - 5) / 8)` and `i = 2ab²`, the root is `ab(i - 1)`.
fn atkin(a: &BigUint, p: &BigUint) -> BigUint {
    let exp = (p - BigUint::from(5u32)) >> 3usize;
    let two_a = (a << 1usize) % p;
    let b = two_a.modpow(&exp, p);
    let i = (&two_a * &b % p) * &b % p;
    let i_minus_1 = (i + p - BigUint::one()) % p;
    (a * &b % p) * i_minus_1 % p
}

fn tonelli_shanks(a: &BigUint, p: &BigUint) -> Result<Option<BigUint>> {
    let p_minus_1 = p - BigUint::one();

    // p - 1 = q * 2^s with q odd
    let mut q = p_minus_1.clone();
    let mut s = 0u32;
    while q.is_even() {
        q = q >> 1usize;
        s += 1;
    }

    let z = non_residue(p)?;
    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + BigUint::one()) >> 1usize), p);

    while !t.is_one() {
        // least i with t^(2^i) = 1
        let mut i = 0;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = &t2i * &t2i % p;
            i += 1;
            if i == m {
                return Ok(None);
            }
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = &b * &b % p;
        }

        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    Ok(Some(r))
}

/// Find the least quadratic non-residue modulo `p`.
fn non_residue(p: &BigUint) -> Result<BigUint> {
    let p_minus_1 = p - BigUint::one();
    let euler = &p_minus_1 >> 1usize;

    (2..NON_RESIDUE_SEARCH_LIMIT)
        .map(BigUint::from)
        .take_while(|z| z < p)
        .find(|z| z.modpow(&euler, p) == p_minus_1)
        .ok_or(Error::InternalMathError)
}
