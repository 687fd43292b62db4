//! GLV scalar decomposition.
//!
//! Splits `α` into `(k1, k2)` with `α ≡ k1 + k2·λ (mod q)` following Algorithm 3.74 of _Guide
//! to Elliptic Curve Cryptography_ (Hankerson, Menezes, Vanstone): `k2 = round(α·λ/q)` and
//! `k1 = α - k2·λ (mod q)`, both moved into the balanced range `(-q/2, q/2]`.
use core::cmp::Ordering;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

/// The two components of a decomposed scalar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// The component multiplied with `P`.
    pub k1: BigInt,
    /// The component multiplied with `φ(P)`.
    pub k2: BigInt,
}

impl Decomposition {
    /// `(k1 + k2·λ) mod q`, which equals `α mod q` for the `α` this was decomposed from.
    pub fn recombine(&self, q: &BigUint, lambda: &BigUint) -> BigUint {
        let q = BigInt::from(q.clone());
        let sum = &self.k1 + &self.k2 * BigInt::from(lambda.clone());
        sum.mod_floor(&q).magnitude().clone()
    }
}

/// Decomposes `α` into `(k1, k2)` with `α ≡ k1 + k2·λ (mod q)` and both components in
/// `(-q/2, q/2]`.
///
/// `α·λ/q` is rounded exactly with ties going to the even neighbour, so there is no precision to
/// run out of. Any `α` is accepted, including negative ones and ones larger than `q`.
///
/// # Examples
/// ```
/// use glvfun::{CurveParams, decompose::decompose};
/// use num_bigint::BigInt;
/// let params = CurveParams::bn254().unwrap();
/// let q = params.order().modulus();
/// let alpha: BigInt = "1234567890123456789012345678901234567890".parse().unwrap();
/// let d = decompose(&alpha, q, params.lambda());
/// assert_eq!(BigInt::from(d.recombine(q, params.lambda())), alpha);
/// ```
pub fn decompose(alpha: &BigInt, q: &BigUint, lambda: &BigUint) -> Decomposition {
    let q = BigInt::from(q.clone());
    let lambda = BigInt::from(lambda.clone());

    let k2 = div_round_half_even(&(alpha * &lambda), &q).mod_floor(&q);
    let k1 = (alpha - &k2 * &lambda).mod_floor(&q);

    Decomposition {
        k1: balance(k1, &q),
        k2: balance(k2, &q),
    }
}

/// `n / d` rounded to the nearest integer, ties to even. `d` must be positive.
fn div_round_half_even(n: &BigInt, d: &BigInt) -> BigInt {
    let (quotient, remainder) = n.div_mod_floor(d);
    let twice_remainder: BigInt = remainder << 1u32;
    match twice_remainder.cmp(d) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + BigInt::one(),
        Ordering::Equal if quotient.is_even() => quotient,
        Ordering::Equal => quotient + BigInt::one(),
    }
}

/// Maps `k` in `[0, q)` into `(-q/2, q/2]`.
fn balance(k: BigInt, q: &BigInt) -> BigInt {
    if k > (q >> 1u32) { k - q } else { k }
}
