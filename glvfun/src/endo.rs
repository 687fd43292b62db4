//! The endomorphism `φ(x, y) = (ωx, y)` and its eigenvalue `λ`.
//!
//! Since `ω³ ≡ 1 (mod p)`, applying `φ` three times is the identity, so on the subgroup of prime
//! order `q` it acts as multiplication by some `λ` with `λ³ ≡ 1 (mod q)`. Excluding `λ = 1`
//! leaves the two roots of `λ² + λ + 1 ≡ 0 (mod q)`. Exactly one of them matches a given `ω`
//! (the other matches `ω²`), so [`select_lambda`] checks them against a known point.
use crate::{Curve, Error, Point, field::PrimeField, op};
use alloc::vec::Vec;
use num_bigint::{BigInt, BigUint};

/// Computes `φ(P) = (ωx, y)`. The point at infinity maps to itself.
///
/// This costs one field multiplication, much cheaper than the `[λ]P` it is equal to.
pub fn apply(curve: &Curve, omega: &BigUint, P: &Point) -> Point {
    match P {
        Point::Zero => Point::Zero,
        Point::Affine { x, y } => Point::Affine {
            x: curve.field().mul(omega, x),
            y: y.clone(),
        },
    }
}

/// Solves `λ² + λ + 1 ≡ 0 (mod q)` as `λ = (-1 ± √-3) / 2`.
///
/// Returns [`Error::NoSquareRoot`] if `-3` is not a quadratic residue modulo `q`, in which case
/// the curve has no such endomorphism over this field.
#[tracing::instrument(skip_all, name = "endo::derive_lambda")]
pub fn derive_lambda(order: &PrimeField) -> Result<Vec<BigUint>, Error> {
    let roots = order.sqrt(&order.reduce(&BigInt::from(-3)));
    if roots.is_empty() {
        return Err(Error::NoSquareRoot);
    }
    let minus_one = order.reduce(&BigInt::from(-1));
    let half = order.inverse(&BigUint::from(2u32))?;

    let candidates = roots
        .iter()
        .map(|root| order.mul(&order.add(&minus_one, root), &half))
        .collect::<Vec<_>>();

    tracing::debug!(candidates = candidates.len(), "derived eigenvalue candidates");
    Ok(candidates)
}

/// Picks the candidate `λ` for which `[λ]G = φ(G)`.
///
/// Returns [`Error::NoMatchingEigenvalue`] when no candidate matches, which means `ω`, `G` and
/// `q` don't belong together.
#[tracing::instrument(skip_all, name = "endo::select_lambda")]
pub fn select_lambda(
    curve: &Curve,
    candidates: &[BigUint],
    G: &Point,
    phi_G: &Point,
) -> Result<BigUint, Error> {
    for lambda in candidates {
        let lambda_G = op::scalar_mul_point(curve, &BigInt::from(lambda.clone()), G)?;
        if lambda_G == *phi_G {
            tracing::debug!(lambda = %lambda, "selected endomorphism eigenvalue");
            return Ok(lambda.clone());
        }
    }
    Err(Error::NoMatchingEigenvalue)
}
