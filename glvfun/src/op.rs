//! Operations on curve points.
//!
//! Everything here is a pure function over immutable [`Point`]s. The group law only needs the
//! [`Curve`] while [`glv_mul`] needs the full [`CurveParams`] for `ω`, `λ` and `q`.
//!
//! ```
//! use glvfun::{op, CurveParams};
//! let params = CurveParams::bn254().unwrap();
//! let x = params.random_scalar(&mut rand::thread_rng());
//! let X1 = op::glv_mul(&params, &x, params.generator()).unwrap(); // fast
//! let X2 = op::scalar_mul_point(params.curve(), &x, params.generator()).unwrap(); // slow
//! assert_eq!(X1, X2);
//! ```
//!
//! [`Curve`]: crate::Curve
//! [`CurveParams`]: crate::CurveParams
use crate::{Curve, CurveParams, Error, Point, decompose::decompose, endo};
use num_bigint::{BigInt, BigUint, Sign};

/// Adds two points with the affine addition law.
///
/// Returns [`Error::DivisionByZero`] only if a point is malformed (e.g. not on the curve), since
/// the cases where a slope denominator vanishes are handled before it is inverted.
pub fn point_add(curve: &Curve, A: &Point, B: &Point) -> Result<Point, Error> {
    let ((x1, y1), (x2, y2)) = match (A, B) {
        (Point::Zero, _) => return Ok(B.clone()),
        (_, Point::Zero) => return Ok(A.clone()),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => ((x1, y1), (x2, y2)),
    };
    let f = curve.field();

    if x1 == x2 && y1 != y2 {
        return Ok(Point::Zero);
    }

    let slope = if y1 == y2 && x1 == x2 {
        let numerator = f.mul(&BigUint::from(3u32), &f.mul(x1, x1));
        f.mul(&numerator, &f.inverse(&f.add(y1, y1))?)
    } else {
        f.mul(&f.sub(y2, y1), &f.inverse(&f.sub(x2, x1))?)
    };

    let x3 = f.sub(&f.sub(&f.mul(&slope, &slope), x1), x2);
    let y3 = f.sub(&f.mul(&slope, &f.sub(x1, &x3)), y1);
    Ok(Point::Affine { x: x3, y: y3 })
}

/// Negates a point: `(x, y) ↦ (x, -y)`.
pub fn point_neg(curve: &Curve, A: &Point) -> Point {
    match A {
        Point::Zero => Point::Zero,
        Point::Affine { x, y } => Point::Affine {
            x: x.clone(),
            y: curve.field().neg(y),
        },
    }
}

/// Subtracts one point from another
pub fn point_sub(curve: &Curve, A: &Point, B: &Point) -> Result<Point, Error> {
    point_add(curve, A, &point_neg(curve, B))
}

/// Splits a signed scalar into its magnitude and the point it should multiply so that
/// `[k]P = [|k|]P'`.
fn normalize_sign(curve: &Curve, k: &BigInt, P: &Point) -> (BigUint, Point) {
    match k.sign() {
        Sign::Minus => (k.magnitude().clone(), point_neg(curve, P)),
        _ => (k.magnitude().clone(), P.clone()),
    }
}

/// Multiplies `P` by `k` with plain double-and-add, scanning bits from least to most
/// significant.
///
/// This is the reference [`glv_mul`] is checked against.
pub fn scalar_mul_point(curve: &Curve, k: &BigInt, P: &Point) -> Result<Point, Error> {
    let (k, mut Q) = normalize_sign(curve, k, P);
    let mut R = Point::Zero;

    for i in 0..k.bits() {
        if k.bit(i) {
            R = point_add(curve, &R, &Q)?;
        }
        Q = point_add(curve, &Q, &Q)?;
    }

    Ok(R)
}

/// Computes `k1 * P1 + k2 * P2` more efficiently than calling [`scalar_mul_point`] twice.
///
/// This is Shamir's trick: a table `{𝒪, P2, P1, P1 + P2}` is indexed by each pair of bits,
/// and both scalars are processed together from the most significant bit down. That costs one
/// doubling per bit of the longer scalar instead of one per bit of each scalar.
///
/// When `P1 = -P2` the `P1 + P2` entry is `𝒪`. That is the true sum so it is simply skipped
/// like the `(0, 0)` entry.
pub fn double_mul(
    curve: &Curve,
    k1: &BigInt,
    P1: &Point,
    k2: &BigInt,
    P2: &Point,
) -> Result<Point, Error> {
    let (k1, P1) = normalize_sign(curve, k1, P1);
    let (k2, P2) = normalize_sign(curve, k2, P2);

    let P1_plus_P2 = point_add(curve, &P1, &P2)?;
    // indexed by (bit of k1) << 1 | (bit of k2)
    let table = [Point::Zero, P2, P1, P1_plus_P2];

    let mut R = Point::Zero;
    for i in (0..k1.bits().max(k2.bits())).rev() {
        R = point_add(curve, &R, &R)?;
        let entry = &table[(usize::from(k1.bit(i)) << 1) | usize::from(k2.bit(i))];
        if !entry.is_zero() {
            R = point_add(curve, &R, entry)?;
        }
    }

    Ok(R)
}

/// Multiplies `P` by `alpha` with the GLV method.
///
/// `alpha` is split into `(k1, k2)` with `alpha ≡ k1 + k2·λ (mod q)` and the result is
/// `k1 * P + k2 * φ(P)` computed with [`double_mul`]. `P` must be in the subgroup generated by
/// the base point for `φ(P) = [λ]P` to hold.
pub fn glv_mul(params: &CurveParams, alpha: &BigInt, P: &Point) -> Result<Point, Error> {
    let curve = params.curve();
    let d = decompose(alpha, params.order().modulus(), params.lambda());
    let phi_P = endo::apply(curve, params.omega(), P);
    double_mul(curve, &d.k1, P, &d.k2, &phi_P)
}
