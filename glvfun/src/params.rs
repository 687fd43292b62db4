use crate::{Error, Point, endo, field::PrimeField, hex, op};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::RngCore;

const BN254_P: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";
const BN254_Q: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
const BN254_OMEGA: &str = "30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48";

/// The curve `y² = x³ + b` over the prime field modulo `p`.
///
/// This is all the group law needs so the point operations in [`op`] take a `&Curve`.
///
/// [`op`]: crate::op
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "UncheckedCurve")
)]
pub struct Curve {
    field: PrimeField,
    b: BigUint,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCurve {
    field: PrimeField,
    b: BigUint,
}

#[cfg(feature = "serde")]
impl From<UncheckedCurve> for Curve {
    fn from(curve: UncheckedCurve) -> Self {
        Curve::new(curve.field, curve.b)
    }
}

impl Curve {
    /// Creates the curve `y² = x³ + b` over `field`. `b` is reduced modulo `p`.
    pub fn new(field: PrimeField, b: BigUint) -> Self {
        let b = b % field.modulus();
        Self { field, b }
    }

    /// The base field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The constant coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Whether `(x, y)` are reduced coordinates satisfying the curve equation.
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let f = &self.field;
        if x >= f.modulus() || y >= f.modulus() {
            return false;
        }
        let lhs = f.mul(y, y);
        let rhs = f.add(&f.mul(&f.mul(x, x), x), &self.b);
        lhs == rhs
    }
}

/// The process-wide constants `{p, q, b, ω, λ, G}` everything else is computed against.
///
/// A `CurveParams` can only be built through constructors that check its invariants:
///
/// - `ω³ ≡ 1 (mod p)` and `ω ≠ 1`,
/// - `λ² + λ + 1 ≡ 0 (mod q)`,
/// - `G` is a finite point on the curve with `[q]G = 𝒪`,
/// - `φ(G) = [λ]G` where `φ(x, y) = (ωx, y)`.
///
/// Primality of `p` and `q` is assumed, not checked. Build it once and pass it around by
/// reference. It is never mutated.
///
/// # Examples
/// ```
/// use glvfun::CurveParams;
/// use num_bigint::BigUint;
/// let params = CurveParams::bn254().unwrap();
/// let lambda: BigUint = "21888242871839275217838484774961031246154997185409878258781734729429964517155"
///     .parse()
///     .unwrap();
/// assert_eq!(params.lambda(), &lambda);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedCurveParams")
)]
pub struct CurveParams {
    curve: Curve,
    order: PrimeField,
    omega: BigUint,
    lambda: BigUint,
    generator: Point,
}

impl CurveParams {
    /// Bundles the constants after checking every invariant listed on [`CurveParams`].
    pub fn new(
        curve: Curve,
        order: PrimeField,
        omega: BigUint,
        lambda: BigUint,
        generator: Point,
    ) -> Result<Self, Error> {
        let params = Self {
            curve,
            order,
            omega,
            lambda,
            generator,
        };
        params.validate()?;
        Ok(params)
    }

    /// Like [`new`] but finds `λ` by solving `λ² + λ + 1 ≡ 0 (mod q)` and keeping the root that
    /// maps `G` to `φ(G)`.
    ///
    /// [`new`]: Self::new
    #[tracing::instrument(skip_all, name = "CurveParams::with_derived_lambda")]
    pub fn with_derived_lambda(
        curve: Curve,
        order: PrimeField,
        omega: BigUint,
        generator: Point,
    ) -> Result<Self, Error> {
        if generator.is_zero() || !generator.is_on_curve(&curve) {
            return Err(Error::NotOnCurve);
        }
        let generator_image = endo::apply(&curve, &omega, &generator);
        let candidates = endo::derive_lambda(&order)?;
        let lambda = endo::select_lambda(&curve, &candidates, &generator, &generator_image)?;
        Self::new(curve, order, omega, lambda, generator)
    }

    /// The BN254 (alt_bn128) G1 group: `y² = x³ + 3` with base point `(1, 2)`.
    ///
    /// `λ` is derived rather than hard coded.
    pub fn bn254() -> Result<Self, Error> {
        let field = PrimeField::new(hex::decode_uint(BN254_P)?)?;
        let order = PrimeField::new(hex::decode_uint(BN254_Q)?)?;
        let omega = hex::decode_uint(BN254_OMEGA)?;
        let curve = Curve::new(field, BigUint::from(3u32));
        let generator =
            Point::from_coordinates(&curve, BigUint::from(1u32), BigUint::from(2u32))?;
        Self::with_derived_lambda(curve, order, omega, generator)
    }

    #[tracing::instrument(skip_all, name = "CurveParams::validate")]
    fn validate(&self) -> Result<(), Error> {
        let f = self.curve.field();
        let q = &self.order;
        f.check_modulus()?;
        q.check_modulus()?;

        if self.curve.b() >= f.modulus() {
            return Err(Error::InvalidParameters("b is not reduced modulo p"));
        }

        let one = BigUint::one();
        if self.omega >= *f.modulus()
            || self.omega == one
            || f.pow(&self.omega, &BigUint::from(3u32)) != one
        {
            return Err(Error::InvalidParameters(
                "omega is not a non-trivial cube root of unity modulo p",
            ));
        }

        let lambda_poly = q.add(&q.add(&q.mul(&self.lambda, &self.lambda), &self.lambda), &one);
        if self.lambda >= *q.modulus() || !lambda_poly.is_zero() {
            return Err(Error::InvalidParameters(
                "lambda is not a root of x² + x + 1 modulo q",
            ));
        }

        if self.generator.is_zero() {
            return Err(Error::InvalidParameters(
                "generator must not be the point at infinity",
            ));
        }
        if !self.generator.is_on_curve(&self.curve) {
            return Err(Error::NotOnCurve);
        }

        let order = BigInt::from(q.modulus().clone());
        if !op::scalar_mul_point(&self.curve, &order, &self.generator)?.is_zero() {
            return Err(Error::InvalidParameters("generator does not have order q"));
        }

        let lambda = BigInt::from(self.lambda.clone());
        let lambda_G = op::scalar_mul_point(&self.curve, &lambda, &self.generator)?;
        if lambda_G != endo::apply(&self.curve, &self.omega, &self.generator) {
            return Err(Error::NoMatchingEigenvalue);
        }

        tracing::debug!("curve parameters validated");
        Ok(())
    }

    /// The curve and its base field.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Integers modulo the group order `q`.
    pub fn order(&self) -> &PrimeField {
        &self.order
    }

    /// The cube root of unity `ω` modulo `p` defining `φ(x, y) = (ωx, y)`.
    pub fn omega(&self) -> &BigUint {
        &self.omega
    }

    /// The eigenvalue `λ` with `φ(P) = [λ]P`.
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    /// The base point `G` of order `q`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// A random scalar in `[0, q)`. 64 random bytes are reduced modulo `q` so the bias is
    /// negligible.
    pub fn random_scalar(&self, rng: &mut impl RngCore) -> BigInt {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        BigInt::from(BigUint::from_bytes_be(&bytes) % self.order.modulus())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCurveParams {
    curve: Curve,
    order: PrimeField,
    omega: BigUint,
    lambda: BigUint,
    generator: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCurveParams> for CurveParams {
    type Error = Error;

    fn try_from(params: UncheckedCurveParams) -> Result<Self, Self::Error> {
        CurveParams::new(
            params.curve,
            params.order,
            params.omega,
            params.lambda,
            params.generator,
        )
    }
}
