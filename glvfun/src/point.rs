use crate::{Curve, CurveParams, Error, op};
use core::fmt;
use num_bigint::BigUint;
use rand_core::RngCore;

/// A point on the curve `y² = x³ + b` in affine coordinates.
///
/// A `Point` is either [`Point::Zero`], the _point at infinity_ which is the [_identity
/// element_] of the group, or a pair of integers `(x, y)` modulo `p` that satisfy the curve
/// equation. Points are plain values: every operation in [`op`] returns a new point rather than
/// modifying its inputs.
///
/// Points built by [`Point::from_coordinates`] or returned from [`op`] have coordinates reduced
/// modulo `p`, so two such points are equal exactly when the derived [`PartialEq`] says they are.
///
/// A point carries no reference to its curve. [`Point::from_coordinates_unchecked`] and, with
/// the `serde` feature, deserialization both produce points that are not checked against any
/// curve. Check them with [`Point::is_on_curve`] before use. [`CurveParams`] re-checks its
/// generator when deserialized.
///
/// # Examples
/// ```
/// use glvfun::{CurveParams, Point};
/// use num_bigint::BigUint;
/// let params = CurveParams::bn254().unwrap();
/// let G = Point::from_coordinates(params.curve(), BigUint::from(1u32), BigUint::from(2u32)).unwrap();
/// assert_eq!(&G, params.generator());
/// assert!(Point::from_coordinates(params.curve(), BigUint::from(1u32), BigUint::from(3u32)).is_err());
/// ```
///
/// [_identity element_]: https://en.wikipedia.org/wiki/Identity_element
/// [`op`]: crate::op
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The point at infinity.
    #[default]
    Zero,
    /// A finite point.
    Affine {
        /// The x-coordinate in `[0, p)`.
        x: BigUint,
        /// The y-coordinate in `[0, p)`.
        y: BigUint,
    },
}

impl Point {
    /// The point at infinity.
    pub fn zero() -> Self {
        Point::Zero
    }

    /// Whether this is the point at infinity.
    pub fn is_zero(&self) -> bool {
        matches!(self, Point::Zero)
    }

    /// Creates a point from its coordinates checking that they lie on `curve`.
    ///
    /// Returns [`Error::NotOnCurve`] if either coordinate is not reduced modulo `p` or the
    /// equation `y² = x³ + b` does not hold.
    pub fn from_coordinates(curve: &Curve, x: BigUint, y: BigUint) -> Result<Self, Error> {
        if !curve.contains(&x, &y) {
            return Err(Error::NotOnCurve);
        }
        Ok(Point::Affine { x, y })
    }

    /// Creates a point without checking it is on any curve.
    ///
    /// Group operations on a point that is not on the curve give meaningless results and may fail
    /// with [`Error::DivisionByZero`].
    pub fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// The `(x, y)` coordinates or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Zero => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Whether the point satisfies the curve equation. The point at infinity always does.
    pub fn is_on_curve(&self, curve: &Curve) -> bool {
        match self {
            Point::Zero => true,
            Point::Affine { x, y } => curve.contains(x, y),
        }
    }

    /// Samples a point from the group generated by the base point by multiplying it with a
    /// random scalar.
    ///
    /// # Examples
    /// ```
    /// # use glvfun::{CurveParams, Point};
    /// let params = CurveParams::bn254().unwrap();
    /// let random_point = Point::random(&params, &mut rand::thread_rng()).unwrap();
    /// assert!(random_point.is_on_curve(params.curve()));
    /// ```
    pub fn random(params: &CurveParams, rng: &mut impl RngCore) -> Result<Self, Error> {
        let k = params.random_scalar(rng);
        op::scalar_mul_point(params.curve(), &k, params.generator())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Zero => write!(f, "infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
