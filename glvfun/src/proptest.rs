//! Functions used to generate test data for property-based testing with [`proptest`].
//!
//! [`proptest`]: https://github.com/altsysrq/proptest
use crate::{CurveParams, Point, op};
use ::proptest::prelude::*;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// Generate a scalar in `[0, q)` where `order` is `q`.
///
/// Zero, one and `q - 1` turn up more often than they would by chance.
pub fn scalar(order: BigUint) -> impl Strategy<Value = BigInt> {
    let max = BigInt::from(order.clone()) - BigInt::one();
    prop_oneof![
        // insert some pathological cases
        1 => Just(BigInt::from(0)),
        1 => Just(BigInt::from(1)),
        1 => Just(max),
        17 => prop::collection::vec(any::<u8>(), 64)
            .prop_map(move |bytes| BigInt::from(BigUint::from_bytes_be(&bytes) % &order)),
    ]
}

/// Generate a scalar in `(-q, q)`.
pub fn signed_scalar(order: BigUint) -> impl Strategy<Value = BigInt> {
    (any::<bool>(), scalar(order)).prop_map(|(negate, k)| if negate { -k } else { k })
}

/// Generate a point in the group generated by the base point. It may be the point at infinity.
pub fn point(params: &'static CurveParams) -> impl Strategy<Value = Point> {
    scalar(params.order().modulus().clone()).prop_filter_map(
        "scalar multiplication failed",
        move |k| op::scalar_mul_point(params.curve(), &k, params.generator()).ok(),
    )
}
