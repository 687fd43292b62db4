//! Arithmetic on integers modulo an odd prime.
//!
//! The same [`PrimeField`] type serves both the curve's base field (modulo `p`) and the
//! integers modulo the group order `q`.
use crate::Error;
use alloc::{vec, vec::Vec};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Integers modulo an odd prime `m`.
///
/// Every method returns a value reduced into `[0, m)`. Inputs don't need to be reduced.
///
/// # Examples
/// ```
/// use glvfun::field::PrimeField;
/// use num_bigint::BigUint;
/// let f = PrimeField::new(BigUint::from(13u32)).unwrap();
/// let three = BigUint::from(3u32);
/// let inv = f.inverse(&three).unwrap();
/// assert_eq!(f.mul(&three, &inv), BigUint::from(1u32));
/// assert_eq!(f.sqrt(&BigUint::from(10u32)), vec![BigUint::from(6u32), BigUint::from(7u32)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BigUint", into = "BigUint")
)]
pub struct PrimeField {
    modulus: BigUint,
}

impl TryFrom<BigUint> for PrimeField {
    type Error = Error;

    fn try_from(modulus: BigUint) -> Result<Self, Self::Error> {
        PrimeField::new(modulus)
    }
}

impl From<PrimeField> for BigUint {
    fn from(field: PrimeField) -> Self {
        field.modulus
    }
}

impl PrimeField {
    /// Wraps `modulus`. Primality is not checked but the modulus must be odd and at least `3`.
    pub fn new(modulus: BigUint) -> Result<Self, Error> {
        let field = Self { modulus };
        field.check_modulus()?;
        Ok(field)
    }

    pub(crate) fn check_modulus(&self) -> Result<(), Error> {
        if self.modulus < BigUint::from(3u32) || !self.modulus.bit(0) {
            return Err(Error::InvalidParameters("modulus must be an odd prime"));
        }
        Ok(())
    }

    /// The prime modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Maps any signed integer to its canonical residue.
    pub fn reduce(&self, a: &BigInt) -> BigUint {
        let r = a.magnitude() % &self.modulus;
        if a.sign() == Sign::Minus && !r.is_zero() {
            &self.modulus - r
        } else {
            r
        }
    }

    /// `(a + b) mod m`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `(a - b) mod m`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        let b = b % &self.modulus;
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    /// `(a * b) mod m`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// `-a mod m`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        if a.is_zero() { a } else { &self.modulus - a }
    }

    /// `a^e mod m`
    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &self.modulus)
    }

    /// The multiplicative inverse of `a`.
    ///
    /// Returns [`Error::DivisionByZero`] when `a ≡ 0 (mod m)`.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint, Error> {
        (a % &self.modulus)
            .modinv(&self.modulus)
            .ok_or(Error::DivisionByZero)
    }

    /// Whether `a` is a quadratic residue (zero counts as one) by Euler's criterion.
    pub fn is_square(&self, a: &BigUint) -> bool {
        let a = a % &self.modulus;
        a.is_zero() || self.pow(&a, &((&self.modulus - 1u32) >> 1u32)).is_one()
    }

    /// All square roots of `a` in ascending order.
    ///
    /// The result is empty when `a` is a non-residue and `[0]` when `a ≡ 0`. Callers that need a
    /// root should report the empty case as [`Error::NoSquareRoot`].
    pub fn sqrt(&self, a: &BigUint) -> Vec<BigUint> {
        let a = a % &self.modulus;
        if a.is_zero() {
            return vec![a];
        }
        if !self.is_square(&a) {
            return vec![];
        }

        // odd modulus with bit 1 set means m ≡ 3 (mod 4)
        let root = if self.modulus.bit(1) {
            self.pow(&a, &((&self.modulus + 1u32) >> 2u32))
        } else {
            match self.tonelli_shanks(&a) {
                Some(root) => root,
                None => return vec![],
            }
        };
        // only a composite modulus gets here with a wrong root
        if self.mul(&root, &root) != a {
            return vec![];
        }
        let other = self.neg(&root);

        let mut roots = vec![root, other];
        roots.sort();
        roots
    }

    /// `a` must be a non-zero residue. Returns `None` if the iteration doesn't converge, which
    /// only happens when the modulus is not prime.
    fn tonelli_shanks(&self, a: &BigUint) -> Option<BigUint> {
        let m_minus_one = &self.modulus - 1u32;
        let s = m_minus_one.trailing_zeros().unwrap_or(0);
        let odd = &m_minus_one >> s;

        let mut z = BigUint::from(2u32);
        while self.is_square(&z) {
            z += 1u32;
            if z >= self.modulus {
                return None;
            }
        }

        let mut order = s;
        let mut c = self.pow(&z, &odd);
        let mut t = self.pow(a, &odd);
        let mut r = self.pow(a, &((&odd + 1u32) >> 1u32));

        while !t.is_one() {
            let mut i = 0u64;
            let mut t_pow = t.clone();
            while !t_pow.is_one() {
                t_pow = self.mul(&t_pow, &t_pow);
                i += 1;
                if i >= order {
                    return None;
                }
            }
            let b = self.pow(&c, &(BigUint::one() << (order - i - 1)));
            order = i;
            c = self.mul(&b, &b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hex;
    use proptest::prelude::*;

    fn small(m: u32) -> PrimeField {
        PrimeField::new(BigUint::from(m)).unwrap()
    }

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    fn bn254_p() -> PrimeField {
        PrimeField::new(
            hex::decode_uint("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47")
                .unwrap(),
        )
        .unwrap()
    }

    fn bn254_q() -> PrimeField {
        PrimeField::new(
            hex::decode_uint("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001")
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_even_and_tiny_moduli() {
        assert!(PrimeField::new(n(4)).is_err());
        assert!(PrimeField::new(n(2)).is_err());
        assert!(PrimeField::new(n(1)).is_err());
        assert!(PrimeField::new(n(3)).is_ok());
    }

    #[test]
    fn basic_ops_wrap_around() {
        let f = small(13);
        assert_eq!(f.add(&n(7), &n(9)), n(3));
        assert_eq!(f.sub(&n(2), &n(5)), n(10));
        assert_eq!(f.sub(&n(5), &n(2)), n(3));
        assert_eq!(f.mul(&n(5), &n(8)), n(1));
        assert_eq!(f.neg(&n(0)), n(0));
        assert_eq!(f.neg(&n(1)), n(12));
        assert_eq!(f.reduce(&BigInt::from(-1)), n(12));
        assert_eq!(f.reduce(&BigInt::from(-26)), n(0));
        assert_eq!(f.reduce(&BigInt::from(27)), n(1));
    }

    #[test]
    fn inverse_of_zero_is_an_error() {
        let f = small(13);
        assert_eq!(f.inverse(&n(0)), Err(Error::DivisionByZero));
        assert_eq!(f.inverse(&n(13)), Err(Error::DivisionByZero));
        assert_eq!(f.inverse(&n(5)), Ok(n(8)));
    }

    #[test]
    fn sqrt_small_primes() {
        // 13 ≡ 1 (mod 4), 17 - 1 = 2^4 exercises several Tonelli-Shanks rounds
        assert_eq!(small(13).sqrt(&n(10)), vec![n(6), n(7)]);
        assert_eq!(small(17).sqrt(&n(2)), vec![n(6), n(11)]);
        assert_eq!(small(17).sqrt(&n(3)), Vec::<BigUint>::new());
        // 11 ≡ 3 (mod 4) uses the closed form
        assert_eq!(small(11).sqrt(&n(5)), vec![n(4), n(7)]);
        assert_eq!(small(11).sqrt(&n(2)), Vec::<BigUint>::new());
        assert_eq!(small(11).sqrt(&n(0)), vec![n(0)]);
    }

    #[test]
    fn sqrt_terminates_on_composite_moduli() {
        let nine = PrimeField::new(n(9)).unwrap();
        assert_eq!(nine.sqrt(&n(8)), Vec::<BigUint>::new());
        for m in (9u32..200).step_by(2) {
            let f = PrimeField::new(n(m)).unwrap();
            for a in 0..m {
                for root in f.sqrt(&n(a)) {
                    assert_eq!(f.mul(&root, &root), n(a));
                }
            }
        }
    }

    #[test]
    fn three_has_no_root_mod_bn254_p() {
        // so no point on y² = x³ + 3 has x = 0
        assert!(bn254_p().sqrt(&n(3)).is_empty());
        assert!(!bn254_p().is_square(&n(3)));
    }

    #[test]
    fn minus_three_has_two_roots_mod_bn254_q() {
        let q = bn254_q();
        let minus_three = q.reduce(&BigInt::from(-3));
        let roots = q.sqrt(&minus_three);
        assert_eq!(roots.len(), 2);
        for root in roots {
            assert_eq!(q.mul(&root, &root), minus_three);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn sqrt_of_square_contains_root(bytes in proptest::collection::vec(any::<u8>(), 32)) {
            for f in [bn254_p(), bn254_q()] {
                let a = BigUint::from_bytes_be(&bytes) % f.modulus();
                let square = f.mul(&a, &a);
                let roots = f.sqrt(&square);
                prop_assert!(roots.contains(&a));
                for root in roots {
                    prop_assert_eq!(f.mul(&root, &root), square.clone());
                }
            }
        }

        #[test]
        fn inverse_round_trips(bytes in proptest::collection::vec(any::<u8>(), 32)) {
            let f = bn254_p();
            let a = BigUint::from_bytes_be(&bytes) % f.modulus();
            prop_assume!(!a.is_zero());
            let inv = f.inverse(&a).unwrap();
            prop_assert!(f.mul(&a, &inv).is_one());
        }
    }
}
