use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use super::Field;
use crate::params;

/// A prime modulus known at the type level.
pub trait Modulus: Copy + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    /// Human readable name used in debug output.
    const NAME: &'static str;

    fn modulus() -> &'static BigUint;
}

/// The BLS12-381 base field prime q.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BaseModulus;

impl Modulus for BaseModulus {
    const NAME: &'static str = "Fq";

    fn modulus() -> &'static BigUint {
        &params::Q
    }
}

/// The BLS12-381 group order n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScalarModulus;

impl Modulus for ScalarModulus {
    const NAME: &'static str = "Fr";

    fn modulus() -> &'static BigUint {
        &params::N
    }
}

/// Integer modulo the prime `M::modulus()`, always kept in `[0, modulus)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fp<M: Modulus> {
    value: BigUint,
    _modulus: PhantomData<M>,
}

pub type Fq = Fp<BaseModulus>;
pub type Fr = Fp<ScalarModulus>;

impl<M: Modulus> Fp<M> {
    pub fn new(value: BigUint) -> Self {
        let modulus = M::modulus();
        let value = if &value < modulus { value } else { value % modulus };
        Self {
            value,
            _modulus: PhantomData,
        }
    }

    /// Reduces a signed integer into the field.
    pub fn from_bigint(value: &BigInt) -> Self {
        let modulus = BigInt::from(M::modulus().clone());
        let reduced = ((value % &modulus) + &modulus) % &modulus;
        Self::new(reduced.magnitude().clone())
    }

    /// Interprets big-endian bytes as an integer and reduces it.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    pub fn modulus() -> &'static BigUint {
        M::modulus()
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        let sum = &self.value + &rhs.value;
        let modulus = M::modulus();
        let value = if &sum >= modulus { sum - modulus } else { sum };
        Self {
            value,
            _modulus: PhantomData,
        }
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            M::modulus() - &rhs.value + &self.value
        };
        Self {
            value,
            _modulus: PhantomData,
        }
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self {
            value: (&self.value * &rhs.value) % M::modulus(),
            _modulus: PhantomData,
        }
    }

    fn neg_ref(&self) -> Self {
        if self.value.is_zero() {
            return self.clone();
        }
        Self {
            value: M::modulus() - &self.value,
            _modulus: PhantomData,
        }
    }
}

impl_field_ops!([M: Modulus] Fp<M>);

impl<M: Modulus> Field for Fp<M> {
    const DEGREE: usize = 1;

    fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            _modulus: PhantomData,
        }
    }

    fn one() -> Self {
        Self {
            value: BigUint::one(),
            _modulus: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Fermat inversion: x^(p - 2).
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let modulus = M::modulus();
        let exponent = modulus - 2u32;
        Some(Self {
            value: self.value.modpow(&exponent, modulus),
            _modulus: PhantomData,
        })
    }

    fn frobenius(&self, _power: usize) -> Self {
        self.clone()
    }

    fn pow(&self, exp: &BigUint) -> Self {
        Self {
            value: self.value.modpow(exp, M::modulus()),
            _modulus: PhantomData,
        }
    }
}

impl<M: Modulus> From<u64> for Fp<M> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<M: Modulus> From<BigUint> for Fp<M> {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl<M: Modulus> fmt::Debug for Fp<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", M::NAME, self.value)
    }
}

impl<M: Modulus> fmt::Display for Fp<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fq_from_limbs(limbs: [u64; 6]) -> Fq {
        Fq::new(limbs.iter().rev().fold(BigUint::zero(), |acc, limb| (acc << 64) + *limb))
    }

    #[test]
    fn test_new_reduces_modulo_q() {
        let q = Fq::modulus().clone();
        assert_eq!(Fq::new(q.clone()), Fq::zero());
        assert_eq!(Fq::new(q + 5u32), Fq::from_u64(5));
    }

    #[test]
    fn test_from_bigint_handles_negative_values() {
        let minus_one = Fr::from_bigint(&BigInt::from(-1));
        assert_eq!(minus_one, -Fr::one());
        assert_eq!(minus_one + Fr::one(), Fr::zero());
    }

    #[test]
    fn test_inverse_of_zero_is_none() {
        assert!(Fq::zero().inverse().is_none());
        assert!(Fr::zero().inverse().is_none());
    }

    #[test]
    fn test_negation_of_zero_stays_canonical() {
        assert_eq!(-Fq::zero(), Fq::zero());
        assert!((-Fq::zero()).value().is_zero());
    }

    #[test]
    fn test_subtraction_wraps_around() {
        let a = Fq::from_u64(3);
        let b = Fq::from_u64(10);
        assert_eq!(a.clone() - &b, -Fq::from_u64(7));
        assert_eq!((a - b) + Fq::from_u64(7), Fq::zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_field_axioms(a in any::<[u64; 6]>(), b in any::<[u64; 6]>(), c in any::<[u64; 6]>()) {
            let (a, b, c) = (fq_from_limbs(a), fq_from_limbs(b), fq_from_limbs(c));
            prop_assert_eq!(a.clone() + &b, b.clone() + &a);
            prop_assert_eq!(a.clone() * &b, b.clone() * &a);
            prop_assert_eq!((a.clone() + &b) * &c, a.clone() * &c + b.clone() * &c);
            prop_assert_eq!(a.clone() - &a, Fq::zero());
        }

        #[test]
        fn prop_inverse(a in any::<[u64; 6]>()) {
            let a = fq_from_limbs(a);
            prop_assume!(!a.is_zero());
            let inv = a.inverse().unwrap();
            prop_assert_eq!(a.clone() * &inv, Fq::one());
            prop_assert_eq!(a.checked_div(&a).unwrap(), Fq::one());
        }
    }
}
