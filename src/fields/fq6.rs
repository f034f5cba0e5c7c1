use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

use super::{Field, Fq, Fq2};

/// `c0 + c1 * v + c2 * v^2` with `v^3 = 1 + u`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fq6 {
    pub c0: Fq2,
    pub c1: Fq2,
    pub c2: Fq2,
}

/// xi^((q^power - 1) / divisor) for xi = 1 + u. The exponent is reduced modulo
/// q^2 - 1, the order of the Fq2 multiplicative group.
pub(super) fn nonresidue_power(power: usize, divisor: u32) -> Fq2 {
    let q = Fq::modulus();
    let group_order = q * q - BigUint::one();
    let exponent = (q.pow(power as u32) - BigUint::one()) / divisor;
    Fq2::new(Fq::one(), Fq::one()).pow(&(exponent % group_order))
}

/// (xi^((q^i - 1) / 3), xi^(2 (q^i - 1) / 3)) for i in 0..6.
static FROBENIUS_COEFFS: Lazy<Vec<(Fq2, Fq2)>> = Lazy::new(|| {
    (0..6)
        .map(|i| {
            let c1 = nonresidue_power(i, 3);
            let c2 = c1.square();
            (c1, c2)
        })
        .collect()
});

impl Fq6 {
    pub fn new(c0: Fq2, c1: Fq2, c2: Fq2) -> Self {
        Self { c0, c1, c2 }
    }

    /// The element v^3 is reduced by.
    pub fn non_residue() -> Fq2 {
        Fq2::new(Fq::one(), Fq::one())
    }

    pub fn from_fq2(c0: Fq2) -> Self {
        Self::new(c0, Fq2::zero(), Fq2::zero())
    }

    pub fn mul_by_fq2(&self, rhs: &Fq2) -> Self {
        Self::new(
            self.c0.clone() * rhs,
            self.c1.clone() * rhs,
            self.c2.clone() * rhs,
        )
    }

    /// Multiplication by `v`, the non-residue of the quadratic extension on top.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(
            self.c2.mul_by_nonresidue(),
            self.c0.clone(),
            self.c1.clone(),
        )
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::new(
            self.c0.clone() + &rhs.c0,
            self.c1.clone() + &rhs.c1,
            self.c2.clone() + &rhs.c2,
        )
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self::new(
            self.c0.clone() - &rhs.c0,
            self.c1.clone() - &rhs.c1,
            self.c2.clone() - &rhs.c2,
        )
    }

    /// Karatsuba for cubic extensions: six Fq2 products instead of nine.
    fn mul_ref(&self, rhs: &Self) -> Self {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let (b0, b1, b2) = (&rhs.c0, &rhs.c1, &rhs.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        let c0 = ((a1 + a2) * (b1 + b2) - &v1 - &v2).mul_by_nonresidue() + &v0;
        let c1 = (a0 + a1) * (b0 + b1) - &v0 - &v1 + v2.mul_by_nonresidue();
        let c2 = (a0 + a2) * (b0 + b2) - &v0 + &v1 - &v2;

        Self::new(c0, c1, c2)
    }

    fn neg_ref(&self) -> Self {
        Self::new(-&self.c0, -&self.c1, -&self.c2)
    }
}

impl_field_ops!([] Fq6);

impl Field for Fq6 {
    const DEGREE: usize = 6;

    fn zero() -> Self {
        Self::new(Fq2::zero(), Fq2::zero(), Fq2::zero())
    }

    fn one() -> Self {
        Self::new(Fq2::one(), Fq2::zero(), Fq2::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn from_u64(value: u64) -> Self {
        Self::from_fq2(Fq2::from_u64(value))
    }

    fn inverse(&self) -> Option<Self> {
        let (c0, c1, c2) = (&self.c0, &self.c1, &self.c2);

        let s0 = c0.square() - (c1 * c2).mul_by_nonresidue();
        let s1 = c2.square().mul_by_nonresidue() - c0 * c1;
        let s2 = c1.square() - c0 * c2;

        let norm = c0 * &s0 + (c2 * &s1 + c1 * &s2).mul_by_nonresidue();
        let norm_inv = norm.inverse()?;

        Some(Self::new(s0 * &norm_inv, s1 * &norm_inv, s2 * &norm_inv))
    }

    fn frobenius(&self, power: usize) -> Self {
        let power = power % Self::DEGREE;
        if power == 0 {
            return self.clone();
        }
        let (coeff1, coeff2) = &FROBENIUS_COEFFS[power];
        Self::new(
            self.c0.frobenius(power),
            self.c1.frobenius(power) * coeff1,
            self.c2.frobenius(power) * coeff2,
        )
    }
}

impl fmt::Debug for Fq6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fq6({:?} + {:?} * v + {:?} * v^2)",
            self.c0, self.c1, self.c2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fq6 {
        Fq6::new(
            Fq2::new(Fq::from_u64(1), Fq::from_u64(2)),
            Fq2::new(Fq::from_u64(3), Fq::from_u64(4)),
            Fq2::new(Fq::from_u64(5), Fq::from_u64(6)),
        )
    }

    #[test]
    fn test_v_cubed_is_nonresidue() {
        let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
        let v3 = v.square() * &v;
        assert_eq!(v3, Fq6::from_fq2(Fq6::non_residue()));
    }

    #[test]
    fn test_mul_matches_mul_by_nonresidue() {
        let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
        let x = sample();
        assert_eq!(x.mul_by_nonresidue(), x * v);
    }

    #[test]
    fn test_inverse() {
        let x = sample();
        assert_eq!(x.inverse().unwrap() * &x, Fq6::one());
        assert!(Fq6::zero().inverse().is_none());
    }

    #[test]
    fn test_frobenius_matches_pow_q() {
        let x = sample();
        let q = Fq::modulus();
        assert_eq!(x.frobenius(1), x.pow(q));
        assert_eq!(x.frobenius(2), x.frobenius(1).frobenius(1));
        assert_eq!(x.frobenius(6), x);
    }

    #[test]
    fn test_zero_and_one_recurse() {
        assert!(Fq6::zero().c2.c1.is_zero());
        assert_eq!(Fq6::one().c0, Fq2::one());
        assert!(Fq6::one().c1.is_zero());
    }
}
