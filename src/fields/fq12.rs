use std::fmt;

use once_cell::sync::Lazy;

use super::fq6::nonresidue_power;
use super::{Field, Fq, Fq2, Fq6};

/// `c0 + c1 * w` with `w^2 = v`. The pairing target group lives here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fq12 {
    pub c0: Fq6,
    pub c1: Fq6,
}

/// xi^((q^i - 1) / 6) for i in 0..12, the image of w under the i-th frobenius
/// divided by w.
static FROBENIUS_COEFFS: Lazy<Vec<Fq2>> =
    Lazy::new(|| (0..12).map(|i| nonresidue_power(i, 6)).collect());

impl Fq12 {
    pub fn new(c0: Fq6, c1: Fq6) -> Self {
        Self { c0, c1 }
    }

    /// The element w^2 is reduced by.
    pub fn non_residue() -> Fq6 {
        Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero())
    }

    pub fn from_fq(value: &Fq) -> Self {
        Self::from_fq2(&Fq2::from_fq(value.clone()))
    }

    pub fn from_fq2(value: &Fq2) -> Self {
        Self::new(Fq6::from_fq2(value.clone()), Fq6::zero())
    }

    /// w^2, as used by the untwisting isomorphism.
    pub fn w_squared() -> Self {
        Self::new(Self::non_residue(), Fq6::zero())
    }

    /// w^3, as used by the untwisting isomorphism.
    pub fn w_cubed() -> Self {
        Self::new(Fq6::zero(), Self::non_residue())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.c0.clone(), -&self.c1)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::new(self.c0.clone() + &rhs.c0, self.c1.clone() + &rhs.c1)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self::new(self.c0.clone() - &rhs.c0, self.c1.clone() - &rhs.c1)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        let v0 = &self.c0 * &rhs.c0;
        let v1 = &self.c1 * &rhs.c1;
        let cross = (&self.c0 + &self.c1) * (&rhs.c0 + &rhs.c1);
        Self::new(v0.clone() + v1.mul_by_nonresidue(), cross - v0 - v1)
    }

    fn neg_ref(&self) -> Self {
        Self::new(-&self.c0, -&self.c1)
    }
}

impl_field_ops!([] Fq12);

impl Field for Fq12 {
    const DEGREE: usize = 12;

    fn zero() -> Self {
        Self::new(Fq6::zero(), Fq6::zero())
    }

    fn one() -> Self {
        Self::new(Fq6::one(), Fq6::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn from_u64(value: u64) -> Self {
        Self::new(Fq6::from_u64(value), Fq6::zero())
    }

    /// (c0 - c1 w) / (c0^2 - v c1^2)
    fn inverse(&self) -> Option<Self> {
        let norm = self.c0.square() - self.c1.square().mul_by_nonresidue();
        let norm_inv = norm.inverse()?;
        Some(Self::new(&self.c0 * &norm_inv, -(&self.c1 * &norm_inv)))
    }

    fn frobenius(&self, power: usize) -> Self {
        let power = power % Self::DEGREE;
        if power == 0 {
            return self.clone();
        }
        Self::new(
            self.c0.frobenius(power),
            self.c1.frobenius(power).mul_by_fq2(&FROBENIUS_COEFFS[power]),
        )
    }
}

impl fmt::Debug for Fq12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq12({:?} + {:?} * w)", self.c0, self.c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fq12 {
        let fq2 = |a: u64, b: u64| Fq2::new(Fq::from_u64(a), Fq::from_u64(b));
        Fq12::new(
            Fq6::new(fq2(1, 2), fq2(3, 4), fq2(5, 6)),
            Fq6::new(fq2(7, 8), fq2(9, 10), fq2(11, 12)),
        )
    }

    #[test]
    fn test_w_squared_is_v() {
        let w = Fq12::new(Fq6::zero(), Fq6::one());
        assert_eq!(w.square(), Fq12::w_squared());
        assert_eq!(w.square() * &w, Fq12::w_cubed());
    }

    #[test]
    fn test_inverse() {
        let x = sample();
        assert_eq!(x.clone() * x.inverse().unwrap(), Fq12::one());
        assert!(Fq12::zero().inverse().is_none());
    }

    #[test]
    fn test_frobenius_matches_pow_q() {
        let x = sample();
        let q = Fq::modulus();
        let xq = x.pow(q);
        assert_eq!(x.frobenius(1), xq);
        assert_eq!(x.frobenius(2), xq.pow(q));
        assert_eq!(x.frobenius(12), x);
    }

    #[test]
    fn test_frobenius_six_is_conjugation() {
        let x = sample();
        assert_eq!(x.frobenius(6), x.conjugate());
    }

    #[test]
    fn test_frobenius_is_multiplicative() {
        let x = sample();
        let y = x.square() + Fq12::one();
        assert_eq!((x.clone() * &y).frobenius(3), x.frobenius(3) * y.frobenius(3));
    }
}
