use std::fmt;

use super::{Field, Fq};

/// `c0 + c1 * u` with `u^2 = -1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fq2 {
    pub c0: Fq,
    pub c1: Fq,
}

impl Fq2 {
    pub fn new(c0: Fq, c1: Fq) -> Self {
        Self { c0, c1 }
    }

    /// The element u^2 is reduced by.
    pub fn non_residue() -> Fq {
        -Fq::one()
    }

    pub fn from_fq(c0: Fq) -> Self {
        Self::new(c0, Fq::zero())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.c0.clone(), -&self.c1)
    }

    pub fn mul_by_fq(&self, rhs: &Fq) -> Self {
        Self::new(self.c0.clone() * rhs, self.c1.clone() * rhs)
    }

    /// Multiplication by `1 + u`, the non-residue of the sextic extension.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(
            self.c0.clone() - &self.c1,
            self.c0.clone() + &self.c1,
        )
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::new(self.c0.clone() + &rhs.c0, self.c1.clone() + &rhs.c1)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self::new(self.c0.clone() - &rhs.c0, self.c1.clone() - &rhs.c1)
    }

    /// Karatsuba: three base field products.
    fn mul_ref(&self, rhs: &Self) -> Self {
        let v0 = self.c0.clone() * &rhs.c0;
        let v1 = self.c1.clone() * &rhs.c1;
        let cross = (self.c0.clone() + &self.c1) * (rhs.c0.clone() + &rhs.c1);
        Self::new(v0.clone() - &v1, cross - v0 - v1)
    }

    fn neg_ref(&self) -> Self {
        Self::new(-&self.c0, -&self.c1)
    }
}

impl_field_ops!([] Fq2);

impl Field for Fq2 {
    const DEGREE: usize = 2;

    fn zero() -> Self {
        Self::new(Fq::zero(), Fq::zero())
    }

    fn one() -> Self {
        Self::new(Fq::one(), Fq::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn from_u64(value: u64) -> Self {
        Self::from_fq(Fq::from_u64(value))
    }

    /// (c0 - c1 u) / (c0^2 + c1^2)
    fn inverse(&self) -> Option<Self> {
        let norm = self.c0.square() + self.c1.square();
        let norm_inv = norm.inverse()?;
        Some(self.conjugate().mul_by_fq(&norm_inv))
    }

    fn frobenius(&self, power: usize) -> Self {
        if power % 2 == 0 {
            self.clone()
        } else {
            self.conjugate()
        }
    }
}

impl fmt::Debug for Fq2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq2({:?} + {:?} * u)", self.c0, self.c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn sample() -> Fq2 {
        Fq2::new(Fq::from_u64(0xdead_beef), Fq::from_u64(0x1234_5678_9abc))
    }

    #[test]
    fn test_u_squared_is_minus_one() {
        let u = Fq2::new(Fq::zero(), Fq::one());
        assert_eq!(u.square(), Fq2::from_fq(Fq2::non_residue()));
    }

    #[test]
    fn test_inverse() {
        let x = sample();
        assert_eq!(x.clone() * x.inverse().unwrap(), Fq2::one());
        assert!(Fq2::zero().inverse().is_none());
    }

    #[test]
    fn test_frobenius_matches_pow_q() {
        let x = sample();
        let q: &BigUint = Fq::modulus();
        assert_eq!(x.frobenius(1), x.pow(q));
        assert_eq!(x.frobenius(2), x);
    }

    #[test]
    fn test_mul_by_nonresidue() {
        let xi = Fq2::new(Fq::one(), Fq::one());
        let x = sample();
        assert_eq!(x.mul_by_nonresidue(), x * xi);
    }
}
