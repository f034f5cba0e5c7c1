use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::fields::{Field, Fr};
use crate::utils;

/// Polynomial over the scalar field, `coeffs[i]` is the coefficient of x^i.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Polynomial {
    coeffs: Vec<Fr>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    /// The unique polynomial of degree < `points.len()` through every point.
    pub fn interpolate(points: &[(Fr, Fr)]) -> Result<Self> {
        let raw: Vec<(BigUint, BigUint)> = points
            .iter()
            .map(|(x, y)| (x.value().clone(), y.value().clone()))
            .collect();
        let coeffs = utils::lagrange_interpolation(&raw, Fr::modulus())?;
        Ok(Self::from_biguints(coeffs))
    }

    fn from_biguints(coeffs: Vec<BigUint>) -> Self {
        Self::new(coeffs.into_iter().map(Fr::new).collect())
    }

    fn to_biguints(&self) -> Vec<BigUint> {
        self.coeffs.iter().map(|c| c.value().clone()).collect()
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    /// Number of coefficients, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Horner evaluation at `x`.
    pub fn evaluate_scalar(&self, x: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * x + coeff)
    }

    /// Dot product with precomputed powers `[x^0, x^1, ...]`. Extra powers are
    /// ignored; too few is an error.
    pub fn evaluate_precomputed(&self, powers: &[Fr]) -> Result<Fr> {
        if powers.len() < self.coeffs.len() {
            return Err(Error::SizeMismatch {
                expected: self.coeffs.len(),
                actual: powers.len(),
            });
        }
        Ok(self
            .coeffs
            .iter()
            .zip(powers)
            .fold(Fr::zero(), |acc, (coeff, power)| acc + coeff.clone() * power))
    }

    /// `[x^0, x^1, ..., x^(len - 1)]`
    pub fn powers(x: &Fr, len: usize) -> Vec<Fr> {
        let mut powers = Vec::with_capacity(len);
        let mut current = Fr::one();
        for _ in 0..len {
            powers.push(current.clone());
            current *= x.clone();
        }
        powers
    }

    /// `(P(x) - y) / (x - a)`. Exact when `y = P(a)`.
    pub fn quotient(&self, (a, y): &(Fr, Fr)) -> Self {
        let mut shifted = self.to_biguints();
        if let Some(constant) = shifted.first_mut() {
            *constant = (self.coeffs[0].clone() - y).into_biguint();
        }
        Self::from_biguints(utils::polynomial_division(&shifted, a.value()))
    }
}

impl From<Vec<Fr>> for Polynomial {
    fn from(coeffs: Vec<Fr>) -> Self {
        Self::new(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn poly(values: &[u64]) -> Polynomial {
        Polynomial::new(values.iter().map(|v| Fr::from_u64(*v)).collect())
    }

    #[test]
    fn test_evaluate_scalar() {
        // 3 + 2x + x^2 at x = 5
        let p = poly(&[3, 2, 1]);
        assert_eq!(p.evaluate_scalar(&Fr::from_u64(5)), Fr::from_u64(38));
        assert_eq!(Polynomial::default().evaluate_scalar(&Fr::from_u64(5)), Fr::zero());
    }

    #[test]
    fn test_evaluate_precomputed_matches_scalar() {
        let p = poly(&[9, 0, 4, 7]);
        let x = Fr::from_u64(11);
        let powers = Polynomial::powers(&x, 6);
        assert_eq!(p.evaluate_precomputed(&powers).unwrap(), p.evaluate_scalar(&x));
    }

    #[test]
    fn test_evaluate_precomputed_too_few_powers() {
        let p = poly(&[1, 2, 3]);
        let powers = Polynomial::powers(&Fr::from_u64(2), 2);
        assert_eq!(
            p.evaluate_precomputed(&powers),
            Err(Error::SizeMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_degree() {
        assert_eq!(poly(&[1, 2, 0]).degree(), Some(1));
        assert_eq!(poly(&[0, 0]).degree(), None);
        assert_eq!(poly(&[0, 0]).len(), 2);
    }

    #[test]
    fn test_quotient_by_root() {
        // x^2 - 1 = (x - 1)(x + 1)
        let p = Polynomial::new(vec![-Fr::one(), Fr::zero(), Fr::one()]);
        let q = p.quotient(&(Fr::one(), Fr::zero()));
        assert_eq!(q, poly(&[1, 1]));
    }

    #[test]
    fn test_interpolate_rejects_duplicate_x() {
        let points = vec![
            (Fr::from_u64(2), Fr::from_u64(1)),
            (Fr::from_u64(2), Fr::from_u64(5)),
        ];
        assert_eq!(
            Polynomial::interpolate(&points),
            Err(Error::DuplicateInterpolationPoint(BigUint::from(2u32)))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_interpolate_round_trip(ys in prop::collection::vec(any::<u64>(), 1..17)) {
            let points: Vec<(Fr, Fr)> = ys
                .iter()
                .enumerate()
                .map(|(i, y)| (Fr::from_u64(i as u64), Fr::from_u64(*y)))
                .collect();
            let p = Polynomial::interpolate(&points).unwrap();
            for (x, y) in &points {
                prop_assert_eq!(&p.evaluate_scalar(x), y);
            }
        }

        #[test]
        fn prop_quotient_times_divisor(
            coeffs in prop::collection::vec(any::<u64>(), 1..12),
            a in any::<u64>(),
            s in any::<u64>(),
        ) {
            let p = poly(&coeffs);
            let a = Fr::from_u64(a);
            let y = p.evaluate_scalar(&a);
            let q = p.quotient(&(a.clone(), y.clone()));
            prop_assert_eq!(q.len() + 1, p.len());

            let s = Fr::from_u64(s);
            let lhs = q.evaluate_scalar(&s) * (s.clone() - &a);
            prop_assert_eq!(lhs, p.evaluate_scalar(&s) - y);
        }
    }
}
