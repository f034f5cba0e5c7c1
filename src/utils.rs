/// Polynomial Arithmetic Utilities
///
/// Coefficient-vector helpers over the integers modulo a prime, index = power
/// of x. These are the raw routines behind [`crate::polynomial::Polynomial`]:
///
/// - Basic arithmetic: addition, multiplication, scalar multiplication
/// - Modular inverse via the extended Euclidean algorithm
/// - Horner evaluation
/// - Synthetic division by a linear factor (x - root)
/// - O(n^2) Lagrange interpolation
///
/// Inputs are reduced modulo `prime` on entry, so callers may pass any
/// non-negative integers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::params::N;

/// Inverse of `value` modulo `modulus`.
pub fn mod_inv(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let reduced = value % modulus;
    if reduced.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let a = BigInt::from(reduced);
    let m = BigInt::from(modulus.clone());
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return Err(Error::NonInvertible {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    let inverse = egcd.x.mod_floor(&m);
    Ok(inverse.magnitude().clone())
}

/// Polynomial addition modulo `prime`
pub fn add(p1: &[BigUint], p2: &[BigUint], prime: &BigUint) -> Vec<BigUint> {
    let mut result = vec![BigUint::zero(); std::cmp::max(p1.len(), p2.len())];

    for (i, coeff) in p1.iter().enumerate() {
        result[i] += coeff;
    }
    for (i, coeff) in p2.iter().enumerate() {
        result[i] += coeff;
    }

    result.into_iter().map(|c| c % prime).collect()
}

/// Polynomial multiplication modulo `prime`
pub fn mul(p1: &[BigUint], p2: &[BigUint], prime: &BigUint) -> Vec<BigUint> {
    if p1.is_empty() || p2.is_empty() {
        return vec![];
    }

    let mut result = vec![BigUint::zero(); p1.len() + p2.len() - 1];

    for (i, coeff1) in p1.iter().enumerate() {
        for (j, coeff2) in p2.iter().enumerate() {
            result[i + j] = (&result[i + j] + coeff1 * coeff2) % prime;
        }
    }

    result
}

/// Multiply polynomial by scalar value
pub fn scalar_mul(poly: &[BigUint], scalar: &BigUint, prime: &BigUint) -> Vec<BigUint> {
    poly.iter().map(|coeff| (coeff * scalar) % prime).collect()
}

/// Evaluate polynomial at a given point using Horner's method
pub fn evaluate(poly: &[BigUint], point: &BigUint, prime: &BigUint) -> BigUint {
    poly.iter()
        .rev()
        .fold(BigUint::zero(), |acc, coeff| (acc * point + coeff) % prime)
}

/// Divides `coeffs` by (x - root). Returns the quotient and the remainder,
/// which equals the polynomial evaluated at `root`.
pub fn synthetic_division(
    coeffs: &[BigUint],
    root: &BigUint,
    prime: &BigUint,
) -> (Vec<BigUint>, BigUint) {
    if coeffs.is_empty() {
        return (vec![], BigUint::zero());
    }

    let root = root % prime;
    let mut quotient = vec![BigUint::zero(); coeffs.len() - 1];
    let mut carry = BigUint::zero();

    for i in (0..coeffs.len()).rev() {
        carry = (&carry * &root + &coeffs[i]) % prime;
        if i > 0 {
            quotient[i - 1] = carry.clone();
        }
    }

    (quotient, carry)
}

/// Quotient of `coeffs / (x - divisor_root)` modulo the group order n.
/// The remainder is dropped: callers zero the polynomial at the root first.
pub fn polynomial_division(coeffs: &[BigUint], divisor_root: &BigUint) -> Vec<BigUint> {
    synthetic_division(coeffs, divisor_root, &N).0
}

/// Lagrange interpolation through `(x, y)` points modulo `prime`.
/// Reconstructs the unique polynomial of degree < n passing through all points.
pub fn lagrange_interpolation(
    points: &[(BigUint, BigUint)],
    prime: &BigUint,
) -> Result<Vec<BigUint>> {
    if points.is_empty() {
        return Ok(vec![]);
    }

    let xs: Vec<BigUint> = points.iter().map(|(x, _)| x % prime).collect();

    // Check for duplicate points
    for i in 0..xs.len() {
        for j in i + 1..xs.len() {
            if xs[i] == xs[j] {
                return Err(Error::DuplicateInterpolationPoint(xs[i].clone()));
            }
        }
    }

    // prod (x - x_i); each basis numerator is this divided by one factor
    let mut master = vec![BigUint::one()];
    for x in &xs {
        master = mul(&master, &[(prime - x) % prime, BigUint::one()], prime);
    }

    let mut result = vec![BigUint::zero(); points.len()];

    for (x, (_, y)) in xs.iter().zip(points) {
        let (numerator, _) = synthetic_division(&master, x, prime);
        let denominator = evaluate(&numerator, x, prime);
        let scale = (y % prime) * mod_inv(&denominator, prime)? % prime;
        result = add(&result, &scalar_mul(&numerator, &scale, prime), prime);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|v| BigUint::from(*v)).collect()
    }

    #[test]
    fn test_mod_inv() {
        let p = BigUint::from(97u32);
        let inv = mod_inv(&BigUint::from(5u32), &p).unwrap();
        assert_eq!((inv * 5u32) % &p, BigUint::one());

        let n = &*N;
        let inv = mod_inv(&(n - 1u32), n).unwrap();
        assert_eq!(inv, n - 1u32);
    }

    #[test]
    fn test_mod_inv_failures() {
        let p = BigUint::from(97u32);
        assert_eq!(mod_inv(&BigUint::zero(), &p), Err(Error::DivisionByZero));
        assert_eq!(mod_inv(&BigUint::from(194u32), &p), Err(Error::DivisionByZero));

        let composite = BigUint::from(12u32);
        assert_eq!(
            mod_inv(&BigUint::from(8u32), &composite),
            Err(Error::NonInvertible {
                value: BigUint::from(8u32),
                modulus: composite.clone(),
            })
        );
    }

    #[test]
    fn test_synthetic_division() {
        let p = BigUint::from(101u32);
        // x^2 + 3x + 2 = (x + 1)(x + 2)
        let (q, r) = synthetic_division(&big(&[2, 3, 1]), &BigUint::from(100u32), &p);
        assert_eq!(q, big(&[2, 1]));
        assert!(r.is_zero());

        // x^2 + 1 at x = 3 leaves 10
        let (q, r) = synthetic_division(&big(&[1, 0, 1]), &BigUint::from(3u32), &p);
        assert_eq!(q, big(&[3, 1]));
        assert_eq!(r, BigUint::from(10u32));
    }

    #[test]
    fn test_synthetic_division_of_constant() {
        let p = BigUint::from(101u32);
        let (q, r) = synthetic_division(&big(&[7]), &BigUint::from(4u32), &p);
        assert!(q.is_empty());
        assert_eq!(r, BigUint::from(7u32));
    }

    #[test]
    fn test_interpolation_small_field() {
        let p = BigUint::from(101u32);
        let points = vec![
            (BigUint::from(1u32), BigUint::from(6u32)),
            (BigUint::from(2u32), BigUint::from(11u32)),
            (BigUint::from(3u32), BigUint::from(18u32)),
        ];
        // x^2 + 2x + 3
        assert_eq!(lagrange_interpolation(&points, &p).unwrap(), big(&[3, 2, 1]));
    }

    #[test]
    fn test_interpolation_rejects_duplicates() {
        let p = BigUint::from(101u32);
        let points = vec![
            (BigUint::from(4u32), BigUint::from(1u32)),
            (BigUint::from(105u32), BigUint::from(2u32)),
        ];
        assert_eq!(
            lagrange_interpolation(&points, &p),
            Err(Error::DuplicateInterpolationPoint(BigUint::from(4u32)))
        );
    }

    #[test]
    fn test_interpolation_empty() {
        assert!(lagrange_interpolation(&[], &N).unwrap().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_interpolation_reproduces_points(ys in prop::collection::vec(any::<u64>(), 1..12)) {
            let points: Vec<(BigUint, BigUint)> = ys
                .iter()
                .enumerate()
                .map(|(i, y)| (BigUint::from(i as u64 * 7 + 1), BigUint::from(*y)))
                .collect();
            let coeffs = lagrange_interpolation(&points, &N).unwrap();
            prop_assert_eq!(coeffs.len(), points.len());
            for (x, y) in &points {
                prop_assert_eq!(&evaluate(&coeffs, x, &N), y);
            }
        }

        #[test]
        fn prop_division_is_exact(
            coeffs in prop::collection::vec(any::<u64>(), 2..10),
            root in any::<u64>(),
            samples in prop::collection::vec(any::<u64>(), 3),
        ) {
            let n = &*N;
            let mut poly: Vec<BigUint> = coeffs.iter().map(|c| BigUint::from(*c)).collect();
            let root = BigUint::from(root);
            let y = evaluate(&poly, &root, n);
            poly[0] = (&poly[0] + n - &y) % n;

            let quotient = polynomial_division(&poly, &root);
            let divisor = vec![(n - &root) % n, BigUint::one()];
            let product = mul(&quotient, &divisor, n);
            prop_assert_eq!(&product, &poly);

            for s in samples {
                let s = BigUint::from(s);
                let lhs = evaluate(&quotient, &s, n) * ((&s + n - &root) % n) % n;
                prop_assert_eq!(lhs, evaluate(&poly, &s, n));
            }
        }
    }
}
