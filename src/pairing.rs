/// Ate Pairing
///
/// `e: G1 x G2 -> GT` on BLS12-381. The Miller loop runs over the bits of
/// |x| for the curve seed x, keeping the running point on the twist and
/// untwisting only to evaluate lines at P. The loop output is then raised to
/// (q^12 - 1) / n through frobenius maps and one exponentiation by
/// (q^4 - q^2 + 1) / n.

use num_bigint::BigUint;
use num_traits::One;
use tracing::instrument;

use crate::ec::{untwist, G1Point, G2Point};
use crate::error::{Error, Result};
use crate::fields::{Field, Fq12};
use crate::params::CurveParams;

/// Big-endian binary digits of `value`, no leading zeros.
pub fn int_to_bits(value: &BigUint) -> Vec<bool> {
    (0..value.bits()).rev().map(|i| value.bit(i)).collect()
}

fn lift(p: &G1Point) -> (Fq12, Fq12) {
    (Fq12::from_fq(&p.x), Fq12::from_fq(&p.y))
}

/// Tangent line at R, evaluated at P.
fn double_line_eval(r: &G2Point, p: &G1Point) -> Result<Fq12> {
    let r12 = untwist(r);
    let (px, py) = lift(p);

    let numerator = r12.x.square() * Fq12::from_u64(3) + &r12.ec.a;
    let slope = numerator.checked_div(&r12.y.double())?;
    let intercept = r12.y.clone() - slope.clone() * &r12.x;
    Ok(py - px * slope - intercept)
}

/// Line through R and Q, evaluated at P. Vertical when R = -Q.
fn add_line_eval(r: &G2Point, q: &G2Point, p: &G1Point) -> Result<Fq12> {
    let r12 = untwist(r);
    let q12 = untwist(q);
    let (px, py) = lift(p);

    if r12 == q12.negate() {
        return Ok(px - r12.x);
    }
    let slope = (q12.y.clone() - &r12.y).checked_div(&(q12.x.clone() - &r12.x))?;
    let intercept = (q12.y.clone() * &r12.x - r12.y.clone() * &q12.x)
        .checked_div(&(r12.x.clone() - &q12.x))?;
    Ok(py - px * slope - intercept)
}

pub fn miller_loop(p: &G1Point, q: &G2Point, loop_count: &BigUint) -> Result<Fq12> {
    let bits = int_to_bits(loop_count);
    let mut f = Fq12::one();
    let mut r = q.clone();

    for bit in bits.into_iter().skip(1) {
        f = f.square() * double_line_eval(&r, p)?;
        r = r.double();
        if bit {
            f *= add_line_eval(&r, q, p)?;
            r = r.add(q)?;
        }
    }
    Ok(f)
}

/// Maps a Miller loop output to the order-n subgroup of Fq12*.
pub fn final_exponentiation<F: Field>(f: &Fq12, ec: &CurveParams<F>) -> Result<Fq12> {
    let q = &ec.q;
    if ec.k == 12 {
        let q2 = q * q;
        let hard = (&q2 * &q2 - &q2 + 1u32) / &ec.n;
        let a = f.pow(&hard);
        let a = a.frobenius(2) * &a;
        return a.frobenius(6).checked_div(&a);
    }
    let exponent = (q.pow(ec.k) - BigUint::one()) / &ec.n;
    Ok(f.pow(&exponent))
}

/// Ate pairing of a G1 and a G2 point. Either input at infinity maps to one.
#[instrument(level = "trace", skip_all)]
pub fn tate_pairing(p: &G1Point, q: &G2Point) -> Result<Fq12> {
    if !p.is_on_curve() || !q.is_on_curve() {
        return Err(Error::NotOnCurve);
    }
    if p.is_infinity() || q.is_infinity() {
        return Ok(Fq12::one());
    }
    let loop_count = p.ec.x.magnitude();
    let f = miller_loop(p, q, loop_count)?;
    final_exponentiation(&f, p.ec)
}
