/// Elliptic Curve Group Law
///
/// Short Weierstrass points over any field of the tower, in affine and
/// Jacobian form. Every point carries a `&'static` reference to its curve
/// record; points of different curves over the same field are rejected with
/// [`Error::TypeMismatch`], points over different fields do not type-check.
///
/// Affine arithmetic validates its operands and pays one inversion per step.
/// Jacobian arithmetic is inversion-free and backs scalar and multi-scalar
/// multiplication.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::fields::{Field, Fq, Fq12, Fq2, Fq6, Fr};
use crate::params::{self, CurveParams, GT_CURVE};

pub type G1Point = AffinePoint<Fq>;
pub type G2Point = AffinePoint<Fq2>;

fn same_curve<F: Field>(a: &'static CurveParams<F>, b: &'static CurveParams<F>) -> bool {
    std::ptr::eq(a, b) || a == b
}

#[derive(Clone)]
pub struct AffinePoint<F: Field> {
    pub x: F,
    pub y: F,
    pub infinity: bool,
    pub ec: &'static CurveParams<F>,
}

impl<F: Field> AffinePoint<F> {
    /// Builds a finite point, rejecting coordinates off the curve.
    pub fn new(x: F, y: F, ec: &'static CurveParams<F>) -> Result<Self> {
        let point = Self::new_unchecked(x, y, ec);
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve);
        }
        Ok(point)
    }

    pub fn new_unchecked(x: F, y: F, ec: &'static CurveParams<F>) -> Self {
        Self {
            x,
            y,
            infinity: false,
            ec,
        }
    }

    /// Canonical point at infinity, (0, 0) with the flag set.
    pub fn infinity(ec: &'static CurveParams<F>) -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            infinity: true,
            ec,
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    pub fn is_on_curve(&self) -> bool {
        self.infinity || self.y.square() == self.ec.rhs(&self.x)
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        if !same_curve(self.ec, other.ec) {
            return Err(Error::TypeMismatch("points belong to different curves"));
        }
        if !self.is_on_curve() || !other.is_on_curve() {
            return Err(Error::NotOnCurve);
        }
        Ok(self.add_unchecked(other))
    }

    fn add_unchecked(&self, other: &Self) -> Self {
        if self.infinity {
            return other.clone();
        }
        if other.infinity {
            return self.clone();
        }
        if self.x == other.x {
            return if self.y == other.y {
                self.double()
            } else {
                Self::infinity(self.ec)
            };
        }
        let Some(inv) = (other.x.clone() - &self.x).inverse() else {
            return Self::infinity(self.ec);
        };
        let slope = (other.y.clone() - &self.y) * inv;
        self.chord(other, slope)
    }

    /// Third intersection of the line of the given slope through `self` and
    /// `other`, reflected.
    fn chord(&self, other: &Self, slope: F) -> Self {
        let x = slope.square() - &self.x - &other.x;
        let y = slope * (self.x.clone() - &x) - &self.y;
        Self::new_unchecked(x, y, self.ec)
    }

    pub fn double(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        let Some(inv) = self.y.double().inverse() else {
            return Self::infinity(self.ec);
        };
        let slope = (self.x.square() * F::from_u64(3) + &self.ec.a) * inv;
        self.chord(self, slope)
    }

    pub fn negate(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        Self::new_unchecked(self.x.clone(), -self.y.clone(), self.ec)
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.negate())
    }

    /// `c * P` with `c` reduced modulo the group order.
    pub fn scalar_mul(&self, scalar: &BigUint) -> Self {
        self.to_jacobian().scalar_mul(scalar).to_affine()
    }

    pub fn scalar_mul_fr(&self, scalar: &Fr) -> Self {
        self.scalar_mul(scalar.value())
    }

    pub fn to_jacobian(&self) -> JacobianPoint<F> {
        if self.infinity {
            return JacobianPoint::infinity(self.ec);
        }
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: F::one(),
            infinity: false,
            ec: self.ec,
        }
    }
}

impl AffinePoint<Fq> {
    /// GLV endomorphism (x, y) -> (beta x, y) with beta a primitive cube root
    /// of unity. Acts on G1 as multiplication by a fixed scalar of order 3.
    pub fn endomorphism(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        Self::new_unchecked(self.x.clone() * &self.ec.sqrt_n3m1o2, self.y.clone(), self.ec)
    }
}

impl<F: Field> PartialEq for AffinePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        if !same_curve(self.ec, other.ec) {
            return false;
        }
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<F: Field> Eq for AffinePoint<F> {}

impl<F: Field> fmt::Debug for AffinePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "AffinePoint<{}>(infinity)", self.ec.name)
        } else {
            write!(f, "AffinePoint<{}>({:?}, {:?})", self.ec.name, self.x, self.y)
        }
    }
}

/// `(x / z^2, y / z^3)`. Canonical infinity is (1, 1, 0) with the flag set.
#[derive(Clone)]
pub struct JacobianPoint<F: Field> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub infinity: bool,
    pub ec: &'static CurveParams<F>,
}

impl<F: Field> JacobianPoint<F> {
    pub fn infinity(ec: &'static CurveParams<F>) -> Self {
        Self {
            x: F::one(),
            y: F::one(),
            z: F::zero(),
            infinity: true,
            ec,
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.infinity || self.z.is_zero()
    }

    pub fn to_affine(&self) -> AffinePoint<F> {
        if self.infinity {
            return AffinePoint::infinity(self.ec);
        }
        let Some(z_inv) = self.z.inverse() else {
            return AffinePoint::infinity(self.ec);
        };
        let z_inv2 = z_inv.square();
        let x = self.x.clone() * &z_inv2;
        let y = self.y.clone() * z_inv2 * z_inv;
        AffinePoint::new_unchecked(x, y, self.ec)
    }

    /// dbl-2007-bl with a general `a` coefficient.
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity(self.ec);
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        let s = (self.x.clone() * &yy).double().double();
        let m = xx.clone() + xx.double() + self.ec.a.clone() * zz.square();
        let x3 = m.square() - s.double();
        let y3 = m * (s - &x3) - yyyy.double().double().double();
        let z3 = (self.y.clone() * &self.z).double();

        Self {
            x: x3,
            y: y3,
            z: z3,
            infinity: false,
            ec: self.ec,
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        if !same_curve(self.ec, other.ec) {
            return Err(Error::TypeMismatch("points belong to different curves"));
        }
        Ok(self.add_unchecked(other))
    }

    /// Jacobian addition (add-1998-cmo-2) without the curve check.
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.clone() * &z2z2;
        let u2 = other.x.clone() * &z1z1;
        let s1 = self.y.clone() * &other.z * &z2z2;
        let s2 = other.y.clone() * &self.z * &z1z1;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::infinity(self.ec)
            };
        }

        let h = u2 - &u1;
        let r = s2 - &s1;
        let hh = h.square();
        let hhh = h.clone() * &hh;
        let v = u1 * hh;

        let x3 = r.square() - &hhh - v.double();
        let y3 = r * (v - &x3) - s1 * hhh;
        let z3 = self.z.clone() * &other.z * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
            infinity: false,
            ec: self.ec,
        }
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Self {
            x: self.x.clone(),
            y: -self.y.clone(),
            z: self.z.clone(),
            infinity: false,
            ec: self.ec,
        }
    }

    /// Double-and-add from the least significant bit. The scalar is reduced
    /// modulo the group order first.
    pub fn scalar_mul(&self, scalar: &BigUint) -> Self {
        let scalar = scalar % &self.ec.n;
        if scalar.is_zero() || self.is_infinity() {
            return Self::infinity(self.ec);
        }

        let mut result = Self::infinity(self.ec);
        let mut addend = self.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                result = result.add_unchecked(&addend);
            }
            addend = addend.double();
        }
        result
    }

    pub fn scalar_mul_fr(&self, scalar: &Fr) -> Self {
        self.scalar_mul(scalar.value())
    }
}

/// Compares the represented affine points without inverting z.
impl<F: Field> PartialEq for JacobianPoint<F> {
    fn eq(&self, other: &Self) -> bool {
        if !same_curve(self.ec, other.ec) {
            return false;
        }
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        self.x.clone() * &z2z2 == other.x.clone() * &z1z1
            && self.y.clone() * z2z2 * &other.z == other.y.clone() * z1z1 * &self.z
    }
}

impl<F: Field> Eq for JacobianPoint<F> {}

impl<F: Field> fmt::Debug for JacobianPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jacobian{:?}", self.to_affine())
    }
}

/// Sum of `scalars[i] * points[i]`, one term per rayon task.
pub fn msm<F: Field>(
    ec: &'static CurveParams<F>,
    points: &[AffinePoint<F>],
    scalars: &[Fr],
) -> Result<JacobianPoint<F>> {
    if points.len() != scalars.len() {
        return Err(Error::SizeMismatch {
            expected: points.len(),
            actual: scalars.len(),
        });
    }
    if points.iter().any(|p| !same_curve(p.ec, ec)) {
        return Err(Error::TypeMismatch("msm term on a different curve"));
    }

    Ok(points
        .par_iter()
        .zip(scalars.par_iter())
        .map(|(point, scalar)| point.to_jacobian().scalar_mul_fr(scalar))
        .reduce(|| JacobianPoint::infinity(ec), |acc, term| acc.add_unchecked(&term)))
}

/// (w^2)^-1 = v^-1 = xi^-1 v^2, with xi^-1 = (1 - u) / 2.
static W2_INV: Lazy<Fq12> = Lazy::new(|| {
    Fq12::new(
        Fq6::new(Fq2::zero(), Fq2::zero(), xi_inverse()),
        Fq6::zero(),
    )
});

/// (w^3)^-1 = w v^-2 = xi^-1 v w.
static W3_INV: Lazy<Fq12> = Lazy::new(|| {
    Fq12::new(
        Fq6::zero(),
        Fq6::new(Fq2::zero(), xi_inverse(), Fq2::zero()),
    )
});

fn xi_inverse() -> Fq2 {
    let half = Fq::new((Fq::modulus() + 1u32) >> 1u32);
    Fq2::new(half.clone(), -half)
}

/// Maps a point of the sextic twist onto the base curve equation over Fq12:
/// (x, y) -> (x / w^2, y / w^3).
pub fn untwist(point: &G2Point) -> AffinePoint<Fq12> {
    if point.infinity {
        return AffinePoint::infinity(&*GT_CURVE);
    }
    let x = Fq12::from_fq2(&point.x) * &*W2_INV;
    let y = Fq12::from_fq2(&point.y) * &*W3_INV;
    AffinePoint::new_unchecked(x, y, &*GT_CURVE)
}

pub fn g1_generator() -> G1Point {
    let ec = params::parameters();
    AffinePoint::new_unchecked(ec.gx.clone(), ec.gy.clone(), ec)
}

pub fn g2_generator() -> G2Point {
    let ec = params::parameters_twist();
    AffinePoint::new_unchecked(ec.g2x.clone(), ec.g2y.clone(), ec)
}
