/// Finite Field Tower
///
/// A prime field and the BLS12-381 extension tower built on top of it:
///
/// - `Fq`: integers modulo the 381-bit base prime q
/// - `Fr`: integers modulo the 255-bit group order n
/// - `Fq2 = Fq[u] / (u^2 + 1)`
/// - `Fq6 = Fq2[v] / (v^3 - (1 + u))`
/// - `Fq12 = Fq6[w] / (w^2 - v)`
///
/// Curve and pairing code is written once against the [`Field`] trait and
/// instantiated with whichever level of the tower it needs. The modulus is part
/// of the type, so elements of different fields cannot be mixed.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{Error, Result};

/// Derives the operator traits from a type's `add_ref`, `sub_ref`, `mul_ref`
/// and `neg_ref` inherent methods, for owned and borrowed operands alike.
macro_rules! impl_field_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> std::ops::Add<$ty> for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                self.add_ref(&rhs)
            }
        }

        impl<'a, $($gen)*> std::ops::Add<&'a $ty> for $ty {
            type Output = $ty;
            fn add(self, rhs: &'a $ty) -> $ty {
                self.add_ref(rhs)
            }
        }

        impl<'a, 'b, $($gen)*> std::ops::Add<&'b $ty> for &'a $ty {
            type Output = $ty;
            fn add(self, rhs: &'b $ty) -> $ty {
                self.add_ref(rhs)
            }
        }

        impl<$($gen)*> std::ops::Sub<$ty> for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                self.sub_ref(&rhs)
            }
        }

        impl<'a, $($gen)*> std::ops::Sub<&'a $ty> for $ty {
            type Output = $ty;
            fn sub(self, rhs: &'a $ty) -> $ty {
                self.sub_ref(rhs)
            }
        }

        impl<'a, 'b, $($gen)*> std::ops::Sub<&'b $ty> for &'a $ty {
            type Output = $ty;
            fn sub(self, rhs: &'b $ty) -> $ty {
                self.sub_ref(rhs)
            }
        }

        impl<$($gen)*> std::ops::Mul<$ty> for $ty {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                self.mul_ref(&rhs)
            }
        }

        impl<'a, $($gen)*> std::ops::Mul<&'a $ty> for $ty {
            type Output = $ty;
            fn mul(self, rhs: &'a $ty) -> $ty {
                self.mul_ref(rhs)
            }
        }

        impl<'a, 'b, $($gen)*> std::ops::Mul<&'b $ty> for &'a $ty {
            type Output = $ty;
            fn mul(self, rhs: &'b $ty) -> $ty {
                self.mul_ref(rhs)
            }
        }

        impl<$($gen)*> std::ops::Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                self.neg_ref()
            }
        }

        impl<'a, $($gen)*> std::ops::Neg for &'a $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                self.neg_ref()
            }
        }

        impl<$($gen)*> std::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: $ty) {
                *self = self.add_ref(&rhs);
            }
        }

        impl<$($gen)*> std::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: $ty) {
                *self = self.sub_ref(&rhs);
            }
        }

        impl<$($gen)*> std::ops::MulAssign for $ty {
            fn mul_assign(&mut self, rhs: $ty) {
                *self = self.mul_ref(&rhs);
            }
        }
    };
}

mod fp;
mod fq12;
mod fq2;
mod fq6;

pub use fp::{BaseModulus, Fp, Fq, Fr, Modulus, ScalarModulus};
pub use fq12::Fq12;
pub use fq2::Fq2;
pub use fq6::Fq6;

/// Arithmetic shared by every level of the tower.
pub trait Field:
    Sized
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Degree of the field over the prime field it is built on.
    const DEGREE: usize;

    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> bool;

    /// Embeds a small integer constant.
    fn from_u64(value: u64) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Raises the element to the q^power (Frobenius map applied `power` times).
    fn frobenius(&self, power: usize) -> Self;

    fn square(&self) -> Self {
        self.clone() * self
    }

    fn double(&self) -> Self {
        self.clone() + self
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        rhs.inverse()
            .map(|inv| self.clone() * &inv)
            .ok_or(Error::DivisionByZero)
    }

    /// Square-and-multiply, most significant bit first.
    fn pow(&self, exp: &BigUint) -> Self {
        let mut result = Self::one();
        for i in (0..exp.bits()).rev() {
            result = result.square();
            if exp.bit(i) {
                result *= self.clone();
            }
        }
        result
    }

    /// Exponentiation by a signed integer; negative exponents invert first.
    fn pow_signed(&self, exp: &BigInt) -> Result<Self> {
        match exp.sign() {
            Sign::Minus => {
                let inv = self.inverse().ok_or(Error::DivisionByZero)?;
                Ok(inv.pow(exp.magnitude()))
            }
            _ => Ok(self.pow(exp.magnitude())),
        }
    }
}
