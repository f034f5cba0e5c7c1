/// Error Types
///
/// Every fault raised by the arithmetic core is local and synchronous: a
/// caller passed values that cannot be combined, a point that is not on its
/// curve, or an input that does not fit the reference string. None of them is
/// worth retrying. A proof that fails verification is not an error; `verify`
/// reports it as `false`.

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("type mismatch: {0}")]
    TypeMismatch(&'static str),

    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("division by zero")]
    DivisionByZero,

    #[error("{value} is not invertible modulo {modulus}")]
    NonInvertible { value: BigUint, modulus: BigUint },

    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("duplicate interpolation point x = {0}")]
    DuplicateInterpolationPoint(BigUint),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown identity: {0}")]
    UnknownIdentity(String),

    #[error("identity already registered: {0}")]
    IdentityExists(String),
}

pub type Result<T> = std::result::Result<T, Error>;
