#![warn(clippy::all)]

/// zkpass: KZG Polynomial Commitments from Scratch
///
/// A self-contained BLS12-381 stack and the KZG commitment scheme on top of
/// it, used to prove knowledge of a committed payload (for instance a hashed
/// password) by answering evaluation challenges.
///
/// # Features
///
/// - **Own arithmetic**: prime field, Fq2/Fq6/Fq12 tower and Frobenius maps
/// - **Group law**: affine and Jacobian points over any field of the tower
/// - **Pairing**: ate pairing with Miller loop and final exponentiation
/// - **KZG**: trusted setup, commit, open and verify
///
/// # Architecture
///
/// The library is organized into several key modules:
/// - [`fields`]: field tower and the `Field` trait
/// - [`params`]: BLS12-381 constants
/// - [`ec`]: elliptic curve points, untwist, multi-scalar multiplication
/// - [`pairing`]: ate pairing
/// - [`utils`]: polynomial arithmetic over raw integers
/// - [`polynomial`]: polynomials over the scalar field
/// - [`kzg`]: KZG polynomial commitment implementation
/// - [`encoding`], [`prover`], [`verifier`], [`registry`]: protocol roles
/// - [`metrics`]: performance measurement

// Core arithmetic
pub mod error;
pub mod fields;
pub mod params;
pub mod ec;
pub mod pairing;

// Polynomial engine
pub mod utils;
pub mod polynomial;

// Commitment protocol
pub mod kzg;
pub mod config;
pub mod encoding;
pub mod prover;
pub mod verifier;
pub mod registry;

// Performance analysis
pub mod metrics;

// Re-export main types and functions for public API
pub use config::ProtocolConfig;
pub use ec::{g1_generator, g2_generator, AffinePoint, G1Point, G2Point, JacobianPoint};
pub use encoding::encode;
pub use error::{Error, Result};
pub use fields::{Field, Fq, Fq12, Fq2, Fq6, Fr};
pub use kzg::{commit, open, trusted_setup, verify, Commitment, Proof, Srs};
pub use metrics::{MetricsCollector, ProtocolMetrics};
pub use pairing::tate_pairing;
pub use polynomial::Polynomial;
pub use prover::Prover;
pub use registry::CredentialStore;
pub use verifier::Verifier;
