/// KZG Polynomial Commitment Scheme Implementation
///
/// Kate-Zaverucha-Goldberg commitments over BLS12-381, built on the crate's
/// own field tower, group law and pairing. A polynomial of L coefficients is
/// committed against a structured reference string of L powers of a secret
/// scalar in G1; an opening proof for a claimed evaluation (a, y) is the
/// commitment to (P(x) - y) / (x - a), checked with
///
/// ```text
/// e(proof, s*G2 - a*G2) == e(C - y*G1, G2)
/// ```
///
/// Features:
/// - Parallel reference string generation
/// - Commitments and proofs as multi-scalar multiplications
/// - Both verification pairings evaluated concurrently
///
/// The secret scalar only exists inside [`trusted_setup`]; [`Srs::generate`]
/// samples it from a cryptographic RNG and drops it before returning.

use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, warn};

use crate::ec::{self, g1_generator, g2_generator, G1Point, G2Point};
use crate::error::{Error, Result};
use crate::fields::Fr;
use crate::pairing::tate_pairing;
use crate::params::{self, N};
use crate::polynomial::Polynomial;

/// Structured reference string: `[s^0 G1, ..., s^(L-1) G1]` and `s G2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Srs {
    pub g1: Vec<G1Point>,
    pub g2: G2Point,
}

impl Srs {
    /// Runs a setup with a fresh secret drawn uniformly from [1, n - 1].
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<Self> {
        let secret = Fr::new(rng.gen_biguint_range(&BigUint::one(), &N));
        trusted_setup(&secret, length)
    }

    /// Maximum number of coefficients that can be committed.
    pub fn len(&self) -> usize {
        self.g1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1.is_empty()
    }

    /// The G1 generator the reference string is built on.
    pub fn g1_generator() -> G1Point {
        g1_generator()
    }

    pub fn g2_generator() -> G2Point {
        g2_generator()
    }

    pub fn commit(&self, poly: &Polynomial) -> Result<Commitment> {
        commit(poly, &self.g1)
    }

    pub fn open(&self, poly: &Polynomial, point: &(Fr, Fr)) -> Result<Proof> {
        open(poly, point, &self.g1)
    }

    pub fn verify(&self, commitment: &Commitment, proof: &Proof, point: &(Fr, Fr)) -> bool {
        verify(commitment, proof, point, &self.g2)
    }
}

fn fingerprint(point: &G1Point) -> String {
    let mut hasher = Sha256::new();
    if point.is_infinity() {
        hasher.update([0u8]);
    } else {
        hasher.update([1u8]);
        hasher.update(point.x.to_bytes_be());
        hasher.update(point.y.to_bytes_be());
    }
    hex::encode(hasher.finalize())
}

/// Commitment to a polynomial, a single G1 point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment(pub G1Point);

/// Opening proof for one evaluation, a single G1 point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof(pub G1Point);

impl Commitment {
    pub fn point(&self) -> &G1Point {
        &self.0
    }

    /// SHA-256 of the affine coordinates, hex encoded.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.0)
    }
}

impl Proof {
    pub fn point(&self) -> &G1Point {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(&self.0)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", &self.fingerprint()[..16])
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof({})", &self.fingerprint()[..16])
    }
}

/// Generates the reference string for a known secret.
#[instrument(level = "debug", skip(secret))]
pub fn trusted_setup(secret: &Fr, length: usize) -> Result<Srs> {
    if length == 0 {
        return Err(Error::InvalidConfig("srs length must be positive".into()));
    }

    let g1 = g1_generator();
    let powers = Polynomial::powers(secret, length);

    // Generate G1 elements in parallel
    let crs_g1: Vec<G1Point> = powers
        .par_iter()
        .map(|power| g1.scalar_mul_fr(power))
        .collect();
    let s_g2 = g2_generator().scalar_mul_fr(secret);

    debug!(length, "reference string generated");
    Ok(Srs { g1: crs_g1, g2: s_g2 })
}

/// Commits to a polynomial with exactly one coefficient per SRS element.
#[instrument(level = "debug", skip_all, fields(coefficients = poly.len()))]
pub fn commit(poly: &Polynomial, srs_g1: &[G1Point]) -> Result<Commitment> {
    if poly.len() != srs_g1.len() {
        return Err(Error::SizeMismatch {
            expected: srs_g1.len(),
            actual: poly.len(),
        });
    }
    let point = ec::msm(params::parameters(), srs_g1, poly.coeffs())?.to_affine();
    let commitment = Commitment(point);
    debug!(commitment = %commitment, "polynomial committed");
    Ok(commitment)
}

/// Proves that `point.1` is the evaluation of `poly` at `point.0`. The pair is
/// taken as given: an inconsistent pair yields a proof that fails to verify.
#[instrument(level = "debug", skip_all, fields(coefficients = poly.len()))]
pub fn open(poly: &Polynomial, point: &(Fr, Fr), srs_g1: &[G1Point]) -> Result<Proof> {
    let quotient = poly.quotient(point);
    if quotient.len() > srs_g1.len() {
        return Err(Error::SizeMismatch {
            expected: srs_g1.len(),
            actual: quotient.len(),
        });
    }
    let srs_prefix = &srs_g1[..quotient.len()];
    let proof = Proof(ec::msm(params::parameters(), srs_prefix, quotient.coeffs())?.to_affine());
    debug!(proof = %proof, "opening proof generated");
    Ok(proof)
}

fn check_pairing_equation(
    commitment: &Commitment,
    proof: &Proof,
    (a, y): &(Fr, Fr),
    s_g2: &G2Point,
) -> Result<bool> {
    let g1 = g1_generator();
    let g2 = g2_generator();

    let lhs_g2 = s_g2.sub(&g2.scalar_mul_fr(a))?;
    let rhs_g1 = commitment.0.sub(&g1.scalar_mul_fr(y))?;

    let (lhs, rhs) = rayon::join(
        || tate_pairing(&proof.0, &lhs_g2),
        || tate_pairing(&rhs_g1, &g2),
    );
    Ok(lhs? == rhs?)
}

/// Checks an opening proof against a commitment. Malformed inputs are
/// reported as a failed verification.
#[instrument(level = "debug", skip_all)]
pub fn verify(commitment: &Commitment, proof: &Proof, point: &(Fr, Fr), s_g2: &G2Point) -> bool {
    match check_pairing_equation(commitment, proof, point, s_g2) {
        Ok(valid) => {
            debug!(valid, "pairing check finished");
            valid
        }
        Err(e) => {
            warn!(error = %e, "verification rejected malformed input");
            false
        }
    }
}
