use tracing::debug;

use crate::config::ProtocolConfig;
use crate::encoding;
use crate::error::Result;
use crate::fields::Fr;
use crate::kzg::{Commitment, Proof, Srs};
use crate::polynomial::Polynomial;

/// Holds an encoded payload and answers evaluation challenges about it
/// without revealing the polynomial.
#[derive(Clone, Debug)]
pub struct Prover<'a> {
    srs: &'a Srs,
    points: Vec<(Fr, Fr)>,
    poly: Polynomial,
}

impl<'a> Prover<'a> {
    pub fn new(srs: &'a Srs, payload: &[u8], config: &ProtocolConfig) -> Result<Self> {
        let (points, poly) = encoding::encode(payload, config)?;
        Ok(Self { srs, points, poly })
    }

    pub fn commitment(&self) -> Result<Commitment> {
        self.srs.commit(&self.poly)
    }

    /// The claimed value P(a).
    pub fn evaluate(&self, challenge: &Fr) -> Fr {
        self.poly.evaluate_scalar(challenge)
    }

    /// Opening proof for P(a).
    pub fn witness(&self, challenge: &Fr) -> Result<Proof> {
        let value = self.evaluate(challenge);
        debug!(%challenge, "answering challenge");
        self.srs.open(&self.poly, &(challenge.clone(), value))
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    pub fn points(&self) -> &[(Fr, Fr)] {
        &self.points
    }
}
