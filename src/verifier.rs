use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::config::ProtocolConfig;
use crate::error::Result;
use crate::fields::Fr;
use crate::kzg::{Commitment, Proof, Srs};

/// Issues a random evaluation challenge and checks the prover's answer.
#[derive(Clone, Debug)]
pub struct Verifier<'a> {
    srs: &'a Srs,
    challenge: Fr,
}

impl<'a> Verifier<'a> {
    /// Draws the challenge uniformly from `1..=config.challenge_max`.
    pub fn new<R: Rng + CryptoRng>(srs: &'a Srs, rng: &mut R, config: &ProtocolConfig) -> Result<Self> {
        config.validate()?;
        let challenge = Fr::from(rng.gen_range(1..=config.challenge_max));
        debug!(%challenge, "challenge drawn");
        Ok(Self { srs, challenge })
    }

    pub fn with_challenge(srs: &'a Srs, challenge: Fr) -> Self {
        Self { srs, challenge }
    }

    pub fn challenge(&self) -> &Fr {
        &self.challenge
    }

    /// Accepts iff `claimed_value` is the committed polynomial evaluated at
    /// the challenge.
    pub fn verify(&self, commitment: &Commitment, claimed_value: &Fr, proof: &Proof) -> bool {
        self.srs
            .verify(commitment, proof, &(self.challenge.clone(), claimed_value.clone()))
    }
}
