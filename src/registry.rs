/// Credential Store
///
/// Registration commits to the SHA-256 digest of a password; the store keeps
/// only the commitment. Login rebuilds the polynomial from the presented
/// password, answers the verifier's challenge and checks the answer against
/// the stored commitment, so the password itself is never kept.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::ProtocolConfig;
use crate::error::{Error, Result};
use crate::fields::Fr;
use crate::kzg::{Commitment, Srs};
use crate::prover::Prover;
use crate::verifier::Verifier;

/// Hex-encoded SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Identity -> commitment.
#[derive(Clone, Debug, Default)]
pub struct CredentialStore {
    entries: HashMap<String, Commitment>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    pub fn commitment(&self, identity: &str) -> Option<&Commitment> {
        self.entries.get(identity)
    }

    pub fn register(
        &mut self,
        srs: &Srs,
        config: &ProtocolConfig,
        identity: &str,
        password: &str,
    ) -> Result<Commitment> {
        if self.contains(identity) {
            return Err(Error::IdentityExists(identity.to_string()));
        }
        let digest = hash_password(password);
        let commitment = Prover::new(srs, digest.as_bytes(), config)?.commitment()?;
        info!(identity, commitment = %commitment, "identity registered");
        self.entries.insert(identity.to_string(), commitment.clone());
        Ok(commitment)
    }

    /// `Ok(false)` for a wrong password, an error for an unknown identity.
    pub fn login(
        &self,
        srs: &Srs,
        config: &ProtocolConfig,
        identity: &str,
        password: &str,
        challenge: &Fr,
    ) -> Result<bool> {
        let commitment = self
            .entries
            .get(identity)
            .ok_or_else(|| Error::UnknownIdentity(identity.to_string()))?;

        let digest = hash_password(password);
        let prover = Prover::new(srs, digest.as_bytes(), config)?;
        let proof = prover.witness(challenge)?;

        let verifier = Verifier::with_challenge(srs, challenge.clone());
        let accepted = verifier.verify(commitment, &prover.evaluate(challenge), &proof);
        if accepted {
            info!(identity, "login accepted");
        } else {
            warn!(identity, "login rejected");
        }
        Ok(accepted)
    }
}
