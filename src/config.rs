/// Protocol Configuration
///
/// Payload layout and verifier parameters. Every field has a default, so a
/// JSON document only needs the keys it overrides:
///
/// ```json
/// { "chunk_count": 8 }
/// ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest chunk that always fits below the 255-bit group order.
pub const MAX_CHUNK_SIZE: usize = 31;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Bytes per evaluation point.
    pub chunk_size: usize,
    /// Evaluation points per payload, which is also the SRS length.
    pub chunk_count: usize,
    /// Verifier challenges are drawn from `1..=challenge_max`.
    pub challenge_max: u64,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            chunk_size: MAX_CHUNK_SIZE,
            chunk_count: 16,
            challenge_max: 15,
        }
    }
}

impl ProtocolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::InvalidConfig(format!(
                "chunk_size must be in 1..={}, got {}",
                MAX_CHUNK_SIZE, self.chunk_size
            )));
        }
        if self.chunk_count == 0 {
            return Err(Error::InvalidConfig("chunk_count must be positive".into()));
        }
        if self.challenge_max == 0 {
            return Err(Error::InvalidConfig("challenge_max must be positive".into()));
        }
        Ok(())
    }

    /// Payload capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.chunk_size * self.chunk_count
    }

    pub fn srs_length(&self) -> usize {
        self.chunk_count
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }
}
