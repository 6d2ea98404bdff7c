// Account identifiers - address-like opaque keys

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

const ADDR_PREFIX: &str = "addr:";

#[derive(Error, Debug)]
pub enum AccountIdError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),

    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Opaque key identifying an account on the ledger.
/// Displayed and parsed in the format: addr:<base58_bytes>
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Generate a random account id
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derive an account id deterministically from a seed label
    pub fn from_seed(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"account:");
        hasher.update(label.as_bytes());
        let result = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse an address from its text form
    pub fn parse(s: &str) -> Result<Self, AccountIdError> {
        let key_part = s.strip_prefix(ADDR_PREFIX).ok_or_else(|| {
            AccountIdError::InvalidFormat(format!("Expected '{ADDR_PREFIX}' prefix"))
        })?;

        if key_part.is_empty() {
            return Err(AccountIdError::InvalidFormat("Key part cannot be empty".into()));
        }

        let decoded = bs58::decode(key_part)
            .into_vec()
            .map_err(|e| AccountIdError::InvalidBase58(e.to_string()))?;

        if decoded.len() != 32 {
            return Err(AccountIdError::InvalidLength(decoded.len()));
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ADDR_PREFIX, bs58::encode(&self.0).into_string())
    }
}
