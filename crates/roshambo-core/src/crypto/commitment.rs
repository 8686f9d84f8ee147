//! Secret key and keyed commitment for the commit-reveal round.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

use super::random::{random_bytes, RandomSourceError};

type HmacSha256 = Hmac<Sha256>;

/// 16-byte secret key, disclosed to the user at the end of the round
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 16]);

impl SecretKey {
    /// Draw a fresh key from the OS random source
    pub fn random() -> Result<Self, RandomSourceError> {
        Ok(Self(random_bytes()?))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // keep full key material out of logs
        write!(f, "SecretKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// Commitment = HMAC-SHA256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move under the given key
    pub fn commit(key: &SecretKey, move_name: &str) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that `key` and `move_name` reproduce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}
