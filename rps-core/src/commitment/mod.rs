pub mod scheme;

pub use scheme::{Commitment, CommitmentScheme};

use crate::{GameError, Result};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// HMAC key length in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// Single-use HMAC key
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey([u8; KEY_SIZE]);

impl HmacKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| GameError::invalid_key(e.to_string()))?;
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|b: Vec<u8>| {
            GameError::invalid_key(format!("expected {} bytes, got {}", KEY_SIZE, b.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// keep key material out of logs
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

/// Fresh key from the OS CSPRNG
pub fn generate_key() -> HmacKey {
    let mut key = [0u8; KEY_SIZE];
    OsRng.fill_bytes(&mut key);
    HmacKey(key)
}

fn mac_for(key: &HmacKey, message: &[u8]) -> Result<HmacSha256> {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).map_err(|e| GameError::crypto(e.to_string()))?;
    mac.update(message);
    Ok(mac)
}

/// HMAC-SHA256 of the label's UTF-8 bytes, hex encoded
pub fn compute_tag(key: &HmacKey, label: &str) -> Result<String> {
    let tag = mac_for(key, label.as_bytes())?.finalize().into_bytes();
    Ok(hex::encode(tag))
}

/// Recompute the tag for `label` and compare against `tag_hex`
pub fn verify_tag(key: &HmacKey, label: &str, tag_hex: &str) -> bool {
    let Ok(expected) = hex::decode(tag_hex.trim()) else {
        return false;
    };

    match mac_for(key, label.as_bytes()) {
        Ok(mac) => mac.verify_slice(&expected).is_ok(),
        Err(_) => false,
    }
}

/// HMAC based commitment impl
pub struct HmacCommitment;

impl CommitmentScheme for HmacCommitment {
    type Key = HmacKey;
    type Commitment = Commitment;

    fn commit(key: &HmacKey, message: &[u8]) -> Result<Commitment> {
        let tag = mac_for(key, message)?.finalize().into_bytes().to_vec();
        Ok(Commitment::new(tag))
    }

    fn verify(commitment: &Commitment, key: &HmacKey, message: &[u8]) -> bool {
        match mac_for(key, message) {
            Ok(mac) => mac.verify_slice(&commitment.tag).is_ok(),
            Err(_) => false,
        }
    }
}
