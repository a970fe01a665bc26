use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trait for commitment schemes
pub trait CommitmentScheme {
    type Key;
    type Commitment;

    fn commit(key: &Self::Key, message: &[u8]) -> Result<Self::Commitment>;
    fn verify(commitment: &Self::Commitment, key: &Self::Key, message: &[u8]) -> bool;
}

/// A published commitment to a move. Carries the tag only, never the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    #[serde(with = "hex::serde")]
    pub tag: Vec<u8>,
    pub committed_at: DateTime<Utc>,
}

impl Commitment {
    pub fn new(tag: Vec<u8>) -> Self {
        Self {
            tag,
            committed_at: Utc::now(),
        }
    }

    pub fn tag_hex(&self) -> String {
        hex::encode(&self.tag)
    }
}
