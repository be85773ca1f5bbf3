use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::canonical::to_canonical_json;
use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::error::Result;
use crate::transaction::Transaction;

/// A sealed block. Never mutated once appended to the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // Unix seconds (UTC), sub-second precision
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/// Current time as fractional Unix seconds.
pub fn now_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis(timestamp: f64) -> Self {
        Self {
            index: 1,
            timestamp,
            transactions: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
        }
    }

    pub fn new(
        index: u64,
        timestamp: f64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp,
            transactions,
            proof,
            previous_hash,
        }
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 1 && self.previous_hash == GENESIS_PREVIOUS_HASH
    }

    /// Sorted-key JSON of every field. This is both the PoW preimage prefix
    /// and the input of `canonical_hash`.
    pub fn canonical_serialize(&self) -> Result<Vec<u8>> {
        to_canonical_json(self)
    }

    /// Lowercase hex SHA-256 of the canonical serialization.
    pub fn canonical_hash(&self) -> Result<String> {
        let bytes = self.canonical_serialize()?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}
