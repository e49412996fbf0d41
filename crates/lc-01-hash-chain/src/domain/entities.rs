//! Domain entities for the hash chain

use super::contracts::Contract;
use crate::error::{ChainError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_crypto::hashing::HEX_DIGEST_LEN;

/// Hash stored in the genesis block
pub const GENESIS_HASH: &str = "0";

/// Largest difficulty a hex SHA-256 digest can satisfy
pub const MAX_DIFFICULTY: usize = HEX_DIGEST_LEN;

/// Proof-of-work target: required count of leading `'0'` hex characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Difficulty(usize);

impl Difficulty {
    /// No proof-of-work: any digest is accepted
    pub const ZERO: Self = Self(0);

    /// Create a difficulty, rejecting targets no digest can meet
    pub fn new(leading_zeros: usize) -> Result<Self> {
        if leading_zeros > MAX_DIFFICULTY {
            return Err(ChainError::InvalidDifficulty {
                requested: leading_zeros,
                max: MAX_DIFFICULTY,
            });
        }
        Ok(Self(leading_zeros))
    }

    /// Required leading zeros
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Difficulty {
    type Error = ChainError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Difficulty> for usize {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

/// What a block carries
///
/// Exactly one payload kind is meaningful per block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum BlockPayload {
    /// Genesis block: no data
    Empty,
    /// Transaction fields
    Data(Map<String, Value>),
    /// Executable contract reference (stored, never interpreted)
    Contract(Contract),
}

impl BlockPayload {
    /// Build a transfer payload `{from, to, amount}`
    ///
    /// A non-finite `amount` becomes JSON `null`.
    pub fn transfer(from: &str, to: &str, amount: f64) -> Self {
        let mut data = Map::new();
        data.insert("from".to_string(), Value::from(from));
        data.insert("to".to_string(), Value::from(to));
        data.insert("amount".to_string(), Value::from(amount));
        Self::Data(data)
    }
}

/// A sealed block in the chain
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block contents
    pub payload: BlockPayload,

    /// Hex SHA-256 digest of the block (`"0"` for genesis)
    pub hash: String,

    /// Hash of the preceding block (empty for genesis)
    pub prev_hash: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,

    /// Proof-of-work counter
    pub nonce: u64,
}

impl Block {
    /// Create the genesis block
    pub fn genesis(timestamp: DateTime<Utc>) -> Self {
        Self {
            payload: BlockPayload::Empty,
            hash: GENESIS_HASH.to_string(),
            prev_hash: String::new(),
            timestamp,
            nonce: 0,
        }
    }

    /// Create an unmined block linked to `prev_hash`
    pub fn unsealed(payload: BlockPayload, prev_hash: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            payload,
            hash: String::new(),
            prev_hash,
            timestamp,
            nonce: 0,
        }
    }

    /// Transaction fields, if this is a data block
    pub fn data(&self) -> Option<&Map<String, Value>> {
        match &self.payload {
            BlockPayload::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Contract reference, if this is a contract block
    pub fn contract(&self) -> Option<&Contract> {
        match &self.payload {
            BlockPayload::Contract(contract) => Some(contract),
            _ => None,
        }
    }

    /// Whether this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.hash == GENESIS_HASH && self.prev_hash.is_empty()
    }
}

/// Abbreviate a hash for log output
pub fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
