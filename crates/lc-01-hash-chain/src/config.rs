//! Configuration types for the hash chain

use crate::domain::Difficulty;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default mining difficulty (leading `'0'` hex characters)
pub const DEFAULT_DIFFICULTY: usize = 2;

/// Runtime configuration for a chain instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Leading zeros required of every mined hash; fixed for the chain's lifetime
    pub difficulty: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl ChainConfig {
    /// Create config for testing (fast mining).
    pub fn for_testing() -> Self {
        Self { difficulty: 1 }
    }

    /// Validate and convert to a [`Difficulty`]
    pub fn validate(&self) -> Result<Difficulty> {
        Difficulty::new(self.difficulty)
    }
}
