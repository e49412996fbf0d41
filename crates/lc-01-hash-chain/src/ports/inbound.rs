//! Inbound ports (driving side - API)

use crate::domain::{Block, Contract, Difficulty};

/// Primary port: hash-chain ledger as seen by a request layer
///
/// All methods are blocking. Appends run the miner on the calling thread.
pub trait HashChainApi: Send + Sync {
    /// Mine and append a transfer block; returns the sealed block
    fn append_transfer(&self, from: &str, to: &str, amount: f64) -> Block;

    /// Mine and append a contract block; returns the sealed block
    fn append_contract(&self, contract: Contract) -> Block;

    /// Digest and linkage check over the whole chain
    fn validate(&self) -> bool;

    /// Copy of the block sequence for serialization
    fn blocks(&self) -> Vec<Block>;

    /// Number of blocks including genesis
    fn len(&self) -> usize;

    /// Never true once a chain exists
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Chain difficulty
    fn difficulty(&self) -> Difficulty;
}
