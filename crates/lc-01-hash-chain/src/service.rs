//! Hash-chain ledger
//!
//! [`Chain`] is a plain value: it has no internal locking. Concurrent
//! callers must serialize `append*` and `validate` through one lock per
//! chain, which is what [`crate::SharedChain`] provides.

use crate::config::ChainConfig;
use crate::domain::{
    check_integrity, check_proof_of_work, mine, short_hash, Block, BlockPayload, Contract,
    Difficulty, GENESIS_HASH,
};
use crate::error::{ChainError, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

/// Ordered sequence of sealed blocks starting at genesis
#[derive(Clone, Debug, Serialize)]
pub struct Chain {
    blocks: Vec<Block>,
    difficulty: Difficulty,
}

impl Chain {
    /// Create a chain holding only a fresh genesis block
    pub fn new(difficulty: Difficulty) -> Self {
        info!(difficulty = difficulty.get(), "Creating hash chain");
        Self {
            blocks: vec![Block::genesis(Utc::now())],
            difficulty,
        }
    }

    /// Create a chain from validated configuration
    pub fn from_config(config: &ChainConfig) -> Result<Self> {
        Ok(Self::new(config.validate()?))
    }

    /// Rebuild a chain from an existing block sequence
    ///
    /// Nothing is checked beyond non-emptiness; call [`Chain::validate`]
    /// to find out whether the sequence is intact.
    pub fn from_blocks(blocks: Vec<Block>, difficulty: Difficulty) -> Result<Self> {
        if blocks.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(Self { blocks, difficulty })
    }

    /// Mine and append a transfer block `{from, to, amount}`
    ///
    /// Appending never fails. JSON has no NaN or infinity, so a non-finite
    /// `amount` is stored as `null` and a warning is logged. Run the
    /// transfer through [`Contract::execute`] first to reject such input.
    pub fn append(&mut self, from: &str, to: &str, amount: f64) -> &Block {
        if !amount.is_finite() {
            warn!(from, to, amount, "Non-finite transfer amount stored as null");
        }
        self.append_payload(BlockPayload::transfer(from, to, amount))
    }

    /// Mine and append a block carrying a contract reference
    ///
    /// The contract is stored, not executed.
    pub fn append_contract(&mut self, contract: Contract) -> &Block {
        self.append_payload(BlockPayload::Contract(contract))
    }

    fn append_payload(&mut self, payload: BlockPayload) -> &Block {
        let mut block = Block::unsealed(payload, self.tip_hash(), Utc::now());
        let stats = mine(&mut block, self.difficulty);

        info!(
            index = self.blocks.len(),
            hash = %short_hash(&block.hash),
            nonce = block.nonce,
            attempts = stats.attempts,
            "Block added"
        );

        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    fn tip_hash(&self) -> String {
        self.blocks
            .last()
            .map_or_else(|| GENESIS_HASH.to_string(), |b| b.hash.clone())
    }

    /// Check digest integrity and linkage of every non-genesis block
    ///
    /// Does not check the proof-of-work target; see
    /// [`Chain::check_proof_of_work`].
    pub fn validate(&self) -> bool {
        self.validate_detailed().is_ok()
    }

    /// Like [`Chain::validate`], reporting the first broken block
    pub fn validate_detailed(&self) -> Result<()> {
        check_integrity(&self.blocks).inspect_err(|e| {
            warn!(error = %e, "Chain validation failed");
        })
    }

    /// Check that every non-genesis hash meets the chain difficulty
    pub fn check_proof_of_work(&self) -> Result<()> {
        check_proof_of_work(&self.blocks, self.difficulty)
    }

    /// Blocks in chain order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Most recent block
    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Number of blocks including genesis
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a constructed chain; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Difficulty every appended block is mined at
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: usize) -> Difficulty {
        Difficulty::new(n).unwrap()
    }

    #[test]
    fn test_create_has_genesis_only() {
        let chain = Chain::new(d(2));
        assert_eq!(chain.len(), 1);
        assert!(chain.blocks()[0].is_genesis());
        assert_eq!(chain.difficulty(), d(2));
        assert!(chain.validate());
    }

    #[test]
    fn test_scenario_two_transfers_validate() {
        let mut chain = Chain::new(d(2));
        chain.append("Alice", "Bob", 2.0);
        chain.append("John", "Bob", 3.0);

        assert!(chain.validate());
        assert_eq!(chain.len(), 3);
        assert!(chain.check_proof_of_work().is_ok());
    }

    #[test]
    fn test_append_links_to_previous() {
        let mut chain = Chain::new(d(1));
        let first = chain.append("Alice", "Bob", 1.0).hash.clone();
        let second = chain.append("Bob", "Carol", 1.0);

        assert_eq!(second.prev_hash, first);
        assert_eq!(chain.blocks()[1].prev_hash, GENESIS_HASH);
    }

    #[test]
    fn test_tampered_amount_detected() {
        let mut chain = Chain::new(d(2));
        chain.append("Alice", "Bob", 2.0);
        chain.append("John", "Bob", 3.0);

        if let BlockPayload::Data(data) = &mut chain.blocks[1].payload {
            data.insert("amount".to_string(), serde_json::Value::from(200.0));
        }

        assert!(!chain.validate());
        assert!(matches!(
            chain.validate_detailed(),
            Err(ChainError::DigestMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_swapped_blocks_detected() {
        let mut chain = Chain::new(d(1));
        chain.append("A", "B", 1.0);
        chain.append("B", "C", 2.0);
        chain.append("C", "D", 3.0);

        chain.blocks.swap(1, 2);
        assert!(!chain.validate());
    }

    #[test]
    fn test_deleted_middle_block_detected() {
        let mut chain = Chain::new(d(1));
        chain.append("A", "B", 1.0);
        chain.append("B", "C", 2.0);
        chain.append("C", "D", 3.0);

        chain.blocks.remove(2);
        assert!(matches!(
            chain.validate_detailed(),
            Err(ChainError::LinkageMismatch { index: 2, .. })
        ));
    }

    #[test]
    fn test_contract_block_validates() {
        let mut chain = Chain::new(d(1));
        let block = chain.append_contract(Contract::token_transfer("A", "B", 1.0));

        assert!(block.contract().is_some());
        assert!(block.data().is_none());
        assert!(chain.validate());
    }

    #[test]
    fn test_contract_tamper_detected() {
        let mut chain = Chain::new(d(1));
        chain.append_contract(Contract::token_transfer("A", "B", 1.0));

        chain.blocks[1].payload = BlockPayload::Contract(Contract::token_transfer("A", "M", 1.0));
        assert!(!chain.validate());
    }

    #[test]
    fn test_difficulty_zero_chain_validates() {
        let mut chain = Chain::new(Difficulty::ZERO);
        chain.append("A", "B", 1.0);
        assert!(chain.validate());
        assert_eq!(chain.blocks()[1].nonce, 1);
    }

    #[test]
    fn test_from_blocks_rejects_empty() {
        assert_eq!(
            Chain::from_blocks(Vec::new(), d(1)).unwrap_err(),
            ChainError::EmptyChain
        );
    }

    #[test]
    fn test_from_config() {
        let chain = Chain::from_config(&ChainConfig::for_testing()).unwrap();
        assert_eq!(chain.difficulty().get(), 1);
        assert!(Chain::from_config(&ChainConfig { difficulty: 65 }).is_err());
    }

    #[test]
    fn test_non_finite_amount_stored_as_null() {
        let mut chain = Chain::new(Difficulty::ZERO);
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let block = chain.append("A", "B", amount);
            assert!(block.data().unwrap()["amount"].is_null());
        }
        assert!(chain.validate());

        // Callers that need rejection run the transfer as a contract first.
        assert!(matches!(
            Contract::token_transfer("A", "B", f64::NAN).execute(),
            Err(crate::error::ContractError::InvalidAmount(_))
        ));
    }
}
