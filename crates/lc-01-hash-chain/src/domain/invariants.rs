//! Invariant checkers for the hash chain
//!
//! INVARIANT-1 and INVARIANT-2 together are what `validate()` means.
//! INVARIANT-3 is deliberately separate: a block with a correct digest and
//! correct linkage passes validation even if its hash misses the target.

use super::codec::digest;
use super::entities::{Block, Difficulty};
use crate::error::{ChainError, Result};
use shared_crypto::{leading_hex_zeros, meets_hex_difficulty};

/// INVARIANT-1 + INVARIANT-2: Digest Integrity and Linkage
///
/// For every non-genesis block, the stored hash must equal the recomputed
/// digest and `prev_hash` must equal the predecessor's hash. Reports the
/// first failing block; the genesis block is not checked.
pub fn check_integrity(blocks: &[Block]) -> Result<()> {
    for (offset, pair) in blocks.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let index = offset + 1;

        let computed = digest(current);
        if computed != current.hash {
            return Err(ChainError::DigestMismatch {
                index,
                stored: current.hash.clone(),
                computed,
            });
        }

        if current.prev_hash != previous.hash {
            return Err(ChainError::LinkageMismatch {
                index,
                expected: previous.hash.clone(),
                found: current.prev_hash.clone(),
            });
        }
    }
    Ok(())
}

/// INVARIANT-3: Proof of Work
///
/// Every non-genesis hash must carry at least `difficulty` leading zeros.
pub fn check_proof_of_work(blocks: &[Block], difficulty: Difficulty) -> Result<()> {
    for (index, block) in blocks.iter().enumerate().skip(1) {
        if !meets_hex_difficulty(&block.hash, difficulty.get()) {
            return Err(ChainError::InsufficientWork {
                index,
                required: difficulty.get(),
                found: leading_hex_zeros(&block.hash),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{mine, BlockPayload};
    use chrono::Utc;

    fn sealed_chain(len: usize, difficulty: Difficulty) -> Vec<Block> {
        let mut blocks = vec![Block::genesis(Utc::now())];
        for i in 1..len {
            let prev = blocks[i - 1].hash.clone();
            let mut block = Block::unsealed(
                BlockPayload::transfer("Alice", "Bob", i as f64),
                prev,
                Utc::now(),
            );
            mine(&mut block, difficulty);
            blocks.push(block);
        }
        blocks
    }

    #[test]
    fn test_single_genesis_is_intact() {
        let blocks = vec![Block::genesis(Utc::now())];
        assert!(check_integrity(&blocks).is_ok());
        assert!(check_proof_of_work(&blocks, Difficulty::new(4).unwrap()).is_ok());
    }

    #[test]
    fn test_sealed_chain_is_intact() {
        let difficulty = Difficulty::new(1).unwrap();
        let blocks = sealed_chain(4, difficulty);
        assert!(check_integrity(&blocks).is_ok());
        assert!(check_proof_of_work(&blocks, difficulty).is_ok());
    }

    #[test]
    fn test_digest_mismatch_reports_index() {
        let mut blocks = sealed_chain(4, Difficulty::new(1).unwrap());
        blocks[2].payload = BlockPayload::transfer("Mallory", "Bob", 1000.0);

        let err = check_integrity(&blocks).unwrap_err();
        assert!(matches!(err, ChainError::DigestMismatch { index: 2, .. }));
    }

    #[test]
    fn test_linkage_mismatch_reports_index() {
        let mut blocks = sealed_chain(3, Difficulty::ZERO);
        // Re-seal block 2 on top of a foreign parent so its digest is valid.
        blocks[2].prev_hash = "foreign".to_string();
        mine(&mut blocks[2], Difficulty::ZERO);

        let err = check_integrity(&blocks).unwrap_err();
        assert!(matches!(err, ChainError::LinkageMismatch { index: 2, .. }));
    }

    #[test]
    fn test_insufficient_work_is_separate_from_integrity() {
        let blocks = sealed_chain(3, Difficulty::ZERO);
        let claimed = Difficulty::new(64).unwrap();

        assert!(check_integrity(&blocks).is_ok());
        assert!(matches!(
            check_proof_of_work(&blocks, claimed),
            Err(ChainError::InsufficientWork {
                index: 1,
                required: 64,
                ..
            })
        ));
    }
}
