//! Mining engine
//!
//! Brute-force nonce search. Runs to completion on the calling thread with
//! no timeout or cancellation; expected work grows as `16^difficulty`.

use super::codec::DigestInput;
use super::entities::{short_hash, Block, Difficulty};
use shared_crypto::meets_hex_difficulty;
use std::time::{Duration, Instant};

/// Statistics from one mining run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiningStats {
    /// Number of digests computed
    pub attempts: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Seal `block` in place so its hash meets `difficulty`
///
/// Each attempt increments the nonce and recomputes the hash, so difficulty
/// zero still performs exactly one digest.
#[tracing::instrument(skip(block), fields(prev = %short_hash(&block.prev_hash)))]
pub fn mine(block: &mut Block, difficulty: Difficulty) -> MiningStats {
    let input = DigestInput::new(block);
    let started = Instant::now();
    let mut attempts = 0u64;

    loop {
        block.nonce = block.nonce.wrapping_add(1);
        block.hash = input.digest_with_nonce(block.nonce);
        attempts += 1;

        if meets_hex_difficulty(&block.hash, difficulty.get()) {
            break;
        }
    }

    let stats = MiningStats {
        attempts,
        elapsed: started.elapsed(),
    };

    tracing::debug!(
        nonce = block.nonce,
        attempts = stats.attempts,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        hash = %short_hash(&block.hash),
        "Block mined"
    );

    stats
}
