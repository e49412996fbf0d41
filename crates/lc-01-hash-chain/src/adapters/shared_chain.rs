//! Shared Chain Adapter
//!
//! Implements `HashChainApi` over one [`Chain`] behind a single lock.
//! The lock is held across mining, so appends on the same chain are
//! strictly serialized and `prev_hash` linkage cannot interleave.

use crate::domain::{Block, Contract, Difficulty};
use crate::ports::HashChainApi;
use crate::service::Chain;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a lock-guarded chain.
#[derive(Clone, Debug)]
pub struct SharedChain {
    inner: Arc<Mutex<Chain>>,
}

impl SharedChain {
    /// Wrap an existing chain.
    pub fn new(chain: Chain) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chain)),
        }
    }

    /// Create a fresh chain at `difficulty`.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(Chain::new(difficulty))
    }

    /// Run `f` with shared access to the chain while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Chain) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Clone the current chain state.
    pub fn snapshot(&self) -> Chain {
        self.inner.lock().clone()
    }
}

impl HashChainApi for SharedChain {
    fn append_transfer(&self, from: &str, to: &str, amount: f64) -> Block {
        self.inner.lock().append(from, to, amount).clone()
    }

    fn append_contract(&self, contract: Contract) -> Block {
        self.inner.lock().append_contract(contract).clone()
    }

    fn validate(&self) -> bool {
        self.inner.lock().validate()
    }

    fn blocks(&self) -> Vec<Block> {
        self.inner.lock().blocks().to_vec()
    }

    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn difficulty(&self) -> Difficulty {
        self.inner.lock().difficulty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_through_handle() {
        let shared = SharedChain::with_difficulty(Difficulty::new(1).unwrap());
        let block = shared.append_transfer("Alice", "Bob", 2.0);

        assert_eq!(shared.len(), 2);
        assert_eq!(shared.blocks()[1], block);
        assert!(shared.validate());
    }

    #[test]
    fn test_clones_share_state() {
        let a = SharedChain::with_difficulty(Difficulty::ZERO);
        let b = a.clone();
        a.append_transfer("A", "B", 1.0);

        assert_eq!(b.len(), 2);
        assert_eq!(b.read(|chain| chain.len()), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedChain::with_difficulty(Difficulty::ZERO);
        let before = shared.snapshot();
        shared.append_transfer("A", "B", 1.0);

        assert_eq!(before.len(), 1);
        assert_eq!(shared.len(), 2);
    }
}
