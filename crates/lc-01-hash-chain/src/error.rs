//! Error types for the hash-chain subsystem

use crate::domain::ContractKind;
use thiserror::Error;

/// Result type alias for hash-chain operations
pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors that can occur while building or checking a chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Difficulty outside the range a hex digest can satisfy
    #[error("Invalid difficulty {requested}: must be at most {max}")]
    InvalidDifficulty {
        /// Requested leading-zero count
        requested: usize,
        /// Largest satisfiable value
        max: usize,
    },

    /// A chain needs at least its genesis block
    #[error("Chain has no genesis block")]
    EmptyChain,

    /// Stored hash does not match the recomputed digest
    #[error("Block {index} hash mismatch: stored {stored}, computed {computed}")]
    DigestMismatch {
        /// Position of the block in the chain
        index: usize,
        /// Hash recorded in the block
        stored: String,
        /// Hash recomputed from the block contents
        computed: String,
    },

    /// Block does not point at its predecessor
    #[error("Block {index} prev_hash mismatch: expected {expected}, found {found}")]
    LinkageMismatch {
        /// Position of the block in the chain
        index: usize,
        /// Hash of the predecessor
        expected: String,
        /// prev_hash recorded in the block
        found: String,
    },

    /// Block hash does not meet the chain difficulty
    #[error("Block {index} has {found} leading zeros, difficulty requires {required}")]
    InsufficientWork {
        /// Position of the block in the chain
        index: usize,
        /// Chain difficulty
        required: usize,
        /// Leading zeros actually present
        found: usize,
    },
}

impl ChainError {
    /// Check if error indicates retroactive tampering with sealed blocks
    pub fn is_tampering(&self) -> bool {
        matches!(
            self,
            Self::DigestMismatch { .. } | Self::LinkageMismatch { .. }
        )
    }

    /// Index of the offending block, if the error concerns one
    pub fn block_index(&self) -> Option<usize> {
        match self {
            Self::DigestMismatch { index, .. }
            | Self::LinkageMismatch { index, .. }
            | Self::InsufficientWork { index, .. } => Some(*index),
            Self::InvalidDifficulty { .. } | Self::EmptyChain => None,
        }
    }
}

/// Errors raised when a contract payload is executed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    /// Transfer amount is negative or not a finite number
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(f64),

    /// A required party is empty
    #[error("Missing contract party: {0}")]
    MissingParty(&'static str),

    /// No capability registered for this contract kind
    #[error("Unsupported contract kind: {0:?}")]
    Unsupported(ContractKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tampering_classification() {
        let digest = ChainError::DigestMismatch {
            index: 1,
            stored: "00ab".into(),
            computed: "00cd".into(),
        };
        let work = ChainError::InsufficientWork {
            index: 2,
            required: 3,
            found: 1,
        };

        assert!(digest.is_tampering());
        assert!(!work.is_tampering());
        assert!(!ChainError::EmptyChain.is_tampering());
    }

    #[test]
    fn test_block_index() {
        let err = ChainError::LinkageMismatch {
            index: 4,
            expected: "a".into(),
            found: "b".into(),
        };
        assert_eq!(err.block_index(), Some(4));
        assert_eq!(ChainError::EmptyChain.block_index(), None);
    }

    #[test]
    fn test_difficulty_message() {
        let err = ChainError::InvalidDifficulty {
            requested: 65,
            max: 64,
        };
        assert!(err.to_string().contains("65"));
        assert!(err.to_string().contains("64"));
    }
}
