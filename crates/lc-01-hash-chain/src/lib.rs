//! # Ledger Core - Hash-Chain Ledger (Subsystem 1)
//!
//! **Bounded Context:** Block sealing & chain integrity
//! **Architecture:** DDD + Hexagonal
//!
//! ## Purpose
//!
//! Seals an ordered sequence of transaction blocks with proof-of-work so
//! that any retroactive edit is detectable:
//! - Integrity codec: SHA-256 over `prev_hash || payload || timestamp || nonce`
//! - Mining engine: nonce search until the hex digest has `difficulty`
//!   leading zeros
//! - Validation: digest and linkage scan from block 1 onward
//!
//! ## Critical Invariants
//!
//! 1. **Genesis**: `blocks[0].hash == "0"`, never checked against a predecessor
//! 2. **Digest Integrity**: `blocks[i].hash == digest(blocks[i])`
//! 3. **Linkage**: `blocks[i].prev_hash == blocks[i-1].hash`
//! 4. **Proof of Work**: holds right after mining, but [`Chain::validate`]
//!    does NOT re-check it. Use [`Chain::check_proof_of_work`] when that
//!    assurance matters.
//!
//! ## Concurrency
//!
//! [`Chain`] has no internal lock. Share it through [`SharedChain`], which
//! serializes appends and validation behind one mutex. Mining is blocking
//! and cannot be cancelled; difficulty is the only control on its duration.
//!
//! ## Volatility
//!
//! The chain lives only in process memory. A restart loses it.
//!
//! ## Module Structure
//!
//! - [`domain`]: Block, payloads, contracts, digest, miner, invariants
//! - [`service`]: [`Chain`]
//! - [`ports`]: [`HashChainApi`]
//! - [`adapters`]: [`SharedChain`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

mod config;
mod error;

pub use config::{ChainConfig, DEFAULT_DIFFICULTY};
pub use error::{ChainError, ContractError, Result};

// Re-export commonly used types
pub use domain::{
    canonical_payload, check_integrity, check_proof_of_work, digest, mine, Block, BlockPayload,
    Contract, ContractKind, Difficulty, MiningStats, TokenTransfer, GENESIS_HASH, MAX_DIFFICULTY,
};

pub use adapters::SharedChain;
pub use ports::HashChainApi;
pub use service::Chain;

/// Subsystem identifier
pub const SUBSYSTEM_ID: u8 = 1;
