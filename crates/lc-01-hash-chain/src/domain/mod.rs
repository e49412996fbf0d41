//! Domain layer - Pure logic for the hash chain
//!
//! No I/O and no locking here. Mining blocks the calling thread.
//!
//! ## Entities
//!
//! - [`Block`]: sealed block with a tagged [`BlockPayload`]
//! - [`Difficulty`]: bounded proof-of-work target
//! - [`Contract`]: executable payload resolved through a capability table
//!
//! ## Services
//!
//! - [`digest`]: integrity codec
//! - [`mine`]: nonce search
//!
//! ## Invariants
//!
//! 1. Digest integrity (stored hash == recomputed digest)
//! 2. Linkage (prev_hash == predecessor hash)
//! 3. Proof of work (checked separately, not part of validation)

pub mod contracts;
mod codec;
mod entities;
pub mod invariants;
mod mining;

pub use contracts::{Contract, ContractKind, TokenTransfer};
pub use codec::{canonical_payload, digest};
pub use entities::*;
pub use invariants::{check_integrity, check_proof_of_work};
pub use mining::{mine, MiningStats};
