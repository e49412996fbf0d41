//! # Order Ledger - Permissioned Orders (Subsystem 2)
//!
//! **Bounded Context:** Order lifecycle, role-based authorization, audit trail
//! **Architecture:** DDD + Hexagonal
//!
//! ## Purpose
//!
//! Tracks orders shared between several parties. Every order has an owner,
//! role assignments, a free-form status, add-on requests and read-only
//! watchers. Each mutation appends an audit event whose message is
//! encrypted under a key private to that order.
//!
//! ## Authorization
//!
//! | Operation | Allowed | Error |
//! |-----------|---------|-------|
//! | `add_role`, `add_watcher` | owner | [`LedgerError::NotOwner`] |
//! | `update_status`, `add_addon` | any actor with a role | [`LedgerError::UnauthorizedActor`] |
//! | `events_for` | owner, actors, watchers | [`LedgerError::Unauthorized`] |
//!
//! ## Critical Invariants
//!
//! 1. **Owner Role**: the owner holds role `"client"` from creation
//! 2. **Append Only**: events are never edited or removed
//! 3. **No Denied Events**: a failed check appends nothing and changes nothing
//! 4. **Ciphertext at Rest**: stored events and snapshots carry only
//!    `hex(IV || ciphertext)`; plaintext appears only in [`EventRecord`]
//! 5. **Key Confinement**: the key never leaves its [`Order`]
//!
//! ## Concurrency
//!
//! One lock per order, held for the whole operation. One lock over the
//! registry map, released before any order lock is taken.
//!
//! ## Volatility
//!
//! Orders and their keys live only in memory. A restart loses both, and
//! with them any way to decrypt earlier events.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod order;
pub mod ports;
pub mod registry;

pub use domain::{
    ActorId, AuditAction, Event, EventRecord, LedgerError, OrderId, OrderSnapshot, Result,
    INITIAL_STATUS, OWNER_ROLE,
};
pub use order::{new_order_id, Order};
pub use ports::OrderLedgerApi;
pub use registry::LedgerRegistry;

/// Subsystem identifier
pub const SUBSYSTEM_ID: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_id() {
        assert_eq!(SUBSYSTEM_ID, 2);
    }

    #[test]
    fn test_constants() {
        assert_eq!(OWNER_ROLE, "client");
        assert_eq!(INITIAL_STATUS, "created");
    }
}
