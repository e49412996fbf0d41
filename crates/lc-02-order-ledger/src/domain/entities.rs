//! # Domain Entities
//!
//! Core entities for the Order Ledger subsystem.

use super::errors::{ActorId, OrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Role given to the order owner at creation.
pub const OWNER_ROLE: &str = "client";

/// Status of a freshly created order.
pub const INITIAL_STATUS: &str = "created";

/// Stored audit event. `message` is always ciphertext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the mutation happened.
    pub time: DateTime<Utc>,
    /// Who performed it.
    pub actor: ActorId,
    /// hex(IV || AES-256-CFB ciphertext) of the audit message.
    pub message: String,
}

/// Decrypted audit event returned to authorized readers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// When the mutation happened.
    pub time: DateTime<Utc>,
    /// Who performed it.
    pub actor: ActorId,
    /// Plaintext audit message.
    pub message: String,
}

/// Mutations that produce an audit event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditAction<'a> {
    /// Order was created.
    Created,
    /// Owner assigned `role` to `actor`.
    RoleAdded {
        /// Actor receiving the role
        actor: &'a str,
        /// Role label
        role: &'a str,
    },
    /// Owner invited a watcher.
    WatcherAdded {
        /// Invited watcher
        watcher: &'a str,
    },
    /// An actor changed the status.
    StatusUpdated {
        /// New status label
        status: &'a str,
    },
    /// An actor requested an add-on.
    AddonAdded {
        /// Add-on details
        details: &'a str,
    },
}

impl fmt::Display for AuditAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("order created"),
            Self::RoleAdded { actor, role } => write!(f, "added role {role} for {actor}"),
            Self::WatcherAdded { watcher } => write!(f, "added watcher {watcher}"),
            Self::StatusUpdated { status } => write!(f, "status updated to {status}"),
            Self::AddonAdded { details } => write!(f, "add-on: {details}"),
        }
    }
}

/// Mutable part of an order, guarded by the order's lock.
#[derive(Clone, Debug)]
pub(crate) struct OrderState {
    pub(crate) actors: BTreeMap<ActorId, String>,
    pub(crate) status: String,
    pub(crate) events: Vec<Event>,
    pub(crate) add_ons: Vec<String>,
    pub(crate) watchers: BTreeSet<ActorId>,
}

impl OrderState {
    pub(crate) fn new(owner: &str) -> Self {
        let mut actors = BTreeMap::new();
        actors.insert(owner.to_string(), OWNER_ROLE.to_string());
        Self {
            actors,
            status: INITIAL_STATUS.to_string(),
            events: Vec::new(),
            add_ons: Vec::new(),
            watchers: BTreeSet::new(),
        }
    }
}

/// Serializable view of an order.
///
/// Carries every field except the encryption key; events stay encrypted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Order identifier.
    pub id: OrderId,
    /// Creator of the order.
    pub owner: ActorId,
    /// Actor to role assignments.
    pub actors: BTreeMap<ActorId, String>,
    /// Free-form status label.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Encrypted audit trail, oldest first.
    pub events: Vec<Event>,
    /// Add-on requests, oldest first.
    pub add_ons: Vec<String>,
    /// Read-only observers.
    pub watchers: BTreeSet<ActorId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_messages() {
        assert_eq!(AuditAction::Created.to_string(), "order created");
        assert_eq!(
            AuditAction::RoleAdded {
                actor: "bob",
                role: "supplier"
            }
            .to_string(),
            "added role supplier for bob"
        );
        assert_eq!(
            AuditAction::WatcherAdded { watcher: "carol" }.to_string(),
            "added watcher carol"
        );
        assert_eq!(
            AuditAction::StatusUpdated { status: "shipped" }.to_string(),
            "status updated to shipped"
        );
        assert_eq!(
            AuditAction::AddonAdded { details: "gift wrap" }.to_string(),
            "add-on: gift wrap"
        );
    }

    #[test]
    fn test_initial_state() {
        let state = OrderState::new("alice");
        assert_eq!(state.actors.len(), 1);
        assert_eq!(state.actors["alice"], OWNER_ROLE);
        assert_eq!(state.status, INITIAL_STATUS);
        assert!(state.events.is_empty());
        assert!(state.watchers.is_empty());
    }
}
