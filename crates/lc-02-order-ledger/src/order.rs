//! # Order
//!
//! One permissioned ledger entry. Every operation takes the order's own
//! lock for its full duration, so operations on different orders run in
//! parallel while operations on the same order are strictly serialized.
//! Failed authorization checks return before anything is recorded.

use crate::domain::{
    authorize_actor, authorize_owner, authorize_reader, is_participant, ActorId, AuditAction,
    Event, EventRecord, OrderId, OrderSnapshot, OrderState, Result,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use shared_crypto::{decrypt_string, encrypt, SecretKey};
use tracing::{info, warn};
use uuid::Uuid;

/// A permissioned order with an encrypted, append-only audit trail.
///
/// The encryption key is generated at creation, kept only in memory, and
/// never leaves this struct. Dropping the order loses the ability to read
/// its events.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    owner: ActorId,
    created_at: DateTime<Utc>,
    key: SecretKey,
    state: Mutex<OrderState>,
}

/// Generate a fresh order identifier (UUID v4, 32 hex chars).
pub fn new_order_id() -> OrderId {
    Uuid::new_v4().simple().to_string()
}

impl Order {
    /// Create an order owned by `owner` with a random id and key.
    ///
    /// The owner holds the `"client"` role and the trail starts with a
    /// single "order created" event.
    pub fn new(owner: &str) -> Self {
        Self::with_id(new_order_id(), owner)
    }

    pub(crate) fn with_id(id: OrderId, owner: &str) -> Self {
        let order = Self {
            id,
            owner: owner.to_string(),
            created_at: Utc::now(),
            key: SecretKey::generate(),
            state: Mutex::new(OrderState::new(owner)),
        };
        {
            let mut state = order.state.lock();
            order.record(&mut state, owner, AuditAction::Created);
        }
        order
    }

    /// Order identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creator of the order.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current status label.
    pub fn status(&self) -> String {
        self.state.lock().status.clone()
    }

    /// Number of recorded audit events.
    pub fn event_count(&self) -> usize {
        self.state.lock().events.len()
    }

    /// Owner or an actor holding any role.
    pub fn is_participant(&self, user: &str) -> bool {
        is_participant(&self.owner, &self.state.lock(), user)
    }

    /// Assign `role` to `actor`. Owner only.
    pub fn add_role(&self, caller: &str, actor: &str, role: &str) -> Result<()> {
        let mut state = self.state.lock();
        authorize_owner(&self.id, &self.owner, caller).inspect_err(|e| self.denied(e))?;

        state.actors.insert(actor.to_string(), role.to_string());
        self.record(&mut state, caller, AuditAction::RoleAdded { actor, role });
        info!(order_id = %self.id, caller, actor, "Role assigned");
        Ok(())
    }

    /// Grant `watcher` read access to the audit trail. Owner only.
    pub fn add_watcher(&self, caller: &str, watcher: &str) -> Result<()> {
        let mut state = self.state.lock();
        authorize_owner(&self.id, &self.owner, caller).inspect_err(|e| self.denied(e))?;

        state.watchers.insert(watcher.to_string());
        self.record(&mut state, caller, AuditAction::WatcherAdded { watcher });
        info!(order_id = %self.id, caller, watcher, "Watcher added");
        Ok(())
    }

    /// Set a new status. Any actor with a role; no transition rules apply.
    pub fn update_status(&self, caller: &str, status: &str) -> Result<()> {
        let mut state = self.state.lock();
        authorize_actor(&self.id, &state, caller).inspect_err(|e| self.denied(e))?;

        state.status = status.to_string();
        self.record(&mut state, caller, AuditAction::StatusUpdated { status });
        info!(order_id = %self.id, caller, "Status updated");
        Ok(())
    }

    /// Record an add-on request. Any actor with a role.
    pub fn add_addon(&self, caller: &str, details: &str) -> Result<()> {
        let mut state = self.state.lock();
        authorize_actor(&self.id, &state, caller).inspect_err(|e| self.denied(e))?;

        state.add_ons.push(details.to_string());
        self.record(&mut state, caller, AuditAction::AddonAdded { details });
        info!(order_id = %self.id, caller, "Add-on recorded");
        Ok(())
    }

    /// Decrypt the audit trail for an owner, actor or watcher.
    ///
    /// Events come back oldest first. A single undecryptable event fails
    /// the whole read with `MalformedCiphertext`.
    pub fn events_for(&self, requester: &str) -> Result<Vec<EventRecord>> {
        let state = self.state.lock();
        authorize_reader(&self.id, &self.owner, &state, requester)
            .inspect_err(|e| self.denied(e))?;

        state
            .events
            .iter()
            .map(|event| {
                Ok(EventRecord {
                    time: event.time,
                    actor: event.actor.clone(),
                    message: decrypt_string(&self.key, &event.message)?,
                })
            })
            .collect()
    }

    /// Serializable view; events stay encrypted and the key is omitted.
    pub fn snapshot(&self) -> OrderSnapshot {
        let state = self.state.lock();
        OrderSnapshot {
            id: self.id.clone(),
            owner: self.owner.clone(),
            actors: state.actors.clone(),
            status: state.status.clone(),
            created_at: self.created_at,
            events: state.events.clone(),
            add_ons: state.add_ons.clone(),
            watchers: state.watchers.clone(),
        }
    }

    fn record(&self, state: &mut OrderState, actor: &str, action: AuditAction<'_>) {
        let message = encrypt(&self.key, action.to_string().as_bytes());
        state.events.push(Event {
            time: Utc::now(),
            actor: actor.to_string(),
            message,
        });
    }

    fn denied(&self, error: &crate::domain::LedgerError) {
        warn!(order_id = %self.id, error = %error, "Order operation denied");
    }
}
