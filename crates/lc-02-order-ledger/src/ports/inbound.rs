//! Inbound ports (driving side - API)
//!
//! Consumed by an outer request layer that has already resolved the
//! caller to an opaque actor identifier.

use crate::domain::{EventRecord, Result};
use crate::order::Order;
use std::sync::Arc;

/// Primary port: order ledger addressed by order id
pub trait OrderLedgerApi: Send + Sync {
    /// Create and register a new order owned by `owner`
    fn create_order(&self, owner: &str) -> Arc<Order>;

    /// Resolve an order by id
    fn lookup(&self, order_id: &str) -> Result<Arc<Order>>;

    /// Owner assigns `role` to `actor`
    fn add_role(&self, order_id: &str, caller: &str, actor: &str, role: &str) -> Result<()>;

    /// Owner invites a read-only watcher
    fn add_watcher(&self, order_id: &str, caller: &str, watcher: &str) -> Result<()>;

    /// Any actor with a role sets the status
    fn update_status(&self, order_id: &str, caller: &str, status: &str) -> Result<()>;

    /// Any actor with a role records an add-on
    fn add_addon(&self, order_id: &str, caller: &str, details: &str) -> Result<()>;

    /// Decrypted audit trail for an authorized reader
    fn get_events(&self, order_id: &str, requester: &str) -> Result<Vec<EventRecord>>;

    /// Every registered order, oldest first
    fn list_orders(&self) -> Vec<Arc<Order>>;
}
