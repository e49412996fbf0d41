//! # Ledger Registry
//!
//! Concurrency-safe map from order id to [`Order`]. One lock covers the
//! map; it is never held while an order's own lock is taken, so a slow
//! operation on one order never blocks lookups of another.
//!
//! Orders are never removed.

use crate::domain::{EventRecord, LedgerError, OrderId, Result};
use crate::order::{new_order_id, Order};
use crate::ports::OrderLedgerApi;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory order registry.
#[derive(Debug, Default)]
pub struct LedgerRegistry {
    orders: Mutex<HashMap<OrderId, Arc<Order>>>,
}

impl LedgerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order owned by `owner` and register it.
    ///
    /// The order is built outside the lock. A colliding id is replaced by
    /// a fresh one, so creation never fails.
    pub fn create_order(&self, owner: &str) -> Arc<Order> {
        let mut id = new_order_id();
        loop {
            let candidate = Order::with_id(id, owner);
            let inserted = match self.orders.lock().entry(candidate.id().to_string()) {
                Entry::Vacant(slot) => Some(Arc::clone(slot.insert(Arc::new(candidate)))),
                Entry::Occupied(slot) => {
                    debug!(order_id = %slot.key(), "Order id collision, regenerating");
                    None
                }
            };
            match inserted {
                Some(order) => {
                    info!(order_id = %order.id(), owner, "Order created");
                    return order;
                }
                None => id = new_order_id(),
            }
        }
    }

    /// Register an order built elsewhere.
    pub fn insert(&self, order: Order) -> Result<Arc<Order>> {
        let mut orders = self.orders.lock();
        match orders.entry(order.id().to_string()) {
            Entry::Occupied(slot) => Err(LedgerError::DuplicateOrder(slot.key().clone())),
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(Arc::new(order)))),
        }
    }

    /// Resolve an order by id.
    pub fn lookup(&self, order_id: &str) -> Result<Arc<Order>> {
        self.orders
            .lock()
            .get(order_id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(order_id.to_string()))
    }

    /// Every order, oldest first.
    pub fn list_orders(&self) -> Vec<Arc<Order>> {
        let mut orders: Vec<_> = self.orders.lock().values().cloned().collect();
        orders.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        orders
    }

    /// Number of registered orders.
    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    /// True when no order has been created.
    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

// The registry lock is released inside `lookup` before any order lock is taken.
impl OrderLedgerApi for LedgerRegistry {
    fn create_order(&self, owner: &str) -> Arc<Order> {
        LedgerRegistry::create_order(self, owner)
    }

    fn lookup(&self, order_id: &str) -> Result<Arc<Order>> {
        LedgerRegistry::lookup(self, order_id)
    }

    fn add_role(&self, order_id: &str, caller: &str, actor: &str, role: &str) -> Result<()> {
        self.lookup(order_id)?.add_role(caller, actor, role)
    }

    fn add_watcher(&self, order_id: &str, caller: &str, watcher: &str) -> Result<()> {
        self.lookup(order_id)?.add_watcher(caller, watcher)
    }

    fn update_status(&self, order_id: &str, caller: &str, status: &str) -> Result<()> {
        self.lookup(order_id)?.update_status(caller, status)
    }

    fn add_addon(&self, order_id: &str, caller: &str, details: &str) -> Result<()> {
        self.lookup(order_id)?.add_addon(caller, details)
    }

    fn get_events(&self, order_id: &str, requester: &str) -> Result<Vec<EventRecord>> {
        self.lookup(order_id)?.events_for(requester)
    }

    fn list_orders(&self) -> Vec<Arc<Order>> {
        LedgerRegistry::list_orders(self)
    }
}
