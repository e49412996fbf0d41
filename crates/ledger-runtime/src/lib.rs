//! # Ledger Runtime
//!
//! Wires the hash chain (lc-01) and the order ledger (lc-02) into one
//! process and runs the demo flow.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then environment)
//! 2. Install logging
//! 3. Validate configuration and build the [`LedgerContainer`]
//! 4. Run the demo flow and print the report as JSON
//!
//! ## Blocking Work
//!
//! Mining is CPU-bound and cannot be cancelled. Appends go through
//! `tokio::task::spawn_blocking` so the async executor keeps running
//! while a block is sealed.

pub mod container;

pub use container::{load_config, ConfigError, LedgerContainer, RuntimeConfig};

use anyhow::{Context, Result};
use lc_01_hash_chain::{Block, HashChainApi};
use lc_02_order_ledger::{EventRecord, OrderLedgerApi, OrderSnapshot};
use serde::Serialize;
use tracing::{info, warn};

/// Transfers appended by the demo flow.
pub const DEMO_TRANSFERS: [(&str, &str, f64); 2] = [("Alice", "Bob", 2.0), ("John", "Bob", 3.0)];

/// Everything the demo flow produced.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Result of validating the chain after the appends.
    pub chain_valid: bool,
    /// Sealed blocks, genesis first.
    pub blocks: Vec<Block>,
    /// The demo order with events still encrypted.
    pub order: OrderSnapshot,
    /// The same events decrypted for the watcher.
    pub watcher_events: Vec<EventRecord>,
}

/// The ledger runtime.
pub struct LedgerRuntime {
    config: RuntimeConfig,
    container: LedgerContainer,
}

impl LedgerRuntime {
    /// Validate `config` and build empty subsystems.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let container = LedgerContainer::new(&config).context("Invalid runtime configuration")?;
        Ok(Self { config, container })
    }

    /// Active configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Shared subsystem handles.
    pub fn container(&self) -> &LedgerContainer {
        &self.container
    }

    /// Mine and append a transfer on the blocking pool.
    pub async fn append_transfer(&self, from: &str, to: &str, amount: f64) -> Result<Block> {
        let chain = self.container.chain.clone();
        let (from, to) = (from.to_string(), to.to_string());
        tokio::task::spawn_blocking(move || chain.append_transfer(&from, &to, amount))
            .await
            .context("Mining task failed")
    }

    /// Run the demo: two transfers, validation, and one order lifecycle.
    pub async fn run_demo(&self) -> Result<DemoReport> {
        for (from, to, amount) in DEMO_TRANSFERS {
            let block = self.append_transfer(from, to, amount).await?;
            info!(hash = %block.hash, nonce = block.nonce, "Block sealed");
        }

        let chain_valid = self.container.chain.validate();
        if chain_valid {
            info!(blocks = self.container.chain.len(), "Chain is valid");
        } else {
            warn!("Chain failed validation");
        }

        let (order, watcher_events) = self.order_scenario()?;

        Ok(DemoReport {
            chain_valid,
            blocks: self.container.chain.blocks(),
            order,
            watcher_events,
        })
    }

    fn order_scenario(&self) -> Result<(OrderSnapshot, Vec<EventRecord>)> {
        let orders = &self.container.orders;
        let order = orders.create_order("alice");
        let id = order.id();

        orders
            .add_role(id, "alice", "bob", "supplier")
            .context("Owner could not assign a role")?;
        if let Err(e) = orders.add_role(id, "mallory", "carol", "watcher") {
            info!(error = %e, "Non-owner role assignment rejected");
        }
        orders
            .update_status(id, "bob", "shipped")
            .context("Supplier could not update status")?;
        orders
            .add_watcher(id, "alice", "carol")
            .context("Owner could not add a watcher")?;

        let events = orders
            .get_events(id, "carol")
            .context("Watcher could not read events")?;
        Ok((order.snapshot(), events))
    }
}
