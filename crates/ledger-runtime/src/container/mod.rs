//! # Ledger Container
//!
//! Owns the shared subsystem instances. Every handle is passed explicitly;
//! nothing here is a process-wide singleton.

pub mod config;

pub use config::{load_config, ConfigError, RuntimeConfig};

use lc_01_hash_chain::SharedChain;
use lc_02_order_ledger::LedgerRegistry;
use std::sync::Arc;
use tracing::info;

/// Shared subsystem handles.
#[derive(Clone, Debug)]
pub struct LedgerContainer {
    /// Hash chain behind its single lock.
    pub chain: SharedChain,
    /// Order registry.
    pub orders: Arc<LedgerRegistry>,
}

impl LedgerContainer {
    /// Validate `config` and build fresh, empty subsystems.
    pub fn new(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        let difficulty = config.validate()?;
        info!(difficulty = difficulty.get(), "Initializing ledger subsystems");

        Ok(Self {
            chain: SharedChain::with_difficulty(difficulty),
            orders: Arc::new(LedgerRegistry::new()),
        })
    }
}
