//! Ports for the Order Ledger subsystem

pub mod inbound;

pub use inbound::OrderLedgerApi;
