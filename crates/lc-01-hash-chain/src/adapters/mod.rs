//! Adapters implementing the hash-chain ports

pub mod shared_chain;

pub use shared_chain::SharedChain;
