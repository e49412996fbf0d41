//! # Domain Module
//!
//! Core domain types and authorization rules for the Order Ledger.

pub(crate) mod authorization;
pub mod entities;
pub mod errors;

pub(crate) use authorization::{authorize_actor, authorize_owner, authorize_reader, is_participant};
pub use entities::*;
pub use errors::*;
