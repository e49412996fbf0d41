//! # Domain Errors
//!
//! Error types for the Order Ledger subsystem.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Actor identifier, opaque to the ledger.
pub type ActorId = String;

/// Order identifier (32 lowercase hex characters).
pub type OrderId = String;

/// Result type alias for order ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Order ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Owner-only action attempted by someone else.
    #[error("Not order owner: {caller} cannot manage order {order_id}")]
    NotOwner {
        /// Order being managed
        order_id: OrderId,
        /// Actor that attempted the action
        caller: ActorId,
    },

    /// Mutation attempted by a party with no role on the order.
    #[error("Unauthorized actor: {caller} has no role on order {order_id}")]
    UnauthorizedActor {
        /// Order being mutated
        order_id: OrderId,
        /// Actor that attempted the mutation
        caller: ActorId,
    },

    /// Event read by a non-participant, non-watcher.
    #[error("Unauthorized: {requester} cannot read events of order {order_id}")]
    Unauthorized {
        /// Order being read
        order_id: OrderId,
        /// Actor that attempted the read
        requester: ActorId,
    },

    /// Unknown order identifier.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// Order identifier already registered.
    #[error("Duplicate order: {0}")]
    DuplicateOrder(OrderId),

    /// Stored audit event could not be decrypted.
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}

impl LedgerError {
    /// Check if error is an authorization denial.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotOwner { .. } | Self::UnauthorizedActor { .. } | Self::Unauthorized { .. }
        )
    }
}

impl From<CryptoError> for LedgerError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::MalformedCiphertext(reason) => Self::MalformedCiphertext(reason),
            other => Self::MalformedCiphertext(other.to_string()),
        }
    }
}
