//! Contract payloads
//!
//! A contract is stored in a block as a tagged value. The chain never runs
//! it; callers that want the side effect call [`Contract::execute`], which
//! resolves the kind through a static capability table.

use crate::error::ContractError;
use serde::{Deserialize, Serialize};

/// Contract kinds known to the capability table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractKind {
    /// Token transfer between two parties
    TokenTransfer,
}

/// Executable contract reference
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract", rename_all = "snake_case")]
pub enum Contract {
    /// Move `amount` tokens from `from` to `to`
    TokenTransfer(TokenTransfer),
}

/// Token transfer arguments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenTransfer {
    /// Sender
    pub from: String,
    /// Recipient
    pub to: String,
    /// Amount moved
    pub amount: f64,
}

type ExecuteFn = fn(&Contract) -> Result<(), ContractError>;

const CAPABILITIES: &[(ContractKind, ExecuteFn)] =
    &[(ContractKind::TokenTransfer, execute_token_transfer as ExecuteFn)];

impl Contract {
    /// Convenience constructor for a token transfer
    pub fn token_transfer(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self::TokenTransfer(TokenTransfer {
            from: from.into(),
            to: to.into(),
            amount,
        })
    }

    /// Kind used for capability lookup
    pub fn kind(&self) -> ContractKind {
        match self {
            Self::TokenTransfer(_) => ContractKind::TokenTransfer,
        }
    }

    /// Run the contract's single capability
    pub fn execute(&self) -> Result<(), ContractError> {
        let kind = self.kind();
        let (_, run) = CAPABILITIES
            .iter()
            .find(|(registered, _)| *registered == kind)
            .ok_or(ContractError::Unsupported(kind))?;
        run(self)
    }
}

fn execute_token_transfer(contract: &Contract) -> Result<(), ContractError> {
    match contract {
        Contract::TokenTransfer(transfer) => {
            if transfer.from.is_empty() {
                return Err(ContractError::MissingParty("from"));
            }
            if transfer.to.is_empty() {
                return Err(ContractError::MissingParty("to"));
            }
            if !transfer.amount.is_finite() || transfer.amount < 0.0 {
                return Err(ContractError::InvalidAmount(transfer.amount));
            }
            // Balances are not tracked on this chain.
            tracing::debug!(
                from = %transfer.from,
                to = %transfer.to,
                amount = transfer.amount,
                "Token transfer executed"
            );
            Ok(())
        }
    }
}
