//! # Authorization Rules
//!
//! Pure checks evaluated under the order lock before any mutation.
//!
//! | Operation | Allowed callers | Denial |
//! |-----------|-----------------|--------|
//! | add role, add watcher | owner | `NotOwner` |
//! | update status, add add-on | any actor with a role | `UnauthorizedActor` |
//! | read events | owner, actors, watchers | `Unauthorized` |
//!
//! The role value is never inspected; holding any role is enough.

use super::entities::OrderState;
use super::errors::{LedgerError, Result};

/// Owner or any actor with a role.
pub(crate) fn is_participant(owner: &str, state: &OrderState, user: &str) -> bool {
    user == owner || state.actors.contains_key(user)
}

/// Owner-only operations.
pub(crate) fn authorize_owner(order_id: &str, owner: &str, caller: &str) -> Result<()> {
    if caller != owner {
        return Err(LedgerError::NotOwner {
            order_id: order_id.to_string(),
            caller: caller.to_string(),
        });
    }
    Ok(())
}

/// Operations open to every actor holding a role.
pub(crate) fn authorize_actor(order_id: &str, state: &OrderState, caller: &str) -> Result<()> {
    if !state.actors.contains_key(caller) {
        return Err(LedgerError::UnauthorizedActor {
            order_id: order_id.to_string(),
            caller: caller.to_string(),
        });
    }
    Ok(())
}

/// Event reads: participants and watchers.
pub(crate) fn authorize_reader(
    order_id: &str,
    owner: &str,
    state: &OrderState,
    requester: &str,
) -> Result<()> {
    if !is_participant(owner, state, requester) && !state.watchers.contains(requester) {
        return Err(LedgerError::Unauthorized {
            order_id: order_id.to_string(),
            requester: requester.to_string(),
        });
    }
    Ok(())
}
