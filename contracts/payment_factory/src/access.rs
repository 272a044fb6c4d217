//! Single-owner access control.
//!
//! The owner is fixed at construction and only changes through a two-step
//! transfer: the current owner nominates, the nominee accepts.

use soroban_sdk::{Address, Env};

use crate::{errors::FactoryError, events, storage::StorageKey};

pub fn initialize(env: &Env, owner: &Address) {
    env.storage().instance().set(&StorageKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Owner)
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::PendingOwner)
}

/// Requires `caller` to authorize the invocation and to be the current owner.
pub fn assert_only_owner(env: &Env, caller: &Address) -> Result<(), FactoryError> {
    caller.require_auth();

    match get_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(FactoryError::Unauthorized),
    }
}

/// Nominates `new_owner`. A later nomination replaces an earlier one.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), FactoryError> {
    assert_only_owner(env, caller)?;

    env.storage()
        .instance()
        .set(&StorageKey::PendingOwner, new_owner);
    events::emit_ownership_transfer_started(env, caller, new_owner);
    Ok(())
}

pub fn accept_ownership(env: &Env, caller: &Address) -> Result<(), FactoryError> {
    caller.require_auth();

    let pending = get_pending_owner(env).ok_or(FactoryError::NoPendingOwner)?;
    if pending != *caller {
        return Err(FactoryError::Unauthorized);
    }
    let previous = get_owner(env).ok_or(FactoryError::NotFound)?;

    env.storage().instance().set(&StorageKey::Owner, caller);
    env.storage().instance().remove(&StorageKey::PendingOwner);
    events::emit_ownership_transferred(env, &previous, caller);
    Ok(())
}
