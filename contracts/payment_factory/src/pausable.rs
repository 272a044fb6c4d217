//! Pause circuit breaker.
//!
//! Authorization is not checked here; callers gate `pause`/`unpause` with
//! [`crate::access::assert_only_owner`] first.

use soroban_sdk::{log, Address, Env};

use crate::{errors::FactoryError, events, storage::StorageKey};

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&StorageKey::Paused)
        .unwrap_or(false)
}

pub fn assert_not_paused(env: &Env) -> Result<(), FactoryError> {
    if is_paused(env) {
        return Err(FactoryError::Paused);
    }
    Ok(())
}

pub fn pause(env: &Env, by: &Address) -> Result<(), FactoryError> {
    if is_paused(env) {
        return Err(FactoryError::AlreadyPaused);
    }

    env.storage().instance().set(&StorageKey::Paused, &true);
    log!(env, "factory paused", by.clone());
    events::emit_paused(env, by);
    Ok(())
}

pub fn unpause(env: &Env, by: &Address) -> Result<(), FactoryError> {
    if !is_paused(env) {
        return Err(FactoryError::NotPaused);
    }

    env.storage().instance().set(&StorageKey::Paused, &false);
    log!(env, "factory unpaused", by.clone());
    events::emit_unpaused(env, by);
    Ok(())
}
