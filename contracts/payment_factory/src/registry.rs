//! Current payment template (WASM hash) used for new instances.
//!
//! Only the latest value is kept. Updating it never touches records written
//! by earlier creations.

use soroban_sdk::{log, BytesN, Env};

use crate::{errors::FactoryError, events, storage::StorageKey};

/// True for the all-zero hash, which never names deployable code.
pub fn is_zero(hash: &BytesN<32>) -> bool {
    hash.to_array() == [0u8; 32]
}

pub fn initialize(env: &Env, template_version: &BytesN<32>) -> Result<(), FactoryError> {
    if is_zero(template_version) {
        return Err(FactoryError::ZeroValue);
    }
    env.storage()
        .instance()
        .set(&StorageKey::TemplateVersion, template_version);
    Ok(())
}

pub fn read(env: &Env) -> Result<BytesN<32>, FactoryError> {
    env.storage()
        .instance()
        .get(&StorageKey::TemplateVersion)
        .ok_or(FactoryError::NotFound)
}

pub fn write(env: &Env, new_version: &BytesN<32>) -> Result<(), FactoryError> {
    if is_zero(new_version) {
        return Err(FactoryError::ZeroValue);
    }

    env.storage()
        .instance()
        .set(&StorageKey::TemplateVersion, new_version);
    log!(env, "payment template updated", new_version.clone());
    events::emit_template_updated(env, new_version);
    Ok(())
}
