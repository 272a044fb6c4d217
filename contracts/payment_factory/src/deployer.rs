//! Payment instance creation.
//!
//! The workflow is generic over an [`InstanceBackend`] so the same code path
//! runs against the host deployer on chain and against deterministic fakes in
//! tests.

use soroban_sdk::{contracttype, log, Address, BytesN, Env, Symbol};

use crate::{errors::FactoryError, events, ledger, pausable, registry, storage::StorageKey};

/// Constructor arguments forwarded untouched to the payment template.
///
/// Nothing here is validated by the factory; the template checks its own
/// inputs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentParams {
    pub store_name: Symbol,
    pub store_wallet: Address,
    /// Fungible token the instance settles in. Passed by address only.
    pub payment_token: Address,
}

/// Turns a template version and constructor arguments into a new, never
/// before issued instance address.
pub trait InstanceBackend {
    fn instantiate(
        &self,
        env: &Env,
        template: &BytesN<32>,
        params: &PaymentParams,
    ) -> Result<Address, FactoryError>;
}

/// Deploys the template WASM as a child contract of the factory.
pub struct WasmDeployer;

impl InstanceBackend for WasmDeployer {
    fn instantiate(
        &self,
        env: &Env,
        template: &BytesN<32>,
        params: &PaymentParams,
    ) -> Result<Address, FactoryError> {
        let salt = next_salt(env);
        let payment = env.deployer().with_current_contract(salt).deploy_v2(
            template.clone(),
            (
                params.store_name.clone(),
                params.store_wallet.clone(),
                params.payment_token.clone(),
            ),
        );
        Ok(payment)
    }
}

/// Salt for the next deployment, derived from a counter that only moves
/// forward. Distinct salts give distinct contract addresses.
pub fn next_salt(env: &Env) -> BytesN<32> {
    let nonce: u64 = env
        .storage()
        .instance()
        .get(&StorageKey::DeployNonce)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&StorageKey::DeployNonce, &(nonce + 1));

    let mut salt = [0u8; 32];
    salt[24..].copy_from_slice(&nonce.to_be_bytes());
    BytesN::from_array(env, &salt)
}

/// Creates a payment instance for `creator` from the current template.
///
/// `creator` must already be authenticated. Any error leaves storage and
/// the event stream untouched since the host rolls the invocation back.
pub fn create_payment<B: InstanceBackend>(
    env: &Env,
    backend: &B,
    creator: &Address,
    params: &PaymentParams,
) -> Result<Address, FactoryError> {
    pausable::assert_not_paused(env)?;

    let template = registry::read(env)?;
    let payment = backend.instantiate(env, &template, params)?;

    ledger::record(env, creator, &payment, &template);
    log!(env, "payment instance created", creator.clone(), payment.clone());
    events::emit_payment_created(env, creator, &payment);

    Ok(payment)
}
