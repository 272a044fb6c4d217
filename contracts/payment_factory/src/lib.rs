#![no_std]

pub mod access;
pub mod deployer;
mod errors;
pub mod events;
pub mod ledger;
pub mod pausable;
pub mod registry;
pub mod storage;
pub mod token_interface;

#[cfg(test)]
mod mock_contract;


use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Symbol, Vec,
};

use deployer::{PaymentParams, WasmDeployer};
pub use errors::FactoryError;

/// PaymentFactory deploys payment instances from a versioned template.
///
/// Every instance is recorded against its creator together with the
/// template version it was built from.
///
/// # Security Model
///
/// - A single owner manages the template, the pause switch and upgrades
/// - Ownership moves only through nominate-then-accept
/// - Creation is open to any authenticated caller while unpaused
/// - Provenance records are append-only
#[contract]
pub struct PaymentFactory;

#[contractimpl]
impl PaymentFactory {
    /// Sets the owner and the initial payment template.
    ///
    /// # Arguments
    ///
    /// * `owner` - The address allowed to run administrative operations
    /// * `template_version` - WASM hash of the payment template, must be non-zero
    ///
    /// # Panics
    ///
    /// With `FactoryError::ZeroValue` when `template_version` is all zeroes,
    /// in which case the contract is never created.
    pub fn __constructor(env: Env, owner: Address, template_version: BytesN<32>) {
        if let Err(err) = registry::initialize(&env, &template_version) {
            panic_with_error!(&env, err);
        }
        access::initialize(&env, &owner);
        log!(&env, "payment factory initialized", owner, template_version);
    }

    /// Deploys a new payment instance from the current template.
    ///
    /// # Arguments
    ///
    /// * `caller` - The creator (must authenticate), recorded in the ledger
    /// * `store_name` - Store name forwarded to the template
    /// * `store_wallet` - Wallet receiving the store's payments
    /// * `payment_token` - Fungible token the instance settles in
    ///
    /// # Returns
    ///
    /// The address of the new payment instance
    ///
    /// # Events
    ///
    /// Emits `pay_crt` on success.
    pub fn create_payment(
        env: Env,
        caller: Address,
        store_name: Symbol,
        store_wallet: Address,
        payment_token: Address,
    ) -> Result<Address, FactoryError> {
        caller.require_auth();

        let params = PaymentParams {
            store_name,
            store_wallet,
            payment_token,
        };
        deployer::create_payment(&env, &WasmDeployer, &caller, &params)
    }

    pub fn get_template_version(env: Env) -> Result<BytesN<32>, FactoryError> {
        registry::read(&env)
    }

    /// Switches the template used for future instances. Owner only.
    ///
    /// Existing instances and their ledger records are not affected.
    pub fn update_template_version(
        env: Env,
        caller: Address,
        new_version: BytesN<32>,
    ) -> Result<(), FactoryError> {
        access::assert_only_owner(&env, &caller)?;
        registry::write(&env, &new_version)
    }

    /// Halts instance creation. Owner only.
    pub fn pause(env: Env, caller: Address) -> Result<(), FactoryError> {
        access::assert_only_owner(&env, &caller)?;
        pausable::pause(&env, &caller)
    }

    /// Resumes instance creation. Owner only.
    pub fn unpause(env: Env, caller: Address) -> Result<(), FactoryError> {
        access::assert_only_owner(&env, &caller)?;
        pausable::unpause(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        access::get_owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        access::get_pending_owner(&env)
    }

    /// Nominates `new_owner`. Takes effect once the nominee calls
    /// `accept_ownership`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), FactoryError> {
        access::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), FactoryError> {
        access::accept_ownership(&env, &caller)
    }

    /// Template version `payment` was created from, if `creator` created it.
    pub fn get_payment_template(
        env: Env,
        creator: Address,
        payment: Address,
    ) -> Result<BytesN<32>, FactoryError> {
        ledger::get_payment_template(&env, &creator, &payment)
    }

    pub fn get_creator_payment_count(env: Env, creator: Address) -> u32 {
        ledger::get_creator_payment_count(&env, &creator)
    }

    /// Get payments created by `creator` with pagination (1-based `start_index`)
    pub fn get_payments_by_creator(
        env: Env,
        creator: Address,
        start_index: u32,
        limit: u32,
    ) -> Vec<Address> {
        ledger::get_payments_by_creator(&env, &creator, start_index, limit)
    }

    pub fn get_payment_count(env: Env) -> u64 {
        ledger::get_payment_count(&env)
    }

    /// Replaces the factory's own code. Owner only.
    ///
    /// Storage, including every provenance record, carries over unchanged.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        access::assert_only_owner(&env, &caller)?;
        if registry::is_zero(&new_wasm_hash) {
            return Err(FactoryError::ZeroValue);
        }

        env.deployer().update_current_contract_wasm(new_wasm_hash.clone());
        events::emit_upgraded(&env, &new_wasm_hash);
        Ok(())
    }
}
