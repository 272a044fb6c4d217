//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

/// Event emitted when a payment instance is created
pub const PAYMENT_CREATED_EVENT: Symbol = symbol_short!("pay_crt");

/// Event emitted when the owner switches the payment template
pub const TEMPLATE_UPDATED_EVENT: Symbol = symbol_short!("tmpl_upd");

/// Event emitted when contract is paused
pub const PAUSED_EVENT: Symbol = symbol_short!("paused");

/// Event emitted when contract is unpaused
pub const UNPAUSED_EVENT: Symbol = symbol_short!("unpaused");

// Ownership events
pub const OWNERSHIP_STARTED_EVENT: Symbol = symbol_short!("own_start");
pub const OWNERSHIP_TRANSFERRED_EVENT: Symbol = symbol_short!("own_xfer");

/// Event emitted when the factory's own code is replaced
pub const UPGRADED_EVENT: Symbol = symbol_short!("upgraded");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentCreatedEvent {
    pub creator: Address,
    pub payment: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemplateUpdatedEvent {
    pub new_version: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Topics: (`pay_crt`, creator). Data: [`PaymentCreatedEvent`].
pub fn emit_payment_created(env: &Env, creator: &Address, payment: &Address) {
    env.events().publish(
        (PAYMENT_CREATED_EVENT, creator.clone()),
        PaymentCreatedEvent {
            creator: creator.clone(),
            payment: payment.clone(),
        },
    );
}

pub fn emit_template_updated(env: &Env, new_version: &BytesN<32>) {
    env.events().publish(
        (TEMPLATE_UPDATED_EVENT,),
        TemplateUpdatedEvent {
            new_version: new_version.clone(),
        },
    );
}

pub fn emit_paused(env: &Env, by: &Address) {
    env.events().publish((PAUSED_EVENT,), by.clone());
}

pub fn emit_unpaused(env: &Env, by: &Address) {
    env.events().publish((UNPAUSED_EVENT,), by.clone());
}

pub fn emit_ownership_transfer_started(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (OWNERSHIP_STARTED_EVENT,),
        OwnershipEvent {
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (OWNERSHIP_TRANSFERRED_EVENT,),
        OwnershipEvent {
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
        },
    );
}

pub fn emit_upgraded(env: &Env, new_wasm_hash: &BytesN<32>) {
    env.events().publish((UPGRADED_EVENT,), new_wasm_hash.clone());
}
