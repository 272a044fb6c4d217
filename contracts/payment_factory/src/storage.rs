use soroban_sdk::{contracttype, Address};

/// Storage keys
///
/// Factory configuration lives in instance storage; provenance records and
/// the creator index live in persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Contract owner
    Owner,
    /// Owner nominated by `transfer_ownership`, awaiting acceptance
    PendingOwner,
    /// Pause flag
    Paused,
    /// WASM hash of the payment template currently deployed by the factory
    TemplateVersion,
    /// Counter used to derive deploy salts
    DeployNonce,
    /// Total number of payment instances created
    PaymentCount,
    /// (creator, payment) -> template version used at creation
    PaymentTemplate(Address, Address),
    /// creator -> number of payments created
    CreatorPaymentCount(Address),
    /// (creator, index) -> payment address, index is 1-based
    CreatorPayment(Address, u32),
}
