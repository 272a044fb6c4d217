use soroban_sdk::contracterror;

/// Errors returned by the payment factory.
///
/// Codes are stable; clients match on them as `Error(Contract, #code)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Caller is not the owner (or not the pending owner when accepting)
    Unauthorized = 1,
    /// An all-zero template or WASM hash was supplied
    ZeroValue = 2,
    /// `pause` called while already paused
    AlreadyPaused = 3,
    /// `unpause` called while not paused
    NotPaused = 4,
    /// Creation attempted while the factory is paused
    Paused = 5,
    /// The instantiation backend could not produce a payment instance
    InstantiationFailure = 6,
    /// No provenance record (or no template) exists for the lookup
    NotFound = 7,
    /// `accept_ownership` called with no transfer in progress
    NoPendingOwner = 8,
}
