use soroban_sdk::{contractclient, Address, Env, U256};

/// Fungible asset accepted by payment instances.
///
/// The factory only forwards the token's address to the template
/// constructor and never calls into it. The client is generated for
/// payment instances and off-chain tooling.
///
/// Soroban has no implicit sender, so every spending call names the
/// account whose authorization it consumes.
#[contractclient(name = "FungibleTokenClient")]
pub trait FungibleToken {
    fn transfer(env: Env, from: Address, recipient: Address, amount: U256) -> bool;

    fn balance_of(env: Env, account: Address) -> U256;

    fn approve(env: Env, owner: Address, spender: Address, amount: U256) -> bool;

    fn transfer_from(
        env: Env,
        spender: Address,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> bool;

    fn allowance(env: Env, owner: Address, spender: Address) -> U256;
}
