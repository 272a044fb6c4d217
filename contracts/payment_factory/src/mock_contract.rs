use core::cell::RefCell;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, U256};

use crate::{
    deployer::{self, InstanceBackend, PaymentParams},
    token_interface::FungibleToken,
    FactoryError,
};

/// Backend that hands out the address the host would assign for the next
/// salt, without deploying any code. Fails on demand.
#[derive(Default)]
pub struct ScriptedBackend {
    fail: bool,
    last_params: RefCell<Option<PaymentParams>>,
}

impl ScriptedBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Parameters of the last successful instantiation.
    pub fn last_params(&self) -> Option<PaymentParams> {
        self.last_params.borrow().clone()
    }
}

impl InstanceBackend for ScriptedBackend {
    fn instantiate(
        &self,
        env: &Env,
        _template: &BytesN<32>,
        params: &PaymentParams,
    ) -> Result<Address, FactoryError> {
        if self.fail {
            return Err(FactoryError::InstantiationFailure);
        }

        *self.last_params.borrow_mut() = Some(params.clone());

        let salt = deployer::next_salt(env);
        Ok(env.deployer().with_current_contract(salt).deployed_address())
    }
}

/// Minimal token implementing the fungible asset interface payment
/// instances are configured with.
#[contract]
pub struct MockToken;

fn balance_key(env: &Env, account: &Address) -> (Symbol, Address) {
    (Symbol::new(env, "balance"), account.clone())
}

fn allowance_key(env: &Env, owner: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (Symbol::new(env, "allowance"), owner.clone(), spender.clone())
}

fn read_u256<K>(env: &Env, key: &K) -> U256
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| U256::from_u32(env, 0))
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: &U256) -> bool {
    let from_balance = read_u256(env, &balance_key(env, from));
    if from_balance < *amount {
        return false;
    }
    let to_balance = read_u256(env, &balance_key(env, to));
    env.storage()
        .persistent()
        .set(&balance_key(env, from), &from_balance.sub(amount));
    env.storage()
        .persistent()
        .set(&balance_key(env, to), &to_balance.add(amount));
    true
}

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: U256) {
        let balance = read_u256(&env, &balance_key(&env, &to));
        env.storage()
            .persistent()
            .set(&balance_key(&env, &to), &balance.add(&amount));
    }
}

#[contractimpl]
impl FungibleToken for MockToken {
    fn transfer(env: Env, from: Address, recipient: Address, amount: U256) -> bool {
        from.require_auth();
        move_balance(&env, &from, &recipient, &amount)
    }

    fn balance_of(env: Env, account: Address) -> U256 {
        read_u256(&env, &balance_key(&env, &account))
    }

    fn approve(env: Env, owner: Address, spender: Address, amount: U256) -> bool {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&allowance_key(&env, &owner, &spender), &amount);
        true
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> bool {
        spender.require_auth();
        let allowed = read_u256(&env, &allowance_key(&env, &sender, &spender));
        if allowed < amount {
            return false;
        }
        if !move_balance(&env, &sender, &recipient, &amount) {
            return false;
        }
        env.storage()
            .persistent()
            .set(&allowance_key(&env, &sender, &spender), &allowed.sub(&amount));
        true
    }

    fn allowance(env: Env, owner: Address, spender: Address) -> U256 {
        read_u256(&env, &allowance_key(&env, &owner, &spender))
    }
}
