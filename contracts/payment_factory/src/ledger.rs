//! Provenance ledger: which template version each payment instance was
//! created from, and by whom.
//!
//! Records are append-only. There is no update or delete path.

use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::{errors::FactoryError, storage::StorageKey};

/// Writes the record for a freshly created instance and appends it to the
/// creator's index. Only the creation workflow calls this.
pub(crate) fn record(env: &Env, creator: &Address, payment: &Address, template: &BytesN<32>) {
    env.storage().persistent().set(
        &StorageKey::PaymentTemplate(creator.clone(), payment.clone()),
        template,
    );

    // Creator Index
    let mut creator_count = get_creator_payment_count(env, creator);
    creator_count += 1;
    env.storage().persistent().set(
        &StorageKey::CreatorPaymentCount(creator.clone()),
        &creator_count,
    );
    env.storage().persistent().set(
        &StorageKey::CreatorPayment(creator.clone(), creator_count),
        payment,
    );

    let total = get_payment_count(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::PaymentCount, &total);
}

pub fn get_payment_template(
    env: &Env,
    creator: &Address,
    payment: &Address,
) -> Result<BytesN<32>, FactoryError> {
    env.storage()
        .persistent()
        .get(&StorageKey::PaymentTemplate(creator.clone(), payment.clone()))
        .ok_or(FactoryError::NotFound)
}

pub fn get_creator_payment_count(env: &Env, creator: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::CreatorPaymentCount(creator.clone()))
        .unwrap_or(0)
}

pub fn get_payment_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::PaymentCount)
        .unwrap_or(0)
}

/// Payments created by `creator`, oldest first.
/// - start_index: 1-based position of the first record to return
/// - limit: max number of records to return
pub fn get_payments_by_creator(
    env: &Env,
    creator: &Address,
    start_index: u32,
    limit: u32,
) -> Vec<Address> {
    let count = get_creator_payment_count(env, creator);
    let mut result = Vec::new(env);

    if start_index == 0 || start_index > count {
        return result;
    }

    let end = core::cmp::min(start_index.saturating_add(limit), count + 1);

    for i in start_index..end {
        if let Some(payment) = env
            .storage()
            .persistent()
            .get::<_, Address>(&StorageKey::CreatorPayment(creator.clone(), i))
        {
            result.push_back(payment);
        }
    }
    result
}
