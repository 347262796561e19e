#![no_std]

mod error;
mod events;
mod governance;
mod storage;
mod types;

pub use error::Error;
pub use types::{CallPayload, Transaction};

use soroban_sdk::Address;
use soroban_sdk::Env;
use soroban_sdk::Val;
use soroban_sdk::Vec;
use soroban_sdk::contract;
use soroban_sdk::contractimpl;
use soroban_sdk::token;

use crate::error::Error as Err;
use crate::storage::DataKey;

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    /// Initializes the wallet with its owner set and confirmation threshold.
    /// `value_token` is the asset contract used to move `value` with executed
    /// transactions; wallets that only perform calls may omit it.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        value_token: Option<Address>,
    ) -> Result<(), Err> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Err::AlreadyInitialized);
        }
        if owners.is_empty() || required == 0 || required > owners.len() {
            return Err(Err::InvalidRequirement);
        }
        for owner in owners.iter() {
            if env
                .storage()
                .instance()
                .get(&DataKey::IsOwner(owner.clone()))
                .unwrap_or(false)
            {
                return Err(Err::DuplicateOwner);
            }
            env.storage().instance().set(&DataKey::IsOwner(owner), &true);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owners, &owners);
        env.storage().instance().set(&DataKey::Required, &required);
        env.storage().instance().set(&DataKey::TxCount, &0u64);
        if let Some(asset) = value_token {
            env.storage().instance().set(&DataKey::ValueToken, &asset);
        }
        Ok(())
    }

    /// Stores a new transaction, auto-confirms it for the submitter, and
    /// attempts execution (which can only fire here when `required` is 1).
    /// Returns the transaction id.
    pub fn submit_transaction(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        payload: Option<CallPayload>,
    ) -> Result<u64, Err> {
        require_owner(&env, &caller)?;
        if value < 0 {
            return Err(Err::InvalidValue);
        }
        if value > 0 && !env.storage().instance().has(&DataKey::ValueToken) {
            return Err(Err::ValueTokenMissing);
        }

        let id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TxCount)
            .unwrap_or(0);
        let tx = Transaction {
            id,
            destination: destination.clone(),
            value,
            payload,
            executed: false,
        };
        env.storage().instance().set(&DataKey::Transaction(id), &tx);
        env.storage().instance().set(&DataKey::TxCount, &(id + 1));
        events::emit_submission(&env, id, caller.clone(), destination, value);

        confirm_internal(&env, caller, id)?;
        Ok(id)
    }

    /// Records the caller's confirmation and attempts execution once the
    /// threshold is met.
    pub fn confirm_transaction(env: Env, caller: Address, id: u64) -> Result<(), Err> {
        require_owner(&env, &caller)?;
        let tx: Transaction = env
            .storage()
            .instance()
            .get(&DataKey::Transaction(id))
            .ok_or(Err::NotFound)?;
        if tx.executed {
            return Err(Err::AlreadyExecuted);
        }
        confirm_internal(&env, caller, id)
    }

    /// Withdraws the caller's confirmation. Only possible before execution.
    pub fn revoke_confirmation(env: Env, caller: Address, id: u64) -> Result<(), Err> {
        require_owner(&env, &caller)?;
        let tx: Transaction = env
            .storage()
            .instance()
            .get(&DataKey::Transaction(id))
            .ok_or(Err::NotFound)?;
        if tx.executed {
            return Err(Err::AlreadyExecuted);
        }
        let mut confirmations = confirmations(&env, id);
        let index = confirmations
            .first_index_of(&caller)
            .ok_or(Err::NotConfirmed)?;
        confirmations.remove(index);
        env.storage()
            .instance()
            .set(&DataKey::Confirmations(id), &confirmations);
        events::emit_revocation(&env, id, caller);
        Ok(())
    }

    /// Explicit execution attempt, e.g. to retry a transaction whose inner
    /// call failed earlier. Requires the threshold to be met.
    pub fn execute_transaction(env: Env, caller: Address, id: u64) -> Result<(), Err> {
        require_owner(&env, &caller)?;
        let mut tx: Transaction = env
            .storage()
            .instance()
            .get(&DataKey::Transaction(id))
            .ok_or(Err::NotFound)?;
        if tx.executed {
            return Err(Err::AlreadyExecuted);
        }
        if confirmations(&env, id).len() < required(&env) {
            return Err(Err::ThresholdNotMet);
        }
        perform_execution(&env, &mut tx);
        Ok(())
    }

    // --- Queries ---
    pub fn get_owners(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Owners)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn is_owner(env: Env, account: Address) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::IsOwner(account))
            .unwrap_or(false)
    }

    pub fn get_required(env: Env) -> u32 {
        required(&env)
    }

    pub fn get_transaction(env: Env, id: u64) -> Result<Transaction, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Transaction(id))
            .ok_or(Err::NotFound)
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TxCount)
            .unwrap_or(0)
    }

    pub fn get_confirmations(env: Env, id: u64) -> Result<Vec<Address>, Err> {
        if !env.storage().instance().has(&DataKey::Transaction(id)) {
            return Err(Err::NotFound);
        }
        Ok(confirmations(&env, id))
    }

    pub fn get_confirmation_count(env: Env, id: u64) -> Result<u32, Err> {
        if !env.storage().instance().has(&DataKey::Transaction(id)) {
            return Err(Err::NotFound);
        }
        Ok(confirmations(&env, id).len())
    }

    /// Whether the transaction has reached the confirmation threshold.
    pub fn is_confirmed(env: Env, id: u64) -> Result<bool, Err> {
        if !env.storage().instance().has(&DataKey::Transaction(id)) {
            return Err(Err::NotFound);
        }
        Ok(confirmations(&env, id).len() >= required(&env))
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Err> {
    caller.require_auth();
    let is_owner: bool = env
        .storage()
        .instance()
        .get(&DataKey::IsOwner(caller.clone()))
        .unwrap_or(false);
    if !is_owner {
        return Err(Err::Unauthorized);
    }
    Ok(())
}

fn required(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Required)
        .unwrap_or(0)
}

fn confirmations(env: &Env, id: u64) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Confirmations(id))
        .unwrap_or_else(|| Vec::new(env))
}

/// Records a confirmation for `owner`, then attempts execution when the
/// threshold is met.
fn confirm_internal(env: &Env, owner: Address, id: u64) -> Result<(), Err> {
    let mut confirmations = confirmations(env, id);
    if confirmations.contains(&owner) {
        return Err(Err::AlreadyConfirmed);
    }
    confirmations.push_back(owner.clone());
    env.storage()
        .instance()
        .set(&DataKey::Confirmations(id), &confirmations);
    events::emit_confirmation(env, id, owner);

    if confirmations.len() >= required(env) {
        let mut tx: Transaction = env
            .storage()
            .instance()
            .get(&DataKey::Transaction(id))
            .ok_or(Err::NotFound)?;
        if !tx.executed {
            perform_execution(env, &mut tx);
        }
    }
    Ok(())
}

/// Executes a transaction that has met its threshold. The `executed` flag is
/// committed before the external call so a reentrant observer sees consistent
/// state and the call can never fire twice. A failed attempt unwinds the flag
/// and emits an execution-failure record instead of erroring, so the
/// confirmation bookkeeping survives for a later retry.
fn perform_execution(env: &Env, tx: &mut Transaction) {
    tx.executed = true;
    env.storage()
        .instance()
        .set(&DataKey::Transaction(tx.id), tx);

    if execute_call(env, tx) {
        events::emit_execution(env, tx.id);
    } else {
        tx.executed = false;
        env.storage()
            .instance()
            .set(&DataKey::Transaction(tx.id), tx);
        events::emit_execution_failure(env, tx.id);
    }
}

/// Performs the transaction's call and value movement. Returns false when the
/// attempt failed and nothing must be left behind. Self-targeted payloads are
/// governance operations and are dispatched internally.
fn execute_call(env: &Env, tx: &Transaction) -> bool {
    let this = env.current_contract_address();

    let asset_client = if tx.value > 0 {
        let asset: Option<Address> = env.storage().instance().get(&DataKey::ValueToken);
        let asset = match asset {
            Some(a) => a,
            None => return false,
        };
        let client = token::Client::new(env, &asset);
        if client.balance(&this) < tx.value {
            return false;
        }
        Some(client)
    } else {
        None
    };

    if let Some(payload) = &tx.payload {
        if tx.destination == this {
            if governance::apply(env, payload).is_err() {
                return false;
            }
        } else if env
            .try_invoke_contract::<Val, soroban_sdk::Error>(
                &tx.destination,
                &payload.function,
                payload.args.clone(),
            )
            .is_err()
        {
            return false;
        }
    }

    if let Some(client) = asset_client {
        client.transfer(&this, &tx.destination, &tx.value);
    }
    true
}
