#![no_std]

mod error;
mod events;
mod storage;
mod types;

pub use error::Error;
pub use types::{CallPayload, Operation};

use soroban_sdk::Address;
use soroban_sdk::Env;
use soroban_sdk::Symbol;
use soroban_sdk::Val;
use soroban_sdk::Vec;
use soroban_sdk::contract;
use soroban_sdk::contractimpl;

use crate::error::Error as Err;
use crate::storage::DataKey;

pub fn proposer_role(env: &Env) -> Symbol {
    Symbol::new(env, "PROPOSER")
}

pub fn executor_role(env: &Env) -> Symbol {
    Symbol::new(env, "EXECUTOR")
}

pub fn admin_role(env: &Env) -> Symbol {
    Symbol::new(env, "TIMELOCK_ADMIN")
}

#[contract]
pub struct RoyaltyTimelock;

#[contractimpl]
impl RoyaltyTimelock {
    /// Seeds the role store and the execution delay. `admin` receives
    /// `TIMELOCK_ADMIN` and manages membership and the delay afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        delay: u64,
        proposers: Vec<Address>,
        executors: Vec<Address>,
    ) -> Result<(), Err> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Err::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Delay, &delay);
        env.storage()
            .instance()
            .set(&DataKey::RoleMember(admin_role(&env), admin), &true);
        for proposer in proposers.iter() {
            env.storage()
                .instance()
                .set(&DataKey::RoleMember(proposer_role(&env), proposer), &true);
        }
        for executor in executors.iter() {
            env.storage()
                .instance()
                .set(&DataKey::RoleMember(executor_role(&env), executor), &true);
        }
        env.storage().instance().set(&DataKey::OpCount, &0u64);
        Ok(())
    }

    /// Schedules a call for execution after the configured delay. Returns the
    /// operation id.
    pub fn propose(
        env: Env,
        caller: Address,
        destination: Address,
        payload: CallPayload,
    ) -> Result<u64, Err> {
        require_role(&env, &proposer_role(&env), &caller)?;

        let delay: u64 = env.storage().instance().get(&DataKey::Delay).unwrap_or(0);
        let id: u64 = env.storage().instance().get(&DataKey::OpCount).unwrap_or(0);
        let operation = Operation {
            id,
            destination: destination.clone(),
            payload,
            ready_timestamp: env.ledger().timestamp() + delay,
            executed: false,
        };
        env.storage()
            .instance()
            .set(&DataKey::Operation(id), &operation);
        env.storage().instance().set(&DataKey::OpCount, &(id + 1));
        events::emit_proposed(&env, id, caller, destination, operation.ready_timestamp);
        Ok(id)
    }

    /// Performs a ready operation's call. A failed inner call is a hard
    /// error: a delayed operation either lands whole or reverts.
    pub fn execute(env: Env, caller: Address, id: u64) -> Result<(), Err> {
        require_role(&env, &executor_role(&env), &caller)?;
        let mut operation: Operation = env
            .storage()
            .instance()
            .get(&DataKey::Operation(id))
            .ok_or(Err::NotFound)?;
        if operation.executed {
            return Err(Err::AlreadyExecuted);
        }
        if env.ledger().timestamp() < operation.ready_timestamp {
            return Err(Err::NotReady);
        }

        if env
            .try_invoke_contract::<Val, soroban_sdk::Error>(
                &operation.destination,
                &operation.payload.function,
                operation.payload.args.clone(),
            )
            .is_err()
        {
            return Err(Err::CallFailed);
        }

        operation.executed = true;
        env.storage()
            .instance()
            .set(&DataKey::Operation(id), &operation);
        events::emit_executed(&env, id, caller);
        Ok(())
    }

    /// Adds `identity` to `role`. Idempotent.
    pub fn grant_role(env: Env, caller: Address, role: Symbol, identity: Address) -> Result<(), Err> {
        require_role(&env, &admin_role(&env), &caller)?;
        let key = DataKey::RoleMember(role.clone(), identity.clone());
        if !env.storage().instance().get(&key).unwrap_or(false) {
            env.storage().instance().set(&key, &true);
            events::emit_role_granted(&env, role, identity);
        }
        Ok(())
    }

    /// Removes `identity` from `role`. Idempotent.
    pub fn revoke_role(env: Env, caller: Address, role: Symbol, identity: Address) -> Result<(), Err> {
        require_role(&env, &admin_role(&env), &caller)?;
        let key = DataKey::RoleMember(role.clone(), identity.clone());
        if env.storage().instance().get(&key).unwrap_or(false) {
            env.storage().instance().remove(&key);
            events::emit_role_revoked(&env, role, identity);
        }
        Ok(())
    }

    pub fn has_role(env: Env, role: Symbol, identity: Address) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::RoleMember(role, identity))
            .unwrap_or(false)
    }

    pub fn set_delay(env: Env, caller: Address, delay: u64) -> Result<(), Err> {
        require_role(&env, &admin_role(&env), &caller)?;
        env.storage().instance().set(&DataKey::Delay, &delay);
        events::emit_delay_changed(&env, delay);
        Ok(())
    }

    pub fn get_delay(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Delay).unwrap_or(0)
    }

    pub fn get_operation(env: Env, id: u64) -> Result<Operation, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Operation(id))
            .ok_or(Err::NotFound)
    }

    pub fn get_operation_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::OpCount).unwrap_or(0)
    }

    /// Whether the operation is past its delay and still pending.
    pub fn is_ready(env: Env, id: u64) -> Result<bool, Err> {
        let operation: Operation = env
            .storage()
            .instance()
            .get(&DataKey::Operation(id))
            .ok_or(Err::NotFound)?;
        Ok(!operation.executed && env.ledger().timestamp() >= operation.ready_timestamp)
    }
}

fn require_role(env: &Env, role: &Symbol, caller: &Address) -> Result<(), Err> {
    caller.require_auth();
    let member: bool = env
        .storage()
        .instance()
        .get(&DataKey::RoleMember(role.clone(), caller.clone()))
        .unwrap_or(false);
    if !member {
        return Err(Err::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
mod test;
