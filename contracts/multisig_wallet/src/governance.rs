//! Owner-set and threshold management. These mutations have no external
//! entry points: they are reachable only through an executed transaction
//! whose destination is the wallet's own address, so the same consensus
//! threshold governs the wallet's own governance. The host forbids
//! reentrancy, so self-targeted payloads are dispatched here instead of
//! through a cross-contract call.

use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use crate::types::CallPayload;
use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val, Vec};

/// Dispatches a self-targeted payload to the matching governance operation.
pub(crate) fn apply(env: &Env, payload: &CallPayload) -> Result<(), Error> {
    if payload.function == Symbol::new(env, "add_owner") {
        add_owner(env, decode_address(env, &payload.args, 0)?)
    } else if payload.function == Symbol::new(env, "remove_owner") {
        remove_owner(env, decode_address(env, &payload.args, 0)?)
    } else if payload.function == Symbol::new(env, "replace_owner") {
        replace_owner(
            env,
            decode_address(env, &payload.args, 0)?,
            decode_address(env, &payload.args, 1)?,
        )
    } else if payload.function == Symbol::new(env, "change_requirement") {
        let required: u32 = payload
            .args
            .get(0)
            .and_then(|v| u32::try_from_val(env, &v).ok())
            .ok_or(Error::InvalidPayload)?;
        change_requirement(env, required)
    } else {
        Err(Error::InvalidPayload)
    }
}

fn decode_address(env: &Env, args: &Vec<Val>, index: u32) -> Result<Address, Error> {
    args.get(index)
        .and_then(|v| Address::try_from_val(env, &v).ok())
        .ok_or(Error::InvalidPayload)
}

fn owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or_else(|| Vec::new(env))
}

fn add_owner(env: &Env, owner: Address) -> Result<(), Error> {
    let mut owners = owners(env);
    if env
        .storage()
        .instance()
        .get(&DataKey::IsOwner(owner.clone()))
        .unwrap_or(false)
    {
        return Err(Error::OwnerExists);
    }
    owners.push_back(owner.clone());
    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage()
        .instance()
        .set(&DataKey::IsOwner(owner.clone()), &true);
    events::emit_owner_addition(env, owner);
    Ok(())
}

fn remove_owner(env: &Env, owner: Address) -> Result<(), Error> {
    let mut owners = owners(env);
    let index = owners
        .first_index_of(&owner)
        .ok_or(Error::OwnerNotFound)?;
    if owners.len() == 1 {
        return Err(Error::InvalidRequirement);
    }
    owners.remove(index);
    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage()
        .instance()
        .remove(&DataKey::IsOwner(owner.clone()));

    // The threshold may not exceed the shrunken owner set.
    let required: u32 = env
        .storage()
        .instance()
        .get(&DataKey::Required)
        .unwrap_or(0);
    if required > owners.len() {
        env.storage()
            .instance()
            .set(&DataKey::Required, &owners.len());
        events::emit_requirement_change(env, owners.len());
    }
    events::emit_owner_removal(env, owner);
    Ok(())
}

fn replace_owner(env: &Env, old: Address, new: Address) -> Result<(), Error> {
    let mut owners = owners(env);
    let index = owners.first_index_of(&old).ok_or(Error::OwnerNotFound)?;
    if env
        .storage()
        .instance()
        .get(&DataKey::IsOwner(new.clone()))
        .unwrap_or(false)
    {
        return Err(Error::OwnerExists);
    }
    owners.set(index, new.clone());
    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage()
        .instance()
        .remove(&DataKey::IsOwner(old.clone()));
    env.storage()
        .instance()
        .set(&DataKey::IsOwner(new.clone()), &true);
    events::emit_owner_removal(env, old);
    events::emit_owner_addition(env, new);
    Ok(())
}

fn change_requirement(env: &Env, required: u32) -> Result<(), Error> {
    let owners = owners(env);
    if required == 0 || required > owners.len() {
        return Err(Error::InvalidRequirement);
    }
    env.storage().instance().set(&DataKey::Required, &required);
    events::emit_requirement_change(env, required);
    Ok(())
}
