use crate::access_control;
use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use crate::transfer;
use crate::types::TrophyStatus;
use soroban_sdk::{Address, Bytes, Env, String, Vec};

/// Mints `token_id` to `to`. Requires minter role; token ids are arbitrary
/// and chosen by the caller.
pub fn mint(
    env: &Env,
    caller: Address,
    to: Address,
    token_id: u128,
    uri: String,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::minter_role(env))?;
    mint_internal(env, &caller, &to, token_id, uri)
}

/// As `mint`, but notifies a receiving contract through the `nft_recv`
/// callback and fails if the receiver rejects.
pub fn safe_mint(
    env: &Env,
    caller: Address,
    to: Address,
    token_id: u128,
    data: Bytes,
    uri: String,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::minter_role(env))?;
    mint_internal(env, &caller, &to, token_id, uri)?;
    transfer::check_receiver(env, &caller, None, &to, token_id, data)
}

pub(crate) fn mint_internal(
    env: &Env,
    caller: &Address,
    to: &Address,
    token_id: u128,
    uri: String,
) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Owner(token_id)) {
        return Err(Error::AlreadyExists);
    }

    env.storage().instance().set(&DataKey::Owner(token_id), to);
    env.storage()
        .instance()
        .set(&DataKey::TokenUri(token_id), &uri);
    env.storage()
        .instance()
        .set(&DataKey::Status(token_id), &TrophyStatus::InProgress);

    let mut all: Vec<u128> = env
        .storage()
        .instance()
        .get(&DataKey::AllTokens)
        .unwrap_or_else(|| Vec::new(env));
    all.push_back(token_id);
    env.storage().instance().set(&DataKey::AllTokens, &all);

    add_to_owner_enumeration(env, to, token_id);

    events::emit_mint(env, to.clone(), token_id, caller.clone());
    Ok(())
}

pub(crate) fn add_to_owner_enumeration(env: &Env, owner: &Address, token_id: u128) {
    let key = DataKey::OwnedTokens(owner.clone());
    let mut owned: Vec<u128> = env
        .storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    owned.push_back(token_id);
    env.storage().instance().set(&key, &owned);
}

pub(crate) fn remove_from_owner_enumeration(env: &Env, owner: &Address, token_id: u128) {
    let key = DataKey::OwnedTokens(owner.clone());
    let mut owned: Vec<u128> = env
        .storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    if let Some(index) = owned.first_index_of(&token_id) {
        owned.remove(index);
        env.storage().instance().set(&key, &owned);
    }
}

pub fn total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<_, Vec<u128>>(&DataKey::AllTokens)
        .map(|all| all.len())
        .unwrap_or(0)
}

pub fn balance_of(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .instance()
        .get::<_, Vec<u128>>(&DataKey::OwnedTokens(owner.clone()))
        .map(|owned| owned.len())
        .unwrap_or(0)
}

/// Token id at `index` in global mint order.
pub fn token_by_index(env: &Env, index: u32) -> Result<u128, Error> {
    env.storage()
        .instance()
        .get::<_, Vec<u128>>(&DataKey::AllTokens)
        .and_then(|all| all.get(index))
        .ok_or(Error::IndexOutOfBounds)
}

/// Token id at `index` among the tokens held by `owner`.
pub fn token_of_owner_by_index(env: &Env, owner: &Address, index: u32) -> Result<u128, Error> {
    env.storage()
        .instance()
        .get::<_, Vec<u128>>(&DataKey::OwnedTokens(owner.clone()))
        .and_then(|owned| owned.get(index))
        .ok_or(Error::IndexOutOfBounds)
}

/// Updates the trophy status of a token. Requires shipper role. Any of the
/// four status codes is accepted from any prior status.
pub fn set_trophy_status(
    env: &Env,
    caller: Address,
    token_id: u128,
    code: u32,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::shipper_role(env))?;
    if !env.storage().instance().has(&DataKey::Owner(token_id)) {
        return Err(Error::NonexistentToken);
    }
    let status = TrophyStatus::from_code(code).ok_or(Error::InvalidStatus)?;
    env.storage()
        .instance()
        .set(&DataKey::Status(token_id), &status);
    events::emit_trophy_status_changed(env, token_id, status.label(env));
    Ok(())
}

/// Human-readable trophy status of a token.
pub fn trophy_status(env: &Env, token_id: u128) -> Result<String, Error> {
    let status: TrophyStatus = env
        .storage()
        .instance()
        .get(&DataKey::Status(token_id))
        .ok_or(Error::NonexistentToken)?;
    Ok(status.label(env))
}
