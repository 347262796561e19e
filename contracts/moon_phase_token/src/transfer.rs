use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use crate::token;
use soroban_sdk::{symbol_short, vec, Address, Bytes, Env, IntoVal, InvokeError, Val, Vec};

/// Validates that the authenticated `caller` may move `token_id`: owner,
/// the single approved address, or a blanket operator. Role gating never
/// applies to transfers.
fn require_can_transfer(env: &Env, caller: &Address, token_id: u128) -> Result<(), Error> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner(token_id))
        .ok_or(Error::NonexistentToken)?;
    if owner == *caller {
        return Ok(());
    }
    let approved: Option<Address> = env.storage().instance().get(&DataKey::Approved(token_id));
    if let Some(a) = approved {
        if a == *caller {
            return Ok(());
        }
    }
    let is_operator: bool = env
        .storage()
        .instance()
        .get(&DataKey::OperatorApproval(owner.clone(), caller.clone()))
        .unwrap_or(false);
    if is_operator {
        return Ok(());
    }
    Err(Error::NotApproved)
}

/// Internal transfer implementation (no auth check - caller must have verified).
fn do_transfer(env: &Env, from: &Address, to: &Address, token_id: u128) -> Result<(), Error> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner(token_id))
        .ok_or(Error::NonexistentToken)?;
    if owner != *from {
        return Err(Error::Unauthorized);
    }
    if from == to {
        return Ok(());
    }

    env.storage().instance().set(&DataKey::Owner(token_id), to);
    env.storage()
        .instance()
        .remove(&DataKey::Approved(token_id));

    token::remove_from_owner_enumeration(env, from, token_id);
    token::add_to_owner_enumeration(env, to, token_id);

    events::emit_transfer(env, from.clone(), to.clone(), token_id);
    Ok(())
}

/// Transfers a token. Caller must be owner, approved, or operator.
pub fn transfer_from(
    env: &Env,
    caller: Address,
    from: Address,
    to: Address,
    token_id: u128,
) -> Result<(), Error> {
    caller.require_auth();
    require_can_transfer(env, &caller, token_id)?;
    do_transfer(env, &from, &to, token_id)
}

/// Transfers a token and notifies a receiving contract through the
/// `nft_recv` callback. A rejecting receiver aborts the transfer.
pub fn safe_transfer_from(
    env: &Env,
    caller: Address,
    from: Address,
    to: Address,
    token_id: u128,
    data: Bytes,
) -> Result<(), Error> {
    caller.require_auth();
    require_can_transfer(env, &caller, token_id)?;
    do_transfer(env, &from, &to, token_id)?;
    check_receiver(env, &caller, Some(from), &to, token_id, data)
}

/// Invokes `nft_recv(operator, from, token_id, data)` on `to`. A receiver
/// contract signals rejection by returning a contract error; destinations
/// without contract code are left unchecked.
pub(crate) fn check_receiver(
    env: &Env,
    operator: &Address,
    from: Option<Address>,
    to: &Address,
    token_id: u128,
    data: Bytes,
) -> Result<(), Error> {
    if *to == env.current_contract_address() {
        return Ok(());
    }
    let args: Vec<Val> = vec![
        env,
        operator.clone().into_val(env),
        from.into_val(env),
        token_id.into_val(env),
        data.into_val(env),
    ];
    match env.try_invoke_contract::<Val, Error>(to, &symbol_short!("nft_recv"), args) {
        Err(Ok(_)) | Err(Err(InvokeError::Contract(_))) => Err(Error::NonReceiver),
        _ => Ok(()),
    }
}

/// Sets the single approved address for a token. Caller must be the owner or
/// one of the owner's operators.
pub fn approve(env: &Env, caller: Address, approved: Address, token_id: u128) -> Result<(), Error> {
    caller.require_auth();
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner(token_id))
        .ok_or(Error::NonexistentToken)?;
    if owner != caller {
        let is_operator: bool = env
            .storage()
            .instance()
            .get(&DataKey::OperatorApproval(owner.clone(), caller))
            .unwrap_or(false);
        if !is_operator {
            return Err(Error::Unauthorized);
        }
    }
    env.storage()
        .instance()
        .set(&DataKey::Approved(token_id), &approved);
    events::emit_approval(env, owner, approved, token_id);
    Ok(())
}

pub fn set_approval_for_all(env: &Env, caller: Address, operator: Address, approved: bool) {
    caller.require_auth();
    env.storage().instance().set(
        &DataKey::OperatorApproval(caller.clone(), operator.clone()),
        &approved,
    );
    events::emit_approval_for_all(env, caller, operator, approved);
}
