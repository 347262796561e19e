use crate::access_control;
use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env};

pub const MAX_ROYALTY_BIPS: u32 = 10_000;

pub fn validate_royalty_bips(percent_bips: u32) -> Result<(), Error> {
    if percent_bips > MAX_ROYALTY_BIPS {
        return Err(Error::OutOfRange);
    }
    Ok(())
}

pub fn royalty_receiver(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::RoyaltyReceiver)
        .ok_or(Error::NotInitialized)
}

pub fn royalty_percent_bips(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RoyaltyPercentBips)
        .unwrap_or(0)
}

/// Updates the collection-wide royalty parameters. Requires royalty role.
pub fn set_royalty(
    env: &Env,
    caller: Address,
    receiver: Address,
    percent_bips: u32,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::royalty_role(env))?;
    validate_royalty_bips(percent_bips)?;
    env.storage()
        .instance()
        .set(&DataKey::RoyaltyReceiver, &receiver);
    env.storage()
        .instance()
        .set(&DataKey::RoyaltyPercentBips, &percent_bips);
    events::emit_royalty_changed(env, receiver, percent_bips);
    Ok(())
}

/// Royalty payout for a sale: floor(sale_price * percent_bips / 10000).
/// Token existence is deliberately not checked.
pub fn royalty_info(env: &Env, token_id: u128, sale_price: i128) -> Result<(Address, i128), Error> {
    let _ = token_id;
    let receiver = royalty_receiver(env)?;
    let amount = sale_price * i128::from(royalty_percent_bips(env)) / i128::from(MAX_ROYALTY_BIPS);
    Ok((receiver, amount))
}
