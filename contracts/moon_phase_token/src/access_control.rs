//! Hierarchical role store: every role has an admin role controlling its
//! membership, rooted at `DEFAULT_ADMIN`. Roles come into existence on first
//! reference; grants and revokes are idempotent no-ops.

use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env, Symbol};

pub fn default_admin(env: &Env) -> Symbol {
    Symbol::new(env, "DEFAULT_ADMIN")
}

pub fn minter_role(env: &Env) -> Symbol {
    Symbol::new(env, "MINTER_ROLE")
}

pub fn minter_admin(env: &Env) -> Symbol {
    Symbol::new(env, "MINTER_ADMIN")
}

pub fn shipper_role(env: &Env) -> Symbol {
    Symbol::new(env, "SHIPPER_ROLE")
}

pub fn shipper_admin(env: &Env) -> Symbol {
    Symbol::new(env, "SHIPPER_ADMIN")
}

pub fn updater_role(env: &Env) -> Symbol {
    Symbol::new(env, "UPDATER_ROLE")
}

pub fn updater_admin(env: &Env) -> Symbol {
    Symbol::new(env, "UPDATER_ADMIN")
}

pub fn royalty_role(env: &Env) -> Symbol {
    Symbol::new(env, "ROYALTY_ROLE")
}

pub fn royalty_admin(env: &Env) -> Symbol {
    Symbol::new(env, "ROYALTY_ADMIN")
}

pub fn has_role(env: &Env, role: &Symbol, account: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::RoleMember(role.clone(), account.clone()))
        .unwrap_or(false)
}

/// The admin role governing `role`. Unreferenced roles fall back to the root.
pub fn role_admin(env: &Env, role: &Symbol) -> Symbol {
    env.storage()
        .instance()
        .get(&DataKey::RoleAdmin(role.clone()))
        .unwrap_or_else(|| default_admin(env))
}

/// Requires the authenticated `caller` to hold `role`.
pub fn require_role(env: &Env, caller: &Address, role: &Symbol) -> Result<(), Error> {
    caller.require_auth();
    if !has_role(env, role, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn grant_role(
    env: &Env,
    caller: Address,
    role: Symbol,
    account: Address,
) -> Result<(), Error> {
    require_role(env, &caller, &role_admin(env, &role))?;
    grant_internal(env, &role, &account, &caller);
    Ok(())
}

pub fn revoke_role(
    env: &Env,
    caller: Address,
    role: Symbol,
    account: Address,
) -> Result<(), Error> {
    require_role(env, &caller, &role_admin(env, &role))?;
    revoke_internal(env, &role, &account, &caller);
    Ok(())
}

/// Self-service only: the authenticated caller gives up its own membership.
pub fn renounce_role(env: &Env, caller: Address, role: Symbol) {
    caller.require_auth();
    revoke_internal(env, &role, &caller, &caller);
}

/// Repoints the admin role of `role`. Bootstrap authority only.
pub fn set_role_admin(
    env: &Env,
    caller: Address,
    role: Symbol,
    admin_role: Symbol,
) -> Result<(), Error> {
    require_role(env, &caller, &default_admin(env))?;
    set_role_admin_internal(env, &role, &admin_role);
    Ok(())
}

/// Membership write without authorization. Emits only when membership changes.
pub(crate) fn grant_internal(env: &Env, role: &Symbol, account: &Address, sender: &Address) {
    if has_role(env, role, account) {
        return;
    }
    env.storage()
        .instance()
        .set(&DataKey::RoleMember(role.clone(), account.clone()), &true);
    events::emit_role_granted(env, role.clone(), account.clone(), sender.clone());
}

pub(crate) fn revoke_internal(env: &Env, role: &Symbol, account: &Address, sender: &Address) {
    if !has_role(env, role, account) {
        return;
    }
    env.storage()
        .instance()
        .remove(&DataKey::RoleMember(role.clone(), account.clone()));
    events::emit_role_revoked(env, role.clone(), account.clone(), sender.clone());
}

pub(crate) fn set_role_admin_internal(env: &Env, role: &Symbol, admin_role: &Symbol) {
    let previous = role_admin(env, role);
    env.storage()
        .instance()
        .set(&DataKey::RoleAdmin(role.clone()), admin_role);
    events::emit_role_admin_changed(env, role.clone(), previous, admin_role.clone());
}

/// Seeds the role tree at initialization: each action role is governed by its
/// paired admin role, each admin role governs itself, and `owner` receives
/// the root role plus every action and admin role.
pub(crate) fn seed_roles(env: &Env, owner: &Address) {
    let pairs = [
        (minter_role(env), minter_admin(env)),
        (shipper_role(env), shipper_admin(env)),
        (updater_role(env), updater_admin(env)),
        (royalty_role(env), royalty_admin(env)),
    ];
    for (action, admin) in pairs.iter() {
        set_role_admin_internal(env, action, admin);
        set_role_admin_internal(env, admin, admin);
        grant_internal(env, action, owner, owner);
        grant_internal(env, admin, owner, owner);
    }
    grant_internal(env, &default_admin(env), owner, owner);
}
