use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleGranted {
    pub role: Symbol,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleRevoked {
    pub role: Symbol,
    pub account: Address,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleAdminChanged {
    pub role: Symbol,
    pub previous_admin: Symbol,
    pub new_admin: Symbol,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Mint {
    pub to: Address,
    pub token_id: u128,
    pub minter: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub token_id: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Approval {
    pub owner: Address,
    pub approved: Address,
    pub token_id: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ApprovalForAll {
    pub owner: Address,
    pub operator: Address,
    pub approved: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenUriChanged {
    pub token_id: u128,
    pub token_uri: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TrophyStatusChanged {
    pub token_id: u128,
    pub trophy_status: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProvenanceRecordChanged {
    pub documentation_uri: String,
    pub documentation_hash: String,
    pub provenance_hash: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoyaltyChanged {
    pub receiver: Address,
    pub percent_bips: u32,
}

pub fn emit_role_granted(env: &Env, role: Symbol, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("rolegrant"),),
        RoleGranted {
            role,
            account,
            sender,
        },
    );
}

pub fn emit_role_revoked(env: &Env, role: Symbol, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("rolervoke"),),
        RoleRevoked {
            role,
            account,
            sender,
        },
    );
}

pub fn emit_role_admin_changed(env: &Env, role: Symbol, previous_admin: Symbol, new_admin: Symbol) {
    env.events().publish(
        (symbol_short!("roleadmin"),),
        RoleAdminChanged {
            role,
            previous_admin,
            new_admin,
        },
    );
}

pub fn emit_mint(env: &Env, to: Address, token_id: u128, minter: Address) {
    env.events().publish(
        (symbol_short!("mint"),),
        Mint {
            to,
            token_id,
            minter,
        },
    );
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, token_id: u128) {
    env.events().publish(
        (symbol_short!("transfer"),),
        Transfer { from, to, token_id },
    );
}

pub fn emit_approval(env: &Env, owner: Address, approved: Address, token_id: u128) {
    env.events().publish(
        (symbol_short!("approval"),),
        Approval {
            owner,
            approved,
            token_id,
        },
    );
}

pub fn emit_approval_for_all(env: &Env, owner: Address, operator: Address, approved: bool) {
    env.events().publish(
        (symbol_short!("apprall"),),
        ApprovalForAll {
            owner,
            operator,
            approved,
        },
    );
}

pub fn emit_token_uri_changed(env: &Env, token_id: u128, token_uri: String) {
    env.events().publish(
        (symbol_short!("uri"),),
        TokenUriChanged {
            token_id,
            token_uri,
        },
    );
}

pub fn emit_trophy_status_changed(env: &Env, token_id: u128, trophy_status: String) {
    env.events().publish(
        (symbol_short!("status"),),
        TrophyStatusChanged {
            token_id,
            trophy_status,
        },
    );
}

pub fn emit_provenance_changed(
    env: &Env,
    documentation_uri: String,
    documentation_hash: String,
    provenance_hash: String,
) {
    env.events().publish(
        (symbol_short!("provenanc"),),
        ProvenanceRecordChanged {
            documentation_uri,
            documentation_hash,
            provenance_hash,
        },
    );
}

pub fn emit_royalty_changed(env: &Env, receiver: Address, percent_bips: u32) {
    env.events().publish(
        (symbol_short!("royalty"),),
        RoyaltyChanged {
            receiver,
            percent_bips,
        },
    );
}
