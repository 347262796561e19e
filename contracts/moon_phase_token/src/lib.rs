#![no_std]

mod access_control;
mod error;
mod events;
mod metadata;
mod royalty;
mod storage;
mod token;
mod transfer;
mod types;

pub use error::Error;
pub use types::{TokenConfig, TrophyStatus};

use soroban_sdk::Address;
use soroban_sdk::Bytes;
use soroban_sdk::Env;
use soroban_sdk::String;
use soroban_sdk::Symbol;
use soroban_sdk::contract;
use soroban_sdk::contractimpl;

use crate::error::Error as Err;
use crate::storage::DataKey;

#[contract]
pub struct MoonPhaseToken;

#[contractimpl]
impl MoonPhaseToken {
    /// Initializes the collection and seeds the role tree. The deploying
    /// owner receives the root role plus every action and admin role.
    pub fn initialize(env: Env, owner: Address, config: TokenConfig) -> Result<(), Err> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Err::AlreadyInitialized);
        }
        royalty::validate_royalty_bips(config.royalty_percent_bips)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::ContractOwner, &owner);
        env.storage().instance().set(&DataKey::Name, &config.name);
        env.storage().instance().set(&DataKey::Sym, &config.symbol);
        env.storage()
            .instance()
            .set(&DataKey::RoyaltyReceiver, &config.royalty_receiver);
        env.storage()
            .instance()
            .set(&DataKey::RoyaltyPercentBips, &config.royalty_percent_bips);

        access_control::seed_roles(&env, &owner);
        Ok(())
    }

    // --- Role registry ---
    pub fn has_role(env: Env, role: Symbol, account: Address) -> bool {
        access_control::has_role(&env, &role, &account)
    }

    pub fn get_role_admin(env: Env, role: Symbol) -> Symbol {
        access_control::role_admin(&env, &role)
    }

    pub fn grant_role(env: Env, caller: Address, role: Symbol, account: Address) -> Result<(), Err> {
        access_control::grant_role(&env, caller, role, account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Symbol,
        account: Address,
    ) -> Result<(), Err> {
        access_control::revoke_role(&env, caller, role, account)
    }

    pub fn renounce_role(env: Env, caller: Address, role: Symbol) {
        access_control::renounce_role(&env, caller, role)
    }

    pub fn set_role_admin(
        env: Env,
        caller: Address,
        role: Symbol,
        admin_role: Symbol,
    ) -> Result<(), Err> {
        access_control::set_role_admin(&env, caller, role, admin_role)
    }

    // --- Minting ---
    pub fn mint(
        env: Env,
        caller: Address,
        to: Address,
        token_id: u128,
        uri: String,
    ) -> Result<(), Err> {
        token::mint(&env, caller, to, token_id, uri)
    }

    pub fn safe_mint(
        env: Env,
        caller: Address,
        to: Address,
        token_id: u128,
        data: Bytes,
        uri: String,
    ) -> Result<(), Err> {
        token::safe_mint(&env, caller, to, token_id, data, uri)
    }

    // --- Ownership & enumeration ---
    pub fn owner_of(env: Env, token_id: u128) -> Result<Address, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Owner(token_id))
            .ok_or(Err::NonexistentToken)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        token::balance_of(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u32 {
        token::total_supply(&env)
    }

    pub fn token_by_index(env: Env, index: u32) -> Result<u128, Err> {
        token::token_by_index(&env, index)
    }

    pub fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> Result<u128, Err> {
        token::token_of_owner_by_index(&env, &owner, index)
    }

    // --- Transfers & approvals ---
    pub fn transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u128,
    ) -> Result<(), Err> {
        transfer::transfer_from(&env, caller, from, to, token_id)
    }

    pub fn safe_transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u128,
        data: Bytes,
    ) -> Result<(), Err> {
        transfer::safe_transfer_from(&env, caller, from, to, token_id, data)
    }

    pub fn approve(env: Env, caller: Address, approved: Address, token_id: u128) -> Result<(), Err> {
        transfer::approve(&env, caller, approved, token_id)
    }

    pub fn set_approval_for_all(env: Env, caller: Address, operator: Address, approved: bool) {
        transfer::set_approval_for_all(&env, caller, operator, approved)
    }

    pub fn get_approved(env: Env, token_id: u128) -> Result<Option<Address>, Err> {
        let _ = env
            .storage()
            .instance()
            .get::<_, Address>(&DataKey::Owner(token_id))
            .ok_or(Err::NonexistentToken)?;
        let approved: Option<Address> = env.storage().instance().get(&DataKey::Approved(token_id));
        Ok(approved)
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::OperatorApproval(owner, operator))
            .unwrap_or(false)
    }

    // --- Metadata & provenance ---
    pub fn token_uri(env: Env, token_id: u128) -> Result<String, Err> {
        metadata::token_uri(&env, token_id)
    }

    pub fn set_token_uri(
        env: Env,
        caller: Address,
        token_id: u128,
        uri: String,
    ) -> Result<(), Err> {
        metadata::set_token_uri(&env, caller, token_id, uri)
    }

    pub fn set_provenance_record(
        env: Env,
        caller: Address,
        doc_uri: String,
        doc_hash: String,
        prov_hash: String,
    ) -> Result<(), Err> {
        metadata::set_provenance_record(&env, caller, doc_uri, doc_hash, prov_hash)
    }

    pub fn set_provenance_hash(env: Env, caller: Address, prov_hash: String) -> Result<(), Err> {
        metadata::set_provenance_hash(&env, caller, prov_hash)
    }

    pub fn provenance_documentation_uri(env: Env) -> String {
        metadata::provenance_documentation_uri(&env)
    }

    pub fn provenance_documentation_hash(env: Env) -> String {
        metadata::provenance_documentation_hash(&env)
    }

    pub fn provenance_hash(env: Env) -> String {
        metadata::provenance_hash(&env)
    }

    // --- Trophy status ---
    pub fn set_trophy_status(
        env: Env,
        caller: Address,
        token_id: u128,
        code: u32,
    ) -> Result<(), Err> {
        token::set_trophy_status(&env, caller, token_id, code)
    }

    pub fn trophy_status(env: Env, token_id: u128) -> Result<String, Err> {
        token::trophy_status(&env, token_id)
    }

    // --- Royalty ---
    pub fn set_royalty(
        env: Env,
        caller: Address,
        receiver: Address,
        percent_bips: u32,
    ) -> Result<(), Err> {
        royalty::set_royalty(&env, caller, receiver, percent_bips)
    }

    pub fn royalty_info(env: Env, token_id: u128, sale_price: i128) -> Result<(Address, i128), Err> {
        royalty::royalty_info(&env, token_id, sale_price)
    }

    pub fn royalty_receiver(env: Env) -> Result<Address, Err> {
        royalty::royalty_receiver(&env)
    }

    pub fn royalty_percent_bips(env: Env) -> u32 {
        royalty::royalty_percent_bips(&env)
    }

    // --- Collection info ---
    pub fn name(env: Env) -> Result<String, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(Err::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Sym)
            .ok_or(Err::NotInitialized)
    }

    pub fn owner(env: Env) -> Result<Address, Err> {
        env.storage()
            .instance()
            .get(&DataKey::ContractOwner)
            .ok_or(Err::NotInitialized)
    }
}
