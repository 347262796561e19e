use crate::access_control;
use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env, String};

pub fn token_uri(env: &Env, token_id: u128) -> Result<String, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenUri(token_id))
        .ok_or(Error::NonexistentToken)
}

/// Updates a token's URI. Requires updater role.
pub fn set_token_uri(
    env: &Env,
    caller: Address,
    token_id: u128,
    uri: String,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::updater_role(env))?;
    if !env.storage().instance().has(&DataKey::Owner(token_id)) {
        return Err(Error::NonexistentToken);
    }
    env.storage()
        .instance()
        .set(&DataKey::TokenUri(token_id), &uri);
    events::emit_token_uri_changed(env, token_id, uri);
    Ok(())
}

pub fn provenance_documentation_uri(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::ProvenanceDocUri)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn provenance_documentation_hash(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::ProvenanceDocHash)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn provenance_hash(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::ProvenanceHash)
        .unwrap_or_else(|| String::from_str(env, ""))
}

/// Replaces the collection-wide provenance record. Requires updater role.
pub fn set_provenance_record(
    env: &Env,
    caller: Address,
    doc_uri: String,
    doc_hash: String,
    prov_hash: String,
) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::updater_role(env))?;
    env.storage()
        .instance()
        .set(&DataKey::ProvenanceDocUri, &doc_uri);
    env.storage()
        .instance()
        .set(&DataKey::ProvenanceDocHash, &doc_hash);
    env.storage()
        .instance()
        .set(&DataKey::ProvenanceHash, &prov_hash);
    events::emit_provenance_changed(env, doc_uri, doc_hash, prov_hash);
    Ok(())
}

/// Updates the provenance hash only; documentation fields are untouched.
/// Requires updater role.
pub fn set_provenance_hash(env: &Env, caller: Address, prov_hash: String) -> Result<(), Error> {
    access_control::require_role(env, &caller, &access_control::updater_role(env))?;
    env.storage()
        .instance()
        .set(&DataKey::ProvenanceHash, &prov_hash);
    events::emit_provenance_changed(
        env,
        provenance_documentation_uri(env),
        provenance_documentation_hash(env),
        prov_hash,
    );
    Ok(())
}
