use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug)]
pub struct Submission {
    pub transaction_id: u64,
    pub submitter: Address,
    pub destination: Address,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Confirmation {
    pub transaction_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Revocation {
    pub transaction_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Execution {
    pub transaction_id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ExecutionFailure {
    pub transaction_id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnerAddition {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnerRemoval {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RequirementChange {
    pub required: u32,
}

pub fn emit_submission(
    env: &Env,
    transaction_id: u64,
    submitter: Address,
    destination: Address,
    value: i128,
) {
    env.events().publish(
        (symbol_short!("submit"),),
        Submission {
            transaction_id,
            submitter,
            destination,
            value,
        },
    );
}

pub fn emit_confirmation(env: &Env, transaction_id: u64, owner: Address) {
    env.events().publish(
        (symbol_short!("confirm"),),
        Confirmation {
            transaction_id,
            owner,
        },
    );
}

pub fn emit_revocation(env: &Env, transaction_id: u64, owner: Address) {
    env.events().publish(
        (symbol_short!("revoke"),),
        Revocation {
            transaction_id,
            owner,
        },
    );
}

pub fn emit_execution(env: &Env, transaction_id: u64) {
    env.events()
        .publish((symbol_short!("execute"),), Execution { transaction_id });
}

pub fn emit_execution_failure(env: &Env, transaction_id: u64) {
    env.events().publish(
        (symbol_short!("execfail"),),
        ExecutionFailure { transaction_id },
    );
}

pub fn emit_owner_addition(env: &Env, owner: Address) {
    env.events()
        .publish((symbol_short!("owneradd"),), OwnerAddition { owner });
}

pub fn emit_owner_removal(env: &Env, owner: Address) {
    env.events()
        .publish((symbol_short!("ownerrem"),), OwnerRemoval { owner });
}

pub fn emit_requirement_change(env: &Env, required: u32) {
    env.events()
        .publish((symbol_short!("required"),), RequirementChange { required });
}
