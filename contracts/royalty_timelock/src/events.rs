use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub struct Proposed {
    pub operation_id: u64,
    pub proposer: Address,
    pub destination: Address,
    pub ready_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Executed {
    pub operation_id: u64,
    pub executor: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleGranted {
    pub role: Symbol,
    pub identity: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleRevoked {
    pub role: Symbol,
    pub identity: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DelayChanged {
    pub delay: u64,
}

pub fn emit_proposed(
    env: &Env,
    operation_id: u64,
    proposer: Address,
    destination: Address,
    ready_timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("proposed"),),
        Proposed {
            operation_id,
            proposer,
            destination,
            ready_timestamp,
        },
    );
}

pub fn emit_executed(env: &Env, operation_id: u64, executor: Address) {
    env.events().publish(
        (symbol_short!("executed"),),
        Executed {
            operation_id,
            executor,
        },
    );
}

pub fn emit_role_granted(env: &Env, role: Symbol, identity: Address) {
    env.events()
        .publish((symbol_short!("rolegrant"),), RoleGranted { role, identity });
}

pub fn emit_role_revoked(env: &Env, role: Symbol, identity: Address) {
    env.events()
        .publish((symbol_short!("rolervoke"),), RoleRevoked { role, identity });
}

pub fn emit_delay_changed(env: &Env, delay: u64) {
    env.events()
        .publish((symbol_short!("delay"),), DelayChanged { delay });
}
