use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Delay,
    RoleMember(Symbol, Address),
    OpCount,
    Operation(u64),
}
