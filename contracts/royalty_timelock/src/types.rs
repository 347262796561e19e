use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

/// Contract call held behind the delay. Performed verbatim on execution.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CallPayload {
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// A proposed operation. Executable once the ledger clock reaches
/// `ready_timestamp`; never expires.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Operation {
    pub id: u64,
    pub destination: Address,
    pub payload: CallPayload,
    pub ready_timestamp: u64,
    pub executed: bool,
}
