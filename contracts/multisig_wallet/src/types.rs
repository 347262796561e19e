use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

/// Opaque contract call carried by a transaction. The wallet performs it on
/// execution without interpreting it.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CallPayload {
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// A wallet transaction. `payload = None` is a plain value transfer.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Transaction {
    pub id: u64,
    pub destination: Address,
    pub value: i128,
    pub payload: Option<CallPayload>,
    pub executed: bool,
}
