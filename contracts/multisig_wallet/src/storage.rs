use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Required,
    IsOwner(Address),
    /// Asset contract used to move `value` with executed transactions.
    ValueToken,
    TxCount,
    Transaction(u64),
    Confirmations(u64),
}
