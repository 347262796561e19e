use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    /// Contract owner (the deploying identity).
    ContractOwner,
    Name,
    Sym,
    RoleMember(Symbol, Address),
    RoleAdmin(Symbol),
    Owner(u128),
    TokenUri(u128),
    Approved(u128),
    Status(u128),
    OperatorApproval(Address, Address),
    AllTokens,
    OwnedTokens(Address),
    RoyaltyReceiver,
    RoyaltyPercentBips,
    ProvenanceDocUri,
    ProvenanceDocHash,
    ProvenanceHash,
}
