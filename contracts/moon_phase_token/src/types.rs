use soroban_sdk::{contracttype, Address, Env, String};

/// Collection-level configuration, consumed once at initialization.
#[derive(Clone, Debug)]
#[contracttype]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub royalty_receiver: Address,
    /// Basis points (0-10000, where 10000 = 100%)
    pub royalty_percent_bips: u32,
}

/// Shipment lifecycle tag for the physical trophy backing a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum TrophyStatus {
    InProgress = 0,
    ReadyToShip = 1,
    InTransit = 2,
    Received = 3,
}

impl TrophyStatus {
    pub fn from_code(code: u32) -> Option<TrophyStatus> {
        match code {
            0 => Some(TrophyStatus::InProgress),
            1 => Some(TrophyStatus::ReadyToShip),
            2 => Some(TrophyStatus::InTransit),
            3 => Some(TrophyStatus::Received),
            _ => None,
        }
    }

    pub fn label(&self, env: &Env) -> String {
        match self {
            TrophyStatus::InProgress => String::from_str(env, "In Progress"),
            TrophyStatus::ReadyToShip => String::from_str(env, "Ready to Ship"),
            TrophyStatus::InTransit => String::from_str(env, "In Transit"),
            TrophyStatus::Received => String::from_str(env, "Received"),
        }
    }
}
