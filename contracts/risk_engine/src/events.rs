use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug)]
pub struct RiskLimitsSetEvent {
    pub portfolio: Address,
    pub max_position_size_bps: u32,
    pub max_leverage_bps: u32,
    pub max_drawdown_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct EmergencyShutdownEvent {
    pub portfolio: Address,
    pub reason: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PortfolioResumedEvent {
    pub portfolio: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PriceFeedUpdatedEvent {
    pub asset: Address,
    pub feed: Address,
}
