use soroban_sdk::{contracttype, Address, String};

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
/// Minimum observations required before VaR is meaningful
pub const MIN_HISTORY_POINTS: u32 = 30;
/// Guard against fat-fingered return entries (>±1000%)
pub const MAX_RETURN_MAGNITUDE_BPS: i128 = 100_000;

/// Per-portfolio limit set, overwritten whole by the risk manager
#[contracttype]
#[derive(Clone, Debug)]
pub struct RiskLimits {
    /// Largest single position as a share of portfolio value
    pub max_position_size_bps: u32,
    /// Leverage ceiling, 10,000 = 1x
    pub max_leverage_bps: u32,
    pub max_drawdown_bps: u32,
    pub min_liquidity_score: u32,
    /// Ceiling on 95%-confidence VaR
    pub max_var_95_bps: u32,
    /// Kill-switch checked before every other evaluation
    pub emergency_shutdown: bool,
}

/// Externally observed portfolio state, reported by the portfolio manager
#[contracttype]
#[derive(Clone, Debug)]
pub struct PortfolioMetrics {
    pub total_value: i128,
    pub leverage_bps: u32,
    pub drawdown_bps: u32,
    pub liquidity_score: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RiskVerdict {
    pub valid: bool,
    pub reason: String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    RiskManager,
    PortfolioManager,
    EmergencyRole,
    Limits(Address),
    Metrics(Address),
    Returns(Address),
    PriceFeed(Address),
    Initialized,
}
