use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller not authorized for this role
    Unauthorized = 10,

    // ============================================
    // VAR ERRORS (20-29)
    // ============================================
    /// Return series shorter than the required minimum
    InsufficientHistoricalData = 20,
    /// Confidence level outside the supported discrete set
    InvalidConfidenceLevel = 21,
    /// Horizon must be at least one day
    InvalidHorizon = 22,

    // ============================================
    // LIMIT / PORTFOLIO ERRORS (30-39)
    // ============================================
    /// No risk limits configured for this portfolio
    LimitsNotFound = 30,
    /// Limit percentages outside the basis-point range
    InvalidLimits = 31,
    /// Return magnitude outside the plausible range
    InvalidReturnValue = 32,

    // ============================================
    // FEED ERRORS (40-49)
    // ============================================
    /// Null price feed reference
    InvalidPriceFeed = 40,
}
