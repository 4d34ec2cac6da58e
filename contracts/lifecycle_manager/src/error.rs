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
    /// Caller not authorized (not admin/restriction manager)
    Unauthorized = 10,

    // ============================================
    // ASSET REGISTRATION ERRORS (20-29)
    // ============================================
    /// Asset not registered with the lifecycle manager
    AssetNotFound = 20,
    /// Asset already has a maturity configuration
    AssetAlreadyRegistered = 21,
    /// Maturity date must be in the future
    InvalidMaturityDate = 22,
    /// Face value must be positive
    InvalidFaceValue = 23,

    // ============================================
    // STATUS / RETIREMENT ERRORS (30-39)
    // ============================================
    /// Maturity date not yet reached
    NotYetMatured = 30,
    /// Operation not valid for the asset's current status
    InvalidStatus = 31,
    /// Retirement must be initiated before finalize
    RetirementNotInitiated = 32,
    /// Asset is retired and rejects all activity
    AssetRetired = 33,

    // ============================================
    // REDEMPTION ERRORS (40-49)
    // ============================================
    /// Redemption window after maturity has closed
    GracePeriodExpired = 40,
    /// Holder balance is zero, already redeemed
    AlreadyRedeemed = 41,
    /// A failed redemption is pending retry for this holder
    RedemptionPending = 42,
    /// No failed redemptions queued for this asset
    NoPendingRedemptions = 43,

    // ============================================
    // RESTRICTION ERRORS (50-59)
    // ============================================
    /// Restriction id not found on this asset
    RestrictionNotFound = 50,
    /// Restriction window is inverted
    InvalidRestrictionWindow = 51,

    // ============================================
    // AMOUNT / OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 60,
    /// Contract is paused
    ContractPaused = 61,
}
