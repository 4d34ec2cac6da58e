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
    /// Caller not authorized (not admin/KYC provider)
    Unauthorized = 10,

    // ============================================
    // PROFILE / RULES ERRORS (20-29)
    // ============================================
    /// No profile recorded for this investor
    ProfileNotFound = 20,
    /// No rules recorded for this jurisdiction
    JurisdictionNotFound = 21,
    /// KYC level outside the supported range
    InvalidKycLevel = 22,
    /// Investment bounds are inverted
    InvalidInvestmentBounds = 23,
    /// Batch must contain at least one profile
    EmptyBatch = 24,

    // ============================================
    // REPORTING ERRORS (30-39)
    // ============================================
    /// Report id not found
    ReportNotFound = 30,

    // ============================================
    // OPERATIONAL ERRORS (40-49)
    // ============================================
    /// Engine is paused
    EnginePaused = 40,
}
