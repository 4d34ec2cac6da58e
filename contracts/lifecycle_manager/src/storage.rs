use soroban_sdk::{contracttype, Address, BytesN, Symbol, Vec};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_PER_YEAR: i128 = 365;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetStatus {
    /// Asset registered, transfers and subscriptions allowed
    Active = 0,
    /// Maturity date reached, redemptions open within the grace period
    Matured = 1,
    /// Retirement initiated, awaiting final report
    Retiring = 2,
    /// Retirement finalized, asset permanently rejects all activity
    Retired = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RetirementReason {
    Maturity = 0,
    Call = 1,
    Default = 2,
    Regulatory = 3,
    Other = 4,
}

/// Maturity terms for an asset. Set once at registration, immutable after.
#[contracttype]
#[derive(Clone, Debug)]
pub struct MaturityConfig {
    /// Unix timestamp at which the asset matures
    pub maturity_date: u64,
    /// Total amount payable across all holders at maturity
    pub face_value: i128,
    /// Token used to fund redemption payouts
    pub funding_asset: Address,
    /// Whether coupon interest accrues on top of principal
    pub has_interest: bool,
    /// Annualized coupon rate in basis points
    pub coupon_rate_bps: u32,
    /// Length of one coupon period in days
    pub coupon_frequency_days: u64,
    /// Unix timestamp after which no further coupons accrue
    pub final_coupon_date: u64,
    /// Seconds after maturity during which redemption stays open
    pub grace_period: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetLifecycle {
    pub asset: Address,
    pub status: AssetStatus,
    pub config: MaturityConfig,
    pub has_restrictions: bool,
    /// Coupon accrual anchor
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RestrictionType {
    LockupPeriod = 0,
    AccreditedOnly = 1,
    MaxHolders = 2,
    JurisdictionBased = 3,
    VolumeLimit = 4,
    HoldingPeriod = 5,
    TimeOfDay = 6,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferRestriction {
    pub restriction_type: RestrictionType,
    /// Window in which the restriction applies; end_date 0 means open-ended
    pub start_date: u64,
    pub end_date: u64,
    /// Per-transfer ceiling for VolumeLimit
    pub max_amount: i128,
    /// Seconds a position must be held for HoldingPeriod
    pub min_holding_period: u64,
    /// Jurisdiction codes allowed to trade for JurisdictionBased
    pub allowed_jurisdictions: Vec<Symbol>,
    /// UTC trading window [open_hour, close_hour) for TimeOfDay
    pub open_hour: u32,
    pub close_hour: u32,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RetirementRecord {
    pub reason: RetirementReason,
    pub finalized: bool,
    pub report_hash: BytesN<32>,
    pub initiated_at: u64,
}

/// Payout computed for a redemption whose burn step failed. The payment has
/// not been sent; retry pays exactly these amounts once the burn clears.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PendingRedemption {
    pub holder: Address,
    pub principal: i128,
    pub interest: i128,
    pub attempted_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RedemptionAmount {
    pub principal: i128,
    pub interest: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferVerdict {
    pub valid: bool,
    pub reason: soroban_sdk::String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    RestrictionManager,
    Lifecycle(Address),
    Retirement(Address),
    Restriction(Address, u64),   // (asset, restriction_id)
    RestrictionIds(Address),     // asset → Vec<restriction_id>
    PendingRedemption(Address, Address), // (asset, holder)
    PendingHolders(Address),     // asset → Vec<holder>
    HolderJurisdiction(Address),
    Initialized,
    Paused,
}
