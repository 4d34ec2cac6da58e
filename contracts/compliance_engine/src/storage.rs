use soroban_sdk::{contracttype, Address, BytesN, Symbol, Vec};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const MAX_KYC_LEVEL: u32 = 5;

/// Investor attestation written by the KYC provider. The engine stores what
/// the provider attests; it does not verify documents itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorProfile {
    pub investor: Address,
    /// ISO jurisdiction code
    pub jurisdiction: Symbol,
    pub kyc_level: u32,
    pub accreditation_level: u32,
    /// Unix timestamp after which the KYC attestation is stale
    pub kyc_expiry: u64,
    /// Last AML screening timestamp
    pub aml_checked_at: u64,
    pub risk_score: u32,
    /// Hash of the provider's document evidence bundle
    pub document_hash: BytesN<32>,
    pub total_invested: i128,
    pub is_sanctioned: bool,
    /// Politically exposed person
    pub is_pep: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct JurisdictionRules {
    pub enabled: bool,
    pub min_investment: i128,
    pub max_investment: i128,
    pub max_investors: u32,
    /// Seconds a new investor must wait before trading
    pub cooling_off_period: u64,
    pub required_kyc_level: u32,
    pub min_accreditation_level: u32,
    pub requires_local_entity: bool,
    pub allows_tokenization: bool,
    /// Bitmask of required document classes
    pub required_documents: u32,
    pub restricted_asset_types: Vec<Symbol>,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ComplianceStatus {
    pub is_compliant: bool,
    pub kyc_valid: bool,
    pub jurisdiction: Symbol,
}

/// Immutable audit record; never consulted for gating
#[contracttype]
#[derive(Clone, Debug)]
pub struct ComplianceReport {
    pub report_id: u64,
    pub investor: Address,
    pub asset: Address,
    pub amount: i128,
    pub violation_count: u32,
    pub evidence_hash: BytesN<32>,
    pub generated_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    KycProvider,
    Profile(Address),
    Rules(Symbol),
    Report(u64),
    ReportCount,
    Initialized,
    Paused,
}
