use soroban_sdk::{contracttype, Address, BytesN, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub struct JurisdictionRulesUpdatedEvent {
    pub jurisdiction: Symbol,
    pub enabled: bool,
    pub min_investment: i128,
    pub max_investment: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct InvestorProfileSetEvent {
    pub investor: Address,
    pub jurisdiction: Symbol,
    pub kyc_level: u32,
    pub is_sanctioned: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ComplianceReportEvent {
    pub report_id: u64,
    pub investor: Address,
    pub violation_count: u32,
    pub evidence_hash: BytesN<32>,
}
