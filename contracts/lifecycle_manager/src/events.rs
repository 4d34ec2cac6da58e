use soroban_sdk::{contracttype, Address, BytesN, Symbol};

use crate::storage::{RetirementReason, RestrictionType};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetRegisteredEvent {
    pub asset: Address,
    pub maturity_date: u64,
    pub face_value: i128,
    pub has_interest: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetMaturedEvent {
    pub asset: Address,
    pub matured_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RedemptionExecutedEvent {
    pub asset: Address,
    pub holder: Address,
    pub principal: i128,
    pub interest: i128,
    pub burned: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RedemptionFailedEvent {
    pub asset: Address,
    pub holder: Address,
    pub principal: i128,
    pub interest: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct EmergencyRedemptionEvent {
    pub asset: Address,
    pub holder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RestrictionAddedEvent {
    pub asset: Address,
    pub restriction_id: u64,
    pub restriction_type: RestrictionType,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RestrictionRemovedEvent {
    pub asset: Address,
    pub restriction_id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct HolderJurisdictionSetEvent {
    pub holder: Address,
    pub jurisdiction: Symbol,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RetirementInitiatedEvent {
    pub asset: Address,
    pub reason: RetirementReason,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RetirementFinalizedEvent {
    pub asset: Address,
    pub report_hash: BytesN<32>,
}
