#![no_std]

mod error;
mod events;
mod storage;
mod violations;

use error::Error;
use events::*;
use storage::{
    ComplianceReport, ComplianceStatus, DataKey, InvestorProfile, JurisdictionRules, SCALE,
    MAX_KYC_LEVEL,
};
use violations::{ComplianceVerdict, Violation};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};

#[contract]
pub struct ComplianceEngine;

#[contractimpl]
impl ComplianceEngine {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the engine and seed default rules for US, EU and SG
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address, kyc_provider: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::KycProvider, &kyc_provider);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::ReportCount, &0u64);

        Self::seed_default_rules(&env);

        Ok(())
    }

    /// Pause profile/rule mutation and investment validation (emergency)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn pause(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        Ok(())
    }

    /// Resume normal operation
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn resume(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        Ok(())
    }

    // ============================================
    // JURISDICTION RULES
    // ============================================

    /// Replace the rule set for a jurisdiction
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `EnginePaused`: Engine is paused
    /// - `InvalidInvestmentBounds`: min above max
    pub fn update_jurisdiction_rules(
        env: Env,
        jurisdiction: Symbol,
        mut rules: JurisdictionRules,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        if rules.min_investment > rules.max_investment {
            return Err(Error::InvalidInvestmentBounds);
        }

        rules.updated_at = env.ledger().timestamp();
        env.storage()
            .instance()
            .set(&DataKey::Rules(jurisdiction.clone()), &rules);

        env.events().publish(
            (Symbol::new(&env, "rules_updated"), jurisdiction.clone()),
            JurisdictionRulesUpdatedEvent {
                jurisdiction,
                enabled: rules.enabled,
                min_investment: rules.min_investment,
                max_investment: rules.max_investment,
            },
        );

        Ok(())
    }

    // ============================================
    // INVESTOR PROFILES
    // ============================================

    /// Record a KYC provider attestation for one investor
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the KYC provider
    /// - `EnginePaused`: Engine is paused
    /// - `InvalidKycLevel`: Level above the supported maximum
    pub fn set_investor_profile(env: Env, profile: InvestorProfile) -> Result<(), Error> {
        Self::require_kyc_provider(&env)?;
        Self::check_not_paused(&env)?;

        Self::validate_profile(&profile)?;
        Self::store_profile(&env, &profile);

        Ok(())
    }

    /// Batch form of `set_investor_profile`. Every entry is validated before
    /// any is written, so the batch lands as a set or not at all.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the KYC provider
    /// - `EnginePaused`: Engine is paused
    /// - `EmptyBatch`: No profiles supplied
    /// - `InvalidKycLevel`: Any entry above the supported maximum
    pub fn batch_set_investor_profiles(
        env: Env,
        profiles: Vec<InvestorProfile>,
    ) -> Result<(), Error> {
        Self::require_kyc_provider(&env)?;
        Self::check_not_paused(&env)?;

        if profiles.is_empty() {
            return Err(Error::EmptyBatch);
        }

        for profile in profiles.iter() {
            Self::validate_profile(&profile)?;
        }
        for profile in profiles.iter() {
            Self::store_profile(&env, &profile);
        }

        Ok(())
    }

    // ============================================
    // VALIDATION
    // ============================================

    /// Full compliance evaluation for a proposed investment. Returns every
    /// violation found with a severity rank; approved iff none.
    ///
    /// # Errors
    /// - `EnginePaused`: Engine is paused
    /// - `ProfileNotFound`: Investor has no recorded profile
    /// - `JurisdictionNotFound`: No rules for the investor's jurisdiction
    pub fn validate_investment(
        env: Env,
        investor: Address,
        asset_type: Symbol,
        amount: i128,
        _asset: Address,
    ) -> Result<ComplianceVerdict, Error> {
        Self::check_not_paused(&env)?;

        let profile = Self::get_profile(&env, &investor)?;
        let rules = Self::get_rules(&env, &profile.jurisdiction)?;

        let found: Vec<Violation> = violations::collect(
            &env,
            &profile,
            &rules,
            &asset_type,
            amount,
            env.ledger().timestamp(),
        );

        Ok(ComplianceVerdict {
            approved: found.is_empty(),
            violations: found,
        })
    }

    /// Cheap boolean check for hot-path transfer gating. Approximates
    /// `validate_investment`'s pass/fail outcome and always short-circuits to
    /// false for sanctioned investors.
    pub fn check_transaction_compliance(env: Env, investor: Address, amount: i128) -> bool {
        if Self::is_paused(&env) {
            return false;
        }

        let profile = match Self::get_profile(&env, &investor) {
            Ok(p) => p,
            Err(_) => return false,
        };
        if profile.is_sanctioned {
            return false;
        }
        if profile.kyc_expiry <= env.ledger().timestamp() {
            return false;
        }

        let rules = match Self::get_rules(&env, &profile.jurisdiction) {
            Ok(r) => r,
            Err(_) => return false,
        };

        rules.enabled && amount >= rules.min_investment && amount <= rules.max_investment
    }

    /// Read-only compliance summary for an investor
    ///
    /// # Errors
    /// - `ProfileNotFound`: Investor has no recorded profile
    pub fn get_compliance_status(env: Env, investor: Address) -> Result<ComplianceStatus, Error> {
        let profile = Self::get_profile(&env, &investor)?;

        let kyc_valid = profile.kyc_expiry > env.ledger().timestamp();
        let jurisdiction_enabled = Self::get_rules(&env, &profile.jurisdiction)
            .map(|r| r.enabled)
            .unwrap_or(false);

        Ok(ComplianceStatus {
            is_compliant: !profile.is_sanctioned && kyc_valid && jurisdiction_enabled,
            kyc_valid,
            jurisdiction: profile.jurisdiction,
        })
    }

    // ============================================
    // REPORTING
    // ============================================

    /// Append an immutable audit report and bump the global counter. Reports
    /// feed audit trails; they never gate anything.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `EnginePaused`: Engine is paused
    pub fn generate_compliance_report(
        env: Env,
        investor: Address,
        asset: Address,
        amount: i128,
        violation_count: u32,
        evidence_hash: BytesN<32>,
    ) -> Result<u64, Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        let report_id = Self::report_count(env.clone()) + 1;

        let report = ComplianceReport {
            report_id,
            investor: investor.clone(),
            asset,
            amount,
            violation_count,
            evidence_hash: evidence_hash.clone(),
            generated_at: env.ledger().timestamp(),
        };

        env.storage()
            .instance()
            .set(&DataKey::Report(report_id), &report);
        env.storage()
            .instance()
            .set(&DataKey::ReportCount, &report_id);

        env.events().publish(
            (Symbol::new(&env, "report_generated"), report_id),
            ComplianceReportEvent {
                report_id,
                investor,
                violation_count,
                evidence_hash,
            },
        );

        Ok(report_id)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_investor_profile(env: Env, investor: Address) -> Result<InvestorProfile, Error> {
        Self::get_profile(&env, &investor)
    }

    pub fn get_jurisdiction_rules(
        env: Env,
        jurisdiction: Symbol,
    ) -> Result<JurisdictionRules, Error> {
        Self::get_rules(&env, &jurisdiction)
    }

    pub fn get_report(env: Env, report_id: u64) -> Result<ComplianceReport, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Report(report_id))
            .ok_or(Error::ReportNotFound)
    }

    pub fn report_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ReportCount)
            .unwrap_or(0)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }

    fn require_kyc_provider(env: &Env) -> Result<(), Error> {
        let provider: Address = env
            .storage()
            .instance()
            .get(&DataKey::KycProvider)
            .ok_or(Error::NotInitialized)?;
        provider.require_auth();
        Ok(())
    }

    fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if Self::is_paused(env) {
            return Err(Error::EnginePaused);
        }
        Ok(())
    }

    fn get_profile(env: &Env, investor: &Address) -> Result<InvestorProfile, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Profile(investor.clone()))
            .ok_or(Error::ProfileNotFound)
    }

    fn get_rules(env: &Env, jurisdiction: &Symbol) -> Result<JurisdictionRules, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Rules(jurisdiction.clone()))
            .ok_or(Error::JurisdictionNotFound)
    }

    fn validate_profile(profile: &InvestorProfile) -> Result<(), Error> {
        if profile.kyc_level > MAX_KYC_LEVEL {
            return Err(Error::InvalidKycLevel);
        }
        Ok(())
    }

    fn store_profile(env: &Env, profile: &InvestorProfile) {
        env.storage()
            .instance()
            .set(&DataKey::Profile(profile.investor.clone()), profile);

        env.events().publish(
            (Symbol::new(env, "profile_set"), profile.investor.clone()),
            InvestorProfileSetEvent {
                investor: profile.investor.clone(),
                jurisdiction: profile.jurisdiction.clone(),
                kyc_level: profile.kyc_level,
                is_sanctioned: profile.is_sanctioned,
            },
        );
    }

    fn seed_default_rules(env: &Env) {
        let now = env.ledger().timestamp();

        let us = JurisdictionRules {
            enabled: true,
            min_investment: 25_000 * SCALE,
            max_investment: 10_000_000 * SCALE,
            max_investors: 2_000,
            cooling_off_period: 0,
            required_kyc_level: 2,
            min_accreditation_level: 1,
            requires_local_entity: false,
            allows_tokenization: true,
            required_documents: 0,
            restricted_asset_types: Vec::new(env),
            updated_at: now,
        };
        env.storage()
            .instance()
            .set(&DataKey::Rules(Symbol::new(env, "US")), &us);

        let eu = JurisdictionRules {
            enabled: true,
            min_investment: 10_000 * SCALE,
            max_investment: 5_000_000 * SCALE,
            max_investors: 5_000,
            cooling_off_period: 14 * 86_400,
            required_kyc_level: 2,
            min_accreditation_level: 0,
            requires_local_entity: false,
            allows_tokenization: true,
            required_documents: 0,
            restricted_asset_types: Vec::new(env),
            updated_at: now,
        };
        env.storage()
            .instance()
            .set(&DataKey::Rules(Symbol::new(env, "EU")), &eu);

        let sg = JurisdictionRules {
            enabled: true,
            min_investment: 50_000 * SCALE,
            max_investment: 20_000_000 * SCALE,
            max_investors: 1_000,
            cooling_off_period: 7 * 86_400,
            required_kyc_level: 3,
            min_accreditation_level: 1,
            requires_local_entity: true,
            allows_tokenization: true,
            required_documents: 0,
            restricted_asset_types: Vec::new(env),
            updated_at: now,
        };
        env.storage()
            .instance()
            .set(&DataKey::Rules(Symbol::new(env, "SG")), &sg);
    }
}
