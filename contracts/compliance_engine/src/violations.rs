use soroban_sdk::{contracttype, Env, Symbol, Vec};

use crate::storage::{InvestorProfile, JurisdictionRules};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Severity {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    pub code: Symbol,
    pub severity: Severity,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComplianceVerdict {
    pub approved: bool,
    pub violations: Vec<Violation>,
}

fn violation(env: &Env, code: &str, severity: Severity) -> Violation {
    Violation {
        code: Symbol::new(env, code),
        severity,
    }
}

/// Collect every violation for a proposed investment, ordered by severity of
/// the check. A sanctioned investor short-circuits: nothing else matters.
pub fn collect(
    env: &Env,
    profile: &InvestorProfile,
    rules: &JurisdictionRules,
    asset_type: &Symbol,
    amount: i128,
    now: u64,
) -> Vec<Violation> {
    let mut violations = Vec::new(env);

    if profile.is_sanctioned {
        violations.push_back(violation(env, "SANCTIONED", Severity::Critical));
        return violations;
    }

    if profile.is_pep {
        violations.push_back(violation(env, "PEP_FLAGGED", Severity::High));
    }

    if profile.kyc_expiry <= now {
        violations.push_back(violation(env, "KYC_EXPIRED", Severity::High));
    }

    if profile.kyc_level < rules.required_kyc_level {
        violations.push_back(violation(env, "KYC_LEVEL_TOO_LOW", Severity::Medium));
    }

    if profile.accreditation_level < rules.min_accreditation_level {
        violations.push_back(violation(env, "ACCREDITATION_TOO_LOW", Severity::Medium));
    }

    if amount < rules.min_investment {
        violations.push_back(violation(env, "BELOW_MIN_INVESTMENT", Severity::Medium));
    }
    if amount > rules.max_investment {
        violations.push_back(violation(env, "ABOVE_MAX_INVESTMENT", Severity::Medium));
    }

    if rules.restricted_asset_types.contains(asset_type) {
        violations.push_back(violation(env, "ASSET_TYPE_RESTRICTED", Severity::High));
    }

    if !rules.allows_tokenization {
        violations.push_back(violation(env, "TOKENIZATION_NOT_ALLOWED", Severity::High));
    }

    if !rules.enabled {
        violations.push_back(violation(env, "JURISDICTION_DISABLED", Severity::Critical));
    }

    violations
}
