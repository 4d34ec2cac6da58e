use soroban_sdk::{Env, String, Symbol};

use crate::storage::{RestrictionType, TransferRestriction, SECONDS_PER_DAY};

/// Whether `now` falls inside the restriction's active window.
/// end_date 0 means the window never closes.
pub fn in_window(restriction: &TransferRestriction, now: u64) -> bool {
    if now < restriction.start_date {
        return false;
    }
    restriction.end_date == 0 || now <= restriction.end_date
}

/// Evaluate one restriction against a proposed transfer. Returns the rejection
/// reason, or None if the restriction passes.
///
/// LockupPeriod blocks every transfer of the asset while its window is open
/// (asset-wide policy; per-holder lockups are expressed as HoldingPeriod).
/// AccreditedOnly, MaxHolders and HoldingPeriod depend on holder-level data
/// the token itself tracks, so they pass here and gate at the token boundary.
pub fn evaluate(
    env: &Env,
    restriction: &TransferRestriction,
    from_jurisdiction: Option<Symbol>,
    to_jurisdiction: Option<Symbol>,
    amount: i128,
    now: u64,
) -> Option<String> {
    if !restriction.is_active || !in_window(restriction, now) {
        return None;
    }

    match restriction.restriction_type {
        RestrictionType::LockupPeriod => Some(String::from_str(env, "Lockup active")),
        RestrictionType::VolumeLimit => {
            if amount > restriction.max_amount {
                Some(String::from_str(env, "Volume limit exceeded"))
            } else {
                None
            }
        }
        RestrictionType::JurisdictionBased => {
            let from_ok = from_jurisdiction
                .map(|j| restriction.allowed_jurisdictions.contains(&j))
                .unwrap_or(false);
            let to_ok = to_jurisdiction
                .map(|j| restriction.allowed_jurisdictions.contains(&j))
                .unwrap_or(false);
            if from_ok && to_ok {
                None
            } else {
                Some(String::from_str(env, "Jurisdiction not allowed"))
            }
        }
        RestrictionType::TimeOfDay => {
            if is_weekend(now) {
                Some(String::from_str(env, "Weekend trading not allowed"))
            } else if !within_trading_hours(restriction, now) {
                Some(String::from_str(env, "Outside trading hours"))
            } else {
                None
            }
        }
        RestrictionType::AccreditedOnly
        | RestrictionType::MaxHolders
        | RestrictionType::HoldingPeriod => None,
    }
}

/// Day of week from a unix timestamp, 0 = Sunday. The epoch was a Thursday.
fn day_of_week(timestamp: u64) -> u64 {
    (timestamp / SECONDS_PER_DAY + 4) % 7
}

pub fn is_weekend(timestamp: u64) -> bool {
    let dow = day_of_week(timestamp);
    dow == 0 || dow == 6
}

fn within_trading_hours(restriction: &TransferRestriction, timestamp: u64) -> bool {
    let hour = ((timestamp % SECONDS_PER_DAY) / 3600) as u32;
    hour >= restriction.open_hour && hour < restriction.close_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env, Symbol, Vec};

    // 2024-01-01 00:00 UTC, a Monday
    const MONDAY: u64 = 1_704_067_200;

    fn restriction(env: &Env, restriction_type: RestrictionType) -> TransferRestriction {
        TransferRestriction {
            restriction_type,
            start_date: 0,
            end_date: 0,
            max_amount: 1_000,
            min_holding_period: 0,
            allowed_jurisdictions: vec![env, Symbol::new(env, "US"), Symbol::new(env, "EU")],
            open_hour: 9,
            close_hour: 17,
            is_active: true,
        }
    }

    #[test]
    fn test_window_bounds() {
        let env = Env::default();
        let mut r = restriction(&env, RestrictionType::LockupPeriod);
        r.start_date = 100;
        r.end_date = 200;

        assert!(!in_window(&r, 99));
        assert!(in_window(&r, 100));
        assert!(in_window(&r, 200));
        assert!(!in_window(&r, 201));
    }

    #[test]
    fn test_open_ended_window() {
        let env = Env::default();
        let mut r = restriction(&env, RestrictionType::LockupPeriod);
        r.start_date = 100;
        r.end_date = 0;

        assert!(in_window(&r, u64::MAX));
    }

    #[test]
    fn test_lockup_blocks_all_transfers() {
        let env = Env::default();
        let r = restriction(&env, RestrictionType::LockupPeriod);

        let reason = evaluate(&env, &r, None, None, 1, MONDAY);
        assert_eq!(reason, Some(String::from_str(&env, "Lockup active")));
    }

    #[test]
    fn test_inactive_restriction_passes() {
        let env = Env::default();
        let mut r = restriction(&env, RestrictionType::LockupPeriod);
        r.is_active = false;

        assert_eq!(evaluate(&env, &r, None, None, 1, MONDAY), None);
    }

    #[test]
    fn test_volume_limit() {
        let env = Env::default();
        let r = restriction(&env, RestrictionType::VolumeLimit);

        assert_eq!(evaluate(&env, &r, None, None, 1_000, MONDAY), None);
        assert_eq!(
            evaluate(&env, &r, None, None, 1_001, MONDAY),
            Some(String::from_str(&env, "Volume limit exceeded"))
        );
    }

    #[test]
    fn test_jurisdiction_both_parties_checked() {
        let env = Env::default();
        let r = restriction(&env, RestrictionType::JurisdictionBased);
        let us = Symbol::new(&env, "US");
        let sg = Symbol::new(&env, "SG");

        assert_eq!(
            evaluate(&env, &r, Some(us.clone()), Some(us.clone()), 1, MONDAY),
            None
        );
        assert_eq!(
            evaluate(&env, &r, Some(us.clone()), Some(sg), 1, MONDAY),
            Some(String::from_str(&env, "Jurisdiction not allowed"))
        );
        // Unrecorded jurisdiction is treated as not allowed
        assert_eq!(
            evaluate(&env, &r, Some(us), None, 1, MONDAY),
            Some(String::from_str(&env, "Jurisdiction not allowed"))
        );
    }

    #[test]
    fn test_time_of_day_hours() {
        let env = Env::default();
        let r = restriction(&env, RestrictionType::TimeOfDay);

        let monday_noon = MONDAY + 12 * 3600;
        let monday_early = MONDAY + 6 * 3600;

        assert_eq!(evaluate(&env, &r, None, None, 1, monday_noon), None);
        assert_eq!(
            evaluate(&env, &r, None, None, 1, monday_early),
            Some(String::from_str(&env, "Outside trading hours"))
        );
    }

    #[test]
    fn test_time_of_day_weekend() {
        let env = Env::default();
        let r = restriction(&env, RestrictionType::TimeOfDay);

        // Saturday noon, even inside trading hours
        let saturday_noon = MONDAY + 5 * SECONDS_PER_DAY + 12 * 3600;
        assert!(is_weekend(saturday_noon));
        assert_eq!(
            evaluate(&env, &r, None, None, 1, saturday_noon),
            Some(String::from_str(&env, "Weekend trading not allowed"))
        );
    }

    #[test]
    fn test_holder_level_types_pass_here() {
        let env = Env::default();
        for t in [
            RestrictionType::AccreditedOnly,
            RestrictionType::MaxHolders,
            RestrictionType::HoldingPeriod,
        ] {
            let r = restriction(&env, t);
            assert_eq!(evaluate(&env, &r, None, None, 1, MONDAY), None);
        }
    }

    #[test]
    fn test_empty_allowed_list_rejects_everyone() {
        let env = Env::default();
        let mut r = restriction(&env, RestrictionType::JurisdictionBased);
        r.allowed_jurisdictions = Vec::new(&env);
        let us = Symbol::new(&env, "US");

        assert_eq!(
            evaluate(&env, &r, Some(us.clone()), Some(us), 1, MONDAY),
            Some(String::from_str(&env, "Jurisdiction not allowed"))
        );
    }
}
