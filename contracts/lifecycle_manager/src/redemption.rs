use crate::storage::{MaturityConfig, BASIS_POINTS, DAYS_PER_YEAR, SECONDS_PER_DAY};

/// Calculate a holder's proportional claim on the face value
///
/// Formula: principal = face_value × holder_balance / total_supply
///
/// Example:
/// - face_value: 1,100,000
/// - holder_balance: 100,000 out of total_supply 1,000,000
/// - principal: 1,100,000 × 100,000 / 1,000,000 = 110,000
pub fn calculate_principal(
    face_value: i128,
    holder_balance: i128,
    total_supply: i128,
) -> Option<i128> {
    if total_supply <= 0 || holder_balance <= 0 {
        return Some(0);
    }

    face_value
        .checked_mul(holder_balance)?
        .checked_div(total_supply)
}

/// Calculate coupon interest on a holder's principal share
///
/// Accrual runs in whole coupon periods from `registered_at` to the earlier of
/// `as_of` and `final_coupon_date`. Each full period earns
/// coupon_rate × (frequency_days / 365) of the principal share.
///
/// Formula: interest = principal × rate_bps × frequency_days × periods
///                     / (10,000 × 365)
pub fn calculate_interest(
    principal: i128,
    config: &MaturityConfig,
    registered_at: u64,
    as_of: u64,
) -> Option<i128> {
    if !config.has_interest || config.coupon_frequency_days == 0 || principal <= 0 {
        return Some(0);
    }

    let accrual_end = as_of.min(config.final_coupon_date);
    if accrual_end <= registered_at {
        return Some(0);
    }

    let elapsed_days = (accrual_end - registered_at) / SECONDS_PER_DAY;
    let periods = (elapsed_days / config.coupon_frequency_days) as i128;
    if periods == 0 {
        return Some(0);
    }

    principal
        .checked_mul(config.coupon_rate_bps as i128)?
        .checked_mul(config.coupon_frequency_days as i128)?
        .checked_mul(periods)?
        .checked_div(BASIS_POINTS.checked_mul(DAYS_PER_YEAR)?)
}

/// Whether `now` falls inside the post-maturity redemption window
pub fn within_grace_period(config: &MaturityConfig, now: u64) -> bool {
    now >= config.maturity_date && now <= config.maturity_date + config.grace_period
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SCALE;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    fn coupon_config(env: &Env, has_interest: bool) -> MaturityConfig {
        MaturityConfig {
            maturity_date: 360 * SECONDS_PER_DAY,
            face_value: 1_000_000 * SCALE,
            funding_asset: Address::generate(env),
            has_interest,
            coupon_rate_bps: 500, // 5% annualized
            coupon_frequency_days: 90,
            final_coupon_date: 360 * SECONDS_PER_DAY,
            grace_period: 30 * SECONDS_PER_DAY,
        }
    }

    #[test]
    fn test_principal_proportional_share() {
        let principal =
            calculate_principal(1_100_000 * SCALE, 100_000 * SCALE, 1_000_000 * SCALE).unwrap();
        assert_eq!(principal, 110_000 * SCALE);
    }

    #[test]
    fn test_principal_zero_balance() {
        let principal = calculate_principal(1_100_000 * SCALE, 0, 1_000_000 * SCALE).unwrap();
        assert_eq!(principal, 0);
    }

    #[test]
    fn test_principal_full_supply() {
        let principal =
            calculate_principal(1_100_000 * SCALE, 1_000_000 * SCALE, 1_000_000 * SCALE).unwrap();
        assert_eq!(principal, 1_100_000 * SCALE);
    }

    #[test]
    fn test_interest_full_year() {
        let env = Env::default();
        let config = coupon_config(&env, true);
        let principal = 100_000 * SCALE;

        // Four full 90-day periods = 360 days of accrual
        let interest =
            calculate_interest(principal, &config, 0, 360 * SECONDS_PER_DAY).unwrap();

        // 100,000 × 5% × 90 × 4 / 365 ≈ 4,931.5
        let expected = principal * 500 * 90 * 4 / (10_000 * 365);
        assert_eq!(interest, expected);
    }

    #[test]
    fn test_interest_partial_period_earns_nothing() {
        let env = Env::default();
        let config = coupon_config(&env, true);

        // 89 days: no full coupon period elapsed
        let interest =
            calculate_interest(100_000 * SCALE, &config, 0, 89 * SECONDS_PER_DAY).unwrap();
        assert_eq!(interest, 0);
    }

    #[test]
    fn test_interest_capped_at_final_coupon_date() {
        let env = Env::default();
        let config = coupon_config(&env, true);

        let at_final =
            calculate_interest(100_000 * SCALE, &config, 0, 360 * SECONDS_PER_DAY).unwrap();
        let past_final =
            calculate_interest(100_000 * SCALE, &config, 0, 720 * SECONDS_PER_DAY).unwrap();
        assert_eq!(at_final, past_final);
    }

    #[test]
    fn test_no_interest_flag() {
        let env = Env::default();
        let config = coupon_config(&env, false);

        let interest =
            calculate_interest(100_000 * SCALE, &config, 0, 360 * SECONDS_PER_DAY).unwrap();
        assert_eq!(interest, 0);
    }

    #[test]
    fn test_grace_period_bounds() {
        let env = Env::default();
        let config = coupon_config(&env, true);
        let maturity = config.maturity_date;

        assert!(!within_grace_period(&config, maturity - 1));
        assert!(within_grace_period(&config, maturity));
        assert!(within_grace_period(&config, maturity + 29 * SECONDS_PER_DAY));
        assert!(within_grace_period(&config, maturity + 30 * SECONDS_PER_DAY));
        assert!(!within_grace_period(&config, maturity + 31 * SECONDS_PER_DAY));
    }
}
