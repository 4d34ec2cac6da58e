use soroban_sdk::{Env, Vec};

use crate::storage::BASIS_POINTS;

/// Confidence levels supported by historical-simulation VaR, on the
/// 10,000 = 100% fixed-point scale
pub const SUPPORTED_CONFIDENCE_LEVELS: [u32; 2] = [9500, 9900];

pub fn is_supported_confidence(confidence_level: u32) -> bool {
    SUPPORTED_CONFIDENCE_LEVELS.contains(&confidence_level)
}

/// Insertion sort into a fresh Vec; series lengths stay small enough that
/// quadratic cost is irrelevant on-ledger.
pub fn sort_ascending(env: &Env, series: &Vec<i128>) -> Vec<i128> {
    let mut sorted: Vec<i128> = Vec::new(env);
    for value in series.iter() {
        let mut idx = 0u32;
        while idx < sorted.len() && sorted.get_unchecked(idx) <= value {
            idx += 1;
        }
        sorted.insert(idx, value);
    }
    sorted
}

/// Historical-simulation VaR: the loss at the (1 − confidence) percentile of
/// the sorted return series, scaled by √horizon.
///
/// Example, 30 observations at 95%: tail index = 30 × 500 / 10,000 = 1, so the
/// second-worst observed return is the one-day VaR. At 99% the index is 0,
/// selecting the worst observation, which is why |VaR99| ≥ |VaR95| always
/// holds for the same series.
pub fn historical_var(
    env: &Env,
    series: &Vec<i128>,
    confidence_level: u32,
    horizon_days: u32,
) -> i128 {
    let sorted = sort_ascending(env, series);

    let tail_bps = BASIS_POINTS - confidence_level as i128;
    let mut index = (sorted.len() as i128 * tail_bps / BASIS_POINTS) as u32;
    if index >= sorted.len() {
        index = sorted.len() - 1;
    }

    let tail_return = sorted.get_unchecked(index);
    let loss = if tail_return < 0 { -tail_return } else { 0 };

    scale_by_horizon(loss, horizon_days)
}

/// √t horizon scaling in fixed point: loss × √(horizon × 10,000) / 100,
/// so a 1-day horizon is the identity and 4 days doubles the loss.
fn scale_by_horizon(loss: i128, horizon_days: u32) -> i128 {
    loss * integer_sqrt(horizon_days as i128 * 10_000) / 100
}

/// Babylonian integer square root
pub fn integer_sqrt(value: i128) -> i128 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::vec;

    fn series_of_30(env: &Env) -> Vec<i128> {
        let mut series: Vec<i128> = Vec::new(env);
        // Mild positive drift with two bad days: -800 (worst) and -350
        for i in 0..28 {
            series.push_back(10 + i as i128);
        }
        series.push_back(-350);
        series.push_back(-800);
        series
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(10_000), 100);
        assert_eq!(integer_sqrt(40_000), 200);
        assert_eq!(integer_sqrt(99), 9);
    }

    #[test]
    fn test_sort_ascending() {
        let env = Env::default();
        let series = vec![&env, 5i128, -3, 12, -3, 0];
        let sorted = sort_ascending(&env, &series);
        assert_eq!(sorted, vec![&env, -3i128, -3, 0, 5, 12]);
    }

    #[test]
    fn test_var_selects_tail_loss() {
        let env = Env::default();
        let series = series_of_30(&env);

        // 95%: tail index 1 → second-worst return (-350)
        assert_eq!(historical_var(&env, &series, 9500, 1), 350);
        // 99%: tail index 0 → worst return (-800)
        assert_eq!(historical_var(&env, &series, 9900, 1), 800);
    }

    #[test]
    fn test_var_99_never_below_var_95() {
        let env = Env::default();
        let series = series_of_30(&env);

        let var_95 = historical_var(&env, &series, 9500, 1);
        let var_99 = historical_var(&env, &series, 9900, 1);
        assert!(var_99 >= var_95);
    }

    #[test]
    fn test_horizon_scaling() {
        let env = Env::default();
        let series = series_of_30(&env);

        let one_day = historical_var(&env, &series, 9900, 1);
        let four_days = historical_var(&env, &series, 9900, 4);
        assert_eq!(four_days, one_day * 2);
    }

    #[test]
    fn test_all_positive_returns_zero_var() {
        let env = Env::default();
        let mut series: Vec<i128> = Vec::new(&env);
        for _ in 0..30 {
            series.push_back(25);
        }
        assert_eq!(historical_var(&env, &series, 9500, 1), 0);
    }

    #[test]
    fn test_supported_confidence_set() {
        assert!(is_supported_confidence(9500));
        assert!(is_supported_confidence(9900));
        assert!(!is_supported_confidence(9000));
        assert!(!is_supported_confidence(10_000));
    }
}
