#![no_std]

mod error;
mod events;
mod storage;
mod var;

use error::Error;
use events::*;
use storage::{
    DataKey, PortfolioMetrics, RiskLimits, RiskVerdict, BASIS_POINTS, MAX_RETURN_MAGNITUDE_BPS,
    MIN_HISTORY_POINTS,
};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

#[contract]
pub struct RiskEngine;

#[contractimpl]
impl RiskEngine {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the engine with its role holders
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        risk_manager: Address,
        portfolio_manager: Address,
        emergency_role: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::RiskManager, &risk_manager);
        env.storage()
            .instance()
            .set(&DataKey::PortfolioManager, &portfolio_manager);
        env.storage()
            .instance()
            .set(&DataKey::EmergencyRole, &emergency_role);

        Ok(())
    }

    // ============================================
    // RETURN SERIES & METRICS
    // ============================================

    /// Append one signed basis-point return observation to a portfolio's
    /// series. The series is append-only.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the portfolio manager
    /// - `InvalidReturnValue`: Magnitude outside the plausible range
    pub fn add_historical_return(
        env: Env,
        portfolio: Address,
        return_bps: i128,
    ) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::PortfolioManager)?;

        if return_bps > MAX_RETURN_MAGNITUDE_BPS || return_bps < -MAX_RETURN_MAGNITUDE_BPS {
            return Err(Error::InvalidReturnValue);
        }

        let mut series = Self::return_series(&env, &portfolio);
        series.push_back(return_bps);
        env.storage()
            .instance()
            .set(&DataKey::Returns(portfolio), &series);

        Ok(())
    }

    /// Report externally observed portfolio state used by limit checks
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the portfolio manager
    pub fn update_portfolio_metrics(
        env: Env,
        portfolio: Address,
        metrics: PortfolioMetrics,
    ) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::PortfolioManager)?;

        env.storage()
            .instance()
            .set(&DataKey::Metrics(portfolio), &metrics);

        Ok(())
    }

    // ============================================
    // LIMITS
    // ============================================

    /// Overwrite the full limit set for a portfolio
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the risk manager
    /// - `InvalidLimits`: Share limits above 100%
    pub fn set_risk_limits(env: Env, portfolio: Address, limits: RiskLimits) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::RiskManager)?;

        if limits.max_position_size_bps as i128 > BASIS_POINTS
            || limits.max_drawdown_bps as i128 > BASIS_POINTS
        {
            return Err(Error::InvalidLimits);
        }

        env.storage()
            .instance()
            .set(&DataKey::Limits(portfolio.clone()), &limits);

        env.events().publish(
            (Symbol::new(&env, "limits_set"), portfolio.clone()),
            RiskLimitsSetEvent {
                portfolio,
                max_position_size_bps: limits.max_position_size_bps,
                max_leverage_bps: limits.max_leverage_bps,
                max_drawdown_bps: limits.max_drawdown_bps,
            },
        );

        Ok(())
    }

    // ============================================
    // VALIDATION
    // ============================================

    /// Check a proposed transaction against the portfolio's limits. The
    /// emergency-shutdown flag is the fastest gate and is checked before any
    /// exposure evaluation; the first violated constraint names the reason.
    pub fn validate_transaction(
        env: Env,
        portfolio: Address,
        _asset: Address,
        amount: i128,
        is_buy: bool,
    ) -> RiskVerdict {
        let limits: RiskLimits = match env
            .storage()
            .instance()
            .get(&DataKey::Limits(portfolio.clone()))
        {
            Some(l) => l,
            // No limits configured means nothing to enforce
            None => return Self::approved(&env),
        };

        if limits.emergency_shutdown {
            return Self::rejected(&env, "Portfolio under emergency shutdown");
        }

        let metrics: Option<PortfolioMetrics> =
            env.storage().instance().get(&DataKey::Metrics(portfolio));

        if let Some(metrics) = metrics {
            if is_buy && metrics.total_value > 0 {
                let position_bps = amount
                    .checked_mul(BASIS_POINTS)
                    .and_then(|v| v.checked_div(metrics.total_value))
                    .unwrap_or(i128::MAX);
                if position_bps > limits.max_position_size_bps as i128 {
                    return Self::rejected(&env, "Position size limit exceeded");
                }
            }

            if metrics.leverage_bps > limits.max_leverage_bps {
                return Self::rejected(&env, "Leverage limit exceeded");
            }

            if metrics.drawdown_bps > limits.max_drawdown_bps {
                return Self::rejected(&env, "Drawdown limit exceeded");
            }

            if metrics.liquidity_score < limits.min_liquidity_score {
                return Self::rejected(&env, "Liquidity below minimum");
            }
        }

        Self::approved(&env)
    }

    /// Historical-simulation Value-at-Risk in basis points
    ///
    /// # Errors
    /// - `InsufficientHistoricalData`: Fewer observations than the minimum
    /// - `InvalidConfidenceLevel`: Level outside {9500, 9900}
    /// - `InvalidHorizon`: Horizon of zero days
    pub fn calculate_var(
        env: Env,
        portfolio: Address,
        confidence_level: u32,
        horizon_days: u32,
    ) -> Result<i128, Error> {
        if !var::is_supported_confidence(confidence_level) {
            return Err(Error::InvalidConfidenceLevel);
        }
        if horizon_days == 0 {
            return Err(Error::InvalidHorizon);
        }

        let series = Self::return_series(&env, &portfolio);
        if series.len() < MIN_HISTORY_POINTS {
            return Err(Error::InsufficientHistoricalData);
        }

        Ok(var::historical_var(
            &env,
            &series,
            confidence_level,
            horizon_days,
        ))
    }

    // ============================================
    // EMERGENCY SHUTDOWN
    // ============================================

    /// Trip the portfolio kill-switch
    ///
    /// # Errors
    /// - `Unauthorized`: Caller does not hold the emergency role
    /// - `LimitsNotFound`: No limit record to flag
    pub fn emergency_shutdown(
        env: Env,
        portfolio: Address,
        reason: String,
    ) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::EmergencyRole)?;

        let mut limits: RiskLimits = env
            .storage()
            .instance()
            .get(&DataKey::Limits(portfolio.clone()))
            .ok_or(Error::LimitsNotFound)?;

        limits.emergency_shutdown = true;
        env.storage()
            .instance()
            .set(&DataKey::Limits(portfolio.clone()), &limits);

        env.events().publish(
            (Symbol::new(&env, "emergency_shutdown"), portfolio.clone()),
            EmergencyShutdownEvent { portfolio, reason },
        );

        Ok(())
    }

    /// Clear the kill-switch; the only path back to normal validation
    ///
    /// # Errors
    /// - `Unauthorized`: Caller does not hold the emergency role
    /// - `LimitsNotFound`: No limit record for this portfolio
    pub fn resume_portfolio(env: Env, portfolio: Address) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::EmergencyRole)?;

        let mut limits: RiskLimits = env
            .storage()
            .instance()
            .get(&DataKey::Limits(portfolio.clone()))
            .ok_or(Error::LimitsNotFound)?;

        limits.emergency_shutdown = false;
        env.storage()
            .instance()
            .set(&DataKey::Limits(portfolio.clone()), &limits);

        env.events().publish(
            (Symbol::new(&env, "portfolio_resumed"), portfolio.clone()),
            PortfolioResumedEvent { portfolio },
        );

        Ok(())
    }

    // ============================================
    // PRICE FEEDS
    // ============================================

    /// Associate a price-feed handle with an asset
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the risk manager
    /// - `InvalidPriceFeed`: Null feed reference
    pub fn update_price_feed(
        env: Env,
        asset: Address,
        feed: Option<Address>,
    ) -> Result<(), Error> {
        Self::require_role(&env, &DataKey::RiskManager)?;

        let feed = feed.ok_or(Error::InvalidPriceFeed)?;

        env.storage()
            .instance()
            .set(&DataKey::PriceFeed(asset.clone()), &feed);

        env.events().publish(
            (Symbol::new(&env, "price_feed_updated"), asset.clone()),
            PriceFeedUpdatedEvent { asset, feed },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_risk_limits(env: Env, portfolio: Address) -> Result<RiskLimits, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Limits(portfolio))
            .ok_or(Error::LimitsNotFound)
    }

    pub fn get_portfolio_metrics(env: Env, portfolio: Address) -> Option<PortfolioMetrics> {
        env.storage().instance().get(&DataKey::Metrics(portfolio))
    }

    pub fn return_count(env: Env, portfolio: Address) -> u32 {
        Self::return_series(&env, &portfolio).len()
    }

    pub fn get_price_feed(env: Env, asset: Address) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PriceFeed(asset))
            .ok_or(Error::InvalidPriceFeed)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_role(env: &Env, role: &DataKey) -> Result<(), Error> {
        let holder: Address = env
            .storage()
            .instance()
            .get(role)
            .ok_or(Error::NotInitialized)?;
        holder.require_auth();
        Ok(())
    }

    fn return_series(env: &Env, portfolio: &Address) -> Vec<i128> {
        env.storage()
            .instance()
            .get(&DataKey::Returns(portfolio.clone()))
            .unwrap_or(Vec::new(env))
    }

    fn approved(env: &Env) -> RiskVerdict {
        RiskVerdict {
            valid: true,
            reason: String::from_str(env, ""),
        }
    }

    fn rejected(env: &Env, reason: &str) -> RiskVerdict {
        RiskVerdict {
            valid: false,
            reason: String::from_str(env, reason),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    struct TestContext {
        env: Env,
        portfolio: Address,
        asset: Address,
        engine_id: Address,
    }

    fn setup() -> TestContext {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let risk_manager = Address::generate(&env);
        let portfolio_manager = Address::generate(&env);
        let emergency_role = Address::generate(&env);
        let portfolio = Address::generate(&env);
        let asset = Address::generate(&env);

        let engine_id = env.register_contract(None, RiskEngine);
        RiskEngineClient::new(&env, &engine_id).initialize(
            &admin,
            &risk_manager,
            &portfolio_manager,
            &emergency_role,
        );

        TestContext {
            env,
            portfolio,
            asset,
            engine_id,
        }
    }

    fn client(ctx: &TestContext) -> RiskEngineClient {
        RiskEngineClient::new(&ctx.env, &ctx.engine_id)
    }

    fn default_limits() -> RiskLimits {
        RiskLimits {
            max_position_size_bps: 2_000, // 20%
            max_leverage_bps: 30_000,     // 3x
            max_drawdown_bps: 1_500,      // 15%
            min_liquidity_score: 40,
            max_var_95_bps: 500,
            emergency_shutdown: false,
        }
    }

    fn healthy_metrics() -> PortfolioMetrics {
        PortfolioMetrics {
            total_value: 1_000_000,
            leverage_bps: 10_000, // 1x
            drawdown_bps: 500,
            liquidity_score: 80,
        }
    }

    fn seed_returns(ctx: &TestContext, count: u32) {
        let c = client(ctx);
        for i in 0..count {
            // Two bad days at the start, mild gains after
            let value: i128 = match i {
                0 => -800,
                1 => -350,
                _ => 10 + i as i128,
            };
            c.add_historical_return(&ctx.portfolio, &value);
        }
    }

    #[test]
    fn test_initialize_once() {
        let ctx = setup();
        let other = Address::generate(&ctx.env);
        let result = client(&ctx).try_initialize(&other, &other, &other, &other);
        assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    }

    #[test]
    fn test_validate_without_limits_passes() {
        let ctx = setup();
        let verdict = client(&ctx).validate_transaction(&ctx.portfolio, &ctx.asset, &1_000, &true);
        assert!(verdict.valid);
    }

    #[test]
    fn test_shutdown_precedence() {
        let ctx = setup();
        let c = client(&ctx);
        c.set_risk_limits(&ctx.portfolio, &default_limits());

        // Metrics that would trip every other limit
        c.update_portfolio_metrics(
            &ctx.portfolio,
            &PortfolioMetrics {
                total_value: 100,
                leverage_bps: 90_000,
                drawdown_bps: 9_000,
                liquidity_score: 0,
            },
        );
        c.emergency_shutdown(&ctx.portfolio, &String::from_str(&ctx.env, "audit hold"));

        // Shutdown reason wins over every exposure check
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &1_000_000, &true);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason,
            String::from_str(&ctx.env, "Portfolio under emergency shutdown")
        );

        // Clears only via explicit resume
        c.resume_portfolio(&ctx.portfolio);
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &10, &true);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason,
            String::from_str(&ctx.env, "Leverage limit exceeded")
        );
    }

    #[test]
    fn test_position_size_limit() {
        let ctx = setup();
        let c = client(&ctx);
        c.set_risk_limits(&ctx.portfolio, &default_limits());
        c.update_portfolio_metrics(&ctx.portfolio, &healthy_metrics());

        // 20% of 1,000,000 = 200,000
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &200_000, &true);
        assert!(verdict.valid);

        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &200_001, &true);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason,
            String::from_str(&ctx.env, "Position size limit exceeded")
        );

        // Sells are not position-size gated
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &500_000, &false);
        assert!(verdict.valid);
    }

    #[test]
    fn test_drawdown_and_liquidity_limits() {
        let ctx = setup();
        let c = client(&ctx);
        c.set_risk_limits(&ctx.portfolio, &default_limits());

        let mut metrics = healthy_metrics();
        metrics.drawdown_bps = 1_501;
        c.update_portfolio_metrics(&ctx.portfolio, &metrics);
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &10, &true);
        assert_eq!(
            verdict.reason,
            String::from_str(&ctx.env, "Drawdown limit exceeded")
        );

        let mut metrics = healthy_metrics();
        metrics.liquidity_score = 39;
        c.update_portfolio_metrics(&ctx.portfolio, &metrics);
        let verdict = c.validate_transaction(&ctx.portfolio, &ctx.asset, &10, &true);
        assert_eq!(
            verdict.reason,
            String::from_str(&ctx.env, "Liquidity below minimum")
        );
    }

    #[test]
    fn test_var_requires_minimum_history() {
        let ctx = setup();
        seed_returns(&ctx, MIN_HISTORY_POINTS - 1);

        assert_eq!(
            client(&ctx).try_calculate_var(&ctx.portfolio, &9500, &1),
            Err(Ok(Error::InsufficientHistoricalData))
        );

        client(&ctx).add_historical_return(&ctx.portfolio, &50);
        assert!(client(&ctx).try_calculate_var(&ctx.portfolio, &9500, &1).is_ok());
    }

    #[test]
    fn test_var_rejects_unsupported_confidence() {
        let ctx = setup();
        seed_returns(&ctx, MIN_HISTORY_POINTS);

        for level in [0u32, 9000, 9750, 10_000] {
            assert_eq!(
                client(&ctx).try_calculate_var(&ctx.portfolio, &level, &1),
                Err(Ok(Error::InvalidConfidenceLevel))
            );
        }
        assert_eq!(
            client(&ctx).try_calculate_var(&ctx.portfolio, &9500, &0),
            Err(Ok(Error::InvalidHorizon))
        );
    }

    #[test]
    fn test_var_confidence_monotonicity() {
        let ctx = setup();
        seed_returns(&ctx, MIN_HISTORY_POINTS);
        let c = client(&ctx);

        let var_95 = c.calculate_var(&ctx.portfolio, &9500, &1);
        let var_99 = c.calculate_var(&ctx.portfolio, &9900, &1);

        assert_eq!(var_95, 350);
        assert_eq!(var_99, 800);
        assert!(var_99 >= var_95);
    }

    #[test]
    fn test_return_series_appends() {
        let ctx = setup();
        let c = client(&ctx);

        assert_eq!(c.return_count(&ctx.portfolio), 0);
        c.add_historical_return(&ctx.portfolio, &120);
        c.add_historical_return(&ctx.portfolio, &-45);
        assert_eq!(c.return_count(&ctx.portfolio), 2);

        assert_eq!(
            c.try_add_historical_return(&ctx.portfolio, &200_000),
            Err(Ok(Error::InvalidReturnValue))
        );
    }

    #[test]
    fn test_price_feed_null_rejected() {
        let ctx = setup();
        let c = client(&ctx);

        assert_eq!(
            c.try_update_price_feed(&ctx.asset, &None),
            Err(Ok(Error::InvalidPriceFeed))
        );

        let feed = Address::generate(&ctx.env);
        c.update_price_feed(&ctx.asset, &Some(feed.clone()));
        assert_eq!(c.get_price_feed(&ctx.asset), feed);
    }

    #[test]
    fn test_shutdown_requires_limit_record() {
        let ctx = setup();
        let result = client(&ctx)
            .try_emergency_shutdown(&ctx.portfolio, &String::from_str(&ctx.env, "x"));
        assert_eq!(result, Err(Ok(Error::LimitsNotFound)));
    }

    #[test]
    fn test_set_limits_bounds_checked() {
        let ctx = setup();
        let mut limits = default_limits();
        limits.max_position_size_bps = 10_001;

        assert_eq!(
            client(&ctx).try_set_risk_limits(&ctx.portfolio, &limits),
            Err(Ok(Error::InvalidLimits))
        );
    }
}
