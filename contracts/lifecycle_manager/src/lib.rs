#![no_std]

mod error;
mod events;
mod redemption;
mod restrictions;
mod storage;

use error::Error;
use events::*;
use redemption::{calculate_interest, calculate_principal, within_grace_period};
use storage::{
    AssetLifecycle, AssetStatus, DataKey, MaturityConfig, PendingRedemption, RedemptionAmount,
    RetirementReason, RetirementRecord, TransferRestriction, TransferVerdict,
};

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, BytesN, Env, IntoVal, String, Symbol, Vec,
};

#[contract]
pub struct LifecycleManager;

#[contractimpl]
impl LifecycleManager {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the lifecycle manager
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        restriction_manager: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::RestrictionManager, &restriction_manager);
        env.storage().instance().set(&DataKey::Paused, &false);

        Ok(())
    }

    /// Pause all mutating entry points (emergency)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn pause(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        Ok(())
    }

    /// Unpause contract
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn unpause(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        Ok(())
    }

    // ============================================
    // ASSET REGISTRATION & MATURITY
    // ============================================

    /// Register maturity terms for an asset. The asset address is the security
    /// token contract answering balance_of/total_supply/burn.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `ContractPaused`: Contract is paused
    /// - `AssetAlreadyRegistered`: Asset already has a config
    /// - `InvalidMaturityDate`: Maturity not in the future
    /// - `InvalidFaceValue`: Face value not positive
    pub fn register_asset_maturity(
        env: Env,
        asset: Address,
        config: MaturityConfig,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        if env.storage().instance().has(&DataKey::Lifecycle(asset.clone())) {
            return Err(Error::AssetAlreadyRegistered);
        }

        let now = env.ledger().timestamp();
        if config.maturity_date <= now {
            return Err(Error::InvalidMaturityDate);
        }
        if config.face_value <= 0 {
            return Err(Error::InvalidFaceValue);
        }

        let lifecycle = AssetLifecycle {
            asset: asset.clone(),
            status: AssetStatus::Active,
            config: config.clone(),
            has_restrictions: false,
            registered_at: now,
        };

        env.storage()
            .instance()
            .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);

        env.events().publish(
            (Symbol::new(&env, "asset_registered"), asset.clone()),
            AssetRegisteredEvent {
                asset,
                maturity_date: config.maturity_date,
                face_value: config.face_value,
                has_interest: config.has_interest,
            },
        );

        Ok(())
    }

    /// Whether the asset's maturity date has passed. Pure time comparison.
    pub fn check_maturity(env: Env, asset: Address) -> Result<bool, Error> {
        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;
        Ok(env.ledger().timestamp() >= lifecycle.config.maturity_date)
    }

    /// Transition Active → Matured once the maturity date is reached.
    /// Callable by anyone; a second call fails rather than re-emitting.
    ///
    /// # Errors
    /// - `AssetNotFound`: Asset not registered
    /// - `NotYetMatured`: Maturity date not reached
    /// - `InvalidStatus`: Asset not in Active status
    /// - `ContractPaused`: Contract is paused
    pub fn mark_asset_matured(env: Env, asset: Address) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        let mut lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let now = env.ledger().timestamp();
        if now < lifecycle.config.maturity_date {
            return Err(Error::NotYetMatured);
        }
        if lifecycle.status != AssetStatus::Active {
            return Err(Error::InvalidStatus);
        }

        lifecycle.status = AssetStatus::Matured;
        env.storage()
            .instance()
            .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);

        env.events().publish(
            (Symbol::new(&env, "asset_matured"), asset.clone()),
            AssetMaturedEvent {
                asset,
                matured_at: now,
            },
        );

        Ok(())
    }

    // ============================================
    // REDEMPTION
    // ============================================

    /// Compute a holder's redemption payout without mutating state. Balances
    /// are read from the security token at call time.
    pub fn calculate_redemption_amount(
        env: Env,
        asset: Address,
        holder: Address,
    ) -> Result<RedemptionAmount, Error> {
        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let balance = Self::token_balance(&env, &asset, &holder);
        let total_supply = Self::token_total_supply(&env, &asset);

        let principal = calculate_principal(lifecycle.config.face_value, balance, total_supply)
            .ok_or(Error::InvalidAmount)?;
        let interest = calculate_interest(
            principal,
            &lifecycle.config,
            lifecycle.registered_at,
            env.ledger().timestamp(),
        )
        .ok_or(Error::InvalidAmount)?;

        Ok(RedemptionAmount {
            principal,
            interest,
        })
    }

    /// Redeem a holder's full position: burn their security-token balance and
    /// pay principal + interest from the funding-asset pool.
    ///
    /// The balance read immediately before the burn is the payout basis. The
    /// burn is attempted first; if it fails (e.g. the token is paused) the
    /// computed payout is recorded as a pending redemption and no funds move,
    /// so a later retry pays exactly once.
    ///
    /// # Errors
    /// - `AssetNotFound`: Asset not registered
    /// - `NotYetMatured` / `InvalidStatus` / `AssetRetired`: Wrong status
    /// - `GracePeriodExpired`: Redemption window has closed
    /// - `AlreadyRedeemed`: Holder balance is zero
    /// - `RedemptionPending`: A failed attempt is already queued for retry
    /// - `ContractPaused`: Contract is paused
    pub fn execute_redemption(env: Env, asset: Address, holder: Address) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        match lifecycle.status {
            AssetStatus::Matured => {}
            AssetStatus::Active => return Err(Error::NotYetMatured),
            AssetStatus::Retired => return Err(Error::AssetRetired),
            AssetStatus::Retiring => return Err(Error::InvalidStatus),
        }

        let now = env.ledger().timestamp();
        if !within_grace_period(&lifecycle.config, now) {
            return Err(Error::GracePeriodExpired);
        }

        let pending_key = DataKey::PendingRedemption(asset.clone(), holder.clone());
        if env.storage().instance().has(&pending_key) {
            return Err(Error::RedemptionPending);
        }

        let balance = Self::token_balance(&env, &asset, &holder);
        if balance <= 0 {
            return Err(Error::AlreadyRedeemed);
        }
        let total_supply = Self::token_total_supply(&env, &asset);

        let principal = calculate_principal(lifecycle.config.face_value, balance, total_supply)
            .ok_or(Error::InvalidAmount)?;
        let interest = calculate_interest(
            principal,
            &lifecycle.config,
            lifecycle.registered_at,
            now,
        )
        .ok_or(Error::InvalidAmount)?;

        if !Self::try_burn(&env, &asset, &holder, balance) {
            // Token refused the burn. Preserve the computed payout and queue
            // the holder for retry instead of stranding their claim.
            env.storage().instance().set(
                &pending_key,
                &PendingRedemption {
                    holder: holder.clone(),
                    principal,
                    interest,
                    attempted_at: now,
                },
            );

            let mut queue = Self::pending_holders(&env, &asset);
            if !queue.contains(&holder) {
                queue.push_back(holder.clone());
            }
            env.storage()
                .instance()
                .set(&DataKey::PendingHolders(asset.clone()), &queue);

            env.events().publish(
                (Symbol::new(&env, "redemption_failed"), asset.clone()),
                RedemptionFailedEvent {
                    asset,
                    holder,
                    principal,
                    interest,
                },
            );
            return Ok(());
        }

        Self::pay_out(&env, &lifecycle.config, &holder, principal, interest)?;

        env.events().publish(
            (Symbol::new(&env, "redemption_executed"), asset.clone()),
            RedemptionExecutedEvent {
                asset,
                holder,
                principal,
                interest,
                burned: balance,
            },
        );

        Ok(())
    }

    /// Reattempt every queued failed redemption for an asset. Each cleared
    /// holder is paid the amounts computed at their original attempt, once.
    ///
    /// # Errors
    /// - `AssetNotFound`: Asset not registered
    /// - `NoPendingRedemptions`: Nothing queued for this asset
    /// - `ContractPaused`: Contract is paused
    pub fn retry_failed_redemptions(env: Env, asset: Address) -> Result<u32, Error> {
        Self::check_not_paused(&env)?;

        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let queue = Self::pending_holders(&env, &asset);
        if queue.is_empty() {
            return Err(Error::NoPendingRedemptions);
        }

        let mut still_pending: Vec<Address> = Vec::new(&env);
        let mut cleared: u32 = 0;

        for holder in queue.iter() {
            let pending_key = DataKey::PendingRedemption(asset.clone(), holder.clone());
            let pending: PendingRedemption = match env.storage().instance().get(&pending_key) {
                Some(p) => p,
                None => continue,
            };

            let balance = Self::token_balance(&env, &asset, &holder);
            if balance > 0 && !Self::try_burn(&env, &asset, &holder, balance) {
                still_pending.push_back(holder.clone());
                continue;
            }

            env.storage().instance().remove(&pending_key);

            // A zero balance here means the position left the holder's hands
            // after the failed attempt; the claim travels with the tokens.
            if balance > 0 {
                Self::pay_out(
                    &env,
                    &lifecycle.config,
                    &holder,
                    pending.principal,
                    pending.interest,
                )?;

                env.events().publish(
                    (Symbol::new(&env, "redemption_executed"), asset.clone()),
                    RedemptionExecutedEvent {
                        asset: asset.clone(),
                        holder: holder.clone(),
                        principal: pending.principal,
                        interest: pending.interest,
                        burned: balance,
                    },
                );
                cleared += 1;
            }
        }

        env.storage()
            .instance()
            .set(&DataKey::PendingHolders(asset.clone()), &still_pending);

        Ok(cleared)
    }

    /// Admin escape hatch: pay a holder directly from the funding pool without
    /// burning, outside the normal maturity/grace gates.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `AssetNotFound`: Asset not registered
    /// - `InvalidAmount`: Amount not positive
    /// - `ContractPaused`: Contract is paused
    pub fn emergency_redemption(
        env: Env,
        asset: Address,
        holder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let funding = token::Client::new(&env, &lifecycle.config.funding_asset);
        funding.transfer(&env.current_contract_address(), &holder, &amount);

        env.events().publish(
            (Symbol::new(&env, "emergency_redemption"), asset.clone()),
            EmergencyRedemptionEvent {
                asset,
                holder,
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // TRANSFER RESTRICTIONS
    // ============================================

    /// Add or replace a transfer restriction on an asset
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the restriction manager
    /// - `AssetNotFound`: Asset not registered
    /// - `InvalidRestrictionWindow`: end_date before start_date
    /// - `ContractPaused`: Contract is paused
    pub fn add_restriction(
        env: Env,
        asset: Address,
        restriction_id: u64,
        restriction: TransferRestriction,
    ) -> Result<(), Error> {
        Self::require_restriction_manager(&env)?;
        Self::check_not_paused(&env)?;

        let mut lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        if restriction.end_date != 0 && restriction.end_date < restriction.start_date {
            return Err(Error::InvalidRestrictionWindow);
        }

        env.storage().instance().set(
            &DataKey::Restriction(asset.clone(), restriction_id),
            &restriction,
        );

        let mut ids = Self::restriction_ids(&env, &asset);
        if !ids.contains(&restriction_id) {
            ids.push_back(restriction_id);
        }
        env.storage()
            .instance()
            .set(&DataKey::RestrictionIds(asset.clone()), &ids);

        if !lifecycle.has_restrictions {
            lifecycle.has_restrictions = true;
            env.storage()
                .instance()
                .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);
        }

        env.events().publish(
            (Symbol::new(&env, "restriction_added"), asset.clone()),
            RestrictionAddedEvent {
                asset,
                restriction_id,
                restriction_type: restriction.restriction_type,
            },
        );

        Ok(())
    }

    /// Remove a restriction; clears `has_restrictions` when none remain
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the restriction manager
    /// - `AssetNotFound`: Asset not registered
    /// - `RestrictionNotFound`: Id not present on this asset
    /// - `ContractPaused`: Contract is paused
    pub fn remove_restriction(
        env: Env,
        asset: Address,
        restriction_id: u64,
    ) -> Result<(), Error> {
        Self::require_restriction_manager(&env)?;
        Self::check_not_paused(&env)?;

        let mut lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let key = DataKey::Restriction(asset.clone(), restriction_id);
        if !env.storage().instance().has(&key) {
            return Err(Error::RestrictionNotFound);
        }
        env.storage().instance().remove(&key);

        let ids = Self::restriction_ids(&env, &asset);
        let mut remaining: Vec<u64> = Vec::new(&env);
        for id in ids.iter() {
            if id != restriction_id {
                remaining.push_back(id);
            }
        }
        env.storage()
            .instance()
            .set(&DataKey::RestrictionIds(asset.clone()), &remaining);

        if remaining.is_empty() && lifecycle.has_restrictions {
            lifecycle.has_restrictions = false;
            env.storage()
                .instance()
                .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);
        }

        env.events().publish(
            (Symbol::new(&env, "restriction_removed"), asset.clone()),
            RestrictionRemovedEvent {
                asset,
                restriction_id,
            },
        );

        Ok(())
    }

    /// Record a holder's jurisdiction for JurisdictionBased restrictions
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the restriction manager
    pub fn set_holder_jurisdiction(
        env: Env,
        holder: Address,
        jurisdiction: Symbol,
    ) -> Result<(), Error> {
        Self::require_restriction_manager(&env)?;

        env.storage().instance().set(
            &DataKey::HolderJurisdiction(holder.clone()),
            &jurisdiction,
        );

        env.events().publish(
            (Symbol::new(&env, "jurisdiction_set"), holder.clone()),
            HolderJurisdictionSetEvent {
                holder,
                jurisdiction,
            },
        );

        Ok(())
    }

    /// Evaluate every active restriction against a proposed transfer. The
    /// calling token must honor a negative verdict by aborting its transfer.
    /// The first failing restriction determines the reported reason.
    pub fn validate_transfer(
        env: Env,
        asset: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<TransferVerdict, Error> {
        let lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        if lifecycle.status == AssetStatus::Retired {
            return Ok(Self::rejected(&env, "Asset retired"));
        }

        if Self::is_paused(&env) {
            return Ok(Self::rejected(&env, "Transfers disabled"));
        }

        if !lifecycle.has_restrictions {
            return Ok(Self::approved(&env));
        }

        let now = env.ledger().timestamp();
        let from_jurisdiction: Option<Symbol> = env
            .storage()
            .instance()
            .get(&DataKey::HolderJurisdiction(from));
        let to_jurisdiction: Option<Symbol> = env
            .storage()
            .instance()
            .get(&DataKey::HolderJurisdiction(to));

        for restriction_id in Self::restriction_ids(&env, &asset).iter() {
            let restriction: TransferRestriction = env
                .storage()
                .instance()
                .get(&DataKey::Restriction(asset.clone(), restriction_id))
                .ok_or(Error::RestrictionNotFound)?;

            if let Some(reason) = restrictions::evaluate(
                &env,
                &restriction,
                from_jurisdiction.clone(),
                to_jurisdiction.clone(),
                amount,
                now,
            ) {
                return Ok(TransferVerdict {
                    valid: false,
                    reason,
                });
            }
        }

        Ok(Self::approved(&env))
    }

    // ============================================
    // RETIREMENT
    // ============================================

    /// Begin retiring an asset: Active/Matured → Retiring
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `AssetNotFound`: Asset not registered
    /// - `InvalidStatus`: Asset already retiring or retired
    /// - `ContractPaused`: Contract is paused
    pub fn initiate_retirement(
        env: Env,
        asset: Address,
        reason: RetirementReason,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        let mut lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        match lifecycle.status {
            AssetStatus::Active | AssetStatus::Matured => {}
            _ => return Err(Error::InvalidStatus),
        }

        lifecycle.status = AssetStatus::Retiring;
        env.storage()
            .instance()
            .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);

        env.storage().instance().set(
            &DataKey::Retirement(asset.clone()),
            &RetirementRecord {
                reason: reason.clone(),
                finalized: false,
                report_hash: BytesN::from_array(&env, &[0u8; 32]),
                initiated_at: env.ledger().timestamp(),
            },
        );

        env.events().publish(
            (Symbol::new(&env, "retirement_initiated"), asset.clone()),
            RetirementInitiatedEvent { asset, reason },
        );

        Ok(())
    }

    /// Seal a retirement with its final report hash: Retiring → Retired.
    /// Irreversible; the asset permanently rejects transfers and redemptions.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not admin
    /// - `AssetNotFound`: Asset not registered
    /// - `RetirementNotInitiated`: No prior initiate
    /// - `InvalidStatus`: Asset not in Retiring status
    /// - `ContractPaused`: Contract is paused
    pub fn finalize_retirement(
        env: Env,
        asset: Address,
        report_hash: BytesN<32>,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Self::check_not_paused(&env)?;

        let mut lifecycle = Self::get_lifecycle_record(&env, &asset)?;

        let mut record: RetirementRecord = env
            .storage()
            .instance()
            .get(&DataKey::Retirement(asset.clone()))
            .ok_or(Error::RetirementNotInitiated)?;

        if lifecycle.status != AssetStatus::Retiring {
            return Err(Error::InvalidStatus);
        }

        lifecycle.status = AssetStatus::Retired;
        record.finalized = true;
        record.report_hash = report_hash.clone();

        env.storage()
            .instance()
            .set(&DataKey::Lifecycle(asset.clone()), &lifecycle);
        env.storage()
            .instance()
            .set(&DataKey::Retirement(asset.clone()), &record);

        env.events().publish(
            (Symbol::new(&env, "retirement_finalized"), asset.clone()),
            RetirementFinalizedEvent { asset, report_hash },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_lifecycle(env: Env, asset: Address) -> Result<AssetLifecycle, Error> {
        Self::get_lifecycle_record(&env, &asset)
    }

    pub fn get_retirement(env: Env, asset: Address) -> Result<RetirementRecord, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Retirement(asset))
            .ok_or(Error::RetirementNotInitiated)
    }

    pub fn get_restriction(
        env: Env,
        asset: Address,
        restriction_id: u64,
    ) -> Result<TransferRestriction, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Restriction(asset, restriction_id))
            .ok_or(Error::RestrictionNotFound)
    }

    pub fn get_pending_redemption(
        env: Env,
        asset: Address,
        holder: Address,
    ) -> Result<PendingRedemption, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PendingRedemption(asset, holder))
            .ok_or(Error::NoPendingRedemptions)
    }

    pub fn get_holder_jurisdiction(env: Env, holder: Address) -> Option<Symbol> {
        env.storage()
            .instance()
            .get(&DataKey::HolderJurisdiction(holder))
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

    fn require_restriction_manager(env: &Env) -> Result<(), Error> {
        let manager: Address = env
            .storage()
            .instance()
            .get(&DataKey::RestrictionManager)
            .ok_or(Error::NotInitialized)?;
        manager.require_auth();
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
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn get_lifecycle_record(env: &Env, asset: &Address) -> Result<AssetLifecycle, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Lifecycle(asset.clone()))
            .ok_or(Error::AssetNotFound)
    }

    fn restriction_ids(env: &Env, asset: &Address) -> Vec<u64> {
        env.storage()
            .instance()
            .get(&DataKey::RestrictionIds(asset.clone()))
            .unwrap_or(Vec::new(env))
    }

    fn pending_holders(env: &Env, asset: &Address) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::PendingHolders(asset.clone()))
            .unwrap_or(Vec::new(env))
    }

    fn token_balance(env: &Env, asset: &Address, holder: &Address) -> i128 {
        env.invoke_contract(
            asset,
            &Symbol::new(env, "balance_of"),
            vec![env, holder.into_val(env)],
        )
    }

    fn token_total_supply(env: &Env, asset: &Address) -> i128 {
        env.invoke_contract(asset, &Symbol::new(env, "total_supply"), Vec::new(env))
    }

    fn try_burn(env: &Env, asset: &Address, holder: &Address, amount: i128) -> bool {
        let result = env.try_invoke_contract::<(), soroban_sdk::Error>(
            asset,
            &Symbol::new(env, "burn"),
            vec![env, holder.into_val(env), amount.into_val(env)],
        );
        match result {
            Ok(Ok(())) => true,
            _ => false,
        }
    }

    fn pay_out(
        env: &Env,
        config: &MaturityConfig,
        holder: &Address,
        principal: i128,
        interest: i128,
    ) -> Result<(), Error> {
        let total = principal.checked_add(interest).ok_or(Error::InvalidAmount)?;
        if total <= 0 {
            return Ok(());
        }
        let funding = token::Client::new(env, &config.funding_asset);
        funding.transfer(&env.current_contract_address(), holder, &total);
        Ok(())
    }

    fn approved(env: &Env) -> TransferVerdict {
        TransferVerdict {
            valid: true,
            reason: String::from_str(env, ""),
        }
    }

    fn rejected(env: &Env, reason: &str) -> TransferVerdict {
        TransferVerdict {
            valid: false,
            reason: String::from_str(env, reason),
        }
    }
}
