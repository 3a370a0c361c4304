#![no_std]

//! # Tidal Factory
//!
//! Registry and governance for concentrated-liquidity pools.
//!
//! ## Responsibilities:
//! 1. Create pools (canonicalize pair, deploy through the pool deployer,
//!    register, apply default protocol fee)
//! 2. Fee tier catalog (write-once per fee amount)
//! 3. Duplicate prevention
//! 4. Ownership and protocol fee governance
//! 5. Gate protocol fee collection out of pools

use soroban_sdk::{contract, contractimpl, log, vec, Address, Env, IntoVal, Symbol};
use tidal_governance::{
    is_null_address, is_valid_fee_tier, is_valid_protocol_fee, pack_protocol_fees, sort_tokens,
    unpack_protocol_fees, DEFAULT_FEE_TIERS, DEFAULT_PROTOCOL_FEES,
};

mod error;
mod events;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct TidalFactory;

#[contractimpl]
impl TidalFactory {
    /// Construct the factory
    ///
    /// # Arguments
    /// * `owner` - Initial owner
    /// * `pool_deployer` - Deployer contract; it must be bound to this factory
    ///   before the first `create_pool`
    /// * `protocol_fee_recipient` - Receives every protocol fee collection
    pub fn __constructor(
        env: Env,
        owner: Address,
        pool_deployer: Address,
        protocol_fee_recipient: Address,
    ) {
        let (fee_protocol0, fee_protocol1) = DEFAULT_PROTOCOL_FEES;
        let config = FactoryConfig {
            owner: owner.clone(),
            pool_deployer: pool_deployer.clone(),
            protocol_fee_recipient: protocol_fee_recipient.clone(),
            default_protocol_fees: pack_protocol_fees(fee_protocol0, fee_protocol1),
        };
        write_config(&env, &config);

        for (fee, tick_spacing) in DEFAULT_FEE_TIERS {
            write_fee_tier(&env, fee, tick_spacing);
            emit_fee_amount_enabled(&env, fee, tick_spacing);
        }

        extend_instance_ttl(&env);
        emit_initialized(&env, &owner, &pool_deployer, &protocol_fee_recipient);
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Create the pool for (token_a, token_b, fee). Permissionless.
    ///
    /// Either token order resolves to the same pool. Fails rather than
    /// returning the existing address when the pool already exists.
    pub fn create_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
    ) -> Result<Address, FactoryError> {
        if token_a == token_b {
            return Err(FactoryError::InvalidTokens);
        }
        if is_null_address(&env, &token_a) || is_null_address(&env, &token_b) {
            return Err(FactoryError::InvalidTokens);
        }

        let (token0, token1) = sort_tokens(&token_a, &token_b);

        let tick_spacing = read_fee_tier(&env, fee).ok_or(FactoryError::UnknownFeeTier)?;

        if pool_exists(&env, &token0, &token1, fee) {
            return Err(FactoryError::DuplicatePool);
        }

        let config = read_config(&env);

        // === DEPLOY POOL ===
        let pool = Self::deploy_pool(&env, &config, &token0, &token1, fee, tick_spacing);

        // === REGISTER POOL ===
        let key = PoolKey {
            token0: token0.clone(),
            token1: token1.clone(),
            fee,
        };
        let count = register_pool(&env, &key, &pool);

        // === APPLY DEFAULT PROTOCOL FEE ===
        let (fee_protocol0, fee_protocol1) = unpack_protocol_fees(config.default_protocol_fees);
        let _: () = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "set_fee_protocol"),
            vec![&env, fee_protocol0.into_val(&env), fee_protocol1.into_val(&env)],
        );

        log!(&env, "pool created", pool, fee, count);
        emit_pool_created(&env, &token_a, &token_b, fee, tick_spacing, &pool);

        extend_instance_ttl(&env);
        Ok(pool)
    }

    /// Add a fee amount to the catalog. Owner only, write-once.
    pub fn enable_fee_amount(
        env: Env,
        caller: Address,
        fee: u32,
        tick_spacing: i32,
    ) -> Result<(), FactoryError> {
        Self::require_owner(&env, &caller)?;

        if !is_valid_fee_tier(fee, tick_spacing) {
            return Err(FactoryError::InvalidFeeTier);
        }
        if fee_tier_exists(&env, fee) {
            return Err(FactoryError::AlreadyEnabled);
        }

        write_fee_tier(&env, fee, tick_spacing);
        emit_fee_amount_enabled(&env, fee, tick_spacing);
        Ok(())
    }

    /// Hand ownership to `new_owner`. The previous owner loses all rights.
    pub fn set_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), FactoryError> {
        let mut config = Self::require_owner(&env, &caller)?;

        let old_owner = config.owner;
        config.owner = new_owner.clone();
        write_config(&env, &config);
        extend_instance_ttl(&env);

        emit_owner_changed(&env, &old_owner, &new_owner);
        Ok(())
    }

    /// Set the protocol fee rates applied to pools created from now on.
    ///
    /// Each rate must be in `[0, 10]`; `(0, 0)` switches the protocol fee
    /// off. Always emits, including when nothing changes.
    pub fn set_default_protocol_fees(
        env: Env,
        caller: Address,
        fee_protocol0: u32,
        fee_protocol1: u32,
    ) -> Result<(), FactoryError> {
        let mut config = Self::require_owner(&env, &caller)?;

        if !is_valid_protocol_fee(fee_protocol0) || !is_valid_protocol_fee(fee_protocol1) {
            return Err(FactoryError::InvalidFees);
        }

        let old_fees = unpack_protocol_fees(config.default_protocol_fees);
        config.default_protocol_fees = pack_protocol_fees(fee_protocol0, fee_protocol1);
        write_config(&env, &config);
        extend_instance_ttl(&env);

        emit_default_protocol_fees_changed(&env, old_fees, (fee_protocol0, fee_protocol1));
        Ok(())
    }

    /// Pull accrued protocol fees out of a pool into the protocol fee recipient.
    ///
    /// Callable by the owner and by the protocol fee recipient itself.
    /// Returns the amounts the pool actually paid out.
    pub fn collect_protocol_fees(
        env: Env,
        caller: Address,
        pool: Address,
        amount0_requested: i128,
        amount1_requested: i128,
    ) -> Result<(i128, i128), FactoryError> {
        caller.require_auth();

        let config = read_config(&env);
        if caller != config.owner && caller != config.protocol_fee_recipient {
            return Err(FactoryError::Unauthorized);
        }

        // Only pools this factory created are ever called
        if read_pool_key(&env, &pool).is_none() {
            return Err(FactoryError::PoolNotFound);
        }

        let collected: (i128, i128) = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "collect_protocol"),
            vec![
                &env,
                config.protocol_fee_recipient.into_val(&env),
                amount0_requested.into_val(&env),
                amount1_requested.into_val(&env),
            ],
        );

        log!(&env, "protocol fees collected", pool, collected.0, collected.1);
        Ok(collected)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn owner(env: Env) -> Address {
        read_config(&env).owner
    }

    pub fn pool_deployer(env: Env) -> Address {
        read_config(&env).pool_deployer
    }

    pub fn protocol_fee_recipient(env: Env) -> Address {
        read_config(&env).protocol_fee_recipient
    }

    /// Tick spacing of an enabled fee amount
    pub fn fee_amount_tick_spacing(env: Env, fee: u32) -> Option<i32> {
        read_fee_tier(&env, fee)
    }

    /// Pool for a token pair and fee, in either token order
    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
        read_pool(&env, &token_a, &token_b, fee)
    }

    /// Packed default protocol fee: `fee_protocol0 + fee_protocol1 * 16`
    pub fn default_protocol_fees(env: Env) -> u32 {
        read_config(&env).default_protocol_fees
    }

    /// Default protocol fee as `(fee_protocol0, fee_protocol1)`
    pub fn default_protocol_fee_rates(env: Env) -> (u32, u32) {
        unpack_protocol_fees(read_config(&env).default_protocol_fees)
    }

    /// Canonical key of a pool created by this factory
    pub fn pool_key(env: Env, pool: Address) -> Option<PoolKey> {
        read_pool_key(&env, &pool)
    }

    pub fn pool_count(env: Env) -> u32 {
        read_pool_count(&env)
    }

    /// Pool by creation order, starting at 0
    pub fn pool_at(env: Env, index: u32) -> Option<Address> {
        read_pool_by_index(&env, index)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn require_owner(env: &Env, caller: &Address) -> Result<FactoryConfig, FactoryError> {
        caller.require_auth();

        let config = read_config(env);
        if *caller != config.owner {
            return Err(FactoryError::Unauthorized);
        }
        Ok(config)
    }

    fn deploy_pool(
        env: &Env,
        config: &FactoryConfig,
        token0: &Address,
        token1: &Address,
        fee: u32,
        tick_spacing: i32,
    ) -> Address {
        env.invoke_contract(
            &config.pool_deployer,
            &Symbol::new(env, "deploy"),
            vec![
                env,
                env.current_contract_address().into_val(env),
                token0.clone().into_val(env),
                token1.clone().into_val(env),
                fee.into_val(env),
                tick_spacing.into_val(env),
            ],
        )
    }
}
