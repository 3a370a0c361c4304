#![no_std]

//! # Tidal Pool Deployer
//!
//! Deterministic instantiation of pool contracts.
//!
//! ## Responsibilities:
//! 1. Hold the pool WASM hash every pool is created from
//! 2. Accept `deploy` calls from exactly one factory, wired once
//! 3. Derive pool addresses from (token_a, token_b, fee) so they can be
//!    predicted before creation
//!
//! Duplicate pools are not tracked here: deploying the same
//! (token_a, token_b, fee) twice targets the same address and the host
//! refuses to create a contract where one already exists.

use soroban_sdk::{contract, contractimpl, log, xdr::ToXdr, Address, Bytes, BytesN, Env};
use tidal_governance::FactoryBinding;

mod error;
mod events;
mod storage;

pub use error::PoolDeployerError;
use events::*;
use storage::*;

#[contract]
pub struct PoolDeployer;

#[contractimpl]
impl PoolDeployer {
    pub fn __constructor(env: Env, pool_wasm_hash: BytesN<32>) {
        write_pool_wasm_hash(&env, &pool_wasm_hash);
        write_binding(&env, &FactoryBinding::Unbound);
        extend_instance_ttl(&env);
    }

    // ========================================================
    // WIRING
    // ========================================================

    /// Bind the factory allowed to deploy pools. Callable once.
    pub fn set_factory_address(env: Env, factory: Address) -> Result<(), PoolDeployerError> {
        let bound = read_binding(&env)
            .bind(factory.clone())
            .ok_or(PoolDeployerError::AlreadyBound)?;

        write_binding(&env, &bound);
        extend_instance_ttl(&env);

        emit_set_factory_address(&env, &factory);
        Ok(())
    }

    // ========================================================
    // DEPLOYMENT
    // ========================================================

    /// Create a pool instance
    ///
    /// # Arguments
    /// * `factory` - Must be the bound factory; it must also authorize the call
    /// * `token_a`, `token_b`, `fee`, `tick_spacing` - Passed verbatim to the
    ///   pool constructor after `factory`
    pub fn deploy(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        fee: u32,
        tick_spacing: i32,
    ) -> Result<Address, PoolDeployerError> {
        if !read_binding(&env).is_bound_to(&factory) {
            return Err(PoolDeployerError::Unauthorized);
        }
        factory.require_auth();

        let pool_wasm_hash = read_pool_wasm_hash(&env);
        let salt = Self::pool_salt(&env, &token_a, &token_b, fee, &pool_wasm_hash);

        let pool = env.deployer().with_current_contract(salt).deploy_v2(
            pool_wasm_hash,
            (factory, token_a.clone(), token_b.clone(), fee, tick_spacing),
        );

        log!(&env, "pool deployed", pool, fee, tick_spacing);
        emit_pool_deployed(&env, &pool, &token_a, &token_b, fee, tick_spacing);

        extend_instance_ttl(&env);
        Ok(pool)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Address `deploy` would create for these arguments
    pub fn compute_pool_address(env: Env, token_a: Address, token_b: Address, fee: u32) -> Address {
        let pool_wasm_hash = read_pool_wasm_hash(&env);
        let salt = Self::pool_salt(&env, &token_a, &token_b, fee, &pool_wasm_hash);
        env.deployer().with_current_contract(salt).deployed_address()
    }

    pub fn factory_address(env: Env) -> Option<Address> {
        read_binding(&env).factory()
    }

    pub fn pool_wasm_hash(env: Env) -> BytesN<32> {
        read_pool_wasm_hash(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn pool_salt(
        env: &Env,
        token_a: &Address,
        token_b: &Address,
        fee: u32,
        pool_wasm_hash: &BytesN<32>,
    ) -> BytesN<32> {
        let mut salt_data = token_a.clone().to_xdr(env);
        salt_data.append(&token_b.clone().to_xdr(env));
        salt_data.append(&fee.to_xdr(env));
        salt_data.append(&Bytes::from(pool_wasm_hash.clone()));
        env.crypto().sha256(&salt_data).to_bytes()
    }
}
