#![no_std]

//! # Tidal Protocol Fee Splitter
//!
//! Recipient of the factory's protocol fee collections.
//!
//! ## Responsibilities:
//! 1. Pull protocol fees out of pools, through the bound factory
//! 2. Split every token balance it holds 90/10 between two stakeholders
//! 3. Let each stakeholder hand its own role to a new address

use soroban_sdk::{contract, contractimpl, log, token, vec, Address, Env, IntoVal, Symbol, Vec};
use tidal_governance::split_protocol_revenue;

mod error;
mod events;
mod storage;

pub use error::FeeSplitterError;
use events::*;
use storage::*;

#[contract]
pub struct ProtocolFeeSplitter;

#[contractimpl]
impl ProtocolFeeSplitter {
    pub fn __constructor(env: Env, primary: Address, secondary: Address) {
        write_primary(&env, &primary);
        write_secondary(&env, &secondary);
        write_binding(&env, &tidal_governance::FactoryBinding::Unbound);
        extend_instance_ttl(&env);
    }

    // ========================================================
    // WIRING
    // ========================================================

    /// Bind the factory fees are collected through. Callable once.
    pub fn set_factory_address(env: Env, factory: Address) -> Result<(), FeeSplitterError> {
        let bound = read_binding(&env)
            .bind(factory.clone())
            .ok_or(FeeSplitterError::AlreadyBound)?;

        write_binding(&env, &bound);
        extend_instance_ttl(&env);

        emit_set_factory_address(&env, &factory);
        Ok(())
    }

    // ========================================================
    // STAKEHOLDERS
    // ========================================================

    /// Hand the primary role to `new_primary`. Only the current primary may.
    pub fn change_primary_address(
        env: Env,
        caller: Address,
        new_primary: Address,
    ) -> Result<(), FeeSplitterError> {
        caller.require_auth();

        let old_primary = read_primary(&env);
        if caller != old_primary {
            return Err(FeeSplitterError::Unauthorized);
        }

        write_primary(&env, &new_primary);
        extend_instance_ttl(&env);

        emit_primary_changed(&env, &old_primary, &new_primary);
        Ok(())
    }

    /// Hand the secondary role to `new_secondary`. Only the current secondary may.
    pub fn change_secondary_address(
        env: Env,
        caller: Address,
        new_secondary: Address,
    ) -> Result<(), FeeSplitterError> {
        caller.require_auth();

        let old_secondary = read_secondary(&env);
        if caller != old_secondary {
            return Err(FeeSplitterError::Unauthorized);
        }

        write_secondary(&env, &new_secondary);
        extend_instance_ttl(&env);

        emit_secondary_changed(&env, &old_secondary, &new_secondary);
        Ok(())
    }

    // ========================================================
    // FEES
    // ========================================================

    /// Collect all protocol fees from `pools` into this contract.
    ///
    /// Permissionless. Pools are processed in order and the first failure
    /// aborts the whole batch.
    pub fn collect_fees(env: Env, pools: Vec<Address>) -> Result<(), FeeSplitterError> {
        let factory = read_binding(&env)
            .factory()
            .ok_or(FeeSplitterError::NotBound)?;
        let splitter = env.current_contract_address();

        for pool in pools.iter() {
            let (amount0, amount1): (i128, i128) = env.invoke_contract(
                &factory,
                &Symbol::new(&env, "collect_protocol_fees"),
                vec![
                    &env,
                    splitter.clone().into_val(&env),
                    pool.clone().into_val(&env),
                    i128::MAX.into_val(&env),
                    i128::MAX.into_val(&env),
                ],
            );
            log!(&env, "collected", pool, amount0, amount1);
        }

        extend_instance_ttl(&env);
        Ok(())
    }

    /// Pay out this contract's whole balance of each token, 90% to the
    /// primary stakeholder and 10% to the secondary. Permissionless.
    pub fn distribute_fees(env: Env, tokens: Vec<Address>) {
        let primary = read_primary(&env);
        let secondary = read_secondary(&env);
        let splitter = env.current_contract_address();

        for token in tokens.iter() {
            let client = token::Client::new(&env, &token);
            let balance = client.balance(&splitter);
            let (primary_amount, secondary_amount) = split_protocol_revenue(balance);

            if primary_amount > 0 {
                client.transfer(&splitter, &primary, &primary_amount);
            }
            if secondary_amount > 0 {
                client.transfer(&splitter, &secondary, &secondary_amount);
            }

            emit_fees_distributed(&env, &token, primary_amount, secondary_amount);
        }

        extend_instance_ttl(&env);
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn primary_address(env: Env) -> Address {
        read_primary(&env)
    }

    pub fn secondary_address(env: Env) -> Address {
        read_secondary(&env)
    }

    pub fn factory_address(env: Env) -> Option<Address> {
        read_binding(&env).factory()
    }
}
