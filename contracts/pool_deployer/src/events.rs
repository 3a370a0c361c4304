//! Pool deployer events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once, when the deployer is wired to its factory
pub fn emit_set_factory_address(env: &Env, factory: &Address) {
    env.events().publish(
        (Symbol::new(env, "SetFactoryAddress"),),
        (factory.clone(),),
    );
}

/// Emitted for every pool instance created
pub fn emit_pool_deployed(
    env: &Env,
    pool: &Address,
    token_a: &Address,
    token_b: &Address,
    fee: u32,
    tick_spacing: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolDeployed"),),
        (pool.clone(), token_a.clone(), token_b.clone(), fee, tick_spacing),
    );
}
