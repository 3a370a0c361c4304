//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the factory is constructed
pub fn emit_initialized(
    env: &Env,
    owner: &Address,
    pool_deployer: &Address,
    protocol_fee_recipient: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (owner.clone(), pool_deployer.clone(), protocol_fee_recipient.clone()),
    );
}

/// Emitted when a new pool is created.
/// Tokens are reported in the order the caller passed them.
pub fn emit_pool_created(
    env: &Env,
    token_a: &Address,
    token_b: &Address,
    fee: u32,
    tick_spacing: i32,
    pool: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (token_a.clone(), token_b.clone(), fee, tick_spacing, pool.clone()),
    );
}

/// Emitted when a fee amount joins the catalog
pub fn emit_fee_amount_enabled(env: &Env, fee: u32, tick_spacing: i32) {
    env.events().publish(
        (Symbol::new(env, "FeeAmountEnabled"),),
        (fee, tick_spacing),
    );
}

/// Emitted on every ownership transfer
pub fn emit_owner_changed(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerChanged"),),
        (old_owner.clone(), new_owner.clone()),
    );
}

/// Emitted on every call to `set_default_protocol_fees`, changed or not
pub fn emit_default_protocol_fees_changed(
    env: &Env,
    old_fees: (u32, u32),
    new_fees: (u32, u32),
) {
    env.events().publish(
        (Symbol::new(env, "DefaultProtocolFeesChanged"),),
        (old_fees.0, old_fees.1, new_fees.0, new_fees.1),
    );
}
