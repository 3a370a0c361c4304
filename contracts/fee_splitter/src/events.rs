//! Fee splitter events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once, when the splitter is wired to its factory
pub fn emit_set_factory_address(env: &Env, factory: &Address) {
    env.events().publish(
        (Symbol::new(env, "SetFactoryAddress"),),
        (factory.clone(),),
    );
}

pub fn emit_primary_changed(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "PrimaryChanged"),),
        (old.clone(), new.clone()),
    );
}

pub fn emit_secondary_changed(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "SecondaryChanged"),),
        (old.clone(), new.clone()),
    );
}

/// Emitted per token on every distribution, including empty ones
pub fn emit_fees_distributed(
    env: &Env,
    token: &Address,
    primary_amount: i128,
    secondary_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "FeesDistributed"),),
        (token.clone(), primary_amount, secondary_amount),
    );
}
