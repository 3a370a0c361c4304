// Fee splitter storage module

use soroban_sdk::{contracttype, Address, Env};
use tidal_governance::FactoryBinding;

#[contracttype]
pub enum DataKey {
    /// Receives the larger share
    Primary,
    /// Receives the smaller share
    Secondary,
    /// Factory that protocol fees are collected through
    Binding,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// STAKEHOLDERS
// ============================================================

pub fn write_primary(env: &Env, primary: &Address) {
    env.storage().instance().set(&DataKey::Primary, primary);
}

pub fn read_primary(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Primary)
        .expect("splitter not constructed")
}

pub fn write_secondary(env: &Env, secondary: &Address) {
    env.storage().instance().set(&DataKey::Secondary, secondary);
}

pub fn read_secondary(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Secondary)
        .expect("splitter not constructed")
}

// ============================================================
// FACTORY BINDING
// ============================================================

pub fn read_binding(env: &Env) -> FactoryBinding {
    env.storage()
        .instance()
        .get(&DataKey::Binding)
        .unwrap_or(FactoryBinding::Unbound)
}

pub fn write_binding(env: &Env, binding: &FactoryBinding) {
    env.storage().instance().set(&DataKey::Binding, binding);
}
