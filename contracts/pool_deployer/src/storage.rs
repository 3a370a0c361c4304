// Pool deployer storage module

use soroban_sdk::{contracttype, BytesN, Env};
use tidal_governance::FactoryBinding;

#[contracttype]
pub enum DataKey {
    /// Hash of the uploaded pool WASM
    PoolWasmHash,
    /// Factory allowed to call `deploy`
    Binding,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// ~30 days at 5s/ledger
const INSTANCE_LIFETIME: u32 = 518_400;
/// Bump when fewer than ~1 day remains
const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// POOL CODE
// ============================================================

pub fn write_pool_wasm_hash(env: &Env, hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::PoolWasmHash, hash);
}

pub fn read_pool_wasm_hash(env: &Env) -> BytesN<32> {
    // Written by the constructor; the instance cannot exist without it
    env.storage()
        .instance()
        .get(&DataKey::PoolWasmHash)
        .unwrap_or_else(|| BytesN::from_array(env, &[0u8; 32]))
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
