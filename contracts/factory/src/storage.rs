// Factory storage module for Tidal

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{FactoryConfig, PoolKey};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    /// Factory configuration
    Config,
    /// Tick spacing by fee amount
    FeeTier(u32),
    /// Pool address by (token_x, token_y, fee), written for both orders
    Pool(Address, Address, u32),
    /// Canonical key by pool address
    PoolKey(Address),
    /// Pool address by creation index
    PoolByIndex(u32),
    /// Number of pools created
    PoolCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~30 days at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 518_400;
/// Bump persistent entries when fewer than ~1 day remains
const PERSISTENT_BUMP: u32 = 17_280;

/// Instance lifetime (~30 days)
const INSTANCE_LIFETIME: u32 = 518_400;
/// Bump instance when fewer than ~1 day remains
const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP, PERSISTENT_LIFETIME);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&FactoryDataKey::Config, config);
}

pub fn read_config(env: &Env) -> FactoryConfig {
    env.storage()
        .instance()
        .get(&FactoryDataKey::Config)
        .expect("factory not constructed")
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn write_fee_tier(env: &Env, fee: u32, tick_spacing: i32) {
    let key = FactoryDataKey::FeeTier(fee);
    env.storage().persistent().set(&key, &tick_spacing);
    extend_ttl(env, &key);
}

pub fn read_fee_tier(env: &Env, fee: u32) -> Option<i32> {
    env.storage().persistent().get(&FactoryDataKey::FeeTier(fee))
}

pub fn fee_tier_exists(env: &Env, fee: u32) -> bool {
    env.storage().persistent().has(&FactoryDataKey::FeeTier(fee))
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn read_pool(env: &Env, token_x: &Address, token_y: &Address, fee: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Pool(token_x.clone(), token_y.clone(), fee))
}

pub fn pool_exists(env: &Env, token0: &Address, token1: &Address, fee: u32) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Pool(token0.clone(), token1.clone(), fee))
}

/// Record a new pool under both token orders, its reverse key and its index
pub fn register_pool(env: &Env, key: &PoolKey, pool: &Address) -> u32 {
    let forward = FactoryDataKey::Pool(key.token0.clone(), key.token1.clone(), key.fee);
    env.storage().persistent().set(&forward, pool);
    extend_ttl(env, &forward);

    let reverse = FactoryDataKey::Pool(key.token1.clone(), key.token0.clone(), key.fee);
    env.storage().persistent().set(&reverse, pool);
    extend_ttl(env, &reverse);

    let key_by_pool = FactoryDataKey::PoolKey(pool.clone());
    env.storage().persistent().set(&key_by_pool, key);
    extend_ttl(env, &key_by_pool);

    let index = read_pool_count(env);
    let index_key = FactoryDataKey::PoolByIndex(index);
    env.storage().persistent().set(&index_key, pool);
    extend_ttl(env, &index_key);

    let count = index + 1;
    env.storage().instance().set(&FactoryDataKey::PoolCount, &count);
    count
}

pub fn read_pool_key(env: &Env, pool: &Address) -> Option<PoolKey> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PoolKey(pool.clone()))
}

pub fn read_pool_by_index(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PoolByIndex(index))
}

pub fn read_pool_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&FactoryDataKey::PoolCount)
        .unwrap_or(0)
}
