//! Factory type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Collaborators and governance state held by the factory
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    pub owner: Address,
    /// Contract that instantiates pools on the factory's behalf
    pub pool_deployer: Address,
    /// Destination of every protocol fee collection
    pub protocol_fee_recipient: Address,
    /// `fee_protocol0 + fee_protocol1 * 16`, pushed to each new pool
    pub default_protocol_fees: u32,
}

// ============================================================
// POOL KEY
// ============================================================

/// Canonical identity of a pool; `token0 < token1`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
}
