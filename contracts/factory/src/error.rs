// Factory error module for Tidal

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Authorization errors (100-199)
    Unauthorized = 100,

    // Validation errors (200-299)
    InvalidTokens = 200,
    InvalidFeeTier = 201,
    InvalidFees = 202,

    // State errors (300-399)
    UnknownFeeTier = 300,
    AlreadyEnabled = 301,
    DuplicatePool = 302,
    PoolNotFound = 303,
}
