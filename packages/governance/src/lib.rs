// Tidal Governance Package
//
// Pure building blocks shared by the factory, the pool deployer and the
// protocol fee splitter.

#![no_std]

pub mod binding;
pub mod constants;
pub mod fee_tier;
pub mod protocol_fee;
pub mod split;
pub mod tokens;

pub use binding::FactoryBinding;
pub use constants::*;
pub use fee_tier::is_valid_fee_tier;
pub use protocol_fee::{is_valid_protocol_fee, pack_protocol_fees, unpack_protocol_fees};
pub use split::split_protocol_revenue;
pub use tokens::{is_null_address, sort_tokens};
