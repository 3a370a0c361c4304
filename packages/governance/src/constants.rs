// Governance constants
//
// Limits and defaults shared by every governance contract.

// ============================================================
// FEE TIER LIMITS
// ============================================================

/// Fee amounts are hundredths of a bip; 1_000_000 would be a 100% fee
pub const MAX_FEE_AMOUNT: u32 = 1_000_000;

/// Exclusive upper bound on tick spacing.
/// Keeps the number of initializable ticks per word of the tick bitmap sane.
pub const MAX_TICK_SPACING: i32 = 16_384;

/// Fee tiers enabled when a factory is constructed: (fee, tick_spacing)
/// - 500 (0.05%) + spacing 10 → Stable pairs
/// - 3000 (0.30%) + spacing 60 → Most pairs
/// - 10000 (1.00%) + spacing 200 → Exotic pairs
pub const DEFAULT_FEE_TIERS: [(u32, i32); 3] = [(500, 10), (3_000, 60), (10_000, 200)];

// ============================================================
// PROTOCOL FEE
// ============================================================

/// Largest accepted per-token protocol fee rate
pub const MAX_PROTOCOL_FEE: u32 = 10;

/// Multiplier of `fee_protocol1` inside the packed scalar (one nibble)
pub const PROTOCOL_FEE_RADIX: u32 = 16;

/// Default protocol fee rates for new pools: (fee_protocol0, fee_protocol1)
pub const DEFAULT_PROTOCOL_FEES: (u32, u32) = (1, 1);

// ============================================================
// REVENUE SPLIT
// ============================================================

/// Weights are expressed out of this denominator
pub const SPLIT_DENOMINATOR: i128 = 100;

/// Share of collected protocol revenue owed to the primary stakeholder
pub const PRIMARY_SHARE: i128 = 90;

/// Share of collected protocol revenue owed to the secondary stakeholder
pub const SECONDARY_SHARE: i128 = 10;

// ============================================================
// NULL ADDRESSES
// ============================================================

/// Strkey of the all-zero account
pub const NULL_ACCOUNT_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the all-zero contract
pub const NULL_CONTRACT_STRKEY: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";
