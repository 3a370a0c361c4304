// Fee tier validation

use crate::constants::{MAX_FEE_AMOUNT, MAX_TICK_SPACING};

/// Check a `(fee, tick_spacing)` pair against the catalog limits.
///
/// Does not know whether the fee is already enabled; the factory
/// enforces write-once separately.
pub fn is_valid_fee_tier(fee: u32, tick_spacing: i32) -> bool {
    fee < MAX_FEE_AMOUNT && tick_spacing > 0 && tick_spacing < MAX_TICK_SPACING
}
