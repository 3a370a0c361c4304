// Protocol fee packing
//
// Both per-token rates are stored in a single scalar:
//   packed = fee_protocol0 + fee_protocol1 * 16
// A packed value of 0 means the protocol fee is switched off.

use crate::constants::{MAX_PROTOCOL_FEE, PROTOCOL_FEE_RADIX};

/// A per-token rate is accepted when it lies in `[0, 10]`
pub fn is_valid_protocol_fee(rate: u32) -> bool {
    rate <= MAX_PROTOCOL_FEE
}

/// Pack two rates into one scalar.
///
/// Callers validate both rates first; out-of-range input would bleed
/// across the nibble boundary.
pub fn pack_protocol_fees(fee_protocol0: u32, fee_protocol1: u32) -> u32 {
    fee_protocol0 + fee_protocol1 * PROTOCOL_FEE_RADIX
}

/// Inverse of [`pack_protocol_fees`]
pub fn unpack_protocol_fees(packed: u32) -> (u32, u32) {
    (packed % PROTOCOL_FEE_RADIX, packed / PROTOCOL_FEE_RADIX)
}
