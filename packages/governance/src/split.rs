// SPDX-License-Identifier: MIT
// Protocol revenue split

use crate::constants::{SECONDARY_SHARE, SPLIT_DENOMINATOR};

/// Split a collected balance between the two stakeholders.
///
/// The secondary share is `balance * 10 / 100` truncated toward zero and
/// the primary stakeholder receives everything else, so
/// `primary + secondary == balance` and no dust stays behind.
///
/// Returns `(primary, secondary)`. Non-positive balances yield `(0, 0)`.
pub fn split_protocol_revenue(balance: i128) -> (i128, i128) {
    if balance <= 0 {
        return (0, 0);
    }

    // floor(balance * w / d) without forming balance * w
    let whole = balance / SPLIT_DENOMINATOR;
    let rem = balance % SPLIT_DENOMINATOR;
    let secondary = whole * SECONDARY_SHARE + rem * SECONDARY_SHARE / SPLIT_DENOMINATOR;

    (balance - secondary, secondary)
}
