use tidal_governance::*;

// ============================================================
// PACKING
// ============================================================

#[test]
fn test_pack_known_values() {
    assert_eq!(pack_protocol_fees(7, 7), 119);
    assert_eq!(pack_protocol_fees(5, 8), 133);
    assert_eq!(pack_protocol_fees(0, 0), 0);
    assert_eq!(pack_protocol_fees(1, 1), 17);
    assert_eq!(pack_protocol_fees(10, 10), 170);
}

#[test]
fn test_unpack_known_values() {
    assert_eq!(unpack_protocol_fees(119), (7, 7));
    assert_eq!(unpack_protocol_fees(133), (5, 8));
    assert_eq!(unpack_protocol_fees(0), (0, 0));
    assert_eq!(unpack_protocol_fees(17), (1, 1));
}

#[test]
fn test_components_are_independent() {
    assert_eq!(pack_protocol_fees(10, 0), 10);
    assert_eq!(pack_protocol_fees(0, 10), 160);
    assert_eq!(unpack_protocol_fees(10), (10, 0));
    assert_eq!(unpack_protocol_fees(160), (0, 10));
}

#[test]
fn test_default_protocol_fees_pack_to_17() {
    let (f0, f1) = DEFAULT_PROTOCOL_FEES;
    assert_eq!(pack_protocol_fees(f0, f1), 17);
}

// ============================================================
// VALIDATION
// ============================================================

#[test]
fn test_full_range_is_valid() {
    for rate in 0..=10 {
        assert!(is_valid_protocol_fee(rate), "rate {} should be valid", rate);
    }
}

#[test]
fn test_rates_above_ten_rejected() {
    assert!(!is_valid_protocol_fee(11));
    assert!(!is_valid_protocol_fee(14));
    assert!(!is_valid_protocol_fee(u32::MAX));
}
