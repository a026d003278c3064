//! Tests for Domain Services

use super::*;
use crate::domain::{LookupError, NodeId, NODE_ID_LEN};

fn make_node_id(value: u64) -> NodeId {
    let mut bytes = [0u8; NODE_ID_LEN];
    bytes[NODE_ID_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    NodeId::new(bytes)
}

// =============================================================================
// XOR Distance Calculation
// =============================================================================

#[test]
fn test_xor_distance_calculation_is_symmetric() {
    let a = make_node_id(0b1010_0000);
    let b = make_node_id(0b0101_0000);

    let dist_ab = xor_distance(&a, &b).unwrap();
    let dist_ba = xor_distance(&b, &a).unwrap();

    assert_eq!(dist_ab, dist_ba, "XOR distance must be symmetric");
}

#[test]
fn test_xor_distance_to_self_is_zero() {
    let a = make_node_id(0xdead_beef);

    let dist = xor_distance(&a, &a).unwrap();

    assert!(dist.is_zero(), "Distance to self must be zero");
    assert_eq!(dist.leading_zeros(), NODE_ID_LEN * 8);
}

#[test]
fn test_xor_distance_is_bitwise_xor() {
    let a = make_node_id(0b1100);
    let b = make_node_id(0b1010);

    let dist = xor_distance(&a, &b).unwrap();

    assert_eq!(dist, xor_distance(&make_node_id(0), &make_node_id(0b0110)).unwrap());
}

#[test]
fn test_xor_distance_orders_like_unsigned_integers() {
    let target = make_node_id(0);

    // 0x0100 is numerically larger than 0x00ff even though its low byte is smaller
    let near = xor_distance(&target, &make_node_id(0x00ff)).unwrap();
    let far = xor_distance(&target, &make_node_id(0x0100)).unwrap();

    assert!(near < far);
}

#[test]
fn test_xor_distance_high_bit_dominates() {
    let target = NodeId::zero();

    let mut high = [0u8; NODE_ID_LEN];
    high[0] = 0b1000_0000;
    let mut low = [0xffu8; NODE_ID_LEN];
    low[0] = 0b0111_1111;

    let dist_high = xor_distance(&target, &NodeId::new(high)).unwrap();
    let dist_low = xor_distance(&target, &NodeId::new(low)).unwrap();

    assert!(dist_low < dist_high, "Most significant bit decides closeness");
    assert_eq!(dist_high.leading_zeros(), 0);
    assert_eq!(dist_low.leading_zeros(), 1);
}

#[test]
fn test_xor_distance_rejects_width_mismatch() {
    let short = NodeId::from_slice(&[1, 2, 3, 4]);
    let standard = NodeId::zero();

    assert_eq!(
        xor_distance(&standard, &short),
        Err(LookupError::IdentifierLengthMismatch {
            expected: NODE_ID_LEN,
            actual: 4,
        })
    );
}

#[test]
fn test_xor_distance_supports_other_widths() {
    let a = NodeId::from_slice(&[0u8; 32]);
    let mut bytes = [0u8; 32];
    bytes[31] = 3;
    let b = NodeId::from_slice(&bytes);

    let dist = xor_distance(&a, &b).unwrap();
    assert_eq!(dist.as_bytes().len(), 32);
    assert_eq!(dist.leading_zeros(), 254);
}
