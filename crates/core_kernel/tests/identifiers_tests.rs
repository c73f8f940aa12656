//! Tests for strongly-typed identifiers and the id sequence

use core_kernel::{IdSequence, PolicyId};

#[test]
fn test_policy_id_prefix() {
    assert_eq!(PolicyId::prefix(), "POL");
}

#[test]
fn test_policy_id_parse_with_and_without_prefix() {
    assert_eq!("POL-15".parse::<PolicyId>().unwrap(), PolicyId::from_raw(15));
    assert_eq!("15".parse::<PolicyId>().unwrap(), PolicyId::from_raw(15));
}

#[test]
fn test_policy_id_parse_rejects_garbage() {
    assert!("POL-abc".parse::<PolicyId>().is_err());
    assert!("CLM-1".parse::<PolicyId>().is_err());
}

#[test]
fn test_policy_id_serializes_as_plain_integer() {
    let json = serde_json::to_string(&PolicyId::from_raw(3)).unwrap();
    assert_eq!(json, "3");

    let back: PolicyId = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get(), 3);
}

#[test]
fn test_policy_ids_order_by_raw_value() {
    assert!(PolicyId::from_raw(2) < PolicyId::from_raw(10));
}

#[test]
fn test_sequence_is_strictly_increasing() {
    let mut seq = IdSequence::default();
    let values: Vec<u64> = (0..5).map(|_| seq.next_raw()).collect();

    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    assert_eq!(seq.issued(), 5);
}
