//! Façade operation semantics against the in-memory backend.

use crate::common::*;
use hashgate::prelude::*;

fn store() -> KeyFieldStore<MemoryHash> {
    KeyFieldStore::new(MemoryHash::new())
}

// ============================================================================
// Reads
// ============================================================================

#[test]
fn get_field_returns_stored_value() {
    let mut store = store();
    store.set_field("k", "f", &value_payload("v")).unwrap();

    let body = store.get_field("k", "f").unwrap();
    assert_eq!(body.value, "v");
}

#[test]
fn get_field_on_absent_field_is_not_found() {
    let mut store = store();
    store.set_field("k", "present", &value_payload("v")).unwrap();

    assert!(store.get_field("k", "absent").unwrap_err().is_not_found());
}

#[test]
fn get_all_returns_full_mapping_regardless_of_insertion_order() {
    let mut store = store();
    store.set_field("k", "b", &value_payload("2")).unwrap();
    store.set_field("k", "a", &value_payload("1")).unwrap();

    let body = store.get_all_fields("k").unwrap();
    let pairs: Vec<(String, String)> = body.values.into_iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn get_all_on_absent_key_is_empty_not_an_error() {
    let mut store = store();
    assert!(store.get_all_fields("nothing").unwrap().values.is_empty());
}

// ============================================================================
// Writes
// ============================================================================

#[test]
fn set_reports_created_then_updated() {
    let mut store = store();

    let first = store.set_field("k", "f", &value_payload("a")).unwrap();
    assert!(first.success);
    assert_eq!(first.affected, 1);
    assert_eq!(first.message, "Field successfully set");

    let second = store.set_field("k", "f", &value_payload("b")).unwrap();
    assert_eq!(second.affected, 0);
}

#[test]
fn delete_single_field_removes_it() {
    let mut store = store();
    store.set_field("k", "a", &value_payload("1")).unwrap();

    let outcome = store
        .delete_fields("k", &FieldSelector::One("a".into()))
        .unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.affected, 1);
    assert_eq!(outcome.message, "Field successfully deleted");

    assert!(store.get_field("k", "a").unwrap_err().is_not_found());
}

#[test]
fn delete_many_counts_only_present_fields() {
    let mut store = store();
    store.set_field("k", "a", &value_payload("1")).unwrap();
    store.set_field("k", "b", &value_payload("2")).unwrap();

    let both = FieldSelector::Many(vec!["a".into(), "b".into()]);
    assert_eq!(store.delete_fields("k", &both).unwrap().affected, 2);

    store.set_field("k", "a", &value_payload("1")).unwrap();
    let one_present = FieldSelector::Many(vec!["a".into(), "b".into()]);
    assert_eq!(store.delete_fields("k", &one_present).unwrap().affected, 1);
}

// ============================================================================
// Transport propagation
// ============================================================================

#[test]
fn store_faults_pass_through_unmodified() {
    let mut store = KeyFieldStore::new(FailingBackend);

    let err = store.get_all_fields("k").unwrap_err();
    assert!(err.is_store_error());
    assert_eq!(err.to_string(), "store error: connection refused");

    let err = store.set_field("k", "f", &value_payload("v")).unwrap_err();
    assert!(err.is_store_error());
}

#[test]
fn validation_runs_before_any_round_trip() {
    // FailingBackend errors on every command; a validation failure must
    // surface instead, proving no round trip was issued.
    let mut store = KeyFieldStore::new(FailingBackend);

    assert_eq!(store.get_field("", "f").unwrap_err().http_status(), 500);
    assert_eq!(store.get_field("k", "").unwrap_err().http_status(), 400);
    assert_eq!(
        store
            .set_field("k", "f", &Payload::Empty)
            .unwrap_err()
            .http_status(),
        400
    );
}
