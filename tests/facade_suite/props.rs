//! Property checks for the set/get/delete round trip.

use proptest::prelude::*;

use crate::common::value_payload;
use hashgate::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9:_-]{0,16}"
}

fn field_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,16}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    // Whatever the caller stores comes back verbatim; "0" and "" are
    // excluded because the write path rejects falsy values.
    "[a-zA-Z0-9 :._-]{1,24}".prop_filter("falsy values are rejected on write", |v| v.as_str() != "0")
}

proptest! {
    #[test]
    fn set_then_get_round_trips(
        key in key_strategy(),
        field in field_strategy(),
        value in value_strategy(),
    ) {
        let mut store = KeyFieldStore::new(MemoryHash::new());

        let outcome = store.set_field(&key, &field, &value_payload(&value)).unwrap();
        prop_assert_eq!(outcome.affected, 1);

        let body = store.get_field(&key, &field).unwrap();
        prop_assert_eq!(body.value, value);
    }

    #[test]
    fn delete_then_get_is_not_found(
        key in key_strategy(),
        field in field_strategy(),
        value in value_strategy(),
    ) {
        let mut store = KeyFieldStore::new(MemoryHash::new());
        store.set_field(&key, &field, &value_payload(&value)).unwrap();

        let outcome = store
            .delete_fields(&key, &FieldSelector::One(field.clone()))
            .unwrap();
        prop_assert_eq!(outcome.affected, 1);
        prop_assert!(store.get_field(&key, &field).unwrap_err().is_not_found());
    }

    #[test]
    fn set_is_idempotent_on_the_updated_indicator(
        key in key_strategy(),
        field in field_strategy(),
        value in value_strategy(),
    ) {
        let mut store = KeyFieldStore::new(MemoryHash::new());

        prop_assert_eq!(store.set_field(&key, &field, &value_payload(&value)).unwrap().affected, 1);
        prop_assert_eq!(store.set_field(&key, &field, &value_payload(&value)).unwrap().affected, 0);
    }
}
