//! Action-layer behavior: the wire bodies the host serializes, and the
//! full request lifecycle of one resource instance.

use crate::common::*;
use hashgate::prelude::*;

#[test]
fn get_all_wraps_values() {
    let connector = MemoryConnector::new("redis");
    let params = Parameters::new("redis", "k");

    let set = Request::with_argument("field", "a").with_payload(value_payload("1"));
    HashSet.handle(&set, &params, &connector).unwrap();
    let set = Request::with_argument("field", "b").with_payload(value_payload("2"));
    HashSet.handle(&set, &params, &connector).unwrap();

    let response = HashGetAll
        .handle(&Request::empty(), &params, &connector)
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"values": {"a": "1", "b": "2"}}));
}

#[test]
fn get_wraps_value() {
    let connector = MemoryConnector::new("redis");
    let params = Parameters::new("redis", "k");

    let set = Request::with_argument("field", "a").with_payload(value_payload("1"));
    HashSet.handle(&set, &params, &connector).unwrap();

    let response = HashGet
        .handle(&Request::with_argument("field", "a"), &params, &connector)
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"value": "1"}));
}

#[test]
fn set_echoes_created_indicator() {
    let connector = MemoryConnector::new("redis");
    let params = Parameters::new("redis", "k");

    let set = Request::with_argument("field", "a").with_payload(value_payload("1"));
    let response = HashSet.handle(&set, &params, &connector).unwrap();
    assert_eq!(
        response.body,
        json!({"success": true, "message": "Field successfully set", "return": 1})
    );

    let again = Request::with_argument("field", "a").with_payload(value_payload("2"));
    let response = HashSet.handle(&again, &params, &connector).unwrap();
    assert_eq!(response.body["return"], json!(0));
}

#[test]
fn delete_accepts_a_field_list() {
    let connector = MemoryConnector::new("redis");
    let params = Parameters::new("redis", "k");

    for field in ["a", "b"] {
        let set = Request::with_argument("field", field).with_payload(value_payload("x"));
        HashSet.handle(&set, &params, &connector).unwrap();
    }

    let mut arguments = std::collections::BTreeMap::new();
    arguments.insert("field".to_string(), json!(["a", "b", "ghost"]));
    let delete = Request::new(arguments, Payload::Empty);

    let response = HashDelete.handle(&delete, &params, &connector).unwrap();
    assert_eq!(
        response.body,
        json!({"success": true, "message": "Field successfully deleted", "return": 2})
    );
}

#[test]
fn action_names_match_the_component_registry() {
    let registered: Vec<&str> = components()
        .iter()
        .filter_map(|c| match c {
            hashgate::Component::Action(name) => Some(*name),
            _ => None,
        })
        .collect();

    for name in [
        HashGet.name(),
        HashGetAll.name(),
        HashSet.name(),
        HashDelete.name(),
    ] {
        assert!(registered.contains(&name), "{name} not registered");
    }
}

#[test]
fn session_lifecycle_scenario() {
    let connector = MemoryConnector::new("redis");
    let params = Parameters::new("redis", "session:42");

    // Set: field is created.
    let set = Request::with_argument("field", "status").with_payload(value_payload("active"));
    let response = HashSet.handle(&set, &params, &connector).unwrap();
    assert_eq!(response.body["return"], json!(1));

    // Get: the value round-trips.
    let get = Request::with_argument("field", "status");
    let response = HashGet.handle(&get, &params, &connector).unwrap();
    assert_eq!(response.body, json!({"value": "active"}));

    // Delete: one field removed.
    let delete = Request::with_argument("field", "status");
    let response = HashDelete.handle(&delete, &params, &connector).unwrap();
    assert_eq!(response.body["return"], json!(1));

    // Get again: gone.
    let err = HashGet.handle(&get, &params, &connector).unwrap_err();
    assert!(err.is_not_found());
}
