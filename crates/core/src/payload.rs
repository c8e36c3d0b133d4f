//! Request payload representations and `value` extraction.
//!
//! A write request may carry its body in one of three shapes, depending on
//! how the host parsed it: a JSON document, an associative mapping, or a
//! generic keyed record. The set is closed; extraction walks an ordered
//! list of strategies and the first match wins. No match, or a match on a
//! falsy value, is an [`Error::InvalidRequest`].
//!
//! The falsy check is deliberately strict: `null`, `false`, `0`, `0.0`,
//! `""`, `"0"`, and empty containers are all rejected, matching the
//! upstream product behavior for the `value` attribute.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::error::{Error, Result};

/// A request body in one of the closed set of representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Parsed JSON document.
    Document(Json),
    /// Associative mapping, e.g. decoded form data.
    Map(BTreeMap<String, String>),
    /// Generic keyed record: ordered name/value pairs.
    Record(Vec<(String, String)>),
    /// No body supplied.
    Empty,
}

/// One extraction strategy: inspect a payload, maybe produce the raw value.
type Extractor = fn(&Payload) -> Option<Json>;

/// Strategies in precedence order: document attribute, mapping key,
/// record lookup. Fixed set, first success wins.
const EXTRACTORS: &[Extractor] = &[document_attribute, mapping_key, record_lookup];

fn document_attribute(payload: &Payload) -> Option<Json> {
    match payload {
        Payload::Document(Json::Object(map)) => map.get("value").cloned(),
        _ => None,
    }
}

fn mapping_key(payload: &Payload) -> Option<Json> {
    match payload {
        Payload::Map(map) => map.get("value").cloned().map(Json::String),
        _ => None,
    }
}

fn record_lookup(payload: &Payload) -> Option<Json> {
    match payload {
        Payload::Record(pairs) => pairs
            .iter()
            .find(|(name, _)| name == "value")
            .map(|(_, v)| Json::String(v.clone())),
        _ => None,
    }
}

impl Payload {
    /// Extract the `value` attribute as the string to store.
    ///
    /// Errors with [`Error::InvalidRequest`] when no representation carries
    /// a `value`, when the value is falsy, or when it is not a scalar.
    pub fn value(&self) -> Result<String> {
        let raw = EXTRACTORS
            .iter()
            .find_map(|extract| extract(self))
            .ok_or_else(|| {
                Error::InvalidRequest("request body must contain a \"value\" key".into())
            })?;

        if is_falsy(&raw) {
            return Err(Error::InvalidRequest("no value provided".into()));
        }

        match raw {
            Json::String(s) => Ok(s),
            Json::Number(n) => Ok(n.to_string()),
            Json::Bool(b) => Ok(b.to_string()),
            _ => Err(Error::InvalidRequest("value must be a scalar".into())),
        }
    }
}

/// Falsy per the upstream `value` validation: absent-equivalent values are
/// rejected even when syntactically present.
fn is_falsy(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty() || s == "0",
        Json::Array(a) => a.is_empty(),
        Json::Object(o) => o.is_empty(),
    }
}
