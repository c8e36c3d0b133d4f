//! Request arguments and per-instance configuration.
//!
//! The host resolves the route, then hands the action two things: the
//! request (URI fragments plus payload) and the instance configuration
//! (connection reference and hash key). Both are plain data here; the
//! host's own request plumbing is out of scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::{Error, Result};
use crate::payload::Payload;

/// An incoming request as seen by an action: URI-fragment arguments and
/// the parsed body.
#[derive(Debug, Clone)]
pub struct Request {
    arguments: BTreeMap<String, Json>,
    payload: Payload,
}

impl Request {
    /// Build a request from URI-fragment arguments and a payload.
    pub fn new(arguments: BTreeMap<String, Json>, payload: Payload) -> Self {
        Self { arguments, payload }
    }

    /// A request with no arguments and no body.
    pub fn empty() -> Self {
        Self::new(BTreeMap::new(), Payload::Empty)
    }

    /// Convenience builder: a single string argument.
    pub fn with_argument(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut arguments = BTreeMap::new();
        arguments.insert(name.into(), Json::String(value.into()));
        Self::new(arguments, Payload::Empty)
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// The parsed body.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The raw argument, if present.
    pub fn argument(&self, name: &str) -> Option<&Json> {
        self.arguments.get(name)
    }

    /// A string argument, require it non-empty.
    ///
    /// Absent or empty arguments are an [`Error::InvalidRequest`].
    pub fn require_argument(&self, name: &str) -> Result<&str> {
        match self.argument(name) {
            Some(Json::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
            _ => Err(Error::InvalidRequest(format!("no {name} provided"))),
        }
    }

    /// The `field` argument as a selector: one field or a list of fields.
    pub fn field_selector(&self) -> Result<FieldSelector> {
        let raw = self
            .argument("field")
            .ok_or_else(|| Error::InvalidRequest("no field provided".into()))?;
        let selector: FieldSelector = serde_json::from_value(raw.clone())
            .map_err(|_| Error::InvalidRequest("no field provided".into()))?;
        if selector.is_empty() {
            return Err(Error::InvalidRequest("no field provided".into()));
        }
        Ok(selector)
    }
}

/// One field or a list of fields, as named by a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSelector {
    /// A single field name.
    One(String),
    /// Several field names.
    Many(Vec<String>),
}

impl FieldSelector {
    /// Normalize into a list, the shape the store call takes.
    pub fn fields(&self) -> Vec<String> {
        match self {
            FieldSelector::One(field) => vec![field.clone()],
            FieldSelector::Many(fields) => fields.clone(),
        }
    }

    /// True when no usable field is named.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldSelector::One(field) => field.trim().is_empty(),
            FieldSelector::Many(fields) => {
                fields.is_empty() || fields.iter().all(|f| f.trim().is_empty())
            }
        }
    }
}

/// Per-instance configuration supplied by the host: the connection
/// reference and the hash key, never request-controlled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Name of the provisioned store connection.
    #[serde(default)]
    pub connection: Option<String>,
    /// The hash key this instance operates on.
    #[serde(default)]
    pub key: Option<String>,
}

impl Parameters {
    /// Build parameters from a connection reference and key.
    pub fn new(connection: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            connection: Some(connection.into()),
            key: Some(key.into()),
        }
    }

    /// The connection reference, required.
    pub fn require_connection(&self) -> Result<&str> {
        match self.connection.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(Error::Configuration("no connection provided".into())),
        }
    }

    /// The configured hash key, required non-empty.
    pub fn require_key(&self) -> Result<&str> {
        match self.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::Configuration("no key provided".into())),
        }
    }
}
