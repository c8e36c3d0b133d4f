//! The four field-level operations.

use hashgate_core::{Error, FieldSelector, FieldValue, FieldValues, Outcome, Payload, Result};
use tracing::debug;

use crate::HashCommands;

/// Validating façade over a [`HashCommands`] backend.
///
/// Holds the backend by value; the backend lifecycle (open/close) belongs
/// to whoever provisioned it.
pub struct KeyFieldStore<C> {
    backend: C,
}

impl<C: HashCommands> KeyFieldStore<C> {
    /// Wrap a backend.
    pub fn new(backend: C) -> Self {
        Self { backend }
    }

    /// Direct access to the backend, for liveness probes.
    pub fn backend_mut(&mut self) -> &mut C {
        &mut self.backend
    }

    /// Read one field: `{"value": v}`.
    ///
    /// A missing field is [`Error::NotFound`]; a missing key behaves the
    /// same, since the field cannot exist either way.
    pub fn get_field(&mut self, key: &str, field: &str) -> Result<FieldValue> {
        let key = require_key(key)?;
        let field = require_field(field)?;

        if !self.backend.hexists(key, field)? {
            return Err(Error::NotFound("provided field does not exist".into()));
        }

        let value = self.backend.hget(key, field)?.unwrap_or_default();
        debug!(key, field, "read field");

        Ok(FieldValue { value })
    }

    /// Read the full mapping: `{"values": {...}}`.
    ///
    /// A key with no hash yields an empty mapping, not an error.
    pub fn get_all_fields(&mut self, key: &str) -> Result<FieldValues> {
        let key = require_key(key)?;

        let values = self.backend.hgetall(key)?;
        debug!(key, fields = values.len(), "read all fields");

        Ok(FieldValues { values })
    }

    /// Upsert one field from a request payload.
    ///
    /// The value comes out of the payload's `value` attribute; absent or
    /// falsy values are [`Error::InvalidRequest`]. The outcome echoes the
    /// store's created(1)/updated(0) indicator.
    pub fn set_field(&mut self, key: &str, field: &str, payload: &Payload) -> Result<Outcome> {
        let key = require_key(key)?;
        let field = require_field(field)?;
        let value = payload.value()?;

        let created = self.backend.hset(key, field, &value)?;
        debug!(key, field, created, "set field");

        Ok(Outcome::set(created))
    }

    /// Delete one or more fields in a single call.
    ///
    /// A single field is normalized into a one-element list. The outcome
    /// echoes the count of fields actually removed.
    pub fn delete_fields(&mut self, key: &str, selector: &FieldSelector) -> Result<Outcome> {
        let key = require_key(key)?;
        if selector.is_empty() {
            return Err(Error::InvalidRequest("no field provided".into()));
        }

        let fields = selector.fields();
        let deleted = self.backend.hdel(key, &fields)?;
        debug!(key, requested = fields.len(), deleted, "deleted fields");

        Ok(Outcome::deleted(deleted))
    }
}

/// The hash key comes from configuration; an unusable key is an operator
/// mistake, not a caller mistake.
fn require_key(key: &str) -> Result<&str> {
    if key.trim().is_empty() {
        return Err(Error::Configuration("no key provided".into()));
    }
    Ok(key)
}

fn require_field(field: &str) -> Result<&str> {
    if field.trim().is_empty() {
        return Err(Error::InvalidRequest("no field provided".into()));
    }
    Ok(field)
}
