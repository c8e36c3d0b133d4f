//! Key-field store façade.
//!
//! The façade is a stateless layer over a [`HashCommands`] backend. It
//! provides the four field-level operations of a hash-backed resource:
//!
//! - get one field (read, missing field is an error)
//! - get all fields (read, missing key is an empty mapping)
//! - set one field (upsert, echoes created/updated)
//! - delete one or more fields (echoes deleted count)
//!
//! Each operation validates its inputs, then goes straight to the backend:
//! one command per operation, plus an existence probe on the single-field
//! read. There is no retry, no caching, and no shared mutable state;
//! concurrency is whatever the backend handle itself supports.
//!
//! # Example
//!
//! ```ignore
//! use hashgate_store::{KeyFieldStore, MemoryHash};
//!
//! let mut store = KeyFieldStore::new(MemoryHash::new());
//! store.set_field("session:42", "status", &payload)?;
//! let value = store.get_field("session:42", "status")?;
//! ```

mod facade;
mod memory;

pub use facade::KeyFieldStore;
pub use memory::MemoryHash;

use std::collections::BTreeMap;

use hashgate_core::Result;

/// The primitive hash commands a backend must supply.
///
/// Mirrors the remote store's own command set (HGET, HGETALL, HSET, HDEL,
/// HEXISTS, PING); one trait method is one store command. Implementors
/// report transport faults as [`hashgate_core::Error::Store`] and must not
/// retry on their own.
pub trait HashCommands {
    /// Read one field. `None` when the field (or key) does not exist.
    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>>;

    /// Read the full field-to-value mapping. Empty when the key is absent.
    fn hgetall(&mut self, key: &str) -> Result<BTreeMap<String, String>>;

    /// Upsert one field. Returns 1 when the field was created, 0 when an
    /// existing field was updated.
    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<i64>;

    /// Delete the named fields in one call. Returns the number actually
    /// removed.
    fn hdel(&mut self, key: &str, fields: &[String]) -> Result<i64>;

    /// Check whether a field exists.
    fn hexists(&mut self, key: &str, field: &str) -> Result<bool>;

    /// Liveness probe. Transport faults surface as errors here; the
    /// connection-health boundary converts them to `false`.
    fn ping(&mut self) -> Result<()>;
}

/// Host-boundary contract for resolving a provisioned connection by name.
///
/// The host owns connection provisioning; actions only ever see this
/// resolve step. An unknown or unusable reference is an
/// [`hashgate_core::Error::Configuration`].
pub trait Connector {
    /// Open a backend for the named connection.
    fn connect(&self, name: &str) -> Result<Box<dyn HashCommands>>;
}

impl std::fmt::Debug for dyn HashCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn HashCommands")
    }
}

impl HashCommands for Box<dyn HashCommands> {
    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>> {
        (**self).hget(key, field)
    }

    fn hgetall(&mut self, key: &str) -> Result<BTreeMap<String, String>> {
        (**self).hgetall(key)
    }

    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<i64> {
        (**self).hset(key, field, value)
    }

    fn hdel(&mut self, key: &str, fields: &[String]) -> Result<i64> {
        (**self).hdel(key, fields)
    }

    fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        (**self).hexists(key, field)
    }

    fn ping(&mut self) -> Result<()> {
        (**self).ping()
    }
}
