//! In-memory hash backend.
//!
//! Implements [`HashCommands`] over nested `BTreeMap`s with the same
//! observable semantics as the remote store: HSET reports created vs
//! updated, HDEL counts only fields that existed and drops an emptied
//! hash, HGETALL of an absent key is an empty mapping.
//!
//! Used by the test suites and usable as an embedded stand-in.

use std::collections::BTreeMap;

use hashgate_core::Result;

use crate::HashCommands;

/// An in-memory [`HashCommands`] backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryHash {
    hashes: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryHash {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently holding a hash.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// True when no key holds a hash.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl HashCommands for MemoryHash {
    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>> {
        Ok(self
            .hashes
            .get(key)
            .and_then(|hash| hash.get(field))
            .cloned())
    }

    fn hgetall(&mut self, key: &str) -> Result<BTreeMap<String, String>> {
        Ok(self.hashes.get(key).cloned().unwrap_or_default())
    }

    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<i64> {
        let hash = self.hashes.entry(key.to_string()).or_default();
        let created = i64::from(!hash.contains_key(field));
        hash.insert(field.to_string(), value.to_string());
        Ok(created)
    }

    fn hdel(&mut self, key: &str, fields: &[String]) -> Result<i64> {
        let Some(hash) = self.hashes.get_mut(key) else {
            return Ok(0);
        };
        let mut deleted = 0;
        for field in fields {
            if hash.remove(field).is_some() {
                deleted += 1;
            }
        }
        if hash.is_empty() {
            self.hashes.remove(key);
        }
        Ok(deleted)
    }

    fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        Ok(self
            .hashes
            .get(key)
            .is_some_and(|hash| hash.contains_key(field)))
    }

    fn ping(&mut self) -> Result<()> {
        Ok(())
    }
}
