//! Redis connection provisioning and the blocking hash backend.
//!
//! Three pieces:
//!
//! - [`ConnectionConfig`] - host/port pair as the host's configuration
//!   mechanism supplies it; the port defaults to 6379 when absent
//! - [`RedisHash`] - a blocking Redis connection implementing
//!   [`HashCommands`], one command per round trip
//! - [`RedisConnector`] - a name-to-config table implementing the
//!   [`Connector`] resolve contract
//!
//! Transport faults from the driver pass through the command methods
//! unmodified as [`Error::Store`]; only [`ping`] swallows them, reducing
//! liveness to a boolean.

use std::collections::BTreeMap;

use redis::Commands;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hashgate_core::{Error, Result};
use hashgate_store::{Connector, HashCommands};

/// Default Redis port, used when the configuration leaves the port unset.
pub const DEFAULT_PORT: u16 = 6379;

/// Connection settings for one provisioned Redis instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host of the Redis server.
    pub host: String,
    /// Port of the Redis server; unset or zero falls back to 6379.
    #[serde(default)]
    pub port: Option<u16>,
}

impl ConnectionConfig {
    /// A config for the given host on the default port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
        }
    }

    /// The effective port after applying the default.
    pub fn effective_port(&self) -> u16 {
        match self.port {
            Some(port) if port != 0 => port,
            _ => DEFAULT_PORT,
        }
    }

    /// Open a blocking connection.
    ///
    /// An unusable host string is a [`Error::Configuration`]; a failed
    /// TCP connect is a [`Error::Store`].
    pub fn open(&self) -> Result<RedisHash> {
        if self.host.trim().is_empty() {
            return Err(Error::Configuration("no host provided".into()));
        }

        let url = format!("redis://{}:{}/", self.host, self.effective_port());
        let client = redis::Client::open(url.as_str())
            .map_err(|e| Error::Configuration(format!("invalid connection: {e}")))?;
        let conn = client.get_connection().map_err(store_error)?;

        debug!(host = %self.host, port = self.effective_port(), "opened redis connection");
        Ok(RedisHash { conn })
    }
}

/// A blocking Redis connection speaking the hash command set.
pub struct RedisHash {
    conn: redis::Connection,
}

impl std::fmt::Debug for RedisHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisHash").finish_non_exhaustive()
    }
}

impl HashCommands for RedisHash {
    fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>> {
        self.conn.hget(key, field).map_err(store_error)
    }

    fn hgetall(&mut self, key: &str) -> Result<BTreeMap<String, String>> {
        self.conn.hgetall(key).map_err(store_error)
    }

    fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<i64> {
        self.conn.hset(key, field, value).map_err(store_error)
    }

    fn hdel(&mut self, key: &str, fields: &[String]) -> Result<i64> {
        self.conn.hdel(key, fields).map_err(store_error)
    }

    fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        self.conn.hexists(key, field).map_err(store_error)
    }

    fn ping(&mut self) -> Result<()> {
        redis::cmd("PING")
            .query::<String>(&mut self.conn)
            .map(|_| ())
            .map_err(store_error)
    }
}

/// Connection-health probe: `true` when the server answers PING.
///
/// Transport faults are swallowed here, and only here; the field
/// operations propagate them.
pub fn ping(backend: &mut RedisHash) -> bool {
    match HashCommands::ping(backend) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "redis ping failed");
            false
        }
    }
}

/// Name-to-config table for provisioned connections.
///
/// Implements the [`Connector`] resolve contract: each resolve opens a
/// fresh connection, which the caller owns for the duration of one
/// request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RedisConnector {
    connections: BTreeMap<String, ConnectionConfig>,
}

impl RedisConnector {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named connection.
    pub fn register(&mut self, name: impl Into<String>, config: ConnectionConfig) {
        self.connections.insert(name.into(), config);
    }
}

impl Connector for RedisConnector {
    fn connect(&self, name: &str) -> Result<Box<dyn HashCommands>> {
        let config = self.connections.get(name).ok_or_else(|| {
            Error::Configuration(format!("given connection must be a redis connection: {name}"))
        })?;
        Ok(Box::new(config.open()?))
    }
}

fn store_error(e: redis::RedisError) -> Error {
    Error::Store(e.to_string())
}
