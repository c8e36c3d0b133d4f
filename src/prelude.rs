//! Convenient imports for hashgate.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```ignore
//! use hashgate::prelude::*;
//!
//! let response = HashGetAll.handle(&Request::empty(), &params, &connector)?;
//! ```

// Actions
pub use crate::actions::{Action, HashDelete, HashGet, HashGetAll, HashSet};

// Error handling
pub use hashgate_core::{Error, Result};

// Request/response types
pub use hashgate_core::{
    ErrorBody, FieldSelector, FieldValue, FieldValues, Outcome, Parameters, Payload, Request,
    Response,
};

// Store façade and backends
pub use hashgate_redis::{ping, ConnectionConfig, RedisConnector, RedisHash};
pub use hashgate_store::{Connector, HashCommands, KeyFieldStore, MemoryHash};

// Provider metadata
pub use hashgate_provider::{components, HashResourceProvider};

// Re-export serde_json for convenience
pub use serde_json::json;
