//! # hashgate
//!
//! A hash-backed resource for API gateways: four field-level operations
//! (get, get-all, set, delete) against a remote Redis hash, wrapped in
//! parameter validation, a three-tier error taxonomy, and the declarative
//! metadata a host needs to auto-provision routes.
//!
//! ## Quick start
//!
//! ```ignore
//! use hashgate::prelude::*;
//!
//! // Provision a connection table (normally host-supplied).
//! let mut connector = RedisConnector::new();
//! connector.register("redis", ConnectionConfig::new("localhost"));
//!
//! // One deployed instance: a connection reference and a hash key.
//! let params = Parameters::new("redis", "session:42");
//!
//! // Dispatch a request the way the host router would.
//! let request = Request::with_argument("field", "status");
//! let response = HashGet.handle(&request, &params, &connector)?;
//! assert_eq!(response.status, 200);
//! ```
//!
//! ## Layering
//!
//! - [`hashgate_core`] - errors, payloads, request/response types
//! - [`hashgate_store`] - the [`KeyFieldStore`] façade and backend contract
//! - [`hashgate_redis`] - blocking Redis backend and connection provisioning
//! - [`hashgate_provider`] - schema/action/operation setup tables
//! - this crate - the `{configure, handle}` action contract the host invokes

#![warn(missing_docs)]

mod actions;

pub mod prelude;

pub use actions::{Action, HashDelete, HashGet, HashGetAll, HashSet};

// Re-export the member-crate surface
pub use hashgate_core::{
    Error, ErrorBody, FieldSelector, FieldValue, FieldValues, Outcome, Parameters, Payload,
    Request, Response, Result,
};
pub use hashgate_provider::{
    components, Component, HashResourceProvider, OperationDef, SchemaDef, Setup,
};
pub use hashgate_redis::{ping, ConnectionConfig, RedisConnector, RedisHash};
pub use hashgate_store::{Connector, HashCommands, KeyFieldStore, MemoryHash};
