//! Shared types for the hashgate workspace.
//!
//! This crate defines the pieces every other crate agrees on:
//!
//! - [`Error`] / [`Result`] - the three-tier error taxonomy plus the
//!   pass-through store tier, with HTTP status mapping
//! - [`Payload`] - the closed set of request-body representations and the
//!   ordered `value` extraction chain
//! - [`Request`] / [`Parameters`] - the host-supplied request arguments and
//!   per-instance configuration
//! - response bodies ([`FieldValue`], [`FieldValues`], [`Outcome`]) and the
//!   error envelope ([`ErrorBody`])
//!
//! Nothing in here talks to a store; the façade and backends live in
//! `hashgate-store` and `hashgate-redis`.

pub mod error;
pub mod payload;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use payload::Payload;
pub use request::{FieldSelector, Parameters, Request};
pub use response::{ErrorBody, FieldValue, FieldValues, Outcome, Response};
