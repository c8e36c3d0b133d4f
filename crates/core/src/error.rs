//! Unified error types for hashgate.
//!
//! Three caller-visible tiers plus a pass-through tier for the store driver:
//!
//! | Variant | Meaning | HTTP status |
//! |---------|---------|-------------|
//! | Configuration | operator misconfiguration (connection, key) | 500 |
//! | InvalidRequest | malformed caller input (field, value) | 400 |
//! | NotFound | requested field absent | 404 |
//! | Store | transport/protocol fault from the driver | 500 |
//!
//! Store faults are propagated unmodified by the four field operations;
//! only the connection-health boundary (`ping`) swallows them.

use thiserror::Error;

/// All hashgate errors.
///
/// This is the canonical error type for every façade and action operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Operator misconfiguration: bad or missing connection reference,
    /// missing key. A deployment fault, never a caller fault.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input: missing field, missing or unusable value.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Requested field absent from the hash.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport or protocol failure reported by the store driver,
    /// passed through unmodified.
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for hashgate operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The HTTP status this error maps to at the gateway boundary.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Configuration(_) => 500,
            Error::InvalidRequest(_) => 400,
            Error::NotFound(_) => 404,
            Error::Store(_) => 500,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error is the caller's fault (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidRequest(_) | Error::NotFound(_))
    }

    /// Check if this is a store-side transport fault.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
