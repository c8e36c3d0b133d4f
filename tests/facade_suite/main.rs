//! Integration suite for the hash-backed resource.
//!
//! Runs the façade and the action layer against the in-memory backend;
//! no Redis server is required.


mod actions;
mod ops;
mod props;
