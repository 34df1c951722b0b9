//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the host and `types` defines the shared wire
//! schema, which the host crate reuses for its session endpoint.

pub mod api;
pub mod types;
