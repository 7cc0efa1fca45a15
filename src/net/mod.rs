//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared gateway every request goes through (credential
//! attachment + 401 invalidation), `api` defines the endpoint calls, and
//! `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
