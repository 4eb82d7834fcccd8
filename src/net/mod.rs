//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the fetch wrappers and bearer handling, `error` the failure
//! taxonomy, `types` the wire schema, and `api` the typed per-resource
//! clients.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
