//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
