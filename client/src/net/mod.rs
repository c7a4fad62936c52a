//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns endpoints and the transport seam, `error` reduces failures to
//! user-facing messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake_transport;
pub mod types;
