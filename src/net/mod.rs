//! Networking modules for the session HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/logout/me calls behind the `SessionApi` seam and
//! `types` defines the JSON payloads exchanged with the server.

pub mod api;
pub mod types;
