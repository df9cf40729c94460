//! Shared UI components.

pub mod header;
