//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Only the login page carries logic of its own; every other page is static
//! content rendered by the host.

pub mod login;
