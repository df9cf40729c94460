//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each store is constructed once by the bootstrap and handed to consumers
//! through Leptos context; nothing here lives in a module-level global.

pub mod session;
