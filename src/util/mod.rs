//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, document attributes)
//! from session and routing logic to keep the latter testable natively.

pub mod storage;
pub mod theme;
