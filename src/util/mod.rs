//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small pure
//! helpers from page and component logic to improve reuse and
//! testability.

pub mod dark_mode;
pub mod filter;
pub mod validate;
