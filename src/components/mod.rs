//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render back-office chrome (layout, header dropdown),
//! shared dialogs, and the capability-gated render wrapper, reading
//! shared state from Leptos context providers.

pub mod can_access;
pub mod confirm_delete_modal;
pub mod layout;
pub mod loading_overlay;
pub mod name_estado_modal;
pub mod name_modal;
pub mod user_dropdown;
pub mod user_modal;
