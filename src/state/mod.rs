//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal` contexts provided at the app root so route
//! guards and components depend on small focused models.

pub mod auth;
