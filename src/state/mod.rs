//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so individual components can
//! depend on small focused models provided via Leptos context.

pub mod auth;
pub mod toast;
