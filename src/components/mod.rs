//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and interaction surfaces while reading
//! shared state and the API bundle from Leptos context providers.

pub mod error_panel;
pub mod event_card;
pub mod follow_button;
pub mod guard;
pub mod header;
pub mod notification_bell;
pub mod search_box;
pub mod star_rating;
pub mod toasts;
