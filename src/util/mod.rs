//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate arithmetic and sequencing concerns from page and
//! component logic to improve reuse and testability.

pub mod money;
pub mod rating;
pub mod seq;
