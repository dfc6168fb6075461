//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, console,
//! owner cleanup) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod lifetime;
pub mod notify;
pub mod session_store;
