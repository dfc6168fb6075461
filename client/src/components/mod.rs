//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared task rows while reading/writing
//! shared state from Leptos context providers.

pub mod nav_bar;
pub mod notice_banner;
pub mod prompt_dialog;
pub mod role_gate;
pub mod task_card;
