//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tasks`, `users`, `ui`) so individual
//! views can depend on small focused models. Each is provided once from
//! `App` as an `RwSignal`, which doubles as the subscription mechanism:
//! every view reading a model re-renders when another view patches it.

pub mod auth;
pub mod tasks;
pub mod ui;
pub mod users;
