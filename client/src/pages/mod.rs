//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod all_tasks;
pub mod dashboard;
pub mod login;
pub mod my_tasks;
pub mod register;
pub mod root;
pub(crate) mod task_actions;
pub mod users;
