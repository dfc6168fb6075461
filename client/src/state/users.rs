//! User-list state for the admin views.
//!
//! Follows the same confirm-then-patch discipline as the task list: a
//! `UserPatch` is applied only after the backend accepted the call.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{Role, User};

/// A confirmed change to one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserPatch {
    SetRole(Role),
    Rename(String),
    Delete,
}

/// Snapshot of `GET /users` plus in-flight bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub pending: BTreeSet<String>,
}

impl UsersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A failed fetch leaves an empty list.
    pub fn finish_load(&mut self, result: Result<Vec<User>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => {
                self.items.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.items.iter().find(|u| u.id == user_id)
    }

    /// Claim `user_id` for a mutation; `false` if one is already in flight.
    pub fn begin(&mut self, user_id: &str) -> bool {
        self.pending.insert(user_id.to_owned())
    }

    pub fn finish(&mut self, user_id: &str) {
        self.pending.remove(user_id);
    }

    #[must_use]
    pub fn is_pending(&self, user_id: &str) -> bool {
        self.pending.contains(user_id)
    }

    /// Apply a confirmed patch. Returns whether any entry changed.
    pub fn apply(&mut self, user_id: &str, patch: UserPatch) -> bool {
        let before = self.items.clone();
        match patch {
            UserPatch::Delete => self.items.retain(|u| u.id != user_id),
            UserPatch::SetRole(role) => {
                for user in self.items.iter_mut().filter(|u| u.id == user_id) {
                    user.role = role;
                }
            }
            UserPatch::Rename(username) => {
                for user in self.items.iter_mut().filter(|u| u.id == user_id) {
                    user.username.clone_from(&username);
                }
            }
        }
        self.items != before
    }

    /// Release `user_id` and apply `patch` only on success.
    ///
    /// # Errors
    ///
    /// Returns the call's [`ApiError`] when `outcome` failed.
    pub fn settle(&mut self, user_id: &str, outcome: Result<(), ApiError>, patch: UserPatch) -> Result<(), ApiError> {
        self.finish(user_id);
        outcome?;
        self.apply(user_id, patch);
        Ok(())
    }
}
