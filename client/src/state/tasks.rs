//! Task-list state shared by the admin and user task views.
//!
//! DESIGN
//! ======
//! The list is a local snapshot of the backend's tasks for one scope. It is
//! only ever changed after the backend confirmed a mutation: `settle` applies
//! a `TaskPatch` on success and leaves the snapshot untouched on failure, so
//! there is nothing to roll back.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent edits made elsewhere are not reconciled until the next fetch,
//! which happens whenever a task view mounts.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{Assignee, Task};

/// Which tasks a snapshot was loaded for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskScope {
    /// Every task (`GET /tasks`).
    All,
    /// Tasks assigned to one user (`GET /resources/user-tasks/:id`).
    Assigned(String),
}

/// Client-side subviews over an already-fetched list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Unfulfilled,
}

impl TaskFilter {
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Unfulfilled => !task.completed,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "My Tasks",
            Self::Completed => "Completed Tasks",
            Self::Unfulfilled => "Unfulfilled Tasks",
        }
    }
}

/// A confirmed change to one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskPatch {
    Rename(String),
    Redescribe(String),
    Assign(Assignee),
    SetCompleted(bool),
    Delete,
}

/// Split tasks into `(completed, unfulfilled)`; every task lands in exactly
/// one side, in original order.
#[must_use]
pub fn partition(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|task| task.completed)
}

/// Task list snapshot plus load and in-flight bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub scope: Option<TaskScope>,
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    /// Tasks with a mutation currently outstanding.
    pub pending: BTreeSet<String>,
}

impl TasksState {
    /// Start loading `scope`. Items from any previous scope are dropped so a
    /// view never shows another view's snapshot.
    pub fn begin_load(&mut self, scope: TaskScope) {
        if self.scope.as_ref() != Some(&scope) {
            self.items.clear();
        }
        self.scope = Some(scope);
        self.loading = true;
        self.error = None;
    }

    /// Finish a load for `scope`. Results for a scope that is no longer
    /// current are ignored. A failed fetch leaves an empty list.
    pub fn finish_load(&mut self, scope: &TaskScope, result: Result<Vec<Task>, ApiError>) {
        if self.scope.as_ref() != Some(scope) {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Items if the snapshot belongs to `scope`, filtered by `filter`.
    #[must_use]
    pub fn visible(&self, scope: &TaskScope, filter: TaskFilter) -> Vec<Task> {
        if self.scope.as_ref() != Some(scope) {
            return Vec::new();
        }
        self.items.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    #[must_use]
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == task_id)
    }

    /// Claim `task_id` for a mutation. Returns `false` if one is already in
    /// flight for it.
    pub fn begin(&mut self, task_id: &str) -> bool {
        self.pending.insert(task_id.to_owned())
    }

    pub fn finish(&mut self, task_id: &str) {
        self.pending.remove(task_id);
    }

    #[must_use]
    pub fn is_pending(&self, task_id: &str) -> bool {
        self.pending.contains(task_id)
    }

    /// Apply a confirmed patch. Returns whether any entry changed.
    pub fn apply(&mut self, task_id: &str, patch: TaskPatch) -> bool {
        if patch == TaskPatch::Delete {
            let before = self.items.len();
            self.items.retain(|t| t.id != task_id);
            return self.items.len() != before;
        }
        let mut changed = false;
        for task in self.items.iter_mut().filter(|t| t.id == task_id) {
            match &patch {
                TaskPatch::Rename(name) => task.name.clone_from(name),
                TaskPatch::Redescribe(description) => task.description.clone_from(description),
                TaskPatch::Assign(assignee) => task.assignee = Some(assignee.clone()),
                TaskPatch::SetCompleted(completed) => task.completed = *completed,
                TaskPatch::Delete => {}
            }
            changed = true;
        }
        changed
    }

    /// Release `task_id` and apply `patch` only if the backend accepted the
    /// call. The error is handed back untouched for notification.
    ///
    /// # Errors
    ///
    /// Returns the call's [`ApiError`] when `outcome` failed.
    pub fn settle(&mut self, task_id: &str, outcome: Result<(), ApiError>, patch: TaskPatch) -> Result<(), ApiError> {
        self.finish(task_id);
        outcome?;
        self.apply(task_id, patch);
        Ok(())
    }
}
