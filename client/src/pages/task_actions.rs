//! Fetch and mutation plumbing shared by the task pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every task mutation issues exactly one call and, once it resolves,
//! settles the shared `TasksState`: patch on success, untouched list plus an
//! error notice on failure. Results arriving after the issuing view unmounted
//! only release the in-flight marker.

#![allow(clippy::unused_async)]

use std::future::Future;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::Assignee;
use crate::state::auth::{AuthState, Session};
use crate::state::tasks::{TaskPatch, TaskScope, TasksState};
use crate::state::ui::UiState;
use crate::util::lifetime::ViewLifetime;
#[cfg(feature = "hydrate")]
use crate::util::notify::{log_failure, report_failure, report_success};

/// Notice texts for one kind of mutation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Messages {
    pub operation: &'static str,
    pub success_title: &'static str,
    pub success_text: &'static str,
    pub failure: &'static str,
}

pub(crate) const DELETE_TASK: Messages = Messages {
    operation: "delete task",
    success_title: "Task Deleted",
    success_text: "The task has been deleted successfully!",
    failure: "Error deleting task. Please try again later.",
};

pub(crate) const RENAME_TASK: Messages = Messages {
    operation: "edit task title",
    success_title: "Task Title Updated",
    success_text: "The task title has been updated successfully!",
    failure: "Error editing task title. Please try again later.",
};

pub(crate) const REDESCRIBE_TASK: Messages = Messages {
    operation: "edit task description",
    success_title: "Task Description Updated",
    success_text: "The task description has been updated successfully!",
    failure: "Error editing task description. Please try again later.",
};

pub(crate) const ASSIGN_TASK: Messages = Messages {
    operation: "assign task",
    success_title: "Task Assigned",
    success_text: "The task has been assigned successfully!",
    failure: "Error assigning task. Please try again later.",
};

pub(crate) const COMPLETE_TASK: Messages = Messages {
    operation: "complete task",
    success_title: "Task Completed",
    success_text: "The task has been marked as completed.",
    failure: "Error updating task. Please try again later.",
};

pub(crate) const UNCOMPLETE_TASK: Messages = Messages {
    operation: "uncomplete task",
    success_title: "Task Reopened",
    success_text: "The task has been marked as not completed.",
    failure: "Error updating task. Please try again later.",
};

/// Context handles a task page needs, bundled once per view.
#[derive(Clone)]
pub(crate) struct TaskView {
    pub config: ApiConfig,
    pub auth: RwSignal<AuthState>,
    pub tasks: RwSignal<TasksState>,
    pub ui: RwSignal<UiState>,
    pub lifetime: ViewLifetime,
}

impl TaskView {
    /// Collect context for the current view and bind its lifetime.
    pub fn from_context() -> Self {
        Self {
            config: expect_context::<ApiConfig>(),
            auth: expect_context::<RwSignal<AuthState>>(),
            tasks: expect_context::<RwSignal<TasksState>>(),
            ui: expect_context::<RwSignal<UiState>>(),
            lifetime: ViewLifetime::for_current_view(),
        }
    }

    pub fn session(&self) -> Session {
        self.auth.get_untracked().session
    }

    /// Fetch the snapshot for `scope`. Failures are logged and leave an
    /// empty list; there is no retry.
    pub fn load(&self, scope: TaskScope) {
        self.tasks.update(|s| s.begin_load(scope.clone()));

        #[cfg(feature = "hydrate")]
        {
            let view = self.clone();
            leptos::task::spawn_local(async move {
                let session = view.session();
                let result = match &scope {
                    TaskScope::All => crate::net::api::fetch_all_tasks(&view.config, &session).await,
                    TaskScope::Assigned(user_id) => {
                        crate::net::api::fetch_user_tasks(&view.config, &session, user_id).await
                    }
                };
                if !view.lifetime.is_alive() {
                    return;
                }
                if let Err(err) = &result {
                    log_failure("fetch tasks", err);
                }
                view.tasks.update(|s| s.finish_load(&scope, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.tasks.update(|s| s.finish_load(&scope, Err(ApiError::Unavailable)));
        }
    }

    /// Run one mutation for `task_id` unless another is already in flight.
    pub fn mutate<F, Fut>(&self, task_id: String, patch: TaskPatch, messages: Messages, call: F)
    where
        F: FnOnce(ApiConfig, Session) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let claimed = self.tasks.try_update(|s| s.begin(&task_id)).unwrap_or(false);
        if !claimed {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let view = self.clone();
            leptos::task::spawn_local(async move {
                let outcome = call(view.config.clone(), view.session()).await;
                if !view.lifetime.is_alive() {
                    view.tasks.update(|s| s.finish(&task_id));
                    return;
                }
                let mut settled = Ok(());
                view.tasks.update(|s| settled = s.settle(&task_id, outcome, patch));
                match settled {
                    Ok(()) => report_success(view.ui, messages.success_title, messages.success_text),
                    Err(err) => report_failure(view.ui, messages.operation, &err, messages.failure),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (call, patch, messages);
            self.tasks.update(|s| s.finish(&task_id));
        }
    }

    pub fn delete(&self, task_id: String) {
        let id = task_id.clone();
        self.mutate(task_id, TaskPatch::Delete, DELETE_TASK, move |config, session| async move {
            crate::net::api::delete_task(&config, &session, &id).await
        });
    }

    pub fn rename(&self, task_id: String, name: String) {
        let id = task_id.clone();
        let value = name.clone();
        self.mutate(task_id, TaskPatch::Rename(name), RENAME_TASK, move |config, session| async move {
            crate::net::api::rename_task(&config, &session, &id, &value).await
        });
    }

    pub fn redescribe(&self, task_id: String, description: String) {
        let id = task_id.clone();
        let value = description.clone();
        self.mutate(task_id, TaskPatch::Redescribe(description), REDESCRIBE_TASK, move |config, session| async move {
            crate::net::api::redescribe_task(&config, &session, &id, &value).await
        });
    }

    pub fn assign(&self, task_id: String, assignee: Assignee) {
        let id = task_id.clone();
        let user_id = assignee.id.clone();
        self.mutate(task_id, TaskPatch::Assign(assignee), ASSIGN_TASK, move |config, session| async move {
            crate::net::api::assign_task(&config, &session, &id, &user_id).await
        });
    }

    pub fn set_completed(&self, task_id: String, completed: bool) {
        let id = task_id.clone();
        let messages = if completed { COMPLETE_TASK } else { UNCOMPLETE_TASK };
        self.mutate(task_id, TaskPatch::SetCompleted(completed), messages, move |config, session| async move {
            crate::net::api::set_task_completed(&config, &session, &id, completed).await
        });
    }
}
