//! A user's own tasks, plus the completed and unfulfilled subviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three routes fetch the same assigned-task snapshot and filter it on
//! the client. Toggling completion is the only mutation a user has.

#[cfg(test)]
#[path = "my_tasks_test.rs"]
mod my_tasks_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::{NavBar, UserLinks};
use crate::components::role_gate::RoleGate;
use crate::components::task_card::TaskCard;
use crate::net::types::{Role, Task};
use crate::pages::task_actions::TaskView;
use crate::state::auth::Session;
use crate::state::tasks::{TaskFilter, TaskScope, partition};
use crate::util::auth::LOGIN_PATH;

/// Scope for the signed-in user's tasks; `None` without a token and user id.
pub(crate) fn assigned_scope(session: &Session) -> Option<TaskScope> {
    session
        .user_credentials()
        .map(|(_, user_id)| TaskScope::Assigned(user_id.to_owned()))
}

/// Summary line over the full snapshot.
pub(crate) fn progress_summary(tasks: &[Task]) -> String {
    let (completed, unfulfilled) = partition(tasks);
    format!("{} open, {} completed", unfulfilled.len(), completed.len())
}

/// Button text for toggling `task`.
pub(crate) fn toggle_label(task: &Task) -> &'static str {
    if task.completed { "Mark Incomplete" } else { "Mark Complete" }
}

#[component]
pub fn MyTasksPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::User>
            <AssignedTasks filter=TaskFilter::All/>
        </RoleGate>
    }
}

#[component]
pub fn CompletedTasksPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::User>
            <AssignedTasks filter=TaskFilter::Completed/>
        </RoleGate>
    }
}

#[component]
pub fn UnfulfilledTasksPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::User>
            <AssignedTasks filter=TaskFilter::Unfulfilled/>
        </RoleGate>
    }
}

#[component]
fn AssignedTasks(filter: TaskFilter) -> impl IntoView {
    let ctx = TaskView::from_context();
    let tasks = ctx.tasks;
    let navigate = use_navigate();

    let scope = assigned_scope(&ctx.session());
    let loader = ctx.clone();
    let load_scope = scope.clone();
    Effect::new(move || match &load_scope {
        Some(scope) => loader.load(scope.clone()),
        None => {
            leptos::logging::warn!("no stored user id; returning to login");
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let list = move || {
        let Some(scope) = scope.clone() else {
            return view! { <p class="page__status">"Redirecting to login..."</p> }.into_any();
        };
        let state = tasks.get();
        let all = state.visible(&scope, TaskFilter::All);
        let items: Vec<Task> = all.iter().filter(|t| filter.matches(t)).cloned().collect();
        if state.loading && all.is_empty() {
            return view! { <p class="page__status">"Loading tasks..."</p> }.into_any();
        }
        if all.is_empty() && state.error.is_some() {
            return view! { <p class="page__status page__status--error">"Could not load tasks."</p> }.into_any();
        }
        let summary = progress_summary(&all);
        let rows = if items.is_empty() {
            view! { <p class="page__status">"No tasks here."</p> }.into_any()
        } else {
            view! {
                <ul class="task-list">
                    {items
                        .into_iter()
                        .map(|task| {
                            let pending = state.is_pending(&task.id);
                            let ctx = ctx.clone();
                            view! {
                                <TaskCard task=task.clone() pending=pending>
                                    <ToggleButton task=task.clone() busy=pending ctx=ctx.clone()/>
                                </TaskCard>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        };
        view! {
            <p class="page__summary">{summary}</p>
            {rows}
        }
        .into_any()
    };

    view! {
        <div class="page">
            <NavBar title=filter.title()>
                <UserLinks/>
            </NavBar>
            <main class="page__body">{list}</main>
        </div>
    }
}

#[component]
fn ToggleButton(task: Task, busy: bool, ctx: TaskView) -> impl IntoView {
    let label = toggle_label(&task);
    let target = !task.completed;
    let id = task.id;
    let on_click = move |_| ctx.set_completed(id.clone(), target);

    view! {
        <button class="btn btn--primary" on:click=on_click disabled=busy>
            {label}
        </button>
    }
}
